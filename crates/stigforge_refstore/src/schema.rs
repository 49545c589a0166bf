//! Positional column schemas for the reference tables.
//!
//! The reference files carry no header row; every table has a fixed
//! column order. Each schema validates row arity at load time so a
//! malformed row fails with a precise row/column diagnostic instead of
//! surfacing as a missing value deep inside attribute resolution.

use csv::StringRecord;

use crate::error::{RefStoreError, RefStoreResult};

/// Describes one reference table: its file name and ordered columns.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub file: &'static str,
    pub columns: &'static [&'static str],
}

/// Zone-scoped AAA tables: one row, no region key.
pub const AAA_ZONE: TableSchema = TableSchema {
    file: "aaa_servers_UNDERLAY.csv",
    columns: &["primary", "secondary"],
};

/// Region-keyed AAA tables (OOB and the catch-all).
pub const AAA_REGION: TableSchema = TableSchema {
    file: "aaa_servers.csv",
    columns: &["region", "primary", "secondary"],
};

/// Region-keyed NTP tables (all four zone variants share this shape).
pub const NTP_REGION: TableSchema = TableSchema {
    file: "ntp_servers.csv",
    columns: &["region", "preferred", "secondary", "tertiary", "alternate"],
};

/// Site location / SNMP contact table.
pub const SNMP_LOCATIONS: TableSchema = TableSchema {
    file: "snmp_locations.csv",
    columns: &["site_id", "site_name", "address", "location_syntax", "contact"],
};

/// Per-site local credential table.
pub const SITE_PASSWORDS: TableSchema = TableSchema {
    file: "site_passwords.csv",
    columns: &["site_id", "password"],
};

/// SNMP user credential tables (IOS, ASA and Nexus variants).
pub const SNMP_USERS: TableSchema = TableSchema {
    file: "snmp_users_IOS.csv",
    columns: &["tag", "username", "role", "auth_key", "priv_key", "acl"],
};

impl TableSchema {
    /// Reuse this schema for a sibling file with the same column order.
    pub fn for_file(self, file: &'static str) -> Self {
        Self { file, ..self }
    }

    /// Validate one row against the schema.
    ///
    /// `row` is the 1-based position in the file, used for diagnostics.
    pub fn check_row(&self, row: usize, record: &StringRecord) -> RefStoreResult<()> {
        if record.len() != self.columns.len() {
            return Err(RefStoreError::MalformedRow {
                table: self.file.to_string(),
                row,
                expected: self.columns.len(),
                columns: self.columns.join(", "),
                found: record.len(),
            });
        }
        for (idx, column) in self.columns.iter().enumerate() {
            if record[idx].trim().is_empty() {
                return Err(RefStoreError::EmptyColumn {
                    table: self.file.to_string(),
                    row,
                    column: (*column).to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_row_matching_arity() {
        let record = StringRecord::from(vec!["REGION_A", "10.0.0.1", "10.0.0.2"]);
        assert!(AAA_REGION.check_row(1, &record).is_ok());
    }

    #[test]
    fn rejects_short_row_with_position() {
        let record = StringRecord::from(vec!["REGION_A", "10.0.0.1"]);
        let err = AAA_REGION.check_row(3, &record).unwrap_err();
        match err {
            RefStoreError::MalformedRow { row, expected, found, .. } => {
                assert_eq!(row, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_blank_column_by_name() {
        let record = StringRecord::from(vec!["REGION_A", "  ", "10.0.0.2"]);
        let err = AAA_REGION.check_row(1, &record).unwrap_err();
        match err {
            RefStoreError::EmptyColumn { column, .. } => assert_eq!(column, "primary"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
