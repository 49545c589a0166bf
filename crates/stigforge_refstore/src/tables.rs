//! Typed rows for the reference tables.

use serde::{Deserialize, Serialize};

/// A primary/secondary AAA server pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AaaServers {
    pub primary: String,
    pub secondary: String,
}

/// The four NTP server addresses configured for a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NtpServers {
    pub preferred: String,
    pub secondary: String,
    pub tertiary: String,
    pub alternate: String,
}

/// One row of the site location table.
///
/// `location_syntax` is the full SNMP location configuration line and
/// must carry the `snmp-server` marker to be considered well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLocation {
    pub site_id: String,
    pub site_name: String,
    pub address: String,
    pub location_syntax: String,
    pub contact: String,
}

/// One row of an SNMP user credential table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnmpUserRow {
    pub username: String,
    pub role: String,
    pub auth_key: String,
    pub priv_key: String,
    pub acl: String,
}

/// Which SNMP credential table a platform family reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnmpTable {
    Ios,
    Asa,
    Nexus,
}
