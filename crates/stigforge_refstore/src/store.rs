//! The loaded reference store.
//!
//! All tables are read once at startup into keyed maps. The original
//! data files are maintained by hand, so duplicate keys are possible;
//! a duplicate is flagged and the last row wins, matching the linear
//! scan the data was historically consumed with.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::error::{RefStoreError, RefStoreResult};
use crate::schema::{self, TableSchema};
use crate::tables::{AaaServers, NtpServers, SiteLocation, SnmpTable, SnmpUserRow};

const FILE_AAA_UNDERLAY: &str = "aaa_servers_UNDERLAY.csv";
const FILE_AAA_UNDERLAY_V2: &str = "aaa_servers_UNDERLAYv2.csv";
const FILE_AAA_OOB: &str = "aaa_servers_OOB.csv";
const FILE_AAA_DEFAULT: &str = "aaa_servers.csv";
const FILE_NTP_UNDERLAY: &str = "ntp_servers_UNDERLAY.csv";
const FILE_NTP_UNDERLAY_V2: &str = "ntp_servers_UNDERLAYv2.csv";
const FILE_NTP_OOB: &str = "ntp_servers_OOB.csv";
const FILE_NTP_DEFAULT: &str = "ntp_servers.csv";
const FILE_SNMP_LOCATIONS: &str = "snmp_locations.csv";
const FILE_SITE_PASSWORDS: &str = "site_passwords.csv";
const FILE_SNMP_USERS_IOS: &str = "snmp_users_IOS.csv";
const FILE_SNMP_USERS_ASA: &str = "snmp_users_ASA.csv";
const FILE_SNMP_USERS_NEXUS: &str = "snmp_users_NEXUS.csv";

/// Read-only keyed reference tables.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    aaa_underlay: AaaServers,
    aaa_underlay_v2: AaaServers,
    aaa_oob: HashMap<String, AaaServers>,
    aaa_default: HashMap<String, AaaServers>,
    ntp_underlay: HashMap<String, NtpServers>,
    ntp_underlay_v2: HashMap<String, NtpServers>,
    ntp_oob: HashMap<String, NtpServers>,
    ntp_default: HashMap<String, NtpServers>,
    locations: HashMap<String, SiteLocation>,
    passwords: HashMap<String, String>,
    snmp_ios: HashMap<String, SnmpUserRow>,
    snmp_asa: HashMap<String, SnmpUserRow>,
    snmp_nexus: HashMap<String, SnmpUserRow>,
}

impl ReferenceStore {
    /// Load every reference table from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> RefStoreResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(RefStoreError::DirectoryNotFound(dir.to_path_buf()));
        }

        let store = Self {
            aaa_underlay: load_aaa_zone(dir, FILE_AAA_UNDERLAY)?,
            aaa_underlay_v2: load_aaa_zone(dir, FILE_AAA_UNDERLAY_V2)?,
            aaa_oob: load_aaa_region(dir, FILE_AAA_OOB)?,
            aaa_default: load_aaa_region(dir, FILE_AAA_DEFAULT)?,
            ntp_underlay: load_ntp_region(dir, FILE_NTP_UNDERLAY)?,
            ntp_underlay_v2: load_ntp_region(dir, FILE_NTP_UNDERLAY_V2)?,
            ntp_oob: load_ntp_region(dir, FILE_NTP_OOB)?,
            ntp_default: load_ntp_region(dir, FILE_NTP_DEFAULT)?,
            locations: load_locations(dir)?,
            passwords: load_passwords(dir)?,
            snmp_ios: load_snmp_users(dir, FILE_SNMP_USERS_IOS)?,
            snmp_asa: load_snmp_users(dir, FILE_SNMP_USERS_ASA)?,
            snmp_nexus: load_snmp_users(dir, FILE_SNMP_USERS_NEXUS)?,
        };

        info!(
            "Loaded reference store from {:?}: {} sites, {} site passwords",
            dir,
            store.locations.len(),
            store.passwords.len()
        );
        Ok(store)
    }

    /// AAA servers for the UNDERLAY transport network (region-free).
    pub fn aaa_underlay(&self) -> &AaaServers {
        &self.aaa_underlay
    }

    /// AAA servers for the alternate transport network (region-free).
    pub fn aaa_underlay_v2(&self) -> &AaaServers {
        &self.aaa_underlay_v2
    }

    /// AAA servers for the out-of-band network, by region wire name.
    pub fn aaa_oob(&self, region: &str) -> Option<&AaaServers> {
        self.aaa_oob.get(region)
    }

    /// AAA servers for every other zone, by region wire name.
    pub fn aaa_default(&self, region: &str) -> Option<&AaaServers> {
        self.aaa_default.get(region)
    }

    pub fn ntp_underlay(&self, region: &str) -> Option<&NtpServers> {
        self.ntp_underlay.get(region)
    }

    pub fn ntp_underlay_v2(&self, region: &str) -> Option<&NtpServers> {
        self.ntp_underlay_v2.get(region)
    }

    pub fn ntp_oob(&self, region: &str) -> Option<&NtpServers> {
        self.ntp_oob.get(region)
    }

    pub fn ntp_default(&self, region: &str) -> Option<&NtpServers> {
        self.ntp_default.get(region)
    }

    /// The location row for a site, if one exists.
    pub fn location(&self, site_id: &str) -> Option<&SiteLocation> {
        self.locations.get(site_id)
    }

    /// Every known site, for interactive listing. Sorted by site id.
    pub fn locations(&self) -> Vec<&SiteLocation> {
        let mut sites: Vec<_> = self.locations.values().collect();
        sites.sort_by(|a, b| a.site_id.cmp(&b.site_id));
        sites
    }

    /// The local credential configured for a site.
    pub fn site_password(&self, site_id: &str) -> Option<&str> {
        self.passwords.get(site_id).map(String::as_str)
    }

    /// One SNMP credential row, by table and row tag
    /// (`READuser`, `WRITEuser`, `READuser_admin`, `WRITEuser_admin`).
    pub fn snmp_user(&self, table: SnmpTable, tag: &str) -> Option<&SnmpUserRow> {
        let rows = match table {
            SnmpTable::Ios => &self.snmp_ios,
            SnmpTable::Asa => &self.snmp_asa,
            SnmpTable::Nexus => &self.snmp_nexus,
        };
        rows.get(tag)
    }
}

/// Read and schema-check every row of one table file.
fn read_rows(dir: &Path, schema: TableSchema) -> RefStoreResult<Vec<StringRecord>> {
    let path: PathBuf = dir.join(schema.file);
    if !path.is_file() {
        return Err(RefStoreError::TableNotFound(path));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&path)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // Blank lines surface as a single empty field.
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }
        schema.check_row(idx + 1, &record)?;
        rows.push(record);
    }
    debug!("Read {} rows from {:?}", rows.len(), path);
    Ok(rows)
}

fn flag_duplicate(table: &str, key: &str, replaced: bool) {
    if replaced {
        warn!("Duplicate key '{key}' in {table}; keeping the last row");
    }
}

fn load_aaa_zone(dir: &Path, file: &'static str) -> RefStoreResult<AaaServers> {
    let rows = read_rows(dir, schema::AAA_ZONE.for_file(file))?;
    if rows.len() > 1 {
        warn!("{file} holds {} rows; a single row is expected, keeping the last", rows.len());
    }
    let row = rows.last().ok_or(RefStoreError::EmptyTable { table: file.to_string() })?;
    Ok(AaaServers {
        primary: row[0].trim().to_string(),
        secondary: row[1].trim().to_string(),
    })
}

fn load_aaa_region(dir: &Path, file: &'static str) -> RefStoreResult<HashMap<String, AaaServers>> {
    let rows = read_rows(dir, schema::AAA_REGION.for_file(file))?;
    let mut map = HashMap::new();
    for row in &rows {
        let key = row[0].trim().to_string();
        let replaced = map
            .insert(
                key.clone(),
                AaaServers {
                    primary: row[1].trim().to_string(),
                    secondary: row[2].trim().to_string(),
                },
            )
            .is_some();
        flag_duplicate(file, &key, replaced);
    }
    Ok(map)
}

fn load_ntp_region(dir: &Path, file: &'static str) -> RefStoreResult<HashMap<String, NtpServers>> {
    let rows = read_rows(dir, schema::NTP_REGION.for_file(file))?;
    let mut map = HashMap::new();
    for row in &rows {
        let key = row[0].trim().to_string();
        let replaced = map
            .insert(
                key.clone(),
                NtpServers {
                    preferred: row[1].trim().to_string(),
                    secondary: row[2].trim().to_string(),
                    tertiary: row[3].trim().to_string(),
                    alternate: row[4].trim().to_string(),
                },
            )
            .is_some();
        flag_duplicate(file, &key, replaced);
    }
    Ok(map)
}

fn load_locations(dir: &Path) -> RefStoreResult<HashMap<String, SiteLocation>> {
    let rows = read_rows(dir, schema::SNMP_LOCATIONS)?;
    let mut map = HashMap::new();
    for row in &rows {
        let key = row[0].trim().to_string();
        let replaced = map
            .insert(
                key.clone(),
                SiteLocation {
                    site_id: key.clone(),
                    site_name: row[1].trim().to_string(),
                    address: row[2].trim().to_string(),
                    location_syntax: row[3].trim().to_string(),
                    contact: row[4].trim().to_string(),
                },
            )
            .is_some();
        flag_duplicate(FILE_SNMP_LOCATIONS, &key, replaced);
    }
    Ok(map)
}

fn load_passwords(dir: &Path) -> RefStoreResult<HashMap<String, String>> {
    let rows = read_rows(dir, schema::SITE_PASSWORDS)?;
    let mut map = HashMap::new();
    for row in &rows {
        let key = row[0].trim().to_string();
        let replaced = map.insert(key.clone(), row[1].trim().to_string()).is_some();
        flag_duplicate(FILE_SITE_PASSWORDS, &key, replaced);
    }
    Ok(map)
}

fn load_snmp_users(dir: &Path, file: &'static str) -> RefStoreResult<HashMap<String, SnmpUserRow>> {
    let rows = read_rows(dir, schema::SNMP_USERS.for_file(file))?;
    let mut map = HashMap::new();
    for row in &rows {
        let key = row[0].trim().to_string();
        let replaced = map
            .insert(
                key.clone(),
                SnmpUserRow {
                    username: row[1].trim().to_string(),
                    role: row[2].trim().to_string(),
                    auth_key: row[3].trim().to_string(),
                    priv_key: row[4].trim().to_string(),
                    acl: row[5].trim().to_string(),
                },
            )
            .is_some();
        flag_duplicate(file, &key, replaced);
    }
    Ok(map)
}
