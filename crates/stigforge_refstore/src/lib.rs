//! # stigforge_refstore
//!
//! Read-only keyed reference tables for stigforge: AAA and NTP server
//! catalogs per network zone, SNMP locations and contacts, per-site
//! passwords, and SNMP user credentials per platform family.
//!
//! Tables are delimited files with a fixed column order and no header
//! row. Everything is loaded once at startup into keyed maps; each
//! table's shape is described by a [`schema::TableSchema`] so malformed
//! rows fail fast with a row/column diagnostic.

pub mod error;
pub mod schema;
pub mod store;
pub mod tables;

pub use error::{RefStoreError, RefStoreResult};
pub use store::ReferenceStore;
pub use tables::{AaaServers, NtpServers, SiteLocation, SnmpTable, SnmpUserRow};
