//! Error types for attribute resolution.

use thiserror::Error;

use crate::model::{GeoRegion, NetworkZone, PlatformFamily, VdcType};

/// Result type alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while resolving device attributes.
///
/// Every variant is terminal: resolution has no partial-failure or
/// retry mode. Messages point at the lookup responsible for the
/// failure so the reference data can be corrected.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("A VDC type (admin or service) is required for Nexus switches, got '{}'", .0.wire_name())]
    VdcTypeRequired(VdcType),

    #[error("No {concern} servers configured for zone {zone}, region {region}; check the {concern} server tables")]
    ServersNotFound {
        concern: &'static str,
        zone: NetworkZone,
        region: GeoRegion,
    },

    #[error("Site ID '{0}' was not found in the SNMP location table")]
    SiteNotFound(String),

    #[error("SNMP location for site '{0}' is missing the 'snmp-server' configuration syntax; fix the snmp_locations table")]
    MalformedLocation(String),

    #[error("SNMP contact for site '{0}' does not name a Network Department; fix the snmp_locations table")]
    MalformedContact(String),

    #[error("A contact phone number is required for site '{0}' because its contact is not the central network department")]
    ContactPhoneRequired(String),

    #[error("No site password configured for site '{0}'; check the site_passwords table")]
    PasswordNotFound(String),

    #[error("No syslog syntax rule covers platform {platform} in zone {zone}")]
    UnsupportedLoggingCombination {
        platform: PlatformFamily,
        zone: NetworkZone,
    },

    #[error("SNMP credential row '{tag}' was not found in the {table} credential table")]
    CredentialsNotFound { table: &'static str, tag: &'static str },

    #[error("Resolution produced no value for '{0}'")]
    MissingField(&'static str),
}
