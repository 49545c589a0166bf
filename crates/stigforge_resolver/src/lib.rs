//! # stigforge_resolver
//!
//! The attribute-resolution core of stigforge: given one device's raw
//! attributes (network zone, platform family, site, region) and the
//! loaded reference store, deterministically derive every downstream
//! configuration value — AAA and NTP servers, SNMP location, contact
//! and credentials, site password, and the platform's syslog syntax —
//! or fail with a specific, reportable cause.
//!
//! Also hosts the platform-to-template mapping, including the ASA
//! capability gate.

pub mod error;
pub mod logging;
pub mod model;
pub mod resolve;
pub mod template;

pub use error::{ResolveError, ResolveResult};
pub use logging::{logging_syntax, LOGGING_NOT_REQUIRED};
pub use model::{
    DeviceAttributes, GeoRegion, NetworkZone, PlatformFamily, ResolvedAttributes, SnmpCredential,
    VdcType,
};
pub use resolve::{resolve, ResolvedBuilder, CENTRAL_CONTACT, CENTRAL_CONTACT_PHONE};
pub use template::{select_template, SelectError, TemplateId};
