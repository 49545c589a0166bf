//! The attribute-resolution pipeline.
//!
//! Maps a raw [`DeviceAttributes`] record plus the loaded
//! [`ReferenceStore`] to a fully populated [`ResolvedAttributes`], or
//! fails with a specific, reportable cause. Resolution is a pure
//! function of its inputs: the same device against an unchanged store
//! always yields the same result.

use stigforge_refstore::{AaaServers, NtpServers, ReferenceStore, SnmpTable, SnmpUserRow};
use tracing::debug;

use crate::error::{ResolveError, ResolveResult};
use crate::logging::logging_syntax;
use crate::model::{
    DeviceAttributes, NetworkZone, PlatformFamily, ResolvedAttributes, SnmpCredential, VdcType,
};

/// Contact value forced onto WAN/core devices, which the central
/// network department owns regardless of site.
pub const CENTRAL_CONTACT: &str = "Corporate HQ Network Department";

/// Placeholder phone used whenever the contact is [`CENTRAL_CONTACT`].
pub const CENTRAL_CONTACT_PHONE: &str = "REPLACE_WITH_10_DIGIT_PHONE_OF_CORPORATE_NETWORK_DEPT";

/// Marker a location row must carry to count as well formed.
pub const LOCATION_MARKER: &str = "snmp-server";

/// Marker a contact value must carry to count as well formed.
pub const CONTACT_MARKER: &str = "Network Department";

/// Resolve every derived attribute for one device.
///
/// `contact_phone` is the exogenously supplied phone number; it is
/// consulted only when the site's contact is not [`CENTRAL_CONTACT`],
/// and its absence in that case is [`ResolveError::ContactPhoneRequired`]
/// so the interactive adapter can collect it and retry.
pub fn resolve(
    attrs: &DeviceAttributes,
    store: &ReferenceStore,
    contact_phone: Option<&str>,
) -> ResolveResult<ResolvedAttributes> {
    if attrs.platform_family == PlatformFamily::SwitchNexus
        && attrs.vdc_type == VdcType::NotApplicable
    {
        return Err(ResolveError::VdcTypeRequired(attrs.vdc_type));
    }

    let mut builder = ResolvedBuilder::default();

    builder.aaa(aaa_servers(attrs, store)?);
    builder.ntp(ntp_servers(attrs, store)?);

    let location = store
        .location(&attrs.site_id)
        .ok_or_else(|| ResolveError::SiteNotFound(attrs.site_id.clone()))?;
    if !location.location_syntax.contains(LOCATION_MARKER) {
        return Err(ResolveError::MalformedLocation(attrs.site_id.clone()));
    }
    builder.snmp_location = Some(location.location_syntax.clone());

    let contact = if attrs.network_zone.has_centralized_contact() {
        CENTRAL_CONTACT.to_string()
    } else {
        location.contact.clone()
    };
    if !contact.contains(CONTACT_MARKER) {
        return Err(ResolveError::MalformedContact(attrs.site_id.clone()));
    }

    let phone = if contact == CENTRAL_CONTACT {
        CENTRAL_CONTACT_PHONE.to_string()
    } else {
        contact_phone
            .map(str::to_string)
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ResolveError::ContactPhoneRequired(attrs.site_id.clone()))?
    };
    builder.snmp_contact = Some(contact);
    builder.snmp_contact_phone = Some(phone);

    let password = store
        .site_password(&attrs.site_id)
        .ok_or_else(|| ResolveError::PasswordNotFound(attrs.site_id.clone()))?;
    builder.site_password = Some(password.to_string());

    builder.logging_syntax = Some(logging_syntax(
        attrs.platform_family,
        attrs.network_zone,
        attrs.vrf.as_deref(),
    )?);

    let (read, write) = snmp_credentials(attrs, store)?;
    builder.snmp_read = Some(read);
    builder.snmp_write = Some(write);

    debug!("Resolved attributes for {} (site {})", attrs.hostname, attrs.site_id);
    builder.build()
}

/// AAA server selection, keyed first by zone.
///
/// The transport networks each carry a single zone-specific server
/// pair; OOB and the remaining zones key their own tables by region.
fn aaa_servers<'a>(
    attrs: &DeviceAttributes,
    store: &'a ReferenceStore,
) -> ResolveResult<&'a AaaServers> {
    let region = attrs.geo_region;
    match attrs.network_zone {
        NetworkZone::Underlay => Some(store.aaa_underlay()),
        NetworkZone::UnderlayV2 => Some(store.aaa_underlay_v2()),
        NetworkZone::Oob => store.aaa_oob(region.wire_name()),
        _ => store.aaa_default(region.wire_name()),
    }
    .ok_or(ResolveError::ServersNotFound {
        concern: "AAA",
        zone: attrs.network_zone,
        region,
    })
}

/// NTP server selection: same zone branching as AAA, but every table
/// is keyed by region.
fn ntp_servers<'a>(
    attrs: &DeviceAttributes,
    store: &'a ReferenceStore,
) -> ResolveResult<&'a NtpServers> {
    let region = attrs.geo_region.wire_name();
    match attrs.network_zone {
        NetworkZone::Underlay => store.ntp_underlay(region),
        NetworkZone::UnderlayV2 => store.ntp_underlay_v2(region),
        NetworkZone::Oob => store.ntp_oob(region),
        _ => store.ntp_default(region),
    }
    .ok_or(ResolveError::ServersNotFound {
        concern: "NTP",
        zone: attrs.network_zone,
        region: attrs.geo_region,
    })
}

/// SNMP credential selection, keyed by platform family group.
///
/// Nexus admin contexts read the `_admin`-tagged rows; service
/// contexts read the plain rows of the same table.
fn snmp_credentials(
    attrs: &DeviceAttributes,
    store: &ReferenceStore,
) -> ResolveResult<(SnmpCredential, SnmpCredential)> {
    let (table, table_name) = match attrs.platform_family {
        PlatformFamily::Router | PlatformFamily::SwitchNonNexus => {
            (SnmpTable::Ios, "snmp_users_IOS")
        }
        PlatformFamily::SwitchNexus => (SnmpTable::Nexus, "snmp_users_NEXUS"),
        PlatformFamily::AsaTraditional
        | PlatformFamily::AsaFirepower21xx
        | PlatformFamily::AsaFirepower41xx => (SnmpTable::Asa, "snmp_users_ASA"),
    };
    let (read_tag, write_tag) = if attrs.platform_family == PlatformFamily::SwitchNexus
        && attrs.vdc_type == VdcType::Admin
    {
        ("READuser_admin", "WRITEuser_admin")
    } else {
        ("READuser", "WRITEuser")
    };

    let fetch = |tag: &'static str| -> ResolveResult<SnmpCredential> {
        store
            .snmp_user(table, tag)
            .map(credential_from_row)
            .ok_or(ResolveError::CredentialsNotFound { table: table_name, tag })
    };
    Ok((fetch(read_tag)?, fetch(write_tag)?))
}

fn credential_from_row(row: &SnmpUserRow) -> SnmpCredential {
    SnmpCredential {
        username: row.username.clone(),
        role: row.role.clone(),
        auth_key: row.auth_key.clone(),
        priv_key: row.priv_key.clone(),
        acl: row.acl.clone(),
    }
}

/// Incremental accumulator for resolution results.
///
/// Replaces the original's wide record of conditionally assigned
/// variables: every field is explicit, and `build` refuses to produce
/// a [`ResolvedAttributes`] with any gap or empty value.
#[derive(Debug, Default)]
pub struct ResolvedBuilder {
    pub aaa_primary: Option<String>,
    pub aaa_secondary: Option<String>,
    pub ntp_preferred: Option<String>,
    pub ntp_secondary: Option<String>,
    pub ntp_tertiary: Option<String>,
    pub ntp_alternate: Option<String>,
    pub snmp_location: Option<String>,
    pub snmp_contact: Option<String>,
    pub snmp_contact_phone: Option<String>,
    pub site_password: Option<String>,
    pub logging_syntax: Option<String>,
    pub snmp_read: Option<SnmpCredential>,
    pub snmp_write: Option<SnmpCredential>,
}

impl ResolvedBuilder {
    pub fn aaa(&mut self, servers: &AaaServers) {
        self.aaa_primary = Some(servers.primary.clone());
        self.aaa_secondary = Some(servers.secondary.clone());
    }

    pub fn ntp(&mut self, servers: &NtpServers) {
        self.ntp_preferred = Some(servers.preferred.clone());
        self.ntp_secondary = Some(servers.secondary.clone());
        self.ntp_tertiary = Some(servers.tertiary.clone());
        self.ntp_alternate = Some(servers.alternate.clone());
    }

    pub fn build(self) -> ResolveResult<ResolvedAttributes> {
        Ok(ResolvedAttributes {
            aaa_primary: require("aaa_primary", self.aaa_primary)?,
            aaa_secondary: require("aaa_secondary", self.aaa_secondary)?,
            ntp_preferred: require("ntp_preferred", self.ntp_preferred)?,
            ntp_secondary: require("ntp_secondary", self.ntp_secondary)?,
            ntp_tertiary: require("ntp_tertiary", self.ntp_tertiary)?,
            ntp_alternate: require("ntp_alternate", self.ntp_alternate)?,
            snmp_location: require("snmp_location", self.snmp_location)?,
            snmp_contact: require("snmp_contact", self.snmp_contact)?,
            snmp_contact_phone: require("snmp_contact_phone", self.snmp_contact_phone)?,
            site_password: require("site_password", self.site_password)?,
            logging_syntax: require("logging_syntax", self.logging_syntax)?,
            snmp_read: require_credential("snmp_read", self.snmp_read)?,
            snmp_write: require_credential("snmp_write", self.snmp_write)?,
        })
    }
}

fn require(field: &'static str, value: Option<String>) -> ResolveResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ResolveError::MissingField(field)),
    }
}

fn require_credential(
    field: &'static str,
    value: Option<SnmpCredential>,
) -> ResolveResult<SnmpCredential> {
    let cred = value.ok_or(ResolveError::MissingField(field))?;
    for part in [&cred.username, &cred.role, &cred.auth_key, &cred.priv_key, &cred.acl] {
        if part.trim().is_empty() {
            return Err(ResolveError::MissingField(field));
        }
    }
    Ok(cred)
}
