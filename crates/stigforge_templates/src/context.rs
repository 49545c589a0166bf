//! Render context construction.
//!
//! Flattens the device and resolved attributes into the named values
//! the platform templates reference. The names are the rendering
//! contract: templates may only use variables listed here.

use std::collections::HashMap;

use stigforge_resolver::{DeviceAttributes, ResolvedAttributes};

/// The flat value set handed to the renderer for one device.
///
/// Interactive mode fills this from a resolved attribute record; batch
/// mode fills it verbatim from row columns.
#[derive(Debug, Clone, Default)]
pub struct RenderValues {
    pub network_type: String,
    pub device_type: String,
    pub hostname: String,
    pub mgmt_ip: String,
    pub mgmt_interface: String,
    pub vrf_check: String,
    pub vrf_name: String,
    pub aaa_primary: String,
    pub aaa_secondary: String,
    pub ntp_preferred: String,
    pub ntp_secondary: String,
    pub ntp_tertiary: String,
    pub ntp_alternate: String,
    pub snmp_location: String,
    pub snmp_contact: String,
    pub snmp_contact_phone: String,
    pub site_password: String,
    pub logging_syntax: String,
    pub snmp_read_user: String,
    pub snmp_read_role: String,
    pub snmp_read_auth_key: String,
    pub snmp_read_priv_key: String,
    pub snmp_read_acl: String,
    pub snmp_write_user: String,
    pub snmp_write_role: String,
    pub snmp_write_auth_key: String,
    pub snmp_write_priv_key: String,
    pub snmp_write_acl: String,
}

impl RenderValues {
    /// Build the value set from a device and its resolved attributes.
    pub fn from_resolved(attrs: &DeviceAttributes, resolved: &ResolvedAttributes) -> Self {
        Self {
            network_type: attrs.network_zone.wire_name().to_string(),
            device_type: attrs.platform_family.wire_name().to_string(),
            hostname: attrs.hostname.clone(),
            mgmt_ip: attrs.management_ip.clone(),
            mgmt_interface: attrs.management_interface.clone(),
            vrf_check: if attrs.vrf.is_some() { "yes" } else { "no" }.to_string(),
            vrf_name: attrs.vrf_name().to_string(),
            aaa_primary: resolved.aaa_primary.clone(),
            aaa_secondary: resolved.aaa_secondary.clone(),
            ntp_preferred: resolved.ntp_preferred.clone(),
            ntp_secondary: resolved.ntp_secondary.clone(),
            ntp_tertiary: resolved.ntp_tertiary.clone(),
            ntp_alternate: resolved.ntp_alternate.clone(),
            snmp_location: resolved.snmp_location.clone(),
            snmp_contact: resolved.snmp_contact.clone(),
            snmp_contact_phone: resolved.snmp_contact_phone.clone(),
            site_password: resolved.site_password.clone(),
            logging_syntax: resolved.logging_syntax.clone(),
            snmp_read_user: resolved.snmp_read.username.clone(),
            snmp_read_role: resolved.snmp_read.role.clone(),
            snmp_read_auth_key: resolved.snmp_read.auth_key.clone(),
            snmp_read_priv_key: resolved.snmp_read.priv_key.clone(),
            snmp_read_acl: resolved.snmp_read.acl.clone(),
            snmp_write_user: resolved.snmp_write.username.clone(),
            snmp_write_role: resolved.snmp_write.role.clone(),
            snmp_write_auth_key: resolved.snmp_write.auth_key.clone(),
            snmp_write_priv_key: resolved.snmp_write.priv_key.clone(),
            snmp_write_acl: resolved.snmp_write.acl.clone(),
        }
    }

    /// The template variable mapping.
    pub fn variables(&self) -> HashMap<String, String> {
        let pairs: [(&str, &str); 28] = [
            ("networkType", &self.network_type),
            ("devType", &self.device_type),
            ("hostname", &self.hostname),
            ("mgmt_IP", &self.mgmt_ip),
            ("mgmt_Int", &self.mgmt_interface),
            ("vrf_check", &self.vrf_check),
            ("vrf_name", &self.vrf_name),
            ("AAA_PRI", &self.aaa_primary),
            ("AAA_SEC", &self.aaa_secondary),
            ("NTP_1", &self.ntp_preferred),
            ("NTP_2", &self.ntp_secondary),
            ("NTP_3", &self.ntp_tertiary),
            ("NTP_4", &self.ntp_alternate),
            ("snmp_location", &self.snmp_location),
            ("snmp_contact", &self.snmp_contact),
            ("snmp_contact_phone", &self.snmp_contact_phone),
            ("sitePass", &self.site_password),
            ("syslogSyntax", &self.logging_syntax),
            ("snmp_READuser", &self.snmp_read_user),
            ("snmp_READrole", &self.snmp_read_role),
            ("snmp_READauthPW", &self.snmp_read_auth_key),
            ("snmp_READprivPW", &self.snmp_read_priv_key),
            ("snmp_READuserACL", &self.snmp_read_acl),
            ("snmp_WRITEuser", &self.snmp_write_user),
            ("snmp_WRITErole", &self.snmp_write_role),
            ("snmp_WRITEauthPW", &self.snmp_write_auth_key),
            ("snmp_WRITEprivPW", &self.snmp_write_priv_key),
            ("snmp_WRITEuserACL", &self.snmp_write_acl),
        ];
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
