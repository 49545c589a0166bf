//! Device attribute models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The network segment a device's management plane resides in.
///
/// The zone decides which AAA/NTP reference subset applies and whether
/// SNMP contact ownership is centralized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NetworkZone {
    #[serde(rename = "UNDERLAY")]
    Underlay,
    #[serde(rename = "UNDERLAYv2")]
    UnderlayV2,
    #[serde(rename = "OVERLAY")]
    Overlay,
    #[serde(rename = "DATACENTER_DC")]
    DatacenterDc,
    #[serde(rename = "COMMERCIAL")]
    Commercial,
    #[serde(rename = "OOB")]
    Oob,
}

impl NetworkZone {
    pub const ALL: [NetworkZone; 6] = [
        NetworkZone::Underlay,
        NetworkZone::UnderlayV2,
        NetworkZone::Overlay,
        NetworkZone::DatacenterDc,
        NetworkZone::Commercial,
        NetworkZone::Oob,
    ];

    /// The name used in reference data and batch rows.
    pub fn wire_name(&self) -> &'static str {
        match self {
            NetworkZone::Underlay => "UNDERLAY",
            NetworkZone::UnderlayV2 => "UNDERLAYv2",
            NetworkZone::Overlay => "OVERLAY",
            NetworkZone::DatacenterDc => "DATACENTER_DC",
            NetworkZone::Commercial => "COMMERCIAL",
            NetworkZone::Oob => "OOB",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|z| z.wire_name() == name)
    }

    /// WAN/core zones whose devices are owned by the central network
    /// department regardless of site.
    pub fn has_centralized_contact(&self) -> bool {
        matches!(
            self,
            NetworkZone::Underlay
                | NetworkZone::UnderlayV2
                | NetworkZone::DatacenterDc
                | NetworkZone::Commercial
        )
    }
}

impl fmt::Display for NetworkZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// The device's platform family.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    #[serde(rename = "ASA_Traditional")]
    AsaTraditional,
    #[serde(rename = "ASA_Firepower_21xx")]
    AsaFirepower21xx,
    #[serde(rename = "ASA_Firepower_41xx")]
    AsaFirepower41xx,
    #[serde(rename = "Router")]
    Router,
    #[serde(rename = "Switch_Nexus")]
    SwitchNexus,
    #[serde(rename = "Switch_NON_NEXUS")]
    SwitchNonNexus,
}

impl PlatformFamily {
    pub const ALL: [PlatformFamily; 6] = [
        PlatformFamily::AsaTraditional,
        PlatformFamily::AsaFirepower21xx,
        PlatformFamily::AsaFirepower41xx,
        PlatformFamily::Router,
        PlatformFamily::SwitchNexus,
        PlatformFamily::SwitchNonNexus,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            PlatformFamily::AsaTraditional => "ASA_Traditional",
            PlatformFamily::AsaFirepower21xx => "ASA_Firepower_21xx",
            PlatformFamily::AsaFirepower41xx => "ASA_Firepower_41xx",
            PlatformFamily::Router => "Router",
            PlatformFamily::SwitchNexus => "Switch_Nexus",
            PlatformFamily::SwitchNonNexus => "Switch_NON_NEXUS",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.wire_name() == name)
    }

    /// ASA appliances, physical or Firepower-hosted.
    pub fn is_asa(&self) -> bool {
        matches!(
            self,
            PlatformFamily::AsaTraditional
                | PlatformFamily::AsaFirepower21xx
                | PlatformFamily::AsaFirepower41xx
        )
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Virtual device context type, meaningful only for Nexus switches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VdcType {
    Admin,
    Service,
    #[default]
    NotApplicable,
}

impl VdcType {
    pub fn wire_name(&self) -> &'static str {
        match self {
            VdcType::Admin => "admin",
            VdcType::Service => "service",
            VdcType::NotApplicable => "not_applicable",
        }
    }
}

/// Geographic region used to optimize AAA/NTP server selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GeoRegion {
    #[serde(rename = "REGION_A")]
    RegionA,
    #[serde(rename = "REGION_B")]
    RegionB,
    #[serde(rename = "REGION_C")]
    RegionC,
    #[serde(rename = "REGION_D")]
    RegionD,
}

impl GeoRegion {
    pub const ALL: [GeoRegion; 4] = [
        GeoRegion::RegionA,
        GeoRegion::RegionB,
        GeoRegion::RegionC,
        GeoRegion::RegionD,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            GeoRegion::RegionA => "REGION_A",
            GeoRegion::RegionB => "REGION_B",
            GeoRegion::RegionC => "REGION_C",
            GeoRegion::RegionD => "REGION_D",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.wire_name() == name)
    }
}

impl fmt::Display for GeoRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Raw, pre-resolution attributes of one device.
///
/// Constructed once per device (one interactive session or one batch
/// row) and treated as immutable from the moment resolution begins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceAttributes {
    pub network_zone: NetworkZone,
    pub platform_family: PlatformFamily,
    /// Required (admin or service) iff the platform is a Nexus switch.
    pub vdc_type: VdcType,
    /// Used verbatim as the output-artifact key.
    pub hostname: String,
    /// Dotted quad, no mask or CIDR suffix.
    pub management_ip: String,
    pub management_interface: String,
    /// `Some(name)` iff the management interface participates in VRF.
    pub vrf: Option<String>,
    pub geo_region: GeoRegion,
    pub site_id: String,
}

impl DeviceAttributes {
    pub fn vrf_name(&self) -> &str {
        self.vrf.as_deref().unwrap_or("no_vrf")
    }
}

/// One SNMPv3 credential (read-only or read-write).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnmpCredential {
    pub username: String,
    pub role: String,
    pub auth_key: String,
    pub priv_key: String,
    pub acl: String,
}

/// Fully resolved attributes, ready for rendering.
///
/// Every field is guaranteed non-empty; construction goes through
/// [`crate::resolve::ResolvedBuilder`], which rejects gaps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedAttributes {
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
    pub snmp_read: SnmpCredential,
    pub snmp_write: SnmpCredential,
}
