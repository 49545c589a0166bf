//! Syslog syntax selection.
//!
//! A pure function of (platform family, network zone, VRF). The server
//! address, severity and port are deliberately left as `x`-placeholders
//! in the reference syntax; operators substitute site specifics after
//! generation.

use crate::error::{ResolveError, ResolveResult};
use crate::model::{NetworkZone, PlatformFamily};

/// Sentinel value for platforms that get no syslog statement.
pub const LOGGING_NOT_REQUIRED: &str = "not_required";

/// Resolve the syslog configuration line for a device.
///
/// ASA platforms resolve to [`LOGGING_NOT_REQUIRED`]. Nexus switches
/// are supported only in the OVERLAY and DATACENTER_DC zones and use
/// the NX-OS `logging server` form. Routers and non-Nexus switches use
/// the IOS `logging host` form in every zone.
pub fn logging_syntax(
    platform: PlatformFamily,
    zone: NetworkZone,
    vrf: Option<&str>,
) -> ResolveResult<String> {
    if platform.is_asa() {
        return Ok(LOGGING_NOT_REQUIRED.to_string());
    }

    match platform {
        PlatformFamily::Router | PlatformFamily::SwitchNonNexus => Ok(match vrf {
            Some(name) => format!("logging host x.x.x.x vrf {name} transport udp port xxxxx"),
            None => "logging host x.x.x.x transport udp port xxxxx".to_string(),
        }),
        PlatformFamily::SwitchNexus
            if matches!(zone, NetworkZone::Overlay | NetworkZone::DatacenterDc) =>
        {
            Ok(match vrf {
                Some(name) => format!("logging server x.x.x.x 6 port xxxxx use-vrf {name}"),
                None => "logging server x.x.x.x 6 port xxxxx".to_string(),
            })
        }
        _ => Err(ResolveError::UnsupportedLoggingCombination { platform, zone }),
    }
}
