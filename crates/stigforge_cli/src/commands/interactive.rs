//! Interactive command - one device, nine questions.

use anyhow::Result;
use clap::Args;
use tracing::info;

use stigforge_refstore::ReferenceStore;
use stigforge_resolver::{
    resolve, select_template, DeviceAttributes, GeoRegion, NetworkZone, PlatformFamily,
    ResolveError, VdcType,
};
use stigforge_templates::{OutputWriter, RenderValues, Renderer, TemplateSet};

use crate::commands::SharedArgs;
use crate::config::Settings;
use crate::prompt::{self, PromptError};

const TOTAL_QUESTIONS: usize = 9;

#[derive(Args)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    /// Print the generated config to the terminal after saving it
    #[arg(long)]
    pub show: bool,
}

pub fn execute(args: InteractiveArgs) -> Result<()> {
    let settings = Settings::resolve(&args.shared)?;
    let store = ReferenceStore::load(&settings.reference_dir)?;

    let attrs = collect_attributes(&store)?;

    // Phone is only needed when the site contact is not centralized;
    // ask for it exactly when resolution says so.
    let resolved = match resolve(&attrs, &store, None) {
        Ok(resolved) => {
            prompt::section_break(9, TOTAL_QUESTIONS);
            println!("\n  SNMP contact information found");
            resolved
        }
        Err(ResolveError::ContactPhoneRequired(site_id)) => {
            prompt::section_break(9, TOTAL_QUESTIONS);
            println!("\nThe SNMP contact for {site_id} is managed locally.");
            println!("Provide the responsible Network Department's phone number to continue.");
            let phone = prompt::ask("   Enter the [10-digit] phone number:  ")?;
            resolve(&attrs, &store, Some(&phone))?
        }
        Err(e) => return Err(e.into()),
    };

    let template_id = select_template(attrs.platform_family)?;
    let templates = TemplateSet::load(&settings.templates_dir)?;
    let vars = RenderValues::from_resolved(&attrs, &resolved).variables();
    let rendered = Renderer::new().render(templates.get(template_id)?, &vars)?;

    let writer = OutputWriter::new(&settings.output_dir, &settings.file_prefix);
    let path = writer.write(&attrs.hostname, &rendered)?;
    info!("Generated config for {} using {:?}", attrs.hostname, template_id);

    if args.show {
        println!("\n{rendered}");
    }
    println!();
    println!("Configuration completed for [{}] ({})", attrs.hostname, attrs.management_ip);
    println!("  File location: {}", path.display());
    println!();
    println!("CAUTION: do not boot from this file.");
    println!(" - With level 15 privileges, copy+paste it into the running config.");
    println!(
        " - Afterwards, ask the central network department to register [{}] for [{}] in the TACACS server.",
        attrs.management_ip, attrs.hostname
    );
    Ok(())
}

/// The nine-question flow producing one raw attribute record.
fn collect_attributes(store: &ReferenceStore) -> Result<DeviceAttributes> {
    prompt::section_break(1, TOTAL_QUESTIONS);
    let zone_names: Vec<String> = NetworkZone::ALL
        .iter()
        .map(|z| format!("Network - {}", z.wire_name()))
        .collect();
    let zone_options: Vec<&str> = zone_names.iter().map(String::as_str).collect();
    let idx = prompt::ask_menu(
        "Choose the network that matches this device's management plane.",
        &zone_options,
        "   Enter your selection [1-6]:  ",
    )?;
    let network_zone = NetworkZone::ALL[idx];

    prompt::section_break(2, TOTAL_QUESTIONS);
    let platform_options = [
        "ASA - Physical Appliance [not functional yet]",
        "ASA - hosted by Firepower 21xx Series Appliance [not functional yet]",
        "ASA - hosted by Firepower 41xx Series Appliance [not functional yet]",
        "Router - IOS-XR is not supported",
        "Switch - Nexus models",
        "Switch - NON-Nexus",
        "OTHER - [reserved for future use]",
    ];
    let idx = prompt::ask_menu(
        "Enter the number that corresponds to the device type.",
        &platform_options,
        "   Enter your selection [1-7]:  ",
    )?;
    let platform_family = *PlatformFamily::ALL
        .get(idx)
        .ok_or_else(|| PromptError::Unsupported("The OTHER device type is".to_string()))?;

    let vdc_type = if platform_family == PlatformFamily::SwitchNexus {
        let idx = prompt::ask_menu(
            "Select the correct VDC type (Admin for the administrative context).",
            &[
                "Admin - The administrative context for the Nexus switch",
                "Service - A non-Admin virtual device context",
            ],
            "   Enter your selection [1 or 2]:  ",
        )?;
        if idx == 0 { VdcType::Admin } else { VdcType::Service }
    } else {
        VdcType::NotApplicable
    };

    if platform_family == PlatformFamily::SwitchNonNexus {
        let stacked = prompt::ask_yes_no("\nIs the switch participating in a switch stack? [y/n]:  ")?;
        if stacked {
            return Err(PromptError::Unsupported("Stacked switches are".to_string()).into());
        }
        println!("\nStackWise check - PASS");
    }

    prompt::section_break(3, TOTAL_QUESTIONS);
    println!("\nProvide the device hostname.");
    if platform_family.is_asa() || platform_family == PlatformFamily::SwitchNexus {
        println!("NOTE: for a virtual context, enter ONLY the context name (e.g. ADM-SW1, not SW1/admin).");
    }
    let hostname = prompt::ask("   Enter the hostname:  ")?;

    prompt::section_break(4, TOTAL_QUESTIONS);
    println!("\nProvide the management IPv4 address, without a subnet mask or CIDR.");
    let management_ip = prompt::ask("   Enter the management IP address:  ")?;

    prompt::section_break(5, TOTAL_QUESTIONS);
    println!("\nProvide the interface configured with the management IP.");
    println!("Note the lowercase name and the space before the numeric identifier (e.g. 'vlan 10').");
    let management_interface = prompt::ask("   Enter the interface name:  ")?;

    prompt::section_break(6, TOTAL_QUESTIONS);
    let vrf = if prompt::ask_yes_no("\nIs the management interface participating in VRF? [y/n]:  ")? {
        println!("\nEnter the exact name of the management VRF [case-sensitive].");
        Some(prompt::ask("   VRF name:  ")?)
    } else {
        None
    };

    prompt::section_break(7, TOTAL_QUESTIONS);
    let region_names: Vec<&str> = GeoRegion::ALL.iter().map(|r| r.wire_name()).collect();
    let idx = prompt::ask_menu(
        "Enter the number that corresponds to the device's regional location.",
        &region_names,
        "   Enter your selection [1-4]:  ",
    )?;
    let geo_region = GeoRegion::ALL[idx];

    prompt::section_break(8, TOTAL_QUESTIONS);
    println!("\nSelecting the correct SNMP location.\n");
    println!("  Corporate Site ID");
    for site in store.locations() {
        println!("       {} - - - - - - {}", site.site_id, site.site_name);
    }
    println!("\nEnter the Site ID that corresponds to your device's location.");
    let site_id = prompt::ask("   Enter the Corporate Site ID:  ")?;

    Ok(DeviceAttributes {
        network_zone,
        platform_family,
        vdc_type,
        hostname,
        management_ip,
        management_interface,
        vrf,
        geo_region,
        site_id,
    })
}
