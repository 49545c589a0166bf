//! End-to-end test: raw attributes through resolution, template
//! selection, rendering and artifact output.

use std::fs;
use std::path::Path;

use stigforge_refstore::ReferenceStore;
use stigforge_resolver::{
    resolve, select_template, DeviceAttributes, GeoRegion, NetworkZone, PlatformFamily,
    SelectError, TemplateId, VdcType,
};
use stigforge_templates::{OutputWriter, RenderValues, Renderer, TemplateSet, DEFAULT_PREFIX};
use tempfile::tempdir;

fn write_reference_fixtures(dir: &Path) {
    let files: &[(&str, &str)] = &[
        ("aaa_servers_UNDERLAY.csv", "10.1.0.1,10.1.0.2\n"),
        ("aaa_servers_UNDERLAYv2.csv", "10.2.0.1,10.2.0.2\n"),
        ("aaa_servers_OOB.csv", "REGION_A,10.3.1.1,10.3.1.2\n"),
        ("aaa_servers.csv", "REGION_A,10.4.1.1,10.4.1.2\n"),
        (
            "ntp_servers_UNDERLAY.csv",
            "REGION_A,172.16.1.1,172.16.1.2,172.16.1.3,172.16.1.4\n",
        ),
        (
            "ntp_servers_UNDERLAYv2.csv",
            "REGION_A,172.17.1.1,172.17.1.2,172.17.1.3,172.17.1.4\n",
        ),
        (
            "ntp_servers_OOB.csv",
            "REGION_A,172.18.1.1,172.18.1.2,172.18.1.3,172.18.1.4\n",
        ),
        (
            "ntp_servers.csv",
            "REGION_A,172.19.1.1,172.19.1.2,172.19.1.3,172.19.1.4\n",
        ),
        (
            "snmp_locations.csv",
            "ID001,Corporate HQ,1 Main St,snmp-server location HQ Building 1,Corporate HQ Network Department\n",
        ),
        ("site_passwords.csv", "ID001,hq-secret\n"),
        (
            "snmp_users_IOS.csv",
            "READuser,ro-ios,netview,authkey1,privkey1,90\nWRITEuser,rw-ios,netadmin,authkey2,privkey2,91\n",
        ),
        (
            "snmp_users_ASA.csv",
            "READuser,ro-asa,netview,authkey3,privkey3,92\nWRITEuser,rw-asa,netadmin,authkey4,privkey4,93\n",
        ),
        (
            "snmp_users_NEXUS.csv",
            "READuser,ro-nx,netview,authkey5,privkey5,94\nWRITEuser,rw-nx,netadmin,authkey6,privkey6,95\n\
             READuser_admin,ro-nx-adm,vdc-operator,authkey7,privkey7,96\nWRITEuser_admin,rw-nx-adm,vdc-admin,authkey8,privkey8,97\n",
        ),
    ];
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn write_ios_template(dir: &Path) {
    let template = "\
hostname {{hostname}}
!
{{snmp_location}}
snmp-server contact {{snmp_contact}} {{snmp_contact_phone}}
snmp-server user {{snmp_READuser}} {{snmp_READrole}} v3 access {{snmp_READuserACL}}
snmp-server user {{snmp_WRITEuser}} {{snmp_WRITErole}} v3 access {{snmp_WRITEuserACL}}
!
tacacs server PRIMARY
 address ipv4 {{AAA_PRI}}
tacacs server SECONDARY
 address ipv4 {{AAA_SEC}}
!
ntp server {{NTP_1}} prefer
ntp server {{NTP_2}}
ntp server {{NTP_3}}
ntp server {{NTP_4}}
!
{{syslogSyntax}}
!
username localadmin privilege 15 secret {{sitePass}}
! management: {{mgmt_Int}} ({{mgmt_IP}}) zone {{networkType}} type {{devType}} vrf {{vrf_check}}/{{vrf_name}}
end
";
    fs::write(dir.join("platform_IOS.tmpl"), template).unwrap();
}

fn hq_router() -> DeviceAttributes {
    DeviceAttributes {
        network_zone: NetworkZone::Overlay,
        platform_family: PlatformFamily::Router,
        vdc_type: VdcType::NotApplicable,
        hostname: "HQ-RTR1".to_string(),
        management_ip: "192.0.2.10".to_string(),
        management_interface: "loopback 0".to_string(),
        vrf: None,
        geo_region: GeoRegion::RegionA,
        site_id: "ID001".to_string(),
    }
}

#[test]
fn generates_ios_config_artifact() {
    let refs = tempdir().unwrap();
    write_reference_fixtures(refs.path());
    let tmpl = tempdir().unwrap();
    write_ios_template(tmpl.path());
    let out = tempdir().unwrap();

    let store = ReferenceStore::load(refs.path()).unwrap();
    let attrs = hq_router();

    let resolved = resolve(&attrs, &store, None).unwrap();
    assert_eq!(resolved.logging_syntax, "logging host x.x.x.x transport udp port xxxxx");

    let template_id = select_template(attrs.platform_family).unwrap();
    assert_eq!(template_id, TemplateId::Ios);

    let templates = TemplateSet::load(tmpl.path()).unwrap();
    let vars = RenderValues::from_resolved(&attrs, &resolved).variables();
    let rendered = Renderer::new()
        .render(templates.get(template_id).unwrap(), &vars)
        .unwrap();

    let writer = OutputWriter::new(out.path(), DEFAULT_PREFIX);
    let path = writer.write(&attrs.hostname, &rendered).unwrap();
    assert!(path.ends_with("STIG_Config_HQ-RTR1"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("hostname HQ-RTR1"));
    assert!(content.contains("address ipv4 10.4.1.1"));
    assert!(content.contains("ntp server 172.19.1.1 prefer"));
    assert!(content.contains("logging host x.x.x.x transport udp port xxxxx"));
    assert!(content.contains("snmp-server location HQ Building 1"));
    assert!(content.contains("secret hq-secret"));
    assert!(!content.contains("{{"));
}

#[test]
fn asa_selection_is_capability_gated() {
    let err = select_template(PlatformFamily::AsaTraditional).unwrap_err();
    assert!(matches!(err, SelectError::NotYetSupported(_)));
}

#[test]
fn rendering_fails_on_variable_missing_from_contract() {
    let tmpl = tempdir().unwrap();
    fs::write(
        tmpl.path().join("platform_IOS.tmpl"),
        "hostname {{hostname}}\nbanner {{no_such_variable}}\n",
    )
    .unwrap();

    let templates = TemplateSet::load(tmpl.path()).unwrap();
    let vars = std::collections::HashMap::from([("hostname".to_string(), "X".to_string())]);
    let err = Renderer::new()
        .render(templates.get(TemplateId::Ios).unwrap(), &vars)
        .unwrap_err();
    assert!(err.to_string().contains("no_such_variable"));
}
