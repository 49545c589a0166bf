//! Batch command - many devices from one tabular file.
//!
//! A batch row carries every downstream value directly (AAA, NTP,
//! SNMP, site password, syslog syntax); the reference store is not
//! consulted. This is a deliberate raw-override capability for
//! pre-resolved inventories; only template selection is re-derived
//! from the platform column. A malformed row aborts the whole run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::{info, warn};

use stigforge_resolver::{select_template, PlatformFamily};
use stigforge_templates::{OutputWriter, RenderValues, Renderer, TemplateSet};

use crate::commands::SharedArgs;
use crate::config::Settings;

/// Fixed column count of a batch row. Columns 7 and 8 are reserved
/// (historically geo/ISE region) and are not read.
const BATCH_COLUMNS: usize = 30;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Malformed batch row {row}: expected {BATCH_COLUMNS} columns, found {found}")]
    MalformedRow { row: usize, found: usize },

    #[error("Unrecognized platform '{value}' in batch row {row}")]
    UnrecognizedPlatform { row: usize, value: String },

    #[error("Missing hostname in batch row {row}")]
    MissingHostname { row: usize },
}

#[derive(Args)]
pub struct BatchArgs {
    /// Batch file: one device per row, 30 fixed-position columns
    pub file: PathBuf,

    #[command(flatten)]
    pub shared: SharedArgs,
}

pub fn execute(args: BatchArgs) -> Result<()> {
    let settings = Settings::resolve(&args.shared)?;
    let templates = TemplateSet::load(&settings.templates_dir)?;
    for path in templates.missing_required() {
        warn!("Platform template missing before batch run: {:?}", path);
    }
    let writer = OutputWriter::new(&settings.output_dir, &settings.file_prefix);
    let renderer = Renderer::new();

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&args.file)
        .with_context(|| format!("Failed to open batch file {:?}", args.file))?;

    let mut generated = 0usize;
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }
        let row = idx + 1;
        let (platform, values) = values_from_row(row, &record)?;

        let template_id = select_template(platform)?;
        let rendered = renderer.render(templates.get(template_id)?, &values.variables())?;
        let path = writer.write(&values.hostname, &rendered)?;

        info!("Row {row}: generated config for {} at {:?}", values.hostname, path);
        println!("Configuration completed for [{}] ({})", values.hostname, values.mgmt_ip);
        generated += 1;
    }

    println!();
    println!("Generated {generated} configuration file(s) in {:?}", writer.output_dir());
    Ok(())
}

/// Map one 30-column row onto the render value set.
fn values_from_row(row: usize, record: &StringRecord) -> Result<(PlatformFamily, RenderValues)> {
    if record.len() != BATCH_COLUMNS {
        return Err(BatchError::MalformedRow { row, found: record.len() }.into());
    }
    let col = |idx: usize| record[idx].trim().to_string();

    let platform_raw = col(1);
    let platform = PlatformFamily::from_wire(&platform_raw)
        .ok_or(BatchError::UnrecognizedPlatform { row, value: platform_raw })?;

    let hostname = col(2);
    if hostname.is_empty() {
        return Err(BatchError::MissingHostname { row }.into());
    }

    let values = RenderValues {
        network_type: col(0),
        device_type: col(1),
        hostname,
        mgmt_ip: col(3),
        mgmt_interface: col(4),
        vrf_check: col(5),
        vrf_name: col(6),
        aaa_primary: col(9),
        aaa_secondary: col(10),
        ntp_preferred: col(11),
        ntp_secondary: col(12),
        ntp_tertiary: col(13),
        ntp_alternate: col(14),
        snmp_location: col(15),
        snmp_contact: col(16),
        snmp_contact_phone: col(17),
        site_password: col(18),
        logging_syntax: col(19),
        snmp_read_user: col(20),
        snmp_read_role: col(21),
        snmp_read_auth_key: col(22),
        snmp_read_priv_key: col(23),
        snmp_read_acl: col(24),
        snmp_write_user: col(25),
        snmp_write_role: col(26),
        snmp_write_auth_key: col(27),
        snmp_write_priv_key: col(28),
        snmp_write_acl: col(29),
    };
    Ok((platform, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Vec<String> {
        let mut fields = vec![
            "OVERLAY".to_string(),
            "Router".to_string(),
            "HQ-RTR1".to_string(),
            "192.0.2.10".to_string(),
            "loopback 0".to_string(),
            "no".to_string(),
            "no_vrf".to_string(),
            "".to_string(), // reserved
            "".to_string(), // reserved
        ];
        fields.extend((0..21).map(|i| format!("value{i}")));
        fields
    }

    #[test]
    fn maps_positional_columns() {
        let record = StringRecord::from(sample_row());
        let (platform, values) = values_from_row(1, &record).unwrap();

        assert_eq!(platform, PlatformFamily::Router);
        assert_eq!(values.hostname, "HQ-RTR1");
        assert_eq!(values.aaa_primary, "value0");
        assert_eq!(values.logging_syntax, "value10");
        assert_eq!(values.snmp_write_acl, "value20");
    }

    #[test]
    fn short_row_is_rejected_with_position() {
        let record = StringRecord::from(vec!["OVERLAY", "Router", "HQ-RTR1"]);
        let err = values_from_row(4, &record).unwrap_err();
        let batch_err = err.downcast_ref::<BatchError>().unwrap();
        assert!(matches!(batch_err, BatchError::MalformedRow { row: 4, found: 3 }));
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let mut fields = sample_row();
        fields[1] = "Toaster".to_string();
        let record = StringRecord::from(fields);

        let err = values_from_row(2, &record).unwrap_err();
        let batch_err = err.downcast_ref::<BatchError>().unwrap();
        assert!(matches!(batch_err, BatchError::UnrecognizedPlatform { row: 2, .. }));
    }
}
