//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod batch;
pub mod interactive;

/// stigforge - STIG baseline configuration generator for network devices
#[derive(Parser)]
#[command(name = "stigforge")]
#[command(version, about = "Generate STIG baseline configurations for network devices")]
#[command(long_about = r#"
stigforge generates security-hardening baseline configurations for
Cisco network devices (IOS/IOS-XE routers and switches, NX-OS
switches; ASA support is gated until its template is complete).

Device attributes are collected interactively or from a batch file,
dependent values (AAA/NTP servers, SNMP identities, site credentials,
syslog syntax) are resolved against the reference tables, and one
configuration file per device is written to the output directory.

EXIT CODES:
  0 - Success
  1 - General error (including I/O)
  2 - Invalid input or arguments
  3 - Resolution failure
  4 - Template/render failure
  5 - Not yet supported
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer nine questions about one device and generate its config
    Interactive(interactive::InteractiveArgs),

    /// Generate configs for every device row in a batch file
    Batch(batch::BatchArgs),
}

/// Directory flags shared by both modes.
#[derive(Args, Debug)]
pub struct SharedArgs {
    /// Settings file (defaults to ./stigforge.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the reference tables
    #[arg(long)]
    pub reference_dir: Option<PathBuf>,

    /// Directory holding the platform templates
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,

    /// Directory generated configs are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}
