mod check;
mod dump;
mod init;

pub use check::{check, config_error_hint, print_config_error};
pub use dump::dump;
pub use init::{ConfigTemplates, init};

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file or its directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Print errors without diagnostics rendering
        #[arg(long)]
        plain: bool,
    },

    /// Print resolved configuration
    Dump {
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a starter killmon.hcl
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
        ConfigCmd::Dump { path, json, yaml } => dump(path, json, yaml),
        ConfigCmd::Init { path } => init(path).map(|_| ()),
    }
}
