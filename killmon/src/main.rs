use clap::{Parser, Subcommand};
use killmon_core::cli;
use killmon_core::conf::load_config;
use killmon_core::logging::init_logging;
use killmon_core::server;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = "killmon.hcl";

#[derive(Parser, Debug)]
#[command(
    name = "killmon",
    version,
    about = "killmon: kill and death monitor for Star Citizen game logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Monitor the configured game log (default)
    Run {
        /// Path to the killmon config file or its directory
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },

    /// Scan a log file once and print what was found
    Scan(cli::scan::ScanArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },

    /// Ask a running monitor to reload its config
    #[cfg(unix)]
    Reload {
        #[arg(long)]
        pid_file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Run { config }) => run(config),

        Some(Command::Scan(args)) => {
            let _guard = init_logging(None);
            cli::scan::run(args)
        }

        Some(Command::Config { cmd }) => cli::conf::run(cmd),

        #[cfg(unix)]
        Some(Command::Reload { pid_file }) => cli::reload::run(pid_file),

        None => run(PathBuf::from(DEFAULT_CONFIG)),
    }
}

fn run(config_path: PathBuf) -> anyhow::Result<()> {
    let cfg = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(err) => {
            cli::conf::print_config_error(err, false);
            std::process::exit(1);
        }
    };

    let _guard = init_logging(cfg.log_dir());
    server::run(config_path, cfg)
}
