use crate::conf::{ConfigError, ValidationError, load_config};
use miette::Report;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            let s = &cfg.settings;
            println!("✔ Config loaded successfully from {}", cfg.source.display());
            println!("✔ Tracking handle '{}'", s.handle);
            println!("✔ Channel {} reading {}", s.channel, s.log_path.display());
            println!("✔ Scanning every {}s", s.interval.as_secs());

            let modes = [
                ("show_all", s.modes.show_all),
                ("killer_mode", s.modes.killer_mode),
                ("streamer_mode", s.modes.streamer_mode),
                ("write_to_file", s.modes.write_to_file),
            ];
            let enabled: Vec<_> = modes.iter().filter(|(_, on)| *on).map(|(n, _)| *n).collect();
            if enabled.is_empty() {
                println!("✔ No modes enabled");
            } else {
                println!("✔ Modes enabled: {}", enabled.join(", "));
            }

            if s.modes.write_to_file {
                println!("✔ Writing kill events to {}", s.output_dir.display());
            }

            if !s.log_path.exists() {
                println!("! Log file does not exist yet; scans will fail until it does");
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

/// Render a config error with its diagnostics and a hint, to stderr.
pub fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    if plain {
        eprintln!("{}", err);
        if let ConfigError::Validation { errors } = &err {
            for e in errors {
                eprintln!("  - {}", e);
            }
        }
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Parse { .. } => Some(
            "killmon.hcl uses HCL block syntax.\n\
             \n\
             Example:\n\
             \n\
             monitor {\n  \
               handle   = \"Bob\"\n  \
               interval = 60\n  \
               channel  = \"live\"\n\
             }",
        ),

        ConfigError::Validation { errors }
            if errors
                .iter()
                .any(|e| matches!(e, ValidationError::MissingChannelPath { .. })) =>
        {
            Some(
                "Each channel reads its own game.log. Windows paths need escaped backslashes.\n\
                 \n\
                 Example:\n\
                 \n\
                 channels {\n  \
                   custom = \"D:\\\\Games\\\\StarCitizen\\\\LIVE\\\\game.log\"\n\
                 }",
            )
        }

        _ => None,
    }
}
