use crate::conf::{ConfigError, DEFAULT_CONFIG_FILE, config_error_hint, load_config};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a configuration file and exit
    Check {
        /// Path to the config file
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Print errors without the hint block
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
    }
}

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!(
                "✔ grouping {}",
                if cfg.session.grouping_enabled { "on" } else { "off" }
            );
            if !cfg.session.search.is_empty() {
                println!("✔ search \"{}\"", cfg.session.search);
            }
            if let Some(severity) = cfg.session.severity {
                println!("✔ severity filter {severity}");
            }
            match cfg.session.pending_limit {
                Some(limit) => println!("✔ pause buffer capped at {limit} events"),
                None => println!("✔ pause buffer unbounded"),
            }
            println!("✔ log level {}", cfg.log_level);
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    eprintln!("{err}");
    if plain {
        return;
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{hint}");
    }
}
