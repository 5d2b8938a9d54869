use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use logtide_core::cli;
use logtide_core::cli::logs::{InputFormat, LogsOptions, run_logs};
use logtide_core::conf::{ValidatedConfig, config_error_hint, discover_config, load_config};
use logtide_core::logging::{LogMode, default_log_format, default_log_mode, init_logging};
use logtide_core::model::Severity;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logtide",
    version,
    about = "Logtide: live log viewer with stack-trace grouping"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// View a log stream read from stdin
    Logs {
        #[arg(long, conflicts_with_all = ["pretty", "stats"])]
        raw: bool,

        #[arg(long, conflicts_with = "stats")]
        pretty: bool,

        /// Live dashboard of severity counts
        #[arg(long)]
        stats: bool,

        /// How stdin lines are interpreted
        #[arg(long, value_enum, default_value_t = InputFormat::Wire)]
        input: InputFormat,

        /// Merge continuation lines into their header entry
        #[arg(long, action = ArgAction::SetTrue, overrides_with = "no_group")]
        group: bool,

        #[arg(long, action = ArgAction::SetTrue, overrides_with = "group")]
        no_group: bool,

        /// Case-insensitive substring filter
        #[arg(long)]
        search: Option<String>,

        /// Only show entries of this severity
        #[arg(long)]
        level: Option<Severity>,

        /// Prefix entries with their local timestamp
        #[arg(long)]
        timestamps: bool,

        /// Pretty-print headers that are JSON documents
        #[arg(long)]
        expand_json: bool,

        /// Path to the config file (defaults to ./logtide.hcl when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Logs {
            raw,
            pretty,
            stats,
            input,
            group,
            no_group,
            search,
            level,
            timestamps,
            expand_json,
            config,
        } => {
            let config_path = discover_config(config.as_deref());
            let cfg = match &config_path {
                Some(path) => match load_config(path) {
                    Ok(cfg) => cfg,
                    Err(err) => {
                        eprintln!("{err}");
                        if let Some(hint) = config_error_hint(&err) {
                            eprintln!();
                            eprintln!("{hint}");
                        }
                        std::process::exit(1);
                    }
                },
                None => ValidatedConfig::default(),
            };

            init_logging(
                cfg.log_format.unwrap_or_else(default_log_format),
                &cfg.log_level,
            );

            let mode = if raw {
                LogMode::Raw
            } else if pretty {
                LogMode::Pretty
            } else if stats {
                LogMode::Stats
            } else {
                default_log_mode()
            };

            tracing::debug!(config = ?config_path, ?mode, ?input, "starting logs command");

            // Flags win over the config file.
            let mut settings = cfg.session;
            if group {
                settings.grouping_enabled = true;
            } else if no_group {
                settings.grouping_enabled = false;
            }
            if let Some(search) = search {
                settings.search = search;
            }
            if level.is_some() {
                settings.severity = level;
            }

            let opts = LogsOptions {
                mode,
                input,
                settings,
                timestamps,
                expand_json,
            };

            if let Err(e) = run_logs(opts).context("logs command failed") {
                eprintln!("{e:#}");
                std::process::exit(1);
            }
        }

        Command::Config { cmd } => {
            init_logging(default_log_format(), "warn");

            if let Err(e) = cli::config::run(cmd) {
                eprintln!("config error: {e}");
                std::process::exit(1);
            }
        }
    }
}
