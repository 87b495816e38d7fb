use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "passkeep")]
#[command(version)]
#[command(about = "Generates, stores and shows website passwords", long_about = None)]
pub struct Cli {
    /// Directory holding data.json, config.json, history and the log
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log file level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive shell (default).
    Shell,
    /// Print generated passwords.
    #[command(alias = "gen")]
    Generate {
        /// Number of passwords to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Do not copy the last password to the clipboard
        #[arg(long)]
        no_copy: bool,
    },
}
