use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use passkeep::cli::{Cli, Commands};
use passkeep::clipboard::{Clipboard, SERVED_BY_PROCESS, SystemClipboard};
use passkeep::generator::generate_password;
use passkeep::shell::history::HistoryConfig;
use passkeep::shell::prompt::TerminalPrompter;
use passkeep::shell::{Shell, ShellConfig};
use passkeep::{AppConfig, LogConfig, Session, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::resolve(cli.data_dir)?;
    config.ensure_dir()?;

    // The tool stays usable without a log file
    if let Err(e) = init_logging(&LogConfig::new(config.log_path()).with_level(cli.log_level)) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    log::debug!("Data directory: {}", config.data_dir.display());

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut session = Session::open(
                &config,
                Box::new(SystemClipboard::new()),
                Box::new(TerminalPrompter),
            );
            let shell = Shell::with_config(ShellConfig {
                history: HistoryConfig::new(config.history_path()),
                show_welcome: true,
            });
            shell.run(&mut session)
        }
        Commands::Generate { count, no_copy } => {
            let passwords: Vec<String> = (0..count.max(1)).map(|_| generate_password()).collect();
            for password in &passwords {
                println!("{}", password);
            }
            if let (false, Some(last)) = (no_copy, passwords.last()) {
                if SERVED_BY_PROCESS {
                    eprintln!(
                        "Keeping the password on the clipboard until something else is copied \
                         (Ctrl-C to stop)."
                    );
                }
                if let Err(e) = SystemClipboard::new().copy_and_hold(last) {
                    log::warn!("Could not copy generated password: {}", e);
                    eprintln!("{}", e);
                }
            }
            Ok(())
        }
    }
}
