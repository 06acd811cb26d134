//! CLI command implementations

pub mod run;
pub mod upload;
pub mod watch;

use crate::cli::args::{Cli, Commands};
use crate::config::AppConfig;
use crate::script::buffer::ScriptBuffer;
use crate::script::output::ProcessedOutput;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute_command(command: Commands, cli: &Cli) -> Result<()> {
    match command {
        Commands::Run { file, watch } => run::execute_run_command(cli, &file, watch).await,
        Commands::Upload {
            file,
            root,
            reset_vm,
        } => upload::execute_upload_command(cli, &file, root.as_deref(), reset_vm).await,
        Commands::Watch { interval } => watch::execute_watch_command(cli, interval).await,
    }
}

/// Load the effective configuration: config file plus the --device override
pub(crate) fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(device) = &cli.device {
        config.device.address = Some(device.clone());
    }
    Ok(config)
}

/// CLI stand-in for an editor's line decoration: point at the source
/// line the device implicated in a syntax error report.
pub(crate) fn report_error_line(processed: &ProcessedOutput, buffer: &ScriptBuffer) {
    let Some(line) = processed.highlight else {
        return;
    };
    eprintln!();
    match buffer.text.lines().nth(line) {
        Some(source) => {
            eprintln!("❌ syntax error at line {}:", line + 1);
            eprintln!("   {} | {}", line + 1, source);
        }
        None => eprintln!("❌ syntax error at line {}", line + 1),
    }
}
