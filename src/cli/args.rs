//! Command line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::device::poll::DEFAULT_POLL_INTERVAL_MS;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "berrylink")]
#[command(
    about = "🫐 Berry console bridge - run and upload Berry scripts on Tasmota devices over HTTP"
)]
pub struct Cli {
    /// Path to a berrylink.toml config file (defaults to ./berrylink.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Device address, e.g. http://192.168.1.50 (overrides the configured device.address)
    #[arg(short, long, global = true, value_name = "ADDRESS")]
    pub device: Option<String>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Send a script to the device for immediate execution
    Run {
        /// Berry script to execute ('-' reads from stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Keep polling console output after the script ran
        #[arg(short, long)]
        watch: bool,
    },
    /// Upload a script to the device filesystem
    Upload {
        /// Berry script to upload
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Workspace root the device path is computed against (default: current directory)
        #[arg(short, long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Restart the Berry VM after a successful upload
        #[arg(long)]
        reset_vm: bool,
    },
    /// Poll the device console and stream its output
    Watch {
        /// Poll interval in milliseconds
        #[arg(short, long, default_value_t = DEFAULT_POLL_INTERVAL_MS, value_name = "MS")]
        interval: u64,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
