//! Watch command implementation - stream the device console

use crate::cli::args::Cli;
use crate::cli::commands::load_config;
use crate::device::client::DeviceClient;
use crate::device::poll::Poller;
use crate::script::directives::resolve_device_address;
use crate::script::output::{OutputProcessor, OutputSink};
use anyhow::Result;
use chrono::Local;
use std::io::{self, Write};
use std::time::Duration;

pub async fn execute_watch_command(cli: &Cli, interval_ms: u64) -> Result<()> {
    let config = load_config(cli)?;
    if !config.device.output_polling {
        println!("⚠️  Console polling is disabled (device.output_polling = false)");
        return Ok(());
    }

    let address = resolve_device_address(None, &config.device)?;
    let client = DeviceClient::new(&address)?;

    println!(
        "📺 Watching console on {} (Ctrl+C to stop)",
        client.base_url()
    );
    let mut processor = OutputProcessor::new(StampedStdout::default());
    let poller = Poller::new(client, Duration::from_millis(interval_ms));
    poller
        .run(&mut processor, |processed| {
            if let Some(line) = processed.highlight {
                eprintln!("❌ device reported a syntax error at line {}", line + 1);
            }
        })
        .await?;

    processor.into_sink().flush_pending();
    Ok(())
}

/// Sink that prefixes each complete console line with a local timestamp
#[derive(Default)]
struct StampedStdout {
    pending: String,
}

impl StampedStdout {
    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            println!(
                "[{}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                self.pending
            );
            self.pending.clear();
        }
    }
}

impl OutputSink for StampedStdout {
    fn append(&mut self, text: &str) {
        self.pending.push_str(text);
        while let Some(pos) = self.pending.find('\n') {
            let line: String = self.pending.drain(..=pos).collect();
            print!("[{}] {}", Local::now().format("%H:%M:%S%.3f"), line);
        }
        let _ = io::stdout().flush();
    }
}
