//! Run command implementation - execute a script on the device

use crate::cli::args::Cli;
use crate::cli::commands::{load_config, report_error_line};
use crate::device::client::DeviceClient;
use crate::device::poll::{DEFAULT_POLL_INTERVAL_MS, Poller};
use crate::script::buffer::ScriptBuffer;
use crate::script::directives::resolve_device_address;
use crate::script::output::{OutputProcessor, StdoutSink};
use anyhow::Result;
use std::path::Path;
use std::time::Duration;

pub async fn execute_run_command(cli: &Cli, file: &Path, watch: bool) -> Result<()> {
    let config = load_config(cli)?;
    let buffer = ScriptBuffer::open(file)?;

    let address = resolve_device_address(Some(&buffer), &config.device)?;
    let client = DeviceClient::new(&address)?;

    log::info!("executing {} on {}", file.display(), client.base_url());
    let mut processor = OutputProcessor::new(StdoutSink);
    let body = client.execute_script(&buffer.text).await?;
    let processed = processor.process(&body);
    report_error_line(&processed, &buffer);

    if watch {
        let poller = Poller::new(client, Duration::from_millis(DEFAULT_POLL_INTERVAL_MS));
        poller
            .run(&mut processor, |processed| {
                report_error_line(processed, &buffer);
            })
            .await?;
    }

    Ok(())
}
