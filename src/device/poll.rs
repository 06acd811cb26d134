//! Console output polling

use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

use crate::device::client::DeviceClient;
use crate::errors::Result;
use crate::script::output::{OutputProcessor, OutputSink, ProcessedOutput};

/// Default cadence between console fetches
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Fetches buffered console output on a fixed cadence.
///
/// Single-flight: each fetch runs to completion before the next tick
/// fires, and missed ticks are skipped, so a slow device never sees
/// stacked requests.
pub struct Poller {
    client: DeviceClient,
    interval: Duration,
}

impl Poller {
    pub fn new(client: DeviceClient, interval: Duration) -> Self {
        Self { client, interval }
    }

    /// Poll until Ctrl-C. Tick failures are logged at warn level and
    /// never stop the loop.
    pub async fn run<S, F>(
        &self,
        processor: &mut OutputProcessor<S>,
        mut on_output: F,
    ) -> Result<()>
    where
        S: OutputSink,
        F: FnMut(&ProcessedOutput),
    {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.client.fetch_console().await {
                        Ok(body) => {
                            let processed = processor.process(&body);
                            on_output(&processed);
                        }
                        Err(e) => {
                            log::warn!("console poll failed: {}", e);
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    log::debug!("stopping console poll");
                    return Ok(());
                }
            }
        }
    }
}
