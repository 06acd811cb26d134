//! Device HTTP API client and console polling

pub mod client;
pub mod poll;

pub use client::DeviceClient;
pub use poll::Poller;
