//! Configuration management for BerryLink

pub mod app_config;

pub use app_config::*;
