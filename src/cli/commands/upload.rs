//! Upload command implementation - persist a script on the device filesystem

use crate::cli::args::Cli;
use crate::cli::commands::load_config;
use crate::device::client::DeviceClient;
use crate::errors::BerryLinkError;
use crate::script::buffer::ScriptBuffer;
use crate::script::directives::{resolve_device_address, resolve_upload_path};
use anyhow::Result;
use std::path::Path;

pub async fn execute_upload_command(
    cli: &Cli,
    file: &Path,
    root: Option<&Path>,
    reset_vm: bool,
) -> Result<()> {
    let config = load_config(cli)?;
    let buffer = ScriptBuffer::open(file)?;

    let root = match root {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let root = root.canonicalize()?;

    // Resolve the destination before anything touches the network; a file
    // outside the workspace root aborts without issuing a request.
    let upload_path = match resolve_upload_path(Some(&buffer), &root) {
        Ok(path) => path,
        Err(BerryLinkError::NoWorkspace(msg)) => {
            println!("⚠️  {} - nothing uploaded", msg);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let address = resolve_device_address(Some(&buffer), &config.device)?;
    let client = DeviceClient::new(&address)?;

    println!(
        "📤 Uploading {} to {}{}",
        file.display(),
        client.base_url(),
        upload_path
    );
    let response = client.upload_file(&upload_path, &buffer.text).await?;
    log::debug!("upload response: {}", response);
    println!("✅ Uploaded as {}", upload_path);

    // Only restart a VM that actually received the new file
    if reset_vm || config.device.reset_vm_after_upload {
        let body = client.restart_vm().await?;
        // the body is usually JSON; compact it, else report it as-is
        let display = match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => value.to_string(),
            Err(_) => body.trim().to_string(),
        };
        println!("🔄 Berry VM restart: {}", display);
    }

    Ok(())
}
