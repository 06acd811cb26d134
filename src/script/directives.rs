//! In-buffer directives and target resolution
//!
//! A script can pin its target device and upload destination with one
//! directive per line, recognized anywhere in the text:
//!
//! ```text
//! #deviceAddress:http://192.168.1.50
//! #uploadPath:/autoexec.be
//! ```
//!
//! Directive values are taken verbatim to the end of the line - no
//! trimming, no validation. Resolution is recomputed on every operation,
//! nothing is cached.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

use crate::config::DeviceConfig;
use crate::errors::{BerryLinkError, Result};
use crate::script::buffer::ScriptBuffer;

fn device_address_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^#deviceAddress:(.*)$").expect("valid regex"))
}

fn upload_path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^#uploadPath:(.*)$").expect("valid regex"))
}

/// Value of the first `#deviceAddress:` directive line, verbatim
pub fn device_address_directive(text: &str) -> Option<&str> {
    device_address_re()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_end_matches('\r'))
}

/// Value of the first `#uploadPath:` directive line, verbatim
pub fn upload_path_directive(text: &str) -> Option<&str> {
    upload_path_re()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_end_matches('\r'))
}

/// Resolve the device address for an operation.
///
/// An in-buffer directive wins over the configured default. Missing both
/// is a configuration error, never a silently empty address.
pub fn resolve_device_address(
    buffer: Option<&ScriptBuffer>,
    config: &DeviceConfig,
) -> Result<String> {
    if let Some(buffer) = buffer {
        if let Some(address) = device_address_directive(&buffer.text) {
            log::debug!("device address from buffer directive: {}", address);
            return Ok(address.to_string());
        }
    }
    config
        .address
        .clone()
        .filter(|address| !address.is_empty())
        .ok_or_else(|| {
            BerryLinkError::Config(
                "no device address: set device.address in the config, pass --device, \
                 or add a #deviceAddress: line to the script"
                    .to_string(),
            )
        })
}

/// Resolve the destination path on the device filesystem.
///
/// An in-buffer directive wins; otherwise the path is the buffer file's
/// location relative to `workspace_root`, rooted with a forward slash.
/// A buffer without a backing file, or one outside the workspace root,
/// cannot be uploaded.
pub fn resolve_upload_path(
    buffer: Option<&ScriptBuffer>,
    workspace_root: &Path,
) -> Result<String> {
    let buffer = buffer.ok_or(BerryLinkError::NoActiveBuffer)?;
    if let Some(path) = upload_path_directive(&buffer.text) {
        log::debug!("upload path from buffer directive: {}", path);
        return Ok(path.to_string());
    }
    let file = buffer.path.as_deref().ok_or_else(|| {
        BerryLinkError::NoWorkspace("buffer has no backing file".to_string())
    })?;
    let relative = file.strip_prefix(workspace_root).map_err(|_| {
        BerryLinkError::NoWorkspace(format!(
            "{} is not inside the workspace root {}",
            file.display(),
            workspace_root.display()
        ))
    })?;
    Ok(to_device_path(&relative.to_string_lossy()))
}

/// Turn a workspace-relative path into a device path: rewrite the first
/// backslash and prepend `/`.
pub fn to_device_path(relative: &str) -> String {
    format!("/{}", relative.replacen('\\', "/", 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_must_start_the_line() {
        assert_eq!(
            device_address_directive("#deviceAddress:http://a\n"),
            Some("http://a")
        );
        assert_eq!(device_address_directive("x #deviceAddress:http://a\n"), None);
    }

    #[test]
    fn directive_found_anywhere_in_the_text() {
        let text = "var x = 1\n#uploadPath:/autoexec.be\nprint(x)\n";
        assert_eq!(upload_path_directive(text), Some("/autoexec.be"));
    }

    #[test]
    fn directive_value_is_untrimmed() {
        // Permissive on purpose: the value runs verbatim to end of line
        assert_eq!(
            device_address_directive("#deviceAddress: 192.168.1.50 "),
            Some(" 192.168.1.50 ")
        );
    }

    #[test]
    fn crlf_line_endings_do_not_leak_into_values() {
        assert_eq!(
            device_address_directive("#deviceAddress:http://a\r\nprint(1)\n"),
            Some("http://a")
        );
    }

    #[test]
    fn device_path_rewrites_first_backslash_only() {
        assert_eq!(to_device_path(r"scripts\init.be"), "/scripts/init.be");
        assert_eq!(to_device_path("scripts/init.be"), "/scripts/init.be");
        assert_eq!(to_device_path(r"a\b\c.be"), r"/a/b\c.be");
    }
}
