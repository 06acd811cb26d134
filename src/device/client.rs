//! HTTP client for the device's Berry console endpoints
//!
//! Three endpoints, defined by the device firmware:
//!
//! - `GET /bc?c2=0[&c1=<script>]` - execute a script (with `c1`) or fetch
//!   the currently buffered console output (without it)
//! - `POST /ufse` - persist a file on the device filesystem (multipart
//!   fields `name` and `content`)
//! - `POST /cm?cmnd=BrRestart%20` - restart the Berry VM

use reqwest::{Client, multipart};
use url::Url;

use crate::errors::{BerryLinkError, Result};

/// Client bound to one device address
#[derive(Debug, Clone)]
pub struct DeviceClient {
    client: Client,
    base_url: String,
}

impl DeviceClient {
    /// Build a client for `address`. A bare host or IP gets an `http://`
    /// scheme prepended; anything that still fails URL parsing is a
    /// configuration error.
    pub fn new(address: &str) -> Result<Self> {
        let base_url = if address.contains("://") {
            address.to_string()
        } else {
            format!("http://{}", address)
        };
        Url::parse(&base_url).map_err(|e| {
            BerryLinkError::Config(format!("invalid device address '{}': {}", address, e))
        })?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Fetch the currently buffered console output
    pub async fn fetch_console(&self) -> Result<String> {
        let response = self
            .client
            .get(self.endpoint("bc"))
            .query(&[("c2", "0")])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// Execute a script immediately and return the combined output
    pub async fn execute_script(&self, source: &str) -> Result<String> {
        let response = self
            .client
            .get(self.endpoint("bc"))
            .query(&[("c2", "0"), ("c1", source)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// Persist `content` at `device_path` on the device filesystem.
    /// `device_path` must be forward-slash rooted.
    pub async fn upload_file(&self, device_path: &str, content: &str) -> Result<String> {
        let form = multipart::Form::new()
            .text("name", device_path.to_string())
            .text("content", content.to_string());
        let response = self
            .client
            .post(self.endpoint("ufse"))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// Restart the Berry VM. The body is JSON-ish and returned verbatim
    /// for the caller to report.
    pub async fn restart_vm(&self) -> Result<String> {
        // the restart command carries a trailing space
        let url = format!(
            "{}?cmnd={}",
            self.endpoint("cm"),
            urlencoding::encode("BrRestart ")
        );
        let response = self.client.post(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
