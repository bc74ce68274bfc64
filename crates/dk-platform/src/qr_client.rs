use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use dk_core::error::ToolResult;
use dk_core::ports::QrImagePort;
use dk_core::ToolError;
use reqwest::Url;
use tracing::{debug, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Downloads rendered QR images over HTTPS.
pub struct ReqwestQrImageClient {
    client: reqwest::Client,
}

impl ReqwestQrImageClient {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build QR HTTP client failed")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl QrImagePort for ReqwestQrImageClient {
    #[tracing::instrument(name = "platform.qr.fetch", skip(self), fields(host = url.host_str()))]
    async fn fetch(&self, url: &Url) -> ToolResult<Vec<u8>> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ToolError::external(format!("QR request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "QR endpoint returned an error status");
            return Err(ToolError::external(format!(
                "QR endpoint returned status {status}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ToolError::external(format!("QR download failed: {e}")))?;

        debug!(bytes = bytes.len(), "QR image downloaded");
        Ok(bytes.to_vec())
    }
}
