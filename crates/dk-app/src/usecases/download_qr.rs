use std::path::{Path, PathBuf};
use std::sync::Arc;

use dk_core::error::ToolResult;
use dk_core::ports::QrImagePort;
use dk_core::qr::QrRequest;
use dk_core::ToolError;
use tracing::info;

/// Result of a finished QR download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrDownload {
    pub url: String,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Fetches the rendered QR image for a request and saves it to disk.
pub struct DownloadQrCode {
    client: Arc<dyn QrImagePort>,
}

impl DownloadQrCode {
    pub fn from_port(client: Arc<dyn QrImagePort>) -> Self {
        Self { client }
    }

    /// Downloads `request` from `endpoint` into `dest`.
    ///
    /// Transport failures are `ExternalService`; a failed file write is
    /// `Storage`. Nothing is retried.
    #[tracing::instrument(
        name = "usecase.download_qr.execute",
        skip(self, request),
        fields(size = request.size(), ecc = %request.ecc())
    )]
    pub async fn execute(
        &self,
        request: &QrRequest,
        endpoint: &str,
        dest: &Path,
    ) -> ToolResult<QrDownload> {
        let url = request.url(endpoint)?;
        let image = self.client.fetch(&url).await?;

        std::fs::write(dest, &image)
            .map_err(|e| ToolError::storage(format!("write {} failed: {e}", dest.display())))?;

        info!(path = %dest.display(), bytes = image.len(), "QR code downloaded");
        Ok(QrDownload {
            url: url.to_string(),
            path: dest.to_path_buf(),
            bytes: image.len(),
        })
    }
}
