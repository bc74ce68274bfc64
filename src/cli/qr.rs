//! QR code commands.

use std::path::PathBuf;

use dk_app::usecases::DownloadQrCode;
use dk_app::Notice;
use dk_core::error::ToolResult;
use dk_core::qr::{QrRequest, QR_PRESETS};
use dk_core::ToolKind;

use super::input::finish;
use super::{AppContext, QrAction, Report};

pub async fn run(action: QrAction, ctx: &AppContext) -> ToolResult<Report> {
    let settings = &ctx.settings;
    match action {
        QrAction::Url {
            text,
            size,
            ecc,
            copy,
        } => {
            let request = QrRequest::new(
                text,
                size.unwrap_or(settings.qr_size),
                ecc.unwrap_or(settings.qr_error_correction),
            )?;
            let url = request.url(&settings.qr_endpoint)?.to_string();
            let copy = copy.then_some((url.as_str(), "QR code URL"));
            Ok(finish(
                Report::line(url.clone()),
                ctx,
                ToolKind::QrCode,
                copy,
                Notice::success(
                    "QR Code generated",
                    "Your QR code has been created successfully",
                ),
            ))
        }
        QrAction::Download {
            text,
            size,
            ecc,
            output,
        } => {
            let request = QrRequest::new(
                text,
                size.unwrap_or(settings.qr_size),
                ecc.unwrap_or(settings.qr_error_correction),
            )?;
            let dest = output.unwrap_or_else(|| {
                PathBuf::from(format!("qrcode-{}.png", ctx.deps.clock.now_ms()))
            });

            let download = DownloadQrCode::from_port(ctx.deps.qr_client.clone())
                .execute(&request, &settings.qr_endpoint, &dest)
                .await?;

            Ok(Report::line(download.path.display().to_string()).with_notice(
                Notice::success("Download started", "QR code image is being downloaded"),
            ))
        }
        QrAction::Presets => Ok(Report::new(
            QR_PRESETS
                .iter()
                .map(|(label, value)| format!("{label:<14} {value}"))
                .collect(),
        )),
    }
}
