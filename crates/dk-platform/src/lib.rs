pub mod app_dirs;
pub mod clipboard;
pub mod qr_client;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::SystemClipboardWriter;
pub use qr_client::ReqwestQrImageClient;
