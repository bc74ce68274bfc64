//! Color picker domain: hex/RGB/HSL conversion and canonical CSS strings.
mod convert;
mod history;
mod model;

pub use convert::{format_all, hex_to_rgb, random_color, random_hex, rgb_to_hsl, ColorFormats};
pub use history::{ColorHistory, COLOR_HISTORY_CAPACITY};
pub use model::{Hsl, Rgb};
