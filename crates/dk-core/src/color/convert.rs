use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::model::{Hsl, Rgb};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").expect("static hex regex")
});

/// All canonical string forms of one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFormats {
    pub hex: String,
    pub rgb: String,
    pub rgba: String,
    pub hsl: String,
    pub hsla: String,
}

/// Parses `#RRGGBB` or `RRGGBB` (any case).
///
/// Returns `None` for every other shape, including 3-digit shorthand; callers
/// treat `None` as "no color selected" rather than as a failure.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let caps = HEX_COLOR.captures(hex)?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Standard RGB to HSL conversion, rounded to whole degrees and percent.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0,
            s: 0,
            l: (l * 100.0).round() as u8,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    // 359.6 rounds to 360, which wraps to 0
    let h = ((sector * 60.0).round() as i32 + 360) % 360;

    Hsl {
        h: h as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Every display format for `hex`, or `None` if `hex` is not a 6-digit color.
pub fn format_all(hex: &str) -> Option<ColorFormats> {
    let rgb = hex_to_rgb(hex)?;
    let Hsl { h, s, l } = rgb_to_hsl(rgb);
    let Rgb { r, g, b } = rgb;

    Some(ColorFormats {
        hex: rgb.to_hex(),
        rgb: format!("rgb({r}, {g}, {b})"),
        rgba: format!("rgba({r}, {g}, {b}, 1)"),
        hsl: format!("hsl({h}, {s}%, {l}%)"),
        hsla: format!("hsla({h}, {s}%, {l}%, 1)"),
    })
}

/// Uniformly random 24-bit color.
pub fn random_color() -> Rgb {
    Rgb::from_u32(rand::rng().random_range(0..=0xFF_FFFF))
}

/// Random color as lowercase `#rrggbb`.
pub fn random_hex() -> String {
    format!("#{:06x}", random_color().to_u32())
}
