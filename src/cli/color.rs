//! Color picker commands.

use dk_app::Notice;
use dk_core::color::{format_all, hex_to_rgb, random_hex, ColorFormats, ColorHistory};
use dk_core::error::ToolResult;
use dk_core::{ToolError, ToolKind};

use super::input::finish;
use super::{AppContext, ColorAction, ColorFormat, Report};

fn parse(hex: &str) -> ToolResult<ColorFormats> {
    format_all(hex).ok_or_else(|| ToolError::invalid_format(format!("not a #RRGGBB color: {hex}")))
}

fn format_lines(formats: &ColorFormats) -> Vec<String> {
    vec![
        format!("HEX   {}", formats.hex),
        format!("RGB   {}", formats.rgb),
        format!("RGBA  {}", formats.rgba),
        format!("HSL   {}", formats.hsl),
        format!("HSLA  {}", formats.hsla),
    ]
}

fn pick_format(formats: &ColorFormats, format: ColorFormat) -> (&str, &'static str) {
    match format {
        ColorFormat::Hex => (&formats.hex, "HEX"),
        ColorFormat::Rgb => (&formats.rgb, "RGB"),
        ColorFormat::Rgba => (&formats.rgba, "RGBA"),
        ColorFormat::Hsl => (&formats.hsl, "HSL"),
        ColorFormat::Hsla => (&formats.hsla, "HSLA"),
    }
}

pub fn run(action: ColorAction, ctx: &AppContext) -> ToolResult<Report> {
    match action {
        ColorAction::Show { hex, copy } => {
            let formats = parse(&hex)?;
            let report = Report::new(format_lines(&formats));
            match copy {
                Some(format) => {
                    let (text, what) = pick_format(&formats, format);
                    Ok(finish(
                        report,
                        ctx,
                        ToolKind::ColorPicker,
                        Some((text, what)),
                        Notice::copied(what),
                    ))
                }
                None => Ok(report),
            }
        }
        ColorAction::Random { count } => {
            let mut lines = Vec::with_capacity(count);
            for _ in 0..count {
                let hex = random_hex();
                let formats = parse(&hex)?;
                lines.push(format!("{:<8} {:<20} {}", formats.hex, formats.rgb, formats.hsl));
            }
            Ok(Report::new(lines))
        }
        ColorAction::Pick { colors } => {
            let mut history = ColorHistory::new();
            let mut current = None;
            for hex in &colors {
                let rgb = hex_to_rgb(hex)
                    .ok_or_else(|| ToolError::invalid_format(format!("not a #RRGGBB color: {hex}")))?;
                history.select(rgb);
                current = Some(rgb);
            }

            let mut lines = Vec::new();
            if let Some(current) = current {
                lines.extend(format_lines(&parse(&current.to_hex())?));
                lines.push(String::new());
            }
            lines.push(format!("Recent colors ({}):", history.len()));
            lines.extend(history.iter().map(|rgb| format!("  {}", rgb.to_hex())));
            Ok(Report::new(lines))
        }
    }
}
