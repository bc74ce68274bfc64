//! Catalog of the tools reachable from the navigation shell.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    Home,
    QrCode,
    Json,
    ColorPicker,
    Timezone,
    TextCase,
    Base64,
    ImageBase64,
    Clipboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub kind: ToolKind,
    pub name: &'static str,
    pub route: &'static str,
    pub description: &'static str,
}

impl ToolKind {
    /// Sidebar order.
    pub const ALL: [ToolKind; 9] = [
        ToolKind::Home,
        ToolKind::QrCode,
        ToolKind::Json,
        ToolKind::ColorPicker,
        ToolKind::Timezone,
        ToolKind::TextCase,
        ToolKind::Base64,
        ToolKind::ImageBase64,
        ToolKind::Clipboard,
    ];

    pub fn info(self) -> ToolInfo {
        let (name, route, description) = match self {
            ToolKind::Home => ("Home", "/", "Back to home page"),
            ToolKind::QrCode => ("QR Code Generator", "/qr-code", "Generate QR codes"),
            ToolKind::Json => ("JSON Formatter", "/json", "Format & validate JSON"),
            ToolKind::ColorPicker => ("Color Picker", "/color-picker", "Pick & convert colors"),
            ToolKind::Timezone => ("Timezone Converter", "/timezone", "Convert times between zones"),
            ToolKind::TextCase => ("Text Case Converter", "/text-case", "Transform text cases"),
            ToolKind::Base64 => ("Base64 Encoder", "/base64", "Encode & decode Base64 strings"),
            ToolKind::ImageBase64 => ("Image to Base64", "/image-base64", "Convert images to Base64"),
            ToolKind::Clipboard => ("Clipboard Manager", "/clipboard", "Manage clipboard history"),
        };
        ToolInfo {
            kind: self,
            name,
            route,
            description,
        }
    }

    /// Looks a tool up by its route, with or without the leading `/`.
    pub fn from_route(route: &str) -> Option<Self> {
        let route = route.trim().trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|kind| kind.info().route.trim_start_matches('/') == route)
    }
}

/// Every tool except Home, in sidebar order.
pub fn catalog() -> Vec<ToolInfo> {
    ToolKind::ALL
        .into_iter()
        .filter(|kind| *kind != ToolKind::Home)
        .map(ToolKind::info)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_eight_tools() {
        let tools = catalog();
        assert_eq!(tools.len(), 8);
        assert_eq!(tools[0].name, "QR Code Generator");
        assert_eq!(tools[7].route, "/clipboard");
    }

    #[test]
    fn routes_are_unique_and_resolvable() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_route(kind.info().route), Some(kind));
        }
        assert_eq!(ToolKind::from_route("base64"), Some(ToolKind::Base64));
        assert_eq!(ToolKind::from_route("/nope"), None);
    }
}
