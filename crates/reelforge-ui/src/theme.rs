//! Brand palette and design tokens for the Reelforge Web UI.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the shade (e.g., "success").
    pub name: &'static str,
    /// Hex RGB value for the shade.
    pub hex: &'static str,
}

/// Collection of related tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier.
    pub id: &'static str,
    /// Ordered list of shades.
    pub shades: &'static [ColorToken],
}

/// Feedback palette for status pills, badges and toasts.
pub const FEEDBACK: Palette = Palette {
    id: "feedback",
    shades: &[
        ColorToken {
            name: "success",
            hex: "#10B981",
        },
        ColorToken {
            name: "warning",
            hex: "#F59E0B",
        },
        ColorToken {
            name: "error",
            hex: "#EF4444",
        },
        ColorToken {
            name: "info",
            hex: "#06B6D4",
        },
    ],
};

/// Sans-serif stack used across the UI.
pub const FONT_SANS: [&str; 10] = [
    "Inter",
    "system-ui",
    "ui-sans-serif",
    "Segoe UI",
    "Roboto",
    "Helvetica Neue",
    "Arial",
    "Noto Sans",
    "Apple Color Emoji",
    "Segoe UI Emoji",
];

/// Monospace stack for log and diagnostic text.
pub const FONT_MONO: [&str; 8] = [
    "JetBrains Mono",
    "ui-monospace",
    "SFMono-Regular",
    "Menlo",
    "Monaco",
    "Consolas",
    "Liberation Mono",
    "monospace",
];

/// Soft elevation shadow for cards.
pub const SHADOW_SOFT: &str = "0 1px 2px rgba(0,0,0,0.04), 0 8px 20px rgba(0,0,0,0.06)";
/// Glass shadow for drawers and overlays.
pub const SHADOW_GLASS: &str =
    "inset 0 1px 0 rgba(255,255,255,0.08), 0 12px 40px rgba(0,0,0,0.18)";
/// Gradient backdrop for hero surfaces.
pub const AI_GRADIENT: &str =
    "linear-gradient(135deg, rgba(16,185,129,0.25), rgba(59,130,246,0.25) 30%, rgba(168,85,247,0.25) 70%)";

/// Corner radius tokens in pixels (cards, drawers).
pub const RADII: [u8; 2] = [16, 20];

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_palette_covers_the_status_domain() {
        assert_eq!(FEEDBACK.shades.len(), 4);
        let names: Vec<&str> = FEEDBACK.shades.iter().map(|token| token.name).collect();
        assert_eq!(names, vec!["success", "warning", "error", "info"]);
    }

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
