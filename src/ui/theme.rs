//! Light and dark palettes for the panels, overlays and background

use bevy::prelude::*;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::UiTheme;

/// Colors for one theme mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub background: Color,
    pub panel_bg: Color,
    pub text_main: Color,
    pub text_dim: Color,
    pub badge_bg: Color,
    pub overlay_bg: Color,
    pub overlay_text: Color,
    pub caption_bg: Color,
}

impl ThemePalette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    pub const DARK: Self = Self {
        background: Color::BLACK,
        panel_bg: Color::srgba(0.067, 0.094, 0.153, 0.9),
        text_main: Color::WHITE,
        text_dim: Color::srgb(0.61, 0.64, 0.69),
        badge_bg: Color::srgb(0.22, 0.25, 0.32),
        overlay_bg: Color::srgba(0.0, 0.0, 0.0, 0.8),
        overlay_text: Color::WHITE,
        caption_bg: Color::srgba(0.0, 0.0, 0.0, 0.2),
    };

    pub const LIGHT: Self = Self {
        background: Color::srgb(0.937, 0.965, 1.0),
        panel_bg: Color::srgba(1.0, 1.0, 1.0, 0.9),
        text_main: Color::srgb(0.067, 0.094, 0.153),
        text_dim: Color::srgb(0.42, 0.45, 0.5),
        badge_bg: Color::srgb(0.95, 0.96, 0.97),
        overlay_bg: Color::srgba(0.0, 0.0, 0.0, 0.8),
        overlay_text: Color::WHITE,
        caption_bg: Color::srgba(0.0, 0.0, 0.0, 0.2),
    };
}

/// Background role of a themed UI node
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemedSurface {
    Panel,
    Badge,
    Overlay,
    Caption,
}

impl ThemedSurface {
    pub fn color(self, palette: &ThemePalette) -> Color {
        match self {
            ThemedSurface::Panel => palette.panel_bg,
            ThemedSurface::Badge => palette.badge_bg,
            ThemedSurface::Overlay => palette.overlay_bg,
            ThemedSurface::Caption => palette.caption_bg,
        }
    }
}

/// Text role of a themed label
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemedLabel {
    Main,
    Dim,
    Overlay,
}

impl ThemedLabel {
    pub fn color(self, palette: &ThemePalette) -> Color {
        match self {
            ThemedLabel::Main => palette.text_main,
            ThemedLabel::Dim => palette.text_dim,
            ThemedLabel::Overlay => palette.overlay_text,
        }
    }
}

/// Feathers widget theme for the given mode.
///
/// Feathers only ships a dark theme; light mode overrides the tokens used by
/// the buttons and sliders in the control panel.
pub fn feathers_theme(dark_mode: bool) -> UiTheme {
    let mut theme = UiTheme(create_dark_theme());
    if dark_mode {
        theme.set_color("feathers.text.main", palette::LIGHT_GRAY_1);
        theme.set_color("feathers.text.dim", palette::LIGHT_GRAY_2);
        theme.set_color("feathers.focus", palette::ACCENT);
        theme.set_color("feathers.slider.bg", Color::srgba(0.04, 0.08, 0.12, 0.9));
        theme.set_color("feathers.slider.bar", Color::srgba(0.18, 0.7, 0.8, 0.7));
        theme.set_color("feathers.slider.text", Color::srgba(0.5, 0.9, 0.95, 0.95));
        theme.set_color("feathers.button.bg", Color::srgba(0.06, 0.12, 0.16, 0.9));
        theme.set_color(
            "feathers.button.bg.hover",
            Color::srgba(0.08, 0.2, 0.26, 0.95),
        );
        theme.set_color(
            "feathers.button.bg.pressed",
            Color::srgba(0.1, 0.26, 0.32, 0.95),
        );
        theme.set_color("feathers.button.txt", Color::srgba(0.6, 1.0, 1.0, 1.0));
        theme.set_color(
            "feathers.button.primary.bg",
            Color::srgba(0.08, 0.22, 0.28, 0.95),
        );
        theme.set_color(
            "feathers.button.primary.bg.hover",
            Color::srgba(0.1, 0.28, 0.36, 0.98),
        );
        theme.set_color(
            "feathers.button.primary.bg.pressed",
            Color::srgba(0.12, 0.32, 0.4, 0.98),
        );
        theme.set_color(
            "feathers.button.primary.txt",
            Color::srgba(0.7, 1.0, 1.0, 1.0),
        );
    } else {
        theme.set_color("feathers.text.main", Color::srgb(0.067, 0.094, 0.153));
        theme.set_color("feathers.text.dim", Color::srgb(0.42, 0.45, 0.5));
        theme.set_color("feathers.focus", palette::ACCENT);
        theme.set_color("feathers.slider.bg", Color::srgba(0.85, 0.88, 0.92, 0.95));
        theme.set_color("feathers.slider.bar", Color::srgba(0.2, 0.45, 0.85, 0.8));
        theme.set_color("feathers.slider.text", Color::srgb(0.1, 0.15, 0.25));
        theme.set_color("feathers.button.bg", Color::srgba(0.92, 0.94, 0.97, 0.95));
        theme.set_color(
            "feathers.button.bg.hover",
            Color::srgba(0.86, 0.9, 0.95, 0.98),
        );
        theme.set_color(
            "feathers.button.bg.pressed",
            Color::srgba(0.8, 0.85, 0.92, 0.98),
        );
        theme.set_color("feathers.button.txt", Color::srgb(0.1, 0.15, 0.25));
        theme.set_color("feathers.button.primary.bg", Color::srgb(0.15, 0.39, 0.92));
        theme.set_color(
            "feathers.button.primary.bg.hover",
            Color::srgb(0.2, 0.45, 0.95),
        );
        theme.set_color(
            "feathers.button.primary.bg.pressed",
            Color::srgb(0.12, 0.32, 0.8),
        );
        theme.set_color("feathers.button.primary.txt", Color::WHITE);
    }
    theme
}
