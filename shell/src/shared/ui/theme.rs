use iced::theme::Palette;
use iced::{Color, Theme};

use super::style_store::{ACCENT_VAR, PRIMARY_VAR, StyleStore};

/// Resolved colors used by widget styles.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) overlay: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) primary: Color,
    pub(crate) accent: Color,
    pub(crate) success: Color,
    pub(crate) danger: Color,
    pub(crate) warning: Color,
}

impl IcedColorPalette {
    fn light() -> Self {
        Self {
            background: Color::from_rgb8(0xF8, 0xFA, 0xFC),
            surface: Color::WHITE,
            overlay: Color::from_rgb8(0xE2, 0xE8, 0xF0),
            foreground: Color::from_rgb8(0x0F, 0x17, 0x2A),
            dim_foreground: Color::from_rgb8(0x64, 0x74, 0x8B),
            primary: Color::from_rgb8(0x0E, 0xA5, 0xE9),
            accent: Color::from_rgb8(0x8B, 0x5C, 0xF6),
            success: Color::from_rgb8(0x16, 0xA3, 0x4A),
            danger: Color::from_rgb8(0xDC, 0x26, 0x26),
            warning: Color::from_rgb8(0xD9, 0x77, 0x06),
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::from_rgb8(0x0B, 0x10, 0x1A),
            surface: Color::from_rgb8(0x11, 0x18, 0x27),
            overlay: Color::from_rgb8(0x1F, 0x29, 0x37),
            foreground: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            dim_foreground: Color::from_rgb8(0x9C, 0xA3, 0xAF),
            ..Self::light()
        }
    }
}

/// Application theme derived from the style store.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("light"),
            iced_palette: IcedColorPalette::light(),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.primary,
            success: palette.success,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build a theme from the current style variables.
    pub(crate) fn from_store(store: &StyleStore) -> Self {
        let dark = store.is_dark();
        let mut iced_palette = if dark {
            IcedColorPalette::dark()
        } else {
            IcedColorPalette::light()
        };

        if let Some(color) = store_color(store, PRIMARY_VAR) {
            iced_palette.primary = color;
        }
        if let Some(color) = store_color(store, ACCENT_VAR) {
            iced_palette.accent = color;
        }

        let scheme = if dark { "dark" } else { "light" };
        Self {
            id: format!("admin-shell-{scheme}"),
            iced_palette,
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed from the app view into widget views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Keeps the rendered theme in step with the style store.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Rebuild the current theme after style variables changed.
    pub(crate) fn sync(&mut self, store: &StyleStore) {
        self.current = AppTheme::from_store(store);
    }
}

/// Parse a `#RRGGBB` hex string.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).ok()
    };

    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn store_color(store: &StyleStore, name: &str) -> Option<Color> {
    let value = store.variable(name)?;
    let color = parse_hex_color(value);
    if color.is_none() {
        log::warn!("style variable {name} is not a hex color: {value}");
    }
    color
}
