//! Color palettes for the light and dark themes.

use ratatui::style::Color;

use atlas_app::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Header, cards, inputs and menus
    pub element: Color,
    pub border: Color,
    pub border_active: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub error: Color,
    /// Selected row / highlighted menu entry
    pub highlight_bg: Color,
    pub highlight_fg: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 250),
    element: Color::Rgb(255, 255, 255),
    border: Color::Rgb(209, 213, 219),
    border_active: Color::Rgb(17, 21, 23),
    text: Color::Rgb(17, 21, 23),
    text_secondary: Color::Rgb(55, 65, 81),
    text_muted: Color::Rgb(107, 114, 128),
    accent: Color::Rgb(37, 99, 235),
    error: Color::Rgb(220, 38, 38),
    highlight_bg: Color::Rgb(243, 244, 246),
    highlight_fg: Color::Rgb(17, 21, 23),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(32, 44, 55),
    element: Color::Rgb(43, 57, 69),
    border: Color::Rgb(55, 65, 81),
    border_active: Color::Rgb(255, 255, 255),
    text: Color::Rgb(255, 255, 255),
    text_secondary: Color::Rgb(209, 213, 219),
    text_muted: Color::Rgb(156, 163, 175),
    accent: Color::Rgb(96, 165, 250),
    error: Color::Rgb(248, 113, 113),
    highlight_bg: Color::Rgb(55, 65, 81),
    highlight_fg: Color::Rgb(255, 255, 255),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}
