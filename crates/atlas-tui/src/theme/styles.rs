//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

/// Spinner frames for loading placeholders
pub const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn spinner_frame(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

// --- Surfaces ---
pub fn screen(p: &Palette) -> Style {
    Style::default().bg(p.background).fg(p.text)
}

pub fn element(p: &Palette) -> Style {
    Style::default().bg(p.element).fg(p.text)
}

// --- Text styles ---
pub fn text(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

pub fn text_bold(p: &Palette) -> Style {
    text(p).add_modifier(Modifier::BOLD)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn label(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_secondary)
        .add_modifier(Modifier::BOLD)
}

pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn error(p: &Palette) -> Style {
    Style::default().fg(p.error).add_modifier(Modifier::BOLD)
}

// --- Selection ---
pub fn selected(p: &Palette) -> Style {
    Style::default()
        .bg(p.highlight_bg)
        .fg(p.highlight_fg)
        .add_modifier(Modifier::BOLD)
}

/// Key hint (`q`, `/`, ...) in the footer
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn element_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border
        }))
        .style(element(p))
}
