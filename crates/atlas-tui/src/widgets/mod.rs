//! Custom widget components

mod country_detail;
mod country_list;
mod header;
mod key_hints;
mod region_menu;
mod search_input;

pub use country_detail::CountryDetail;
pub use country_list::CountryList;
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use region_menu::{RegionMenu, RegionSelector};
pub use search_input::SearchBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to `max_width` display columns, ending with `…` when cut
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
