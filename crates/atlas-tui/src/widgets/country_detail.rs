//! Country detail widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use atlas_app::DetailReadModel;
use atlas_core::Country;

use crate::theme::{styles, Palette};

/// Shown when a country has no land borders
pub const NO_BORDERS: &str = "None";

pub struct CountryDetail<'a> {
    model: DetailReadModel<'a>,
    palette: &'a Palette,
    loading_frame: usize,
}

impl<'a> CountryDetail<'a> {
    pub fn new(model: DetailReadModel<'a>, palette: &'a Palette) -> Self {
        Self {
            model,
            palette,
            loading_frame: 0,
        }
    }

    pub fn loading_frame(mut self, frame: usize) -> Self {
        self.loading_frame = frame;
        self
    }

    fn row(&self, label: &str, value: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label}: "), styles::label(self.palette)),
            Span::styled(value.to_string(), styles::text(self.palette)),
        ])
    }

    fn render_country(&self, country: &Country, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [title, facts, borders] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(country.name.clone(), styles::text_bold(p))),
            Line::from(Span::styled(
                format!("Flag: {}", country.flag_uri()),
                styles::text_muted(p),
            )),
        ])
        .render(title, buf);

        let details = &country.details;
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(facts);

        Paragraph::new(vec![
            self.row("Native Name", &details.native_name),
            self.row("Population", &country.population_display()),
            self.row("Region", &country.region),
            self.row("Sub Region", &details.subregion),
            self.row("Capital", country.primary_capital()),
        ])
        .wrap(Wrap { trim: true })
        .render(left, buf);

        Paragraph::new(vec![
            self.row("Top Level Domain", &details.top_level_domains),
            self.row("Currencies", &details.currency),
            self.row("Languages", &details.languages),
        ])
        .wrap(Wrap { trim: true })
        .render(right, buf);

        let mut spans = vec![Span::styled("Border Countries: ", styles::label(p))];
        if details.borders.is_empty() {
            spans.push(Span::styled(NO_BORDERS, styles::text(p)));
        } else {
            for code in &details.borders {
                spans.push(Span::styled(format!("[{code}]"), styles::accent(p)));
                spans.push(Span::raw(" "));
            }
        }
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .render(borders, buf);
    }

    fn render_notice(&self, line: Line<'_>, area: Rect, buf: &mut Buffer) {
        let y = area.y + area.height / 2;
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(Rect::new(area.x, y, area.width, area.bottom() - y), buf);
    }
}

impl Widget for CountryDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::element_block(self.palette, false).title(" ← Back [Esc] ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let p = self.palette;
        match self.model {
            DetailReadModel::Idle => {}
            DetailReadModel::Loading { .. } => self.render_notice(
                Line::from(vec![
                    Span::styled(
                        format!("{} ", styles::spinner_frame(self.loading_frame)),
                        styles::accent(p),
                    ),
                    Span::styled("Loading...", styles::text(p)),
                ]),
                inner,
                buf,
            ),
            DetailReadModel::NotFound { name } => self.render_notice(
                Line::from(Span::styled(
                    format!("No country matches \"{name}\"."),
                    styles::text_muted(p),
                )),
                inner,
                buf,
            ),
            DetailReadModel::Error { name, message } => self.render_notice(
                Line::from(vec![
                    Span::styled(format!("Failed to load {name}: "), styles::error(p)),
                    Span::styled(message.to_string(), styles::text_secondary(p)),
                ]),
                inner,
                buf,
            ),
            DetailReadModel::Ready(country) => self.render_country(country, inner, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use atlas_core::CountryDetails;

    fn belgium() -> Country {
        let mut country = Country::new("Belgium", "Europe")
            .with_capitals(["Brussels"])
            .with_population(11_555_997);
        country.details = CountryDetails {
            native_name: "België".to_string(),
            subregion: "Western Europe".to_string(),
            top_level_domains: ".be".to_string(),
            currency: "Euro".to_string(),
            languages: "German, French, Dutch".to_string(),
            borders: vec!["FRA".to_string(), "DEU".to_string()],
        };
        country
    }

    #[test]
    fn test_renders_detail_fields() {
        let country = belgium();
        let mut term = TestTerminal::with_size(100, 24);
        term.render_widget(
            CountryDetail::new(DetailReadModel::Ready(&country), &DARK),
            term.area(),
        );

        assert!(term.buffer_contains("Belgium"));
        assert!(term.buffer_contains("Population: 11,555,997"));
        assert!(term.buffer_contains("Sub Region: Western Europe"));
        assert!(term.buffer_contains("Capital: Brussels"));
        assert!(term.buffer_contains("Top Level Domain: .be"));
        assert!(term.buffer_contains("Currencies: Euro"));
        assert!(term.buffer_contains("[FRA]"));
        assert!(term.buffer_contains("[DEU]"));
    }

    #[test]
    fn test_no_borders_renders_none() {
        let country = Country::new("Iceland", "Europe");
        let mut term = TestTerminal::with_size(100, 24);
        term.render_widget(
            CountryDetail::new(DetailReadModel::Ready(&country), &DARK),
            term.area(),
        );

        assert!(term.buffer_contains("Border Countries: None"));
        assert!(term.buffer_contains("Capital: N/A"));
        assert!(term.buffer_contains("Native Name: N/A"));
    }

    #[test]
    fn test_loading_state() {
        let mut term = TestTerminal::new();
        term.render_widget(
            CountryDetail::new(DetailReadModel::Loading { name: "Chad" }, &DARK),
            term.area(),
        );
        assert!(term.buffer_contains("Loading..."));
    }

    #[test]
    fn test_not_found_state() {
        let mut term = TestTerminal::new();
        term.render_widget(
            CountryDetail::new(DetailReadModel::NotFound { name: "Atlantis" }, &DARK),
            term.area(),
        );
        assert!(term.buffer_contains("No country matches \"Atlantis\"."));
    }

    #[test]
    fn test_error_state() {
        let mut term = TestTerminal::new();
        term.render_widget(
            CountryDetail::new(
                DetailReadModel::Error {
                    name: "Chad",
                    message: "timed out",
                },
                &DARK,
            ),
            term.area(),
        );
        assert!(term.buffer_contains("Failed to load Chad: timed out"));
    }
}
