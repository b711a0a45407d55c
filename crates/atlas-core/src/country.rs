//! Country records: the raw provider payload and its normalized form
//!
//! The remote provider returns loosely-typed JSON where almost every field may
//! be missing. [`RawCountry`] mirrors that payload with an explicit `Option`
//! per consumed field. [`Country`] is produced from it exactly once, at the
//! parse boundary, and carries the `"N/A"` display sentinels so that views
//! never have to reason about absent data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sentinel shown wherever the provider omitted a value
pub const NOT_AVAILABLE: &str = "N/A";

/// Region labels offered by the region filter, in display order
pub const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

// ─────────────────────────────────────────────────────────────────────────────
// Raw Payload
// ─────────────────────────────────────────────────────────────────────────────

/// A country record exactly as the provider returns it.
///
/// Unknown fields are ignored. Map-valued fields keep provider order so that
/// "first currency" and "first native name" are stable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCountry {
    pub name: Option<RawName>,
    pub capital: Option<Vec<String>>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub population: Option<u64>,
    pub flags: Option<RawFlags>,
    pub tld: Option<Vec<String>>,
    pub currencies: Option<IndexMap<String, RawCurrency>>,
    pub languages: Option<IndexMap<String, String>>,
    pub borders: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawName {
    pub common: Option<String>,
    pub official: Option<String>,
    #[serde(rename = "nativeName")]
    pub native_name: Option<IndexMap<String, RawNativeName>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawNativeName {
    pub official: Option<String>,
    pub common: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCurrency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawFlags {
    pub png: Option<String>,
    pub svg: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Normalized Record
// ─────────────────────────────────────────────────────────────────────────────

/// Flag image URIs (`"N/A"` when the provider omitted one)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flags {
    pub png: String,
    pub svg: String,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            png: NOT_AVAILABLE.to_string(),
            svg: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Fields only shown on the detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryDetails {
    /// First entry of the language-keyed native name mapping
    pub native_name: String,
    pub subregion: String,
    /// Top level domains joined with `", "`
    pub top_level_domains: String,
    /// Name of the first listed currency
    pub currency: String,
    /// All language names joined with `", "`
    pub languages: String,
    /// Border country codes; empty means the country has no land borders
    pub borders: Vec<String>,
}

impl Default for CountryDetails {
    fn default() -> Self {
        Self {
            native_name: NOT_AVAILABLE.to_string(),
            subregion: NOT_AVAILABLE.to_string(),
            top_level_domains: NOT_AVAILABLE.to_string(),
            currency: NOT_AVAILABLE.to_string(),
            languages: NOT_AVAILABLE.to_string(),
            borders: Vec::new(),
        }
    }
}

/// A normalized country record.
///
/// `name` is the display and search key and doubles as the detail route
/// parameter. `capitals` is empty when the provider sent none; it is never
/// filled with a sentinel so that text search cannot match `"N/A"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: String,
    pub official_name: String,
    pub capitals: Vec<String>,
    pub region: String,
    pub population: Option<u64>,
    pub flags: Flags,
    pub details: CountryDetails,
}

impl Country {
    /// Create a record with only a name and region; everything else absent.
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            official_name: NOT_AVAILABLE.to_string(),
            capitals: Vec::new(),
            region: region.into(),
            population: None,
            flags: Flags::default(),
            details: CountryDetails::default(),
        }
    }

    pub fn with_capitals<I, S>(mut self, capitals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capitals = capitals.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    /// All capitals joined with `", "`, or `"N/A"`
    pub fn capital_display(&self) -> String {
        if self.capitals.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.capitals.join(", ")
        }
    }

    /// The first capital, or `"N/A"`
    pub fn primary_capital(&self) -> &str {
        self.capitals
            .first()
            .map(String::as_str)
            .unwrap_or(NOT_AVAILABLE)
    }

    /// Population with `,` thousands separators, or `"N/A"` when unknown
    pub fn population_display(&self) -> String {
        self.population
            .map(group_thousands)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Preferred flag image: SVG, falling back to PNG
    pub fn flag_uri(&self) -> &str {
        if self.flags.svg != NOT_AVAILABLE {
            &self.flags.svg
        } else {
            &self.flags.png
        }
    }
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        let RawCountry {
            name,
            capital,
            region,
            subregion,
            population,
            flags,
            tld,
            currencies,
            languages,
            borders,
        } = raw;

        let name = name.unwrap_or_default();
        let native_name = name
            .native_name
            .and_then(|names| names.into_values().next())
            .and_then(|native| native.common);

        let details = CountryDetails {
            native_name: or_sentinel(native_name),
            subregion: or_sentinel(subregion),
            top_level_domains: or_sentinel(tld.map(|t| t.join(", "))),
            currency: or_sentinel(
                currencies.and_then(|c| c.into_values().next().and_then(|cur| cur.name)),
            ),
            languages: or_sentinel(
                languages.map(|langs| langs.into_values().collect::<Vec<_>>().join(", ")),
            ),
            borders: borders.unwrap_or_default(),
        };

        let flags = flags.unwrap_or_default();

        Self {
            name: name.common.unwrap_or_default(),
            official_name: or_sentinel(name.official),
            capitals: capital.unwrap_or_default(),
            region: or_sentinel(region),
            population,
            flags: Flags {
                png: or_sentinel(flags.png),
                svg: or_sentinel(flags.svg),
            },
            details,
        }
    }
}

fn or_sentinel(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRANCE_JSON: &str = r#"{
        "name": {
            "common": "France",
            "official": "French Republic",
            "nativeName": { "fra": { "official": "République française", "common": "France" } }
        },
        "tld": [".fr"],
        "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
        "capital": ["Paris"],
        "region": "Europe",
        "subregion": "Western Europe",
        "languages": { "fra": "French" },
        "borders": ["AND", "BEL", "DEU"],
        "population": 67391582,
        "flags": { "png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg" }
    }"#;

    #[test]
    fn test_full_record_normalizes() {
        let raw: RawCountry = serde_json::from_str(FRANCE_JSON).unwrap();
        let country = Country::from(raw);

        assert_eq!(country.name, "France");
        assert_eq!(country.official_name, "French Republic");
        assert_eq!(country.capitals, vec!["Paris"]);
        assert_eq!(country.region, "Europe");
        assert_eq!(country.population, Some(67_391_582));
        assert_eq!(country.details.native_name, "France");
        assert_eq!(country.details.subregion, "Western Europe");
        assert_eq!(country.details.top_level_domains, ".fr");
        assert_eq!(country.details.currency, "Euro");
        assert_eq!(country.details.languages, "French");
        assert_eq!(country.details.borders, vec!["AND", "BEL", "DEU"]);
        assert_eq!(country.flag_uri(), "https://flagcdn.com/fr.svg");
    }

    #[test]
    fn test_missing_fields_become_sentinels() {
        let raw: RawCountry = serde_json::from_str(r#"{"name":{"common":"Antarctica"}}"#).unwrap();
        let country = Country::from(raw);

        assert_eq!(country.name, "Antarctica");
        assert!(country.capitals.is_empty());
        assert_eq!(country.capital_display(), NOT_AVAILABLE);
        assert_eq!(country.primary_capital(), NOT_AVAILABLE);
        assert_eq!(country.region, NOT_AVAILABLE);
        assert_eq!(country.population, None);
        assert_eq!(country.details, CountryDetails::default());
        assert_eq!(country.flag_uri(), NOT_AVAILABLE);
    }

    #[test]
    fn test_null_fields_are_treated_as_absent() {
        let raw: RawCountry =
            serde_json::from_str(r#"{"name":{"common":"Nowhere"},"capital":null,"tld":null}"#)
                .unwrap();
        let country = Country::from(raw);
        assert!(country.capitals.is_empty());
        assert_eq!(country.details.top_level_domains, NOT_AVAILABLE);
    }

    #[test]
    fn test_first_currency_and_native_name_follow_provider_order() {
        let json = r#"{
            "name": {
                "common": "Switzerland",
                "nativeName": {
                    "fra": { "common": "Suisse" },
                    "gsw": { "common": "Schweiz" }
                }
            },
            "currencies": { "CHF": { "name": "Swiss franc" }, "EUR": { "name": "Euro" } },
            "languages": { "fra": "French", "gsw": "Swiss German", "ita": "Italian" },
            "tld": [".ch", ".swiss"]
        }"#;
        let country = Country::from(serde_json::from_str::<RawCountry>(json).unwrap());

        assert_eq!(country.details.native_name, "Suisse");
        assert_eq!(country.details.currency, "Swiss franc");
        assert_eq!(country.details.languages, "French, Swiss German, Italian");
        assert_eq!(country.details.top_level_domains, ".ch, .swiss");
    }

    #[test]
    fn test_flag_falls_back_to_png() {
        let json = r#"{"name":{"common":"X"},"flags":{"png":"x.png"}}"#;
        let country = Country::from(serde_json::from_str::<RawCountry>(json).unwrap());
        assert_eq!(country.flag_uri(), "x.png");
    }

    #[test]
    fn test_capital_display_joins_all_capitals() {
        let country = Country::new("South Africa", "Africa").with_capitals([
            "Pretoria",
            "Bloemfontein",
            "Cape Town",
        ]);
        assert_eq!(
            country.capital_display(),
            "Pretoria, Bloemfontein, Cape Town"
        );
        assert_eq!(country.primary_capital(), "Pretoria");
    }

    #[test]
    fn test_population_display_groups_thousands() {
        let c = |n| Country::new("X", "Asia").with_population(n);
        assert_eq!(c(0).population_display(), "0");
        assert_eq!(c(999).population_display(), "999");
        assert_eq!(c(1_000).population_display(), "1,000");
        assert_eq!(c(67_391_582).population_display(), "67,391,582");
        assert_eq!(c(1_402_112_000).population_display(), "1,402,112,000");
    }

    #[test]
    fn test_unknown_population_displays_sentinel() {
        let raw: RawCountry = serde_json::from_str(r#"{"name":{"common":"Nowhere"}}"#).unwrap();
        let country = Country::from(raw);
        assert_eq!(country.population_display(), NOT_AVAILABLE);

        let known_zero = Country::new("Nowhere", "Oceania").with_population(0);
        assert_eq!(known_zero.population_display(), "0");
    }

    #[test]
    fn test_regions_are_fixed() {
        assert_eq!(REGIONS.len(), 5);
        assert!(REGIONS.contains(&"Europe"));
    }
}
