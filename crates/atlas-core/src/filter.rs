//! Client-side catalog filtering
//!
//! Two independent predicates are ANDed: region equality and a free-text
//! substring match against the name or any capital. Both compare lowercase
//! forms only; there is no accent or locale folding. Region is evaluated
//! first because it usually discards the most records.
//!
//! Everything here is pure: the visible set is recomputed from the full
//! catalog on every input change, never patched.

use crate::country::Country;
use crate::query::QueryState;

/// Filter `catalog` by `region` and `term`, preserving catalog order.
///
/// Empty inputs disable their predicate, so `apply(c, "", "")` is `c`.
pub fn apply<'a>(catalog: &'a [Country], region: &str, term: &str) -> Vec<&'a Country> {
    let predicate = Predicate::new(region, term);
    catalog.iter().filter(|c| predicate.matches(c)).collect()
}

/// Like [`apply`] but returns catalog indices instead of references.
pub fn matching_indices(catalog: &[Country], query: &QueryState) -> Vec<usize> {
    let predicate = Predicate::new(&query.selected_region, &query.search_term);
    catalog
        .iter()
        .enumerate()
        .filter(|(_, c)| predicate.matches(c))
        .map(|(i, _)| i)
        .collect()
}

/// Case-insensitive region equality. An empty region matches everything.
pub fn matches_region(country: &Country, region: &str) -> bool {
    region.is_empty() || country.region.to_lowercase() == region.to_lowercase()
}

/// Case-insensitive substring match on the name or any capital.
/// An empty term matches everything.
pub fn matches_term(country: &Country, term: &str) -> bool {
    term.is_empty() || term_matches_lowered(country, &term.to_lowercase())
}

fn term_matches_lowered(country: &Country, term: &str) -> bool {
    country.name.to_lowercase().contains(term)
        || country
            .capitals
            .iter()
            .any(|capital| capital.to_lowercase().contains(term))
}

/// Lowercased inputs, computed once per pass
struct Predicate {
    region: String,
    term: String,
}

impl Predicate {
    fn new(region: &str, term: &str) -> Self {
        Self {
            region: region.to_lowercase(),
            term: term.to_lowercase(),
        }
    }

    fn matches(&self, country: &Country) -> bool {
        (self.region.is_empty() || country.region.to_lowercase() == self.region)
            && (self.term.is_empty() || term_matches_lowered(country, &self.term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Country> {
        vec![
            Country::new("France", "Europe").with_capitals(["Paris"]),
            Country::new("Germany", "Europe").with_capitals(["Berlin"]),
            Country::new("Japan", "Asia").with_capitals(["Tokyo"]),
        ]
    }

    fn names(result: &[&Country]) -> Vec<String> {
        result.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_empty_inputs_return_catalog_unchanged() {
        let c = catalog();
        let result = apply(&c, "", "");
        assert_eq!(result.len(), c.len());
        assert!(result.iter().zip(c.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_region_only() {
        let c = catalog();
        assert_eq!(names(&apply(&c, "Europe", "")), vec!["France", "Germany"]);
    }

    #[test]
    fn test_term_matches_capital() {
        let c = catalog();
        assert_eq!(names(&apply(&c, "", "ber")), vec!["Germany"]);
    }

    #[test]
    fn test_region_excludes_before_term() {
        let c = catalog();
        assert!(apply(&c, "Asia", "fra").is_empty());
    }

    #[test]
    fn test_region_is_case_insensitive() {
        let c = catalog();
        assert_eq!(apply(&c, "europe", ""), apply(&c, "EUROPE", ""));
        assert_eq!(apply(&c, "europe", "").len(), 2);
    }

    #[test]
    fn test_term_is_case_insensitive() {
        let c = catalog();
        assert_eq!(names(&apply(&c, "", "TOK")), vec!["Japan"]);
        assert_eq!(names(&apply(&c, "", "jApAn")), vec!["Japan"]);
    }

    #[test]
    fn test_missing_capital_never_matches_capital_text() {
        let c = vec![
            Country::new("Antarctica", "Antarctic"),
            Country::new("Germany", "Europe").with_capitals(["Berlin"]),
        ];
        assert_eq!(names(&apply(&c, "", "ber")), vec!["Germany"]);
        // The display sentinel is not searchable
        assert!(apply(&c, "", "n/a").is_empty());
        // But the name still matches
        assert_eq!(names(&apply(&c, "", "arct")), vec!["Antarctica"]);
    }

    #[test]
    fn test_results_are_subset_and_satisfy_predicates() {
        let c = catalog();
        for region in ["", "Europe", "asia", "Oceania"] {
            for term in ["", "a", "ber", "o", "zzz"] {
                let result = apply(&c, region, term);
                for country in &result {
                    assert!(c.contains(country));
                    assert!(matches_region(country, region));
                    assert!(matches_term(country, term));
                }
                let expected = c
                    .iter()
                    .filter(|x| matches_region(x, region) && matches_term(x, term))
                    .count();
                assert_eq!(result.len(), expected);
            }
        }
    }

    #[test]
    fn test_order_of_predicates_does_not_matter() {
        let c = catalog();
        let region_first: Vec<&Country> = apply(&c, "Europe", "")
            .into_iter()
            .filter(|x| matches_term(x, "an"))
            .collect();
        let term_first: Vec<&Country> = apply(&c, "", "an")
            .into_iter()
            .filter(|x| matches_region(x, "Europe"))
            .collect();
        assert_eq!(region_first, term_first);
        assert_eq!(apply(&c, "Europe", "an"), region_first);
    }

    #[test]
    fn test_matching_indices_follow_query() {
        let c = catalog();
        let query = QueryState::new("o", "");
        assert_eq!(matching_indices(&c, &query), vec![2]);

        let query = QueryState::new("", "Europe");
        assert_eq!(matching_indices(&c, &query), vec![0, 1]);

        assert_eq!(
            matching_indices(&c, &QueryState::default()),
            vec![0, 1, 2]
        );
    }
}
