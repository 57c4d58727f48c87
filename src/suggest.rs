//! Autocomplete over catalog names

use crate::catalog::Catalog;

/// Most names returned for one prefix query.
pub const MAX_SUGGESTIONS: usize = 5;

/// Distinct catalog names containing `query` (ignoring case), in catalog
/// order, capped at [`MAX_SUGGESTIONS`].
pub fn suggest(query: &str, catalog: &Catalog) -> Vec<String> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut names: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);
    for record in catalog.iter() {
        if names.len() == MAX_SUGGESTIONS {
            break;
        }
        if record.drink_name.to_lowercase().contains(&query)
            && !names.iter().any(|n| n == &record.drink_name)
        {
            names.push(record.drink_name.clone());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::drink;

    fn catalog(names: &[&str]) -> Catalog {
        Catalog::new(names.iter().map(|n| drink(n, 100.0)).collect())
    }

    #[test]
    fn test_dedup_preserves_first_seen_and_caps_at_five() {
        let cat = catalog(&[
            "Latte",
            "Iced Latte",
            "Latte",
            "Mocha Latte",
            "Oat Latte",
            "Soy Latte",
            "Chai Latte",
        ]);

        assert_eq!(
            suggest("latte", &cat),
            vec!["Latte", "Iced Latte", "Mocha Latte", "Oat Latte", "Soy Latte"]
        );
    }

    #[test]
    fn test_substring_anywhere_and_case_insensitive() {
        let cat = catalog(&["Cold Brew", "Nitro Cold Brew", "Espresso"]);
        assert_eq!(suggest("BREW", &cat), vec!["Cold Brew", "Nitro Cold Brew"]);
    }

    #[test]
    fn test_empty_query_and_no_hits() {
        let cat = catalog(&["Latte"]);
        assert!(suggest("", &cat).is_empty());
        assert!(suggest("matcha", &cat).is_empty());
    }

    #[test]
    fn test_duplicates_differing_in_case_are_distinct_strings() {
        let cat = catalog(&["Latte", "LATTE"]);
        assert_eq!(suggest("lat", &cat), vec!["Latte", "LATTE"]);
    }
}
