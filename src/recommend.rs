//! Lower-calorie alternatives for a matched drink

use serde::Serialize;

use crate::catalog::{Catalog, DrinkRecord};

/// Most alternatives returned for one drink.
pub const MAX_ALTERNATIVES: usize = 3;

/// The matched drink and its lighter options, lightest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub original: DrinkRecord,
    pub alternatives: Vec<DrinkRecord>,
}

/// Look up `matched_name` (ignoring case) and collect up to
/// [`MAX_ALTERNATIVES`] records with strictly fewer calories.
///
/// When the name appears more than once, the first record in catalog order
/// is the original. Records with equal calories keep their catalog order.
/// Returns `None` only when the name is absent; a drink with nothing
/// lighter yields an empty `alternatives` list.
pub fn recommend(matched_name: &str, catalog: &Catalog) -> Option<Recommendation> {
    let original = catalog.find_by_name(matched_name)?;

    let mut lighter: Vec<&DrinkRecord> = catalog
        .iter()
        .filter(|r| r.calories < original.calories)
        .collect();
    lighter.sort_by(|a, b| a.calories.total_cmp(&b.calories));

    Some(Recommendation {
        original: original.clone(),
        alternatives: lighter
            .into_iter()
            .take(MAX_ALTERNATIVES)
            .cloned()
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::drink;

    fn names(records: &[DrinkRecord]) -> Vec<&str> {
        records.iter().map(|r| r.drink_name.as_str()).collect()
    }

    #[test]
    fn test_alternatives_sorted_ascending_and_capped() {
        let catalog = Catalog::new(vec![
            drink("A", 150.0),
            drink("B", 90.0),
            drink("C", 200.0),
            drink("D", 50.0),
            drink("E", 120.0),
        ]);

        let rec = recommend("C", &catalog).unwrap();
        assert_eq!(rec.original.drink_name, "C");
        assert_eq!(rec.original.calories, 200.0);
        assert_eq!(names(&rec.alternatives), vec!["D", "B", "E"]);
    }

    #[test]
    fn test_exactly_three_lighter() {
        let catalog = Catalog::new(vec![
            drink("A", 150.0),
            drink("B", 90.0),
            drink("C", 200.0),
            drink("D", 50.0),
        ]);

        let rec = recommend("C", &catalog).unwrap();
        assert_eq!(names(&rec.alternatives), vec!["D", "B", "A"]);
    }

    #[test]
    fn test_lightest_drink_has_empty_alternatives() {
        let catalog = Catalog::new(vec![drink("A", 150.0), drink("D", 50.0)]);

        let rec = recommend("D", &catalog).unwrap();
        assert_eq!(rec.original.drink_name, "D");
        assert!(rec.alternatives.is_empty());
    }

    #[test]
    fn test_unknown_name_is_none() {
        let catalog = Catalog::new(vec![drink("A", 150.0)]);
        assert!(recommend("Z", &catalog).is_none());
        assert!(recommend("A", &Catalog::default()).is_none());
    }

    #[test]
    fn test_name_lookup_ignores_case() {
        let catalog = Catalog::new(vec![drink("Oat Latte", 150.0), drink("Espresso", 5.0)]);
        let rec = recommend("oat latte", &catalog).unwrap();
        assert_eq!(rec.original.drink_name, "Oat Latte");
        assert_eq!(names(&rec.alternatives), vec!["Espresso"]);
    }

    #[test]
    fn test_first_duplicate_is_original_and_others_can_be_alternatives() {
        let catalog = Catalog::new(vec![
            drink("Latte", 190.0),
            drink("Latte", 150.0),
            drink("Latte", 250.0),
        ]);

        let rec = recommend("Latte", &catalog).unwrap();
        assert_eq!(rec.original.calories, 190.0);
        assert_eq!(rec.alternatives.len(), 1);
        assert_eq!(rec.alternatives[0].calories, 150.0);
    }

    #[test]
    fn test_equal_calories_excluded_and_ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            drink("Mocha", 100.0),
            drink("Twin", 100.0),
            drink("First", 40.0),
            drink("Second", 40.0),
        ]);

        let rec = recommend("Mocha", &catalog).unwrap();
        assert_eq!(names(&rec.alternatives), vec!["First", "Second"]);
    }
}
