//! Drink catalog loaded from CSV
//!
//! The source file uses display headers (`Drink name`, `Size (oz)`, ...).
//! Rows are read through [`SourceRow`] and converted to [`DrinkRecord`],
//! which carries the canonical field names used everywhere else.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Headers the source must provide, matched exactly.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Drink name",
    "Type",
    "Milk Type",
    "Size (oz)",
    "Stay/Take away",
    "Calories",
    "Protein",
    "Sugar",
];

/// One drink variant with its nutritional and serving attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkRecord {
    pub drink_name: String,
    pub drink_type: String,
    pub milk_type: String,
    /// Fluid ounces
    pub size: f64,
    pub container: String,
    pub calories: f64,
    pub protein: f64,
    pub sugar: f64,
}

/// Row shape as it appears in the CSV.
#[derive(Debug, Deserialize)]
struct SourceRow {
    #[serde(rename = "Drink name")]
    drink_name: String,
    #[serde(rename = "Type")]
    drink_type: String,
    #[serde(rename = "Milk Type")]
    milk_type: String,
    #[serde(rename = "Size (oz)")]
    size: f64,
    #[serde(rename = "Stay/Take away")]
    container: String,
    #[serde(rename = "Calories")]
    calories: f64,
    #[serde(rename = "Protein")]
    protein: f64,
    #[serde(rename = "Sugar")]
    sugar: f64,
}

impl SourceRow {
    fn into_record(self, row: usize) -> Result<DrinkRecord, CatalogError> {
        let text_fields = [
            ("Drink name", &self.drink_name),
            ("Type", &self.drink_type),
            ("Milk Type", &self.milk_type),
            ("Stay/Take away", &self.container),
        ];
        if let Some((column, _)) = text_fields.iter().find(|(_, v)| v.is_empty()) {
            return Err(CatalogError::EmptyField {
                row,
                column: column.to_string(),
            });
        }

        let numeric_fields = [
            ("Size (oz)", self.size),
            ("Calories", self.calories),
            ("Protein", self.protein),
            ("Sugar", self.sugar),
        ];
        if let Some((column, _)) = numeric_fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CatalogError::NotFinite {
                row,
                column: column.to_string(),
            });
        }

        Ok(DrinkRecord {
            drink_name: self.drink_name,
            drink_type: self.drink_type,
            milk_type: self.milk_type,
            size: self.size,
            container: self.container,
            calories: self.calories,
            protein: self.protein,
            sugar: self.sugar,
        })
    }
}

/// Ordered, read-only set of drink records for one load cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    records: Vec<DrinkRecord>,
}

impl Catalog {
    pub fn new(records: Vec<DrinkRecord>) -> Self {
        Self { records }
    }

    /// Load a catalog from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parse CSV from any reader. The header row is checked against
    /// [`REQUIRED_COLUMNS`] before any data row is read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Fields)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let found: Vec<String> = headers.iter().map(str::to_string).collect();
        tracing::debug!(columns = ?found, "Loaded catalog columns");

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !found.iter().any(|h| h == *col))
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            tracing::warn!(?missing, available = ?found, "Catalog is missing required columns");
            return Err(CatalogError::MissingColumns { missing, found });
        }

        let mut records = Vec::new();
        for (idx, row) in reader.deserialize::<SourceRow>().enumerate() {
            records.push(row?.into_record(idx + 1)?);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[DrinkRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrinkRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose name equals `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&DrinkRecord> {
        let wanted = name.to_lowercase();
        self.records
            .iter()
            .find(|r| r.drink_name.to_lowercase() == wanted)
    }
}

#[cfg(test)]
pub(crate) fn drink(name: &str, calories: f64) -> DrinkRecord {
    DrinkRecord {
        drink_name: name.to_string(),
        drink_type: "Coffee".to_string(),
        milk_type: "Whole".to_string(),
        size: 12.0,
        container: "Stay".to_string(),
        calories,
        protein: 1.0,
        sugar: 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Drink name,Type,Milk Type,Size (oz),Stay/Take away,Calories,Protein,Sugar";

    fn csv_with(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn test_load_renames_columns_in_row_order() {
        let src = csv_with(&[
            "Latte,Espresso,Whole,12,Stay,190,12,17",
            "Cold Brew,Brewed,None,16,Take away,5,0.5,0",
        ]);
        let catalog = Catalog::from_reader(src.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        let latte = &catalog.records()[0];
        assert_eq!(latte.drink_name, "Latte");
        assert_eq!(latte.drink_type, "Espresso");
        assert_eq!(latte.milk_type, "Whole");
        assert_eq!(latte.size, 12.0);
        assert_eq!(latte.container, "Stay");
        assert_eq!(latte.calories, 190.0);
        assert_eq!(latte.protein, 12.0);
        assert_eq!(latte.sugar, 17.0);
        assert_eq!(catalog.records()[1].drink_name, "Cold Brew");
    }

    #[test]
    fn test_missing_any_required_column_is_schema_error() {
        for skip in 0..REQUIRED_COLUMNS.len() {
            let header: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, c)| *c)
                .collect();
            let src = format!("{}\nLatte,Espresso,Whole,12,Stay,190,12", header.join(","));

            match Catalog::from_reader(src.as_bytes()) {
                Err(CatalogError::MissingColumns { missing, found }) => {
                    assert_eq!(missing, vec![REQUIRED_COLUMNS[skip].to_string()]);
                    assert_eq!(found.len(), 7);
                }
                other => panic!(
                    "expected schema error without {}, got {:?}",
                    REQUIRED_COLUMNS[skip], other
                ),
            }
        }
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        let src = "drink name,Type,Milk Type,Size (oz),Stay/Take away,Calories,Protein,Sugar\n";
        assert!(matches!(
            Catalog::from_reader(src.as_bytes()),
            Err(CatalogError::MissingColumns { .. })
        ));
    }

    #[test]
    fn test_extra_and_reordered_columns_are_accepted() {
        let src = "Sugar,Notes,Calories,Protein,Drink name,Type,Milk Type,Size (oz),Stay/Take away\n\
                   3,seasonal,80,4,Cortado,Espresso,Oat,4.5,Stay\n";
        let catalog = Catalog::from_reader(src.as_bytes()).unwrap();
        assert_eq!(catalog.records()[0].drink_name, "Cortado");
        assert_eq!(catalog.records()[0].calories, 80.0);
        assert_eq!(catalog.records()[0].size, 4.5);
    }

    #[test]
    fn test_non_numeric_calories_rejects_whole_catalog() {
        let src = csv_with(&[
            "Latte,Espresso,Whole,12,Stay,190,12,17",
            "Mocha,Espresso,Whole,12,Stay,lots,10,30",
        ]);
        assert!(matches!(
            Catalog::from_reader(src.as_bytes()),
            Err(CatalogError::Csv(_))
        ));
    }

    #[test]
    fn test_empty_text_cell_rejects_whole_catalog() {
        let src = csv_with(&["Latte,Espresso,,12,Stay,190,12,17"]);
        match Catalog::from_reader(src.as_bytes()) {
            Err(CatalogError::EmptyField { row, column }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "Milk Type");
            }
            other => panic!("expected empty field error, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_calories_is_rejected() {
        let src = csv_with(&["Latte,Espresso,Whole,12,Stay,NaN,12,17"]);
        match Catalog::from_reader(src.as_bytes()) {
            Err(CatalogError::NotFinite { row, column }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "Calories");
            }
            other => panic!("expected non-finite error, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_is_rejected() {
        let src = csv_with(&["Latte,Espresso,Whole,12"]);
        assert!(Catalog::from_reader(src.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_duplicates_are_retained_and_lookup_takes_first() {
        let src = csv_with(&[
            "Latte,Espresso,Whole,12,Stay,190,12,17",
            "Latte,Espresso,Oat,12,Stay,150,3,10",
        ]);
        let catalog = Catalog::from_reader(src.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = catalog.find_by_name("LATTE").unwrap();
        assert_eq!(first.milk_type, "Whole");
    }

    #[test]
    fn test_cells_are_trimmed_before_parsing() {
        let src = csv_with(&["Latte , Espresso , Whole , 12 , Stay , 190 , 12 , 17"]);
        let catalog = Catalog::from_reader(src.as_bytes()).unwrap();
        assert_eq!(catalog.records()[0].drink_name, "Latte");
        assert_eq!(catalog.records()[0].calories, 190.0);
    }
}
