use crate::domain::model::{Catalog, Ingredient};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{NutriError, Result};
use std::path::PathBuf;

/// Catalog source backed by a CSV file: one header row, then exactly four
/// columns per row — ingredient name and three boolean category flags.
/// Column meaning is positional; header names are ignored.
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CsvCatalog {
    async fn load(&self) -> Result<Catalog> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|e| NutriError::CatalogLoad {
                message: format!("{}: {}", self.path.display(), e),
            })?;

        let catalog = parse_catalog(&raw)?;
        tracing::debug!(
            "Parsed {} ingredients from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }
}

pub fn parse_catalog(raw: &[u8]) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw);

    let mut ingredients = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // Rows are 1-based for messages, plus one for the header.
        let line = row + 2;

        if record.len() != 4 {
            return Err(NutriError::CatalogLoad {
                message: format!(
                    "row {}: expected 4 columns (name, carb, protein, veg), found {}",
                    line,
                    record.len()
                ),
            });
        }

        ingredients.push(Ingredient {
            name: record[0].to_string(),
            is_carb: parse_flag(&record[1], line, "carb")?,
            is_protein: parse_flag(&record[2], line, "protein")?,
            is_veg: parse_flag(&record[3], line, "veg")?,
        });
    }

    if ingredients.is_empty() {
        return Err(NutriError::CatalogLoad {
            message: "catalog has no ingredient rows".to_string(),
        });
    }

    Catalog::new(ingredients)
}

fn parse_flag(cell: &str, line: usize, column: &str) -> Result<bool> {
    match cell.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(NutriError::CatalogLoad {
            message: format!("row {}: invalid {} flag '{}'", line, column, other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;

    #[test]
    fn test_parse_catalog_reads_positional_columns() {
        let csv = b"IngredientName,Is_Carb,Is_Protein,Is_Veg\n\
                    Rice,1,0,0\n\
                    Beans,1,1,0\n\
                    Spinach,0,0,1\n";

        let catalog = parse_catalog(csv).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("Rice").unwrap().is_carb);
        assert!(catalog.get("Beans").unwrap().is_protein);
        assert_eq!(catalog.in_category(Category::VegetableFruit).len(), 1);
    }

    #[test]
    fn test_parse_catalog_accepts_word_booleans() {
        let csv = b"name,carb,protein,veg\n\
                    Eggs,no,YES,false\n";

        let catalog = parse_catalog(csv).unwrap();
        let eggs = catalog.get("Eggs").unwrap();
        assert!(!eggs.is_carb);
        assert!(eggs.is_protein);
        assert!(!eggs.is_veg);
    }

    #[test]
    fn test_parse_catalog_rejects_bad_flags() {
        let csv = b"name,carb,protein,veg\n\
                    Rice,maybe,0,0\n";

        let err = parse_catalog(csv).unwrap_err();
        assert!(matches!(err, NutriError::CatalogLoad { .. }));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_parse_catalog_rejects_wrong_column_count() {
        let csv = b"name,carb,protein,veg\n\
                    Rice,1,0\n";

        let err = parse_catalog(csv).unwrap_err();
        assert!(matches!(err, NutriError::CatalogLoad { .. }));
        assert!(err.to_string().contains("expected 4 columns"));
    }

    #[test]
    fn test_parse_catalog_rejects_duplicates_and_empty_input() {
        let duplicated = b"name,carb,protein,veg\n\
                           Rice,1,0,0\n\
                           rice,1,0,0\n";
        assert!(matches!(
            parse_catalog(duplicated),
            Err(NutriError::CatalogLoad { .. })
        ));

        let header_only = b"name,carb,protein,veg\n";
        assert!(matches!(
            parse_catalog(header_only),
            Err(NutriError::CatalogLoad { .. })
        ));
    }

    #[test]
    fn test_load_reports_a_missing_file() {
        let source = CsvCatalog::new("definitely/not/here.csv");
        let result = tokio_test::block_on(source.load());
        assert!(matches!(result, Err(NutriError::CatalogLoad { .. })));
    }
}
