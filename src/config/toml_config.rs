use crate::utils::error::{NutriError, Result};
use serde::{Deserialize, Serialize};

/// Optional TOML settings file. Every section and field is optional; CLI
/// flags take precedence, file values beat the built-in defaults.
///
/// ```toml
/// [catalog]
/// path = "data/ingredients.csv"
///
/// [model]
/// path = "data/balance_model.json"
///
/// [sampling]
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub catalog: Option<CatalogSection>,
    pub model: Option<ModelSection>,
    pub sampling: Option<SamplingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingSection {
    pub seed: Option<u64>,
}

impl FileConfig {
    pub async fn load(path: &str) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            NutriError::InvalidConfigValueError {
                field: "config".to_string(),
                value: path.to_string(),
                reason: format!("Settings file could not be read: {}", e),
            }
        })?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_settings_file_parses() {
        let config: FileConfig = toml::from_str(
            r#"
            [catalog]
            path = "data/ingredients.csv"

            [model]
            path = "data/balance_model.json"

            [sampling]
            seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.unwrap().path, "data/ingredients.csv");
        assert_eq!(config.model.unwrap().path, "data/balance_model.json");
        assert_eq!(config.sampling.unwrap().seed, Some(42));
    }

    #[test]
    fn test_sections_are_optional() {
        let config: FileConfig = toml::from_str(
            r#"
            [model]
            path = "tree.json"
            "#,
        )
        .unwrap();

        assert!(config.catalog.is_none());
        assert_eq!(config.model.unwrap().path, "tree.json");
        assert!(config.sampling.is_none());
    }
}
