pub mod toml_config;

use crate::domain::model::Category;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use clap::{Parser, Subcommand};
use std::str::FromStr;
use toml_config::FileConfig;

pub const DEFAULT_CATALOG_PATH: &str = "ingredients.csv";
pub const DEFAULT_MODEL_PATH: &str = "balance_model.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "nutricheck")]
#[command(about = "Classify meals as balanced and suggest how to improve them")]
pub struct CliConfig {
    /// Path to the ingredient catalog CSV
    #[arg(long)]
    pub catalog: Option<String>,

    /// Path to the classifier model artifact (JSON decision tree)
    #[arg(long)]
    pub model: Option<String>,

    /// Path to a TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    /// Seed for deterministic sampling
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Classify the selected ingredients as balanced or unbalanced
    Classify {
        #[arg(long, value_delimiter = ',')]
        ingredients: Vec<String>,
    },
    /// Propose a random balanced meal
    SuggestMeal,
    /// Suggest ingredients from one category
    Suggest {
        #[arg(long, value_parser = parse_category)]
        category: Category,
    },
    /// List the ingredient catalog
    List,
}

fn parse_category(raw: &str) -> std::result::Result<Category, String> {
    Category::from_str(raw).map_err(|e| e.to_string())
}

/// Effective startup settings after merging CLI flags, the optional
/// settings file, and the built-in defaults — highest precedence first.
#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog_path: String,
    pub model_path: String,
    pub seed: Option<u64>,
}

impl Settings {
    pub async fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path).await?,
            None => FileConfig::default(),
        };

        let catalog_path = cli
            .catalog
            .clone()
            .or(file.catalog.map(|section| section.path))
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

        let model_path = cli
            .model
            .clone()
            .or(file.model.map(|section| section.path))
            .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

        let seed = cli.seed.or(file.sampling.and_then(|section| section.seed));

        Ok(Self {
            catalog_path,
            model_path,
            seed,
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("catalog", &self.catalog_path)?;
        validate_path("catalog", &self.catalog_path)?;
        validate_file_extension("catalog", &self.catalog_path, &["csv"])?;

        validate_non_empty_string("model", &self.model_path)?;
        validate_path("model", &self.model_path)?;
        validate_file_extension("model", &self.model_path, &["json"])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(catalog: Option<&str>, model: Option<&str>, seed: Option<u64>) -> CliConfig {
        CliConfig {
            catalog: catalog.map(String::from),
            model: model.map(String::from),
            config: None,
            seed,
            verbose: false,
            command: Command::List,
        }
    }

    #[test]
    fn test_defaults_apply_without_flags_or_file() {
        let settings = tokio_test::block_on(Settings::resolve(&cli(None, None, None))).unwrap();
        assert_eq!(settings.catalog_path, DEFAULT_CATALOG_PATH);
        assert_eq!(settings.model_path, DEFAULT_MODEL_PATH);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_cli_flags_win() {
        let settings = tokio_test::block_on(Settings::resolve(&cli(
            Some("my.csv"),
            Some("my.json"),
            Some(9),
        )))
        .unwrap();
        assert_eq!(settings.catalog_path, "my.csv");
        assert_eq!(settings.model_path, "my.json");
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn test_validate_checks_extensions() {
        let settings = Settings {
            catalog_path: "ingredients.csv".to_string(),
            model_path: "tree.json".to_string(),
            seed: None,
        };
        assert!(settings.validate().is_ok());

        let settings = Settings {
            catalog_path: "ingredients.xlsx".to_string(),
            model_path: "tree.json".to_string(),
            seed: None,
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            catalog_path: "ingredients.csv".to_string(),
            model_path: "tree.pkl".to_string(),
            seed: None,
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_parse_category_for_cli() {
        assert_eq!(parse_category("veg").unwrap(), Category::VegetableFruit);
        assert!(parse_category("sugar").is_err());
    }
}
