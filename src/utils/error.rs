use crate::domain::model::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NutriError {
    #[error("no ingredients chosen")]
    EmptySelection,

    #[error("unknown ingredient: '{name}'")]
    UnknownIngredient { name: String },

    #[error("classifier returned an out-of-domain label: {label}")]
    Classifier { label: i64 },

    #[error("not enough {category} ingredients to suggest: found {available}, need {needed}")]
    InsufficientCatalog {
        category: Category,
        available: usize,
        needed: usize,
    },

    #[error("no {category} ingredients in the catalog")]
    EmptyCategory { category: Category },

    #[error("catalog load failed: {message}")]
    CatalogLoad { message: String },

    #[error("model load failed: {message}")]
    ModelLoad { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Sampling,
    Classifier,
    Catalog,
    Model,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NutriError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NutriError::EmptySelection | NutriError::UnknownIngredient { .. } => {
                ErrorCategory::Input
            }
            NutriError::InsufficientCatalog { .. } | NutriError::EmptyCategory { .. } => {
                ErrorCategory::Sampling
            }
            NutriError::Classifier { .. } => ErrorCategory::Classifier,
            NutriError::CatalogLoad { .. } | NutriError::CsvError(_) => ErrorCategory::Catalog,
            NutriError::ModelLoad { .. } | NutriError::SerializationError(_) => {
                ErrorCategory::Model
            }
            NutriError::TomlError(_) | NutriError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            NutriError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Soft failures: the catalog cannot serve this request, the session goes on.
            NutriError::InsufficientCatalog { .. } | NutriError::EmptyCategory { .. } => {
                ErrorSeverity::Low
            }
            // Fixable by re-running with different arguments.
            NutriError::EmptySelection | NutriError::UnknownIngredient { .. } => {
                ErrorSeverity::Medium
            }
            NutriError::Classifier { .. } => ErrorSeverity::High,
            _ => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NutriError::EmptySelection => "Please select at least one ingredient.".to_string(),
            NutriError::UnknownIngredient { name } => {
                format!("'{}' is not in the ingredient catalog.", name)
            }
            NutriError::Classifier { label } => format!(
                "The classifier produced an unexpected result ({}) for this meal.",
                label
            ),
            NutriError::InsufficientCatalog {
                category,
                available,
                needed,
            } => format!(
                "Not enough {} ingredients to suggest: the catalog has {} but {} are needed.",
                category, available, needed
            ),
            NutriError::EmptyCategory { .. } => {
                "Could not generate a meal. Make sure your catalog has items for each category."
                    .to_string()
            }
            NutriError::CatalogLoad { message } => {
                format!("The ingredient catalog could not be loaded: {}", message)
            }
            NutriError::CsvError(e) => format!("The ingredient catalog could not be read: {}", e),
            NutriError::ModelLoad { message } => {
                format!("The classifier model could not be loaded: {}", message)
            }
            NutriError::SerializationError(e) => {
                format!("The classifier model could not be parsed: {}", e)
            }
            NutriError::IoError(e) => format!("File operation failed: {}", e),
            NutriError::TomlError(e) => format!("The settings file could not be parsed: {}", e),
            NutriError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid value for {}: '{}' ({})", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NutriError::EmptySelection => {
                "Pass at least one ingredient, e.g. --ingredients Rice,Beans".to_string()
            }
            NutriError::UnknownIngredient { .. } => {
                "Run the 'list' command to see the available ingredient names".to_string()
            }
            NutriError::Classifier { .. } => {
                "Re-export the model artifact; its leaf labels must be 0 or 1".to_string()
            }
            NutriError::InsufficientCatalog { category, .. } => {
                format!("Add more {} ingredients to the catalog CSV", category)
            }
            NutriError::EmptyCategory { category } => {
                format!("Add at least one {} ingredient to the catalog CSV", category)
            }
            NutriError::CatalogLoad { .. } | NutriError::CsvError(_) => {
                "Check the catalog CSV: one header row, then four columns per row (name plus three 0/1 flags)"
                    .to_string()
            }
            NutriError::ModelLoad { .. } | NutriError::SerializationError(_) => {
                "Check the model path and that the artifact is a JSON decision tree".to_string()
            }
            NutriError::IoError(_) => "Check file paths and permissions".to_string(),
            NutriError::TomlError(_) | NutriError::InvalidConfigValueError { .. } => {
                "Fix the settings value and try again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NutriError>;
