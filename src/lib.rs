pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CsvCatalog, DecisionTree, TreeNode};
pub use config::{CliConfig, Command, Settings};
pub use core::engine::NutritionEngine;
pub use core::evaluator::MealEvaluator;
pub use domain::model::{Catalog, Category, Evaluation, FeatureVector, Ingredient, MealIdea};
pub use domain::ports::{CatalogSource, Classifier};
pub use utils::error::{NutriError, Result};
