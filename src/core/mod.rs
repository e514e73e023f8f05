pub mod engine;
pub mod evaluator;
pub mod suggest;

pub use crate::domain::model::{Catalog, Category, Evaluation, FeatureVector, Ingredient, MealIdea};
pub use crate::domain::ports::{CatalogSource, Classifier};
pub use crate::utils::error::Result;
