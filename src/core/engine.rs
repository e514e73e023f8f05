use crate::core::evaluator::MealEvaluator;
use crate::core::suggest;
use crate::core::{Catalog, CatalogSource, Category, Classifier, Evaluation, Ingredient, MealIdea};
use crate::utils::error::{NutriError, Result};
use rand::Rng;
use std::collections::HashSet;

/// Session facade: owns the immutable catalog and the classifier, and
/// exposes the classify/suggest operations to the CLI surface.
pub struct NutritionEngine<C: Classifier> {
    catalog: Catalog,
    evaluator: MealEvaluator<C>,
}

impl<C: Classifier> NutritionEngine<C> {
    pub fn new(catalog: Catalog, classifier: C) -> Self {
        Self {
            catalog,
            evaluator: MealEvaluator::new(classifier),
        }
    }

    /// Loads the catalog through its source, then wires up the engine.
    pub async fn from_source(source: &impl CatalogSource, classifier: C) -> Result<Self> {
        let catalog = source.load().await?;
        Ok(Self::new(catalog, classifier))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolves user-supplied names against the catalog and evaluates the
    /// selection. Repeated names collapse; the selection is a set.
    pub fn classify(&self, names: &[String]) -> Result<Evaluation> {
        let selection = self.resolve(names)?;
        self.evaluator.evaluate(&selection)
    }

    pub fn suggest_additions<R: Rng + ?Sized>(
        &self,
        category: Category,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        suggest::suggest_additions(&self.catalog, category, rng)
    }

    pub fn suggest_meal<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MealIdea> {
        suggest::suggest_meal(&self.catalog, rng)
    }

    fn resolve(&self, names: &[String]) -> Result<Vec<Ingredient>> {
        let mut seen = HashSet::new();
        let mut selection = Vec::new();

        for raw in names {
            let name = raw.trim();
            if name.is_empty() {
                continue;
            }
            let ingredient = self
                .catalog
                .get(name)
                .ok_or_else(|| NutriError::UnknownIngredient {
                    name: name.to_string(),
                })?;
            if seen.insert(ingredient.name.to_lowercase()) {
                selection.push(ingredient.clone());
            }
        }

        Ok(selection)
    }
}
