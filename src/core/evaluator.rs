use crate::core::{Classifier, Evaluation, FeatureVector, Ingredient};
use crate::utils::error::{NutriError, Result};

/// Aggregates a selection into a feature vector and asks the classifier
/// for a verdict. Pure apart from the classifier call.
pub struct MealEvaluator<C: Classifier> {
    classifier: C,
}

impl<C: Classifier> MealEvaluator<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn evaluate(&self, selected: &[Ingredient]) -> Result<Evaluation> {
        if selected.is_empty() {
            return Err(NutriError::EmptySelection);
        }

        let vector = FeatureVector::from_ingredients(selected);
        tracing::debug!("Feature vector for selection: {:?}", vector.as_bits());

        let balanced = match self.classifier.predict(&vector)? {
            1 => true,
            0 => false,
            label => return Err(NutriError::Classifier { label }),
        };

        let missing = if balanced { Vec::new() } else { vector.missing() };

        Ok(Evaluation {
            vector,
            balanced,
            missing,
        })
    }
}
