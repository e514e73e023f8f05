use crate::utils::error::{NutriError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One row of the ingredient catalog. The three category flags are
/// independent; an ingredient may satisfy more than one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub is_carb: bool,
    pub is_protein: bool,
    pub is_veg: bool,
}

impl Ingredient {
    pub fn has(&self, category: Category) -> bool {
        match category {
            Category::Carbohydrate => self.is_carb,
            Category::Protein => self.is_protein,
            Category::VegetableFruit => self.is_veg,
        }
    }
}

/// The three meal categories, in canonical order (`Category::ALL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Carbohydrate,
    Protein,
    VegetableFruit,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Carbohydrate,
        Category::Protein,
        Category::VegetableFruit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Carbohydrate => "Carbohydrate",
            Category::Protein => "Protein",
            Category::VegetableFruit => "Vegetable/Fruit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "carb" | "carbs" | "carbohydrate" | "carbohydrates" => Ok(Category::Carbohydrate),
            "protein" | "proteins" => Ok(Category::Protein),
            "veg" | "vegetable" | "fruit" | "veg/fruit" | "vegetable/fruit" => {
                Ok(Category::VegetableFruit)
            }
            other => Err(NutriError::InvalidConfigValueError {
                field: "category".to_string(),
                value: other.to_string(),
                reason: "Expected one of: carb, protein, veg".to_string(),
            }),
        }
    }
}

/// Per-evaluation feature vector: one boolean per category, the OR across
/// the selected ingredients' flags. Ephemeral, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureVector {
    pub carb: bool,
    pub protein: bool,
    pub veg: bool,
}

impl FeatureVector {
    /// Number of components, which is also the classifier's feature arity.
    pub const LEN: usize = 3;

    pub fn from_ingredients<'a, I>(selected: I) -> Self
    where
        I: IntoIterator<Item = &'a Ingredient>,
    {
        let mut vector = FeatureVector::default();
        for ingredient in selected {
            vector.carb |= ingredient.is_carb;
            vector.protein |= ingredient.is_protein;
            vector.veg |= ingredient.is_veg;
        }
        vector
    }

    pub fn contains(self, category: Category) -> bool {
        match category {
            Category::Carbohydrate => self.carb,
            Category::Protein => self.protein,
            Category::VegetableFruit => self.veg,
        }
    }

    /// Categories with a `false` component, in canonical order.
    pub fn missing(self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|category| !self.contains(*category))
            .collect()
    }

    pub fn is_complete(self) -> bool {
        self.carb && self.protein && self.veg
    }

    /// 0/1 encoding in canonical category order, as fed to the classifier.
    pub fn as_bits(self) -> [u8; Self::LEN] {
        [self.carb as u8, self.protein as u8, self.veg as u8]
    }
}

/// Result of one meal evaluation. `missing` is empty when balanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub vector: FeatureVector,
    pub balanced: bool,
    pub missing: Vec<Category>,
}

/// One randomly generated balanced-meal idea. The three picks are
/// independent draws; an ingredient satisfying two categories may appear
/// in both slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealIdea {
    pub carb: Ingredient,
    pub protein: Ingredient,
    pub veg: Ingredient,
}

/// Immutable in-memory ingredient catalog, loaded once at startup.
/// Lookup is case-insensitive on the trimmed ingredient name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(ingredients: Vec<Ingredient>) -> Result<Self> {
        let mut index = HashMap::with_capacity(ingredients.len());
        for (position, ingredient) in ingredients.iter().enumerate() {
            let key = ingredient.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(NutriError::CatalogLoad {
                    message: format!("ingredient at position {} has a blank name", position + 1),
                });
            }
            if index.insert(key, position).is_some() {
                return Err(NutriError::CatalogLoad {
                    message: format!("duplicate ingredient name: '{}'", ingredient.name),
                });
            }
        }
        Ok(Self { ingredients, index })
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&position| &self.ingredients[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ingredient> {
        self.ingredients.iter()
    }

    pub fn in_category(&self, category: Category) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|ingredient| ingredient.has(category))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, is_carb: bool, is_protein: bool, is_veg: bool) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            is_carb,
            is_protein,
            is_veg,
        }
    }

    #[test]
    fn test_feature_vector_or_reduction() {
        let rice = ingredient("Rice", true, false, false);
        let beans = ingredient("Beans", true, true, false);
        let spinach = ingredient("Spinach", false, false, true);

        let vector = FeatureVector::from_ingredients([&rice, &spinach]);
        assert_eq!(vector.as_bits(), [1, 0, 1]);
        assert!(!vector.is_complete());

        let vector = FeatureVector::from_ingredients([&beans, &spinach]);
        assert_eq!(vector.as_bits(), [1, 1, 1]);
        assert!(vector.is_complete());
    }

    #[test]
    fn test_feature_vector_order_independent() {
        let rice = ingredient("Rice", true, false, false);
        let spinach = ingredient("Spinach", false, false, true);

        let forward = FeatureVector::from_ingredients([&rice, &spinach]);
        let reverse = FeatureVector::from_ingredients([&spinach, &rice]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_missing_categories_in_canonical_order() {
        let vector = FeatureVector::default();
        assert_eq!(vector.missing(), Category::ALL.to_vec());

        let vector = FeatureVector {
            carb: false,
            protein: true,
            veg: false,
        };
        assert_eq!(
            vector.missing(),
            vec![Category::Carbohydrate, Category::VegetableFruit]
        );
    }

    #[test]
    fn test_catalog_lookup_is_case_insensitive() {
        let catalog = Catalog::new(vec![ingredient("Sweet Potato", true, false, false)]).unwrap();
        assert!(catalog.get("sweet potato").is_some());
        assert!(catalog.get("  SWEET POTATO  ").is_some());
        assert!(catalog.get("potato").is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicate_names() {
        let result = Catalog::new(vec![
            ingredient("Rice", true, false, false),
            ingredient("rice", true, false, false),
        ]);
        assert!(matches!(result, Err(NutriError::CatalogLoad { .. })));
    }

    #[test]
    fn test_catalog_rejects_blank_names() {
        let result = Catalog::new(vec![ingredient("   ", true, false, false)]);
        assert!(matches!(result, Err(NutriError::CatalogLoad { .. })));
    }

    #[test]
    fn test_catalog_category_subsets() {
        let catalog = Catalog::new(vec![
            ingredient("Rice", true, false, false),
            ingredient("Beans", true, true, false),
            ingredient("Spinach", false, false, true),
        ])
        .unwrap();

        let carbs = catalog.in_category(Category::Carbohydrate);
        assert_eq!(carbs.len(), 2);
        assert!(carbs.iter().all(|i| i.is_carb));
        assert_eq!(catalog.in_category(Category::VegetableFruit).len(), 1);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("carb".parse::<Category>().unwrap(), Category::Carbohydrate);
        assert_eq!(
            "Protein".parse::<Category>().unwrap(),
            Category::Protein
        );
        assert_eq!(
            "Vegetable/Fruit".parse::<Category>().unwrap(),
            Category::VegetableFruit
        );
        assert!("dessert".parse::<Category>().is_err());
    }
}
