use crate::core::{Catalog, Category, Ingredient, MealIdea};
use crate::utils::error::{NutriError, Result};
use rand::seq::{index, IndexedRandom};
use rand::Rng;

/// How many remediation ideas one suggestion returns.
pub const SUGGESTION_COUNT: usize = 3;

/// Picks `SUGGESTION_COUNT` distinct ingredients of `category`, uniformly
/// without replacement. The rng is injected so callers can pass a seeded
/// generator.
pub fn suggest_additions<R: Rng + ?Sized>(
    catalog: &Catalog,
    category: Category,
    rng: &mut R,
) -> Result<Vec<String>> {
    let pool = catalog.in_category(category);
    if pool.len() < SUGGESTION_COUNT {
        return Err(NutriError::InsufficientCatalog {
            category,
            available: pool.len(),
            needed: SUGGESTION_COUNT,
        });
    }

    let picks = index::sample(rng, pool.len(), SUGGESTION_COUNT);
    Ok(picks.iter().map(|i| pool[i].name.clone()).collect())
}

/// Proposes a balanced meal: one uniform pick per category. The three
/// draws are independent; an ingredient carrying two flags may land in
/// both slots.
pub fn suggest_meal<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Result<MealIdea> {
    Ok(MealIdea {
        carb: pick_one(catalog, Category::Carbohydrate, rng)?,
        protein: pick_one(catalog, Category::Protein, rng)?,
        veg: pick_one(catalog, Category::VegetableFruit, rng)?,
    })
}

fn pick_one<R: Rng + ?Sized>(
    catalog: &Catalog,
    category: Category,
    rng: &mut R,
) -> Result<Ingredient> {
    catalog
        .in_category(category)
        .choose(rng)
        .map(|ingredient| (*ingredient).clone())
        .ok_or(NutriError::EmptyCategory { category })
}
