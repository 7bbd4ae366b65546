//! Effect-combination rules for Mixmax.
//!
//! This module contains the pure functions that turn an ordered ingredient
//! sequence into a capped effect set, a cost, a sale price, a profit and an
//! addiction score. The optimizer uses these as its scoring oracle; they do
//! no I/O and never mutate the catalog.

use crate::models::{Catalog, EffectSet, Ingredient, EFFECT_CAPACITY};
use crate::{MixError, MixResult};

/// Applies one ingredient to an effect set, producing a new set.
///
/// The order of the two phases is fixed:
///
/// 1. The ingredient's default effect is added, but only if it is not
///    already present and the set holds fewer than 8 effects.
/// 2. Each replacement rule fires in declared order: if the old effect is
///    present it is removed and the new effect added. Replacement is a
///    substitution, so it never grows the set and ignores the cap.
///
/// Because the default effect is resolved first, a replacement rule may
/// consume the default that was added a moment earlier.
pub fn apply_ingredient(current: &EffectSet, ingredient: &Ingredient) -> EffectSet {
    let mut next = current.clone();
    if !next.contains(&ingredient.default_effect) && next.len() < EFFECT_CAPACITY {
        next.insert(ingredient.default_effect.clone());
    }
    for (old, new) in &ingredient.replacements {
        if next.remove(old) {
            next.insert(new.clone());
        }
    }
    next
}

/// Folds a whole sequence over the empty effect set, in sequence order.
///
/// # Errors
///
/// Returns [`MixError::UnknownIngredient`] if any name is not in the catalog.
pub fn combined_effects(catalog: &Catalog, sequence: &[String]) -> MixResult<EffectSet> {
    let mut effects = EffectSet::new();
    for name in sequence {
        let ingredient = catalog
            .ingredient(name)
            .ok_or_else(|| MixError::UnknownIngredient(name.clone()))?;
        effects = apply_ingredient(&effects, ingredient);
    }
    Ok(effects)
}

/// Total ingredient cost of a sequence, counting repetitions individually.
///
/// # Errors
///
/// Returns [`MixError::UnknownIngredient`] if any name is not in the catalog.
pub fn sequence_cost(catalog: &Catalog, sequence: &[String]) -> MixResult<f64> {
    let mut total = 0.0;
    for name in sequence {
        let ingredient = catalog
            .ingredient(name)
            .ok_or_else(|| MixError::UnknownIngredient(name.clone()))?;
        total += ingredient.price;
    }
    Ok(total)
}

/// Sale price of a product with the given effects:
/// `base_price * (1 + sum of effect multipliers)`.
///
/// Effects without a known multiplier contribute 0.
///
/// # Errors
///
/// Returns [`MixError::UnknownBaseProduct`] if the base product is unknown.
pub fn sale_price(catalog: &Catalog, effects: &EffectSet, base: &str) -> MixResult<f64> {
    let base_price = catalog
        .base_price(base)
        .ok_or_else(|| MixError::UnknownBaseProduct(base.to_string()))?;
    let total_mult: f64 = effects.iter().map(|e| catalog.multiplier(e)).sum();
    Ok(base_price * (1.0 + total_mult))
}

/// Profit of a mix: `round(sale price) - cost`.
///
/// The sale price is rounded half away from zero (`f64::round`); the cost is
/// not rounded.
pub fn profit(catalog: &Catalog, effects: &EffectSet, cost: f64, base: &str) -> MixResult<f64> {
    Ok(sale_price(catalog, effects, base)?.round() - cost)
}

/// Total addiction level of a sequence.
///
/// Lenient on purpose: unknown ingredients contribute 0 instead of failing,
/// unlike the strict fold operations above.
pub fn addiction(catalog: &Catalog, sequence: &[String]) -> u32 {
    sequence
        .iter()
        .map(|name| catalog.ingredient(name).map_or(0, |i| i.addiction))
        .sum()
}
