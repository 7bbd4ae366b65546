//! Data models and structures for Mixmax.
//!
//! This module contains all the core data structures used throughout the
//! application, including the ingredient catalog, effect sets, search
//! parameters and search outcomes.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{MixError, MixResult};

/// Hard cap on the number of distinct effects a mix can carry.
pub const EFFECT_CAPACITY: usize = 8;

/// A single mixing ingredient from the catalog.
///
/// Ingredients are immutable once loaded. The `replacements` list is ordered:
/// rules are applied in declaration order when the ingredient is mixed in.
///
/// # Example
///
/// ```
/// use mixmax::models::Ingredient;
///
/// let cuke = Ingredient {
///     name: "Cuke".to_string(),
///     price: 2.0,
///     addiction: 1,
///     default_effect: "Energizing".to_string(),
///     replacements: vec![("Toxic".to_string(), "Euphoric".to_string())],
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Ingredient {
    /// The ingredient name (e.g., "Cuke", "Energy Drink")
    pub name: String,
    /// Unit price charged per application, repetitions included
    pub price: f64,
    /// Addiction level contributed per application
    pub addiction: u32,
    /// Effect granted when mixed in, subject to the 8-effect cap
    pub default_effect: String,
    /// Ordered replacement rules `(old effect, new effect)`
    pub replacements: Vec<(String, String)>,
}

/// A capped set of distinct product effects.
///
/// Backed by a `BTreeSet` so iteration order is sorted and deterministic,
/// which makes `(EffectSet, depth)` usable as a dedup key during search.
/// The 8-effect cap is enforced by [`crate::rules::apply_ingredient`]: the
/// default effect is only added below the cap, while replacements substitute
/// and can never grow the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EffectSet(BTreeSet<String>);

impl EffectSet {
    /// Creates an empty effect set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Number of distinct effects in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no effects.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the named effect is present.
    pub fn contains(&self, effect: &str) -> bool {
        self.0.contains(effect)
    }

    /// Inserts an effect, returning `true` if it was not already present.
    pub fn insert(&mut self, effect: String) -> bool {
        self.0.insert(effect)
    }

    /// Removes an effect, returning `true` if it was present.
    pub fn remove(&mut self, effect: &str) -> bool {
        self.0.remove(effect)
    }

    /// Iterates the effects in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the effects as a sorted list of owned names.
    pub fn names(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<String> for EffectSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The read-only catalog shared by the rule engine and the optimizer.
///
/// Built once at startup and passed by reference everywhere. Ingredients are
/// keyed in a `BTreeMap` so the default search pool has a fixed, documented
/// order (ascending by name), which keeps search results deterministic.
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: BTreeMap<String, Ingredient>,
    effect_multipliers: BTreeMap<String, f64>,
    base_prices: BTreeMap<String, f64>,
}

impl Catalog {
    /// Builds a catalog from a list of ingredients plus the built-in effect
    /// multiplier and base price tables.
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self {
            ingredients: ingredients
                .into_iter()
                .map(|i| (i.name.clone(), i))
                .collect(),
            effect_multipliers: builtin_effect_multipliers(),
            base_prices: builtin_base_prices(),
        }
    }

    /// Looks up an ingredient by name.
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }

    /// Iterates all ingredients in ascending name order.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    /// Returns all ingredient names in ascending order.
    pub fn ingredient_names(&self) -> Vec<String> {
        self.ingredients.keys().cloned().collect()
    }

    /// Number of ingredients in the catalog.
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Sale multiplier for an effect. Unknown effects contribute 0.
    pub fn multiplier(&self, effect: &str) -> f64 {
        self.effect_multipliers.get(effect).copied().unwrap_or(0.0)
    }

    /// Iterates the known effect multipliers in ascending effect-name order.
    pub fn effect_multipliers(&self) -> impl Iterator<Item = (&str, f64)> {
        self.effect_multipliers.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Base price for a base product, if known.
    pub fn base_price(&self, base: &str) -> Option<f64> {
        self.base_prices.get(base).copied()
    }

    /// Returns all base product names in ascending order.
    pub fn base_names(&self) -> Vec<String> {
        self.base_prices.keys().cloned().collect()
    }
}

/// Which quantity the search should optimize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizeFor {
    /// Minimize total ingredient cost.
    Cost,
    /// Maximize `round(sale price) - cost`.
    Profit,
}

impl FromStr for OptimizeFor {
    type Err = MixError;

    fn from_str(s: &str) -> MixResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cost" => Ok(OptimizeFor::Cost),
            "profit" => Ok(OptimizeFor::Profit),
            other => Err(MixError::InvalidConfiguration(format!(
                "optimize mode must be \"cost\" or \"profit\", got {other:?}"
            ))),
        }
    }
}

/// The externally visible result of a search run.
///
/// "No mix found within budget" is an expected outcome, represented by the
/// [`MixOutcome::none`] sentinel rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixOutcome {
    /// Ordered ingredient names of the best mix found
    pub sequence: Vec<String>,
    /// Effects of the best mix, sorted by name
    pub effects: Vec<String>,
    /// Total ingredient cost of the sequence
    pub cost: f64,
    /// `round(sale price) - cost` for the sequence
    pub profit: f64,
}

impl MixOutcome {
    /// The "no result" sentinel: empty sequence, negative-infinite profit.
    pub fn none() -> Self {
        Self {
            sequence: Vec::new(),
            effects: Vec::new(),
            cost: 0.0,
            profit: f64::NEG_INFINITY,
        }
    }

    /// Returns `true` if this outcome is the "no result" sentinel.
    ///
    /// A genuine zero-length result carries a finite profit (the rounded base
    /// price) and is not considered empty.
    pub fn is_none(&self) -> bool {
        self.sequence.is_empty() && !self.profit.is_finite()
    }

    /// Returns `true` if this outcome strictly improves on `incumbent` under
    /// the given optimization mode. The sentinel never improves on anything,
    /// and any real outcome improves on the sentinel.
    pub fn improves_on(&self, incumbent: &MixOutcome, optimize_for: OptimizeFor) -> bool {
        if self.is_none() {
            return false;
        }
        if incumbent.is_none() {
            return true;
        }
        match optimize_for {
            OptimizeFor::Cost => self.cost < incumbent.cost,
            OptimizeFor::Profit => self.profit > incumbent.profit,
        }
    }
}

/// Parameters for one iterative-deepening search run.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Optimization target
    pub optimize_for: OptimizeFor,
    /// Base product the mix is applied to (e.g., "Meth")
    pub base: String,
    /// Smallest sequence length to attempt (inclusive, must be positive)
    pub min_steps: usize,
    /// Largest sequence length to attempt (inclusive)
    pub max_steps: usize,
    /// Allow-list of ingredient names; empty means the whole catalog.
    /// Unknown names are dropped with a warning, not an error.
    pub allowed_ingredients: Vec<String>,
    /// Effects the search is nudged toward via a score bonus. Never a hard
    /// filter.
    pub desired_effects: Vec<String>,
    /// Wall-clock budget shared across all attempted depths
    pub timeout: Duration,
}

impl SearchParams {
    /// Checks the structural constraints on the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MixError::InvalidConfiguration`] if `min_steps` is zero,
    /// `min_steps > max_steps`, or the timeout is zero.
    pub fn validate(&self) -> MixResult<()> {
        if self.min_steps == 0 {
            return Err(MixError::InvalidConfiguration(
                "min_steps must be positive".to_string(),
            ));
        }
        if self.min_steps > self.max_steps {
            return Err(MixError::InvalidConfiguration(format!(
                "min_steps ({}) exceeds max_steps ({})",
                self.min_steps, self.max_steps
            )));
        }
        if self.timeout.is_zero() {
            return Err(MixError::InvalidConfiguration(
                "timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Progress notification emitted after each completed depth.
#[derive(Debug, Clone)]
pub struct DepthReport {
    /// The sequence length that was just searched
    pub depth: usize,
    /// Profit of that depth's result (negative infinity if none)
    pub profit: f64,
    /// Sequence of that depth's result (empty if none)
    pub sequence: Vec<String>,
    /// Budget left after the depth finished
    pub remaining: Duration,
    /// Wall time the depth took
    pub elapsed: Duration,
}

// ============================================================================
// CSV Row Structures
// ============================================================================

/// CSV row structure for the ingredient catalog.
#[derive(Debug, Deserialize)]
pub struct IngredientRow {
    /// Ingredient name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Addiction level
    pub addiction: u32,
    /// Effect granted on application
    pub default_effect: String,
    /// Replacement rules as `Old:New` pairs separated by `;` (optional)
    pub replacements: Option<String>,
}

/// Effect sale multipliers. Static in-process table.
fn builtin_effect_multipliers() -> BTreeMap<String, f64> {
    [
        ("Anti-Gravity", 0.54),
        ("Athletic", 0.32),
        ("Balding", 0.30),
        ("Bright-Eyed", 0.40),
        ("Calming", 0.10),
        ("Calorie-Dense", 0.28),
        ("Cyclopean", 0.56),
        ("Electrifying", 0.50),
        ("Energizing", 0.22),
        ("Euphoric", 0.18),
        ("Focused", 0.16),
        ("Foggy", 0.36),
        ("Glowing", 0.48),
        ("Jennerising", 0.42),
        ("Long Faced", 0.52),
        ("Munchies", 0.12),
        ("Refreshing", 0.14),
        ("Shrinking", 0.60),
        ("Slippery", 0.34),
        ("Sneaky", 0.24),
        ("Spicy", 0.38),
        ("Thought-Provoking", 0.44),
        ("Tropic Thunder", 0.46),
        ("Zombifying", 0.58),
    ]
    .into_iter()
    .map(|(name, mult)| (name.to_string(), mult))
    .collect()
}

/// Base product prices. Static in-process table.
fn builtin_base_prices() -> BTreeMap<String, f64> {
    [("Weed", 35.0), ("Meth", 70.0), ("Cocaine", 150.0)]
        .into_iter()
        .map(|(name, price)| (name.to_string(), price))
        .collect()
}
