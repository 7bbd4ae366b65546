//! Data loading functionality for Mixmax.
//!
//! This module handles loading the ingredient catalog from a CSV file.
//! Effect multipliers and base product prices are built-in tables (see
//! [`crate::models::Catalog`]); only the ingredients live in a data file.

use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

use crate::models::{Catalog, Ingredient, IngredientRow};
use crate::{MixError, MixResult};

/// Parses a replacement rule string (e.g., "Toxic:Euphoric;Foggy:Cyclopean")
/// into an ordered list of `(old, new)` pairs.
///
/// An empty or missing string yields no rules. Malformed pairs are a fatal
/// catalog error, not something to silently skip.
fn parse_replacements(name: &str, raw: &Option<String>) -> MixResult<Vec<(String, String)>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let mut rules = Vec::new();
    for pair in raw.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let Some((old, new)) = pair.split_once(':') else {
            return Err(MixError::CatalogEntry {
                name: name.to_string(),
                reason: format!("replacement {pair:?} is not an Old:New pair"),
            });
        };
        let (old, new) = (old.trim(), new.trim());
        if old.is_empty() || new.is_empty() {
            return Err(MixError::CatalogEntry {
                name: name.to_string(),
                reason: format!("replacement {pair:?} has an empty side"),
            });
        }
        rules.push((old.to_string(), new.to_string()));
    }
    Ok(rules)
}

/// Loads the ingredient list from a CSV file.
///
/// # Arguments
///
/// * `path` - Path to the ingredient CSV file
///
/// # Returns
///
/// A vector of [`Ingredient`] in file order, or a catalog error if the file
/// cannot be read or any entry is malformed.
///
/// # CSV Format
///
/// Expected columns: `name, price, addiction, default_effect, replacements`,
/// where `replacements` holds `Old:New` pairs separated by `;` and may be
/// empty.
pub fn load_ingredients(path: &Path) -> MixResult<Vec<Ingredient>> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut ingredients = Vec::new();
    for result in rdr.deserialize() {
        let row: IngredientRow = result?;
        if row.name.is_empty() {
            return Err(MixError::CatalogEntry {
                name: String::new(),
                reason: "ingredient name is empty".to_string(),
            });
        }
        if row.price < 0.0 {
            return Err(MixError::CatalogEntry {
                name: row.name,
                reason: format!("price {} is negative", row.price),
            });
        }
        if row.default_effect.is_empty() {
            return Err(MixError::CatalogEntry {
                name: row.name,
                reason: "default effect is empty".to_string(),
            });
        }
        if ingredients.iter().any(|i: &Ingredient| i.name == row.name) {
            return Err(MixError::CatalogEntry {
                name: row.name,
                reason: "duplicate ingredient".to_string(),
            });
        }
        let replacements = parse_replacements(&row.name, &row.replacements)?;
        ingredients.push(Ingredient {
            name: row.name,
            price: row.price,
            addiction: row.addiction,
            default_effect: row.default_effect,
            replacements,
        });
    }
    Ok(ingredients)
}

/// Loads the full catalog: ingredients from `path` plus the built-in effect
/// and base product tables.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use mixmax::data::load_catalog;
///
/// let catalog = load_catalog(Path::new("data/ingredients.csv")).unwrap();
/// println!("Loaded {} ingredients", catalog.ingredient_count());
/// ```
pub fn load_catalog(path: &Path) -> MixResult<Catalog> {
    let ingredients = load_ingredients(path)?;
    Ok(Catalog::new(ingredients))
}
