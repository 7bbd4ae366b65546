//! Tests for data models and structures.

use std::str::FromStr;
use std::time::Duration;

use mixmax::models::{
    Catalog, EffectSet, Ingredient, MixOutcome, OptimizeFor, SearchParams, EFFECT_CAPACITY,
};
use mixmax::MixError;

fn ingredient(name: &str, price: f64, default_effect: &str) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        price,
        addiction: 1,
        default_effect: default_effect.to_string(),
        replacements: Vec::new(),
    }
}

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        ingredient("Cuke", 2.0, "Energizing"),
        ingredient("Banana", 2.0, "Gingeritis"),
    ])
}

#[test]
fn test_catalog_ingredient_lookup() {
    let catalog = sample_catalog();

    let cuke = catalog.ingredient("Cuke").expect("Cuke should exist");
    assert_eq!(cuke.price, 2.0);
    assert_eq!(cuke.default_effect, "Energizing");

    assert!(catalog.ingredient("Ghost Pepper").is_none());
    assert_eq!(catalog.ingredient_count(), 2);
}

#[test]
fn test_catalog_ingredient_names_are_sorted() {
    let catalog = sample_catalog();
    assert_eq!(catalog.ingredient_names(), vec!["Banana", "Cuke"]);
}

#[test]
fn test_catalog_multipliers() {
    let catalog = sample_catalog();

    assert_eq!(catalog.multiplier("Energizing"), 0.22);
    assert_eq!(catalog.multiplier("Shrinking"), 0.60);
    // Unknown effects contribute zero instead of failing
    assert_eq!(catalog.multiplier("Gibberish"), 0.0);
}

#[test]
fn test_catalog_base_prices() {
    let catalog = sample_catalog();

    assert_eq!(catalog.base_price("Weed"), Some(35.0));
    assert_eq!(catalog.base_price("Meth"), Some(70.0));
    assert_eq!(catalog.base_price("Cocaine"), Some(150.0));
    assert_eq!(catalog.base_price("Tea"), None);
    assert_eq!(catalog.base_names(), vec!["Cocaine", "Meth", "Weed"]);
}

#[test]
fn test_effect_set_basics() {
    let mut effects = EffectSet::new();
    assert!(effects.is_empty());

    assert!(effects.insert("Spicy".to_string()));
    assert!(!effects.insert("Spicy".to_string()), "duplicate insert");
    assert!(effects.insert("Calming".to_string()));

    assert_eq!(effects.len(), 2);
    assert!(effects.contains("Spicy"));
    assert!(!effects.contains("Foggy"));

    // Sorted iteration order
    assert_eq!(effects.names(), vec!["Calming", "Spicy"]);

    assert!(effects.remove("Spicy"));
    assert!(!effects.remove("Spicy"));
    assert_eq!(effects.len(), 1);
}

#[test]
fn test_effect_capacity_is_eight() {
    assert_eq!(EFFECT_CAPACITY, 8);
}

#[test]
fn test_optimize_for_from_str() {
    assert_eq!(OptimizeFor::from_str("profit").unwrap(), OptimizeFor::Profit);
    assert_eq!(OptimizeFor::from_str("cost").unwrap(), OptimizeFor::Cost);
    assert_eq!(OptimizeFor::from_str("Profit").unwrap(), OptimizeFor::Profit);

    let err = OptimizeFor::from_str("speed").unwrap_err();
    assert!(matches!(err, MixError::InvalidConfiguration(_)));
}

#[test]
fn test_mix_outcome_none_sentinel() {
    let none = MixOutcome::none();
    assert!(none.is_none());
    assert!(none.sequence.is_empty());

    let real = MixOutcome {
        sequence: vec!["Cuke".to_string()],
        effects: vec!["Energizing".to_string()],
        cost: 2.0,
        profit: 44.0,
    };
    assert!(!real.is_none());

    // A zero-length result has a finite profit and is not the sentinel
    let empty_mix = MixOutcome {
        sequence: Vec::new(),
        effects: Vec::new(),
        cost: 0.0,
        profit: 70.0,
    };
    assert!(!empty_mix.is_none());
}

#[test]
fn test_mix_outcome_improves_on() {
    let none = MixOutcome::none();
    let cheap = MixOutcome {
        sequence: vec!["Banana".to_string()],
        effects: vec!["Gingeritis".to_string()],
        cost: 2.0,
        profit: 33.0,
    };
    let rich = MixOutcome {
        sequence: vec!["Cuke".to_string(), "Cuke".to_string()],
        effects: vec!["Energizing".to_string()],
        cost: 4.0,
        profit: 40.0,
    };

    // Anything real beats the sentinel; the sentinel beats nothing
    assert!(cheap.improves_on(&none, OptimizeFor::Profit));
    assert!(cheap.improves_on(&none, OptimizeFor::Cost));
    assert!(!none.improves_on(&cheap, OptimizeFor::Profit));

    assert!(rich.improves_on(&cheap, OptimizeFor::Profit));
    assert!(!cheap.improves_on(&rich, OptimizeFor::Profit));

    assert!(cheap.improves_on(&rich, OptimizeFor::Cost));
    assert!(!rich.improves_on(&cheap, OptimizeFor::Cost));

    // Strict comparison: equal outcomes do not replace the incumbent
    assert!(!cheap.clone().improves_on(&cheap, OptimizeFor::Profit));
    assert!(!cheap.clone().improves_on(&cheap, OptimizeFor::Cost));
}

#[test]
fn test_search_params_validate() {
    let valid = SearchParams {
        optimize_for: OptimizeFor::Profit,
        base: "Meth".to_string(),
        min_steps: 1,
        max_steps: 5,
        allowed_ingredients: Vec::new(),
        desired_effects: Vec::new(),
        timeout: Duration::from_secs(30),
    };
    assert!(valid.validate().is_ok());

    let mut zero_min = valid.clone();
    zero_min.min_steps = 0;
    assert!(matches!(
        zero_min.validate(),
        Err(MixError::InvalidConfiguration(_))
    ));

    let mut inverted = valid.clone();
    inverted.min_steps = 6;
    assert!(matches!(
        inverted.validate(),
        Err(MixError::InvalidConfiguration(_))
    ));

    let mut no_time = valid;
    no_time.timeout = Duration::ZERO;
    assert!(matches!(
        no_time.validate(),
        Err(MixError::InvalidConfiguration(_))
    ));
}
