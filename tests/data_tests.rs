//! Tests for catalog loading functionality.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use mixmax::data::{load_catalog, load_ingredients};
use mixmax::MixError;

fn write_catalog(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp catalog");
    file.flush().expect("Failed to flush temp catalog");
    file
}

#[test]
fn test_load_ingredients_parses_rows_in_order() {
    let file = write_catalog(
        "name,price,addiction,default_effect,replacements\n\
         Cuke,2.0,1,Energizing,\"Toxic:Euphoric;Foggy:Cyclopean\"\n\
         Banana,2.0,1,Gingeritis,\n",
    );

    let ingredients = load_ingredients(file.path()).expect("Failed to load catalog");
    assert_eq!(ingredients.len(), 2);

    let cuke = &ingredients[0];
    assert_eq!(cuke.name, "Cuke");
    assert_eq!(cuke.price, 2.0);
    assert_eq!(cuke.addiction, 1);
    assert_eq!(cuke.default_effect, "Energizing");
    // Replacement rules keep their declared order
    assert_eq!(
        cuke.replacements,
        vec![
            ("Toxic".to_string(), "Euphoric".to_string()),
            ("Foggy".to_string(), "Cyclopean".to_string()),
        ]
    );

    let banana = &ingredients[1];
    assert_eq!(banana.name, "Banana");
    assert!(banana.replacements.is_empty());
}

#[test]
fn test_load_ingredients_malformed_replacement() {
    let file = write_catalog(
        "name,price,addiction,default_effect,replacements\n\
         Cuke,2.0,1,Energizing,Toxic-Euphoric\n",
    );

    let err = load_ingredients(file.path()).unwrap_err();
    assert!(matches!(err, MixError::CatalogEntry { .. }));
}

#[test]
fn test_load_ingredients_negative_price() {
    let file = write_catalog(
        "name,price,addiction,default_effect,replacements\n\
         Cuke,-2.0,1,Energizing,\n",
    );

    let err = load_ingredients(file.path()).unwrap_err();
    assert!(matches!(err, MixError::CatalogEntry { .. }));
}

#[test]
fn test_load_ingredients_duplicate_name() {
    let file = write_catalog(
        "name,price,addiction,default_effect,replacements\n\
         Cuke,2.0,1,Energizing,\n\
         Cuke,3.0,1,Energizing,\n",
    );

    let err = load_ingredients(file.path()).unwrap_err();
    assert!(matches!(err, MixError::CatalogEntry { .. }));
}

#[test]
fn test_load_ingredients_unparseable_price() {
    let file = write_catalog(
        "name,price,addiction,default_effect,replacements\n\
         Cuke,cheap,1,Energizing,\n",
    );

    let err = load_ingredients(file.path()).unwrap_err();
    assert!(matches!(err, MixError::CatalogParse(_)));
}

#[test]
fn test_load_missing_file() {
    let err = load_ingredients(Path::new("no/such/catalog.csv")).unwrap_err();
    assert!(matches!(err, MixError::CatalogIo(_)));
}

#[test]
fn test_load_shipped_catalog() {
    let path = Path::new("data/ingredients.csv");
    if !path.exists() {
        // Skip if running outside the project root
        return;
    }

    let catalog = load_catalog(path).expect("Failed to load shipped catalog");
    assert_eq!(catalog.ingredient_count(), 16);

    let cuke = catalog.ingredient("Cuke").expect("Cuke should exist");
    assert_eq!(cuke.price, 2.0);
    assert_eq!(cuke.addiction, 1);

    let energy_drink = catalog
        .ingredient("Energy Drink")
        .expect("Energy Drink should exist");
    assert_eq!(energy_drink.default_effect, "Energizing");

    let chili = catalog.ingredient("Chili").expect("Chili should exist");
    assert_eq!(chili.price, 7.0);
    assert_eq!(
        chili.replacements[0],
        ("Athletic".to_string(), "Euphoric".to_string())
    );
}

#[test]
fn test_shipped_catalog_entries_are_valid() {
    let path = Path::new("data/ingredients.csv");
    if !path.exists() {
        return;
    }

    let catalog = load_catalog(path).expect("Failed to load shipped catalog");
    for ingredient in catalog.ingredients() {
        assert!(!ingredient.name.is_empty(), "Name should not be empty");
        assert!(ingredient.price >= 0.0, "Price should be non-negative");
        assert!(
            !ingredient.default_effect.is_empty(),
            "Default effect should not be empty"
        );
        for (old, new) in &ingredient.replacements {
            assert!(!old.is_empty() && !new.is_empty());
        }
    }
}
