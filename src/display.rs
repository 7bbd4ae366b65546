//! Display and formatting utilities for Mixmax.
//!
//! This module provides functions for formatting output and displaying
//! search results to the user in a readable format.

use crate::models::{Catalog, DepthReport, MixOutcome};

/// Formats a duration in seconds to a human-readable string.
///
/// # Arguments
///
/// * `seconds` - Duration in seconds
///
/// # Returns
///
/// A formatted string like "1h 30m 45s", "15m 30s", or "45s"
///
/// # Example
///
/// ```
/// use mixmax::display::format_time;
///
/// assert_eq!(format_time(3665.0), "1h 1m 5s");
/// assert_eq!(format_time(125.0), "2m 5s");
/// assert_eq!(format_time(45.0), "45s");
/// ```
pub fn format_time(seconds: f64) -> String {
    let hours = (seconds / 3600.0).floor();
    let minutes = ((seconds % 3600.0) / 60.0).floor();
    let secs = seconds % 60.0;

    if hours > 0.0 {
        format!("{}h {}m {:.0}s", hours, minutes, secs)
    } else if minutes > 0.0 {
        format!("{}m {:.0}s", minutes, secs)
    } else {
        format!("{:.0}s", secs)
    }
}

/// Formats an ingredient sequence as a single arrow-separated line.
///
/// # Example
///
/// ```
/// use mixmax::display::format_sequence;
///
/// let seq = vec!["Energy Drink".to_string(), "Chili".to_string()];
/// assert_eq!(format_sequence(&seq), "Energy Drink -> Chili");
/// assert_eq!(format_sequence(&[]), "(none)");
/// ```
pub fn format_sequence(sequence: &[String]) -> String {
    if sequence.is_empty() {
        "(none)".to_string()
    } else {
        sequence.join(" -> ")
    }
}

/// Prints one per-depth progress line from the controller callback.
pub fn display_depth_progress(report: &DepthReport) {
    if report.sequence.is_empty() {
        println!(
            "  Depth {}: no sequence found, remaining={}, took={}",
            report.depth,
            format_time(report.remaining.as_secs_f64()),
            format_time(report.elapsed.as_secs_f64()),
        );
    } else {
        println!(
            "  Depth {}: profit={:.2}, seq={}, remaining={}, took={}",
            report.depth,
            report.profit,
            format_sequence(&report.sequence),
            format_time(report.remaining.as_secs_f64()),
            format_time(report.elapsed.as_secs_f64()),
        );
    }
}

/// Displays the complete search result to stdout.
///
/// This function prints:
/// - The winning sequence with per-step prices
/// - The resulting effects with their sale multipliers
/// - Summary statistics (cost, sale price, profit, addiction)
///
/// # Arguments
///
/// * `catalog` - The catalog used for the search
/// * `outcome` - The best mix found
/// * `base` - The base product that was mixed on
/// * `addiction` - Total addiction level of the winning sequence
pub fn display_outcome(catalog: &Catalog, outcome: &MixOutcome, base: &str, addiction: u32) {
    println!();
    println!("+================================================================+");
    println!("|                     BEST MIX FOUND                             |");
    println!("+================================================================+");
    println!();

    println!("[SEQUENCE] ({} steps on {})", outcome.sequence.len(), base);
    println!("----------------------------------------------------------------");
    for (i, name) in outcome.sequence.iter().enumerate() {
        let price = catalog.ingredient(name).map_or(0.0, |ing| ing.price);
        println!("  {}. {} (${:.2})", i + 1, name, price);
    }
    println!();

    println!("[EFFECTS] ({} of 8)", outcome.effects.len());
    println!("----------------------------------------------------------------");
    for effect in &outcome.effects {
        println!("  {} (x{:.2})", effect, catalog.multiplier(effect));
    }
    println!();

    let sale = outcome.cost + outcome.profit;
    println!("[SUMMARY]");
    println!("----------------------------------------------------------------");
    println!("  Cost:       ${:.2}", outcome.cost);
    println!("  Sale Price: ${:.2}", sale);
    println!("  Profit:     ${:.2}", outcome.profit);
    println!("  Addiction:  {}", addiction);
}

/// Prints the "no feasible mix" warning.
pub fn display_no_result() {
    println!();
    println!("[WARNING] No mix found within the step and time budget.");
    println!("Try fewer steps, a larger timeout, or a wider ingredient list.");
}

/// Prints the loaded catalog: ingredients, base products and effect
/// multipliers.
pub fn display_catalog(catalog: &Catalog) {
    println!();
    println!("[INGREDIENTS] ({})", catalog.ingredient_count());
    println!("----------------------------------------------------------------");
    for ingredient in catalog.ingredients() {
        println!(
            "  {:<14} ${:<5.2} addiction {:<3} default {}",
            ingredient.name, ingredient.price, ingredient.addiction, ingredient.default_effect
        );
        for (old, new) in &ingredient.replacements {
            println!("      {} -> {}", old, new);
        }
    }

    println!();
    println!("[BASE PRODUCTS]");
    println!("----------------------------------------------------------------");
    for name in catalog.base_names() {
        let price = catalog.base_price(&name).unwrap_or(0.0);
        println!("  {:<10} ${:.2}", name, price);
    }

    println!();
    println!("[EFFECT MULTIPLIERS]");
    println!("----------------------------------------------------------------");
    for (effect, mult) in catalog.effect_multipliers() {
        println!("  {:<18} x{:.2}", effect, mult);
    }
}
