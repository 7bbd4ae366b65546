//! # Mixmax
//!
//! A command-line tool and library for finding the best mixing sequence to
//! apply to a base product in Schedule 1.
//!
//! This crate provides functionality to search for the ordered sequence of
//! mixing ingredients (a "mix") that maximizes profit or minimizes cost,
//! based on:
//!
//! - A catalog of ingredients with prices, addiction levels and effect rules
//! - A deterministic effect-combination rule engine (capped at 8 effects)
//! - A bounded A*-style search over fixed-length sequences
//! - An iterative-deepening controller sharing one time budget across depths
//!
//! ## Modules
//!
//! - [`models`] - Core data structures for ingredients, effect sets and results
//! - [`data`] - CSV catalog loading
//! - [`rules`] - Effect combination, cost, sale price, profit and addiction
//! - [`optimizer`] - Sequence search algorithms
//! - [`display`] - Output formatting and display utilities
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::atomic::AtomicBool;
//! use std::time::Duration;
//!
//! use mixmax::{
//!     data::load_catalog,
//!     models::{OptimizeFor, SearchParams},
//!     optimizer::find_best_sequence,
//! };
//!
//! // Load the ingredient catalog
//! let catalog = load_catalog(Path::new("data/ingredients.csv")).unwrap();
//!
//! // Search up to 5 mixing steps on Meth, 30 seconds total budget
//! let params = SearchParams {
//!     optimize_for: OptimizeFor::Profit,
//!     base: "Meth".to_string(),
//!     min_steps: 1,
//!     max_steps: 5,
//!     allowed_ingredients: Vec::new(),
//!     desired_effects: Vec::new(),
//!     timeout: Duration::from_secs(30),
//! };
//!
//! let cancel = AtomicBool::new(false);
//! let best = find_best_sequence(&catalog, &params, &cancel, |report| {
//!     println!("depth {} done, profit {:.2}", report.depth, report.profit);
//! })
//! .unwrap();
//!
//! if !best.is_none() {
//!     println!("best mix: {:?} (profit {:.2})", best.sequence, best.profit);
//! }
//! ```
//!
//! ## Optimization Modes
//!
//! The optimizer supports two modes:
//!
//! 1. **Profit** (default): Maximizes `round(sale price) - cost`, guided by an
//!    optimistic per-step marginal-profit heuristic.
//!
//! 2. **Cost**: Minimizes the total ingredient cost of the sequence.
//!
//! Timeout and cancellation are not errors: the search returns the best
//! result found so far, or the [`models::MixOutcome::none`] sentinel when no
//! sequence was completed in time.

use thiserror::Error;

pub mod data;
pub mod display;
pub mod models;
pub mod optimizer;
pub mod rules;

/// Mixmax error types.
#[derive(Debug, Error)]
pub enum MixError {
    #[error("failed to read catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] csv::Error),

    #[error("malformed catalog entry {name:?}: {reason}")]
    CatalogEntry { name: String, reason: String },

    #[error("unknown ingredient {0:?}")]
    UnknownIngredient(String),

    #[error("unknown base product {0:?}")]
    UnknownBaseProduct(String),

    #[error("invalid search configuration: {0}")]
    InvalidConfiguration(String),
}

pub type MixResult<T> = Result<T, MixError>;
