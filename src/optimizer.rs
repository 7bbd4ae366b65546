//! Mixing-sequence search algorithms for Mixmax.
//!
//! This module contains the core search logic: a bounded A*-style search
//! over fixed-length ingredient sequences ([`search_depth`]) and an
//! iterative-deepening controller ([`find_best_sequence`]) that shares one
//! wall-clock budget across candidate lengths.
//!
//! Both are single-threaded and cooperative: the only suspension points are
//! the cancellation and deadline checks performed once per popped node and
//! once per depth. Cancellation is an advisory `AtomicBool`, never a
//! preemptive interruption.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::models::{
    Catalog, DepthReport, EffectSet, Ingredient, MixOutcome, OptimizeFor, SearchParams,
};
use crate::rules::{apply_ingredient, profit, sale_price, sequence_cost};
use crate::{MixError, MixResult};

/// Score bonus per desired effect present in a child's effect set.
const DESIRED_EFFECT_BONUS: f64 = 10.0;

/// A node in the open queue.
///
/// Ordering is reversed so `BinaryHeap` (a max-heap) pops the lowest
/// `f`-score first. Ties break on `g`, then on insertion order, so repeated
/// runs expand nodes in the same order.
struct OpenNode {
    f: f64,
    g: f64,
    order: u64,
    cost: f64,
    sequence: Vec<String>,
    effects: EffectSet,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Searches for the best mix of exactly `exact_length` steps.
///
/// Runs a priority-first expansion over sequences drawn from `pool`,
/// stopping at the first goal-depth node popped, on timeout, on
/// cancellation, or when the queue runs dry. Timeout and cancellation are
/// not errors: the best result found so far is returned, which may be the
/// [`MixOutcome::none`] sentinel.
///
/// # Arguments
///
/// * `catalog` - The shared read-only catalog
/// * `pool` - Ingredient names the search may use; must be non-empty
/// * `base` - Base product for pricing
/// * `optimize_for` - Whether to minimize cost or maximize profit
/// * `exact_length` - Exact number of steps the sequence must have
/// * `desired_effects` - Effects rewarded with a score bonus (never a filter)
/// * `time_budget` - Wall-clock budget for this invocation
/// * `cancel` - Advisory cancellation flag, checked once per popped node
///
/// # Errors
///
/// [`MixError::InvalidConfiguration`] for an empty pool,
/// [`MixError::UnknownIngredient`] for a pool name missing from the catalog,
/// [`MixError::UnknownBaseProduct`] for an unknown base.
#[allow(clippy::too_many_arguments)]
pub fn search_depth(
    catalog: &Catalog,
    pool: &[String],
    base: &str,
    optimize_for: OptimizeFor,
    exact_length: usize,
    desired_effects: &[String],
    time_budget: Duration,
    cancel: &AtomicBool,
) -> MixResult<MixOutcome> {
    let start = Instant::now();

    if pool.is_empty() {
        return Err(MixError::InvalidConfiguration(
            "ingredient pool is empty".to_string(),
        ));
    }
    let base_price = catalog
        .base_price(base)
        .ok_or_else(|| MixError::UnknownBaseProduct(base.to_string()))?;
    let items: Vec<&Ingredient> = pool
        .iter()
        .map(|name| {
            catalog
                .ingredient(name)
                .ok_or_else(|| MixError::UnknownIngredient(name.clone()))
        })
        .collect::<MixResult<_>>()?;

    if exact_length == 0 {
        return Ok(MixOutcome {
            sequence: Vec::new(),
            effects: Vec::new(),
            cost: 0.0,
            profit: base_price.round(),
        });
    }

    // Single-application marginal profit per pool ingredient, best first.
    // The top-k prefix sum is the optimistic estimate of profit still
    // reachable in k remaining steps. It ignores the 8-effect cap and
    // replacement collisions, so it can overestimate.
    let mut yields = Vec::with_capacity(items.len());
    for ingredient in &items {
        let effects = apply_ingredient(&EffectSet::new(), ingredient);
        let sale = sale_price(catalog, &effects, base)?;
        yields.push(sale - ingredient.price);
    }
    yields.sort_by(|a: &f64, b: &f64| b.total_cmp(a));

    let mut open = BinaryHeap::new();
    let mut order: u64 = 0;
    open.push(OpenNode {
        f: 0.0,
        g: 0.0,
        order,
        cost: 0.0,
        sequence: Vec::new(),
        effects: EffectSet::new(),
    });

    // States already expanded. Two orderings that reach the same effect set
    // at the same depth are interchangeable for all future expansion.
    let mut closed: HashSet<(EffectSet, usize)> = HashSet::new();

    let mut best = MixOutcome::none();
    let mut popped: u64 = 0;

    loop {
        if cancel.load(AtomicOrdering::Relaxed) {
            break;
        }
        if start.elapsed() >= time_budget {
            break;
        }
        let Some(node) = open.pop() else {
            break;
        };
        popped += 1;
        let depth = node.sequence.len();

        if depth == exact_length {
            let cost = sequence_cost(catalog, &node.sequence)?;
            let total_profit = profit(catalog, &node.effects, cost, base)?;
            let candidate = MixOutcome {
                effects: node.effects.names(),
                sequence: node.sequence,
                cost,
                profit: total_profit,
            };
            if candidate.improves_on(&best, optimize_for) {
                best = candidate;
            }
            break;
        }

        if !closed.insert((node.effects.clone(), depth)) {
            continue;
        }

        let steps_left = exact_length - depth - 1;
        let heuristic: f64 = yields.iter().take(steps_left).sum();

        for ingredient in &items {
            let child_effects = apply_ingredient(&node.effects, ingredient);
            let child_cost = node.cost + ingredient.price;
            let sale = sale_price(catalog, &child_effects, base)?;
            let prof = sale - child_cost;

            let bonus = if desired_effects.is_empty() {
                0.0
            } else {
                let matched = desired_effects
                    .iter()
                    .filter(|e| child_effects.contains(e.as_str()))
                    .count();
                DESIRED_EFFECT_BONUS * matched as f64
            };

            let (g, f) = match optimize_for {
                OptimizeFor::Cost => (child_cost, child_cost - bonus),
                OptimizeFor::Profit => (-(prof + bonus), -(prof + bonus + heuristic)),
            };

            order += 1;
            let mut sequence = node.sequence.clone();
            sequence.push(ingredient.name.clone());
            open.push(OpenNode {
                f,
                g,
                order,
                cost: child_cost,
                sequence,
                effects: child_effects,
            });
        }
    }

    debug!(
        "depth {exact_length}: {popped} nodes popped, {} states closed, best profit {:.2}",
        closed.len(),
        best.profit
    );
    Ok(best)
}

/// Resolves the search pool from an allow-list.
///
/// An empty allow-list means the whole catalog. Unknown names are dropped
/// with a warning; an allow-list with no known names at all is a caller
/// error.
fn resolve_pool(catalog: &Catalog, allowed: &[String]) -> MixResult<Vec<String>> {
    if allowed.is_empty() {
        return Ok(catalog.ingredient_names());
    }
    let mut pool = Vec::with_capacity(allowed.len());
    for name in allowed {
        if catalog.ingredient(name).is_some() {
            pool.push(name.clone());
        } else {
            warn!("ignoring unknown ingredient {name:?} in allow-list");
        }
    }
    if pool.is_empty() {
        return Err(MixError::InvalidConfiguration(
            "allow-list contains no known ingredients".to_string(),
        ));
    }
    Ok(pool)
}

/// Runs [`search_depth`] for every depth in `[min_steps, max_steps]` and
/// returns the single best result across all attempted depths.
///
/// One wall-clock budget is shared across all depths: each invocation gets
/// whatever remains, and iteration stops once the budget is exhausted or
/// the cancellation flag is set. `on_depth` is invoked after every completed
/// depth with that depth's result and timing; it is the only interaction
/// point with the surrounding system.
///
/// An all-depths failure yields [`MixOutcome::none`], not an error: the
/// caller must treat it as "no feasible mix."
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use std::sync::atomic::AtomicBool;
/// use std::time::Duration;
///
/// use mixmax::data::load_catalog;
/// use mixmax::models::{OptimizeFor, SearchParams};
/// use mixmax::optimizer::find_best_sequence;
///
/// let catalog = load_catalog(Path::new("data/ingredients.csv")).unwrap();
/// let params = SearchParams {
///     optimize_for: OptimizeFor::Profit,
///     base: "Weed".to_string(),
///     min_steps: 1,
///     max_steps: 4,
///     allowed_ingredients: Vec::new(),
///     desired_effects: Vec::new(),
///     timeout: Duration::from_secs(10),
/// };
/// let cancel = AtomicBool::new(false);
/// let best = find_best_sequence(&catalog, &params, &cancel, |_| {}).unwrap();
/// ```
pub fn find_best_sequence(
    catalog: &Catalog,
    params: &SearchParams,
    cancel: &AtomicBool,
    mut on_depth: impl FnMut(DepthReport),
) -> MixResult<MixOutcome> {
    params.validate()?;
    let pool = resolve_pool(catalog, &params.allowed_ingredients)?;

    let start = Instant::now();
    let mut best = MixOutcome::none();

    for depth in params.min_steps..=params.max_steps {
        if cancel.load(AtomicOrdering::Relaxed) {
            break;
        }
        let elapsed = start.elapsed();
        if elapsed >= params.timeout {
            break;
        }
        let remaining = params.timeout - elapsed;

        let depth_start = Instant::now();
        let outcome = search_depth(
            catalog,
            &pool,
            &params.base,
            params.optimize_for,
            depth,
            &params.desired_effects,
            remaining,
            cancel,
        )?;

        on_depth(DepthReport {
            depth,
            profit: outcome.profit,
            sequence: outcome.sequence.clone(),
            remaining: params.timeout.saturating_sub(start.elapsed()),
            elapsed: depth_start.elapsed(),
        });

        if outcome.improves_on(&best, params.optimize_for) {
            best = outcome;
        }
    }

    Ok(best)
}
