use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::catalog::{CableType, TransformerType};
use crate::network::error::NetworkError;

/// Select the most cost-effective cable bundle for a required flow.
///
/// For each catalog entry the minimum count of parallel cables covering the
/// flow is the ceiling of flow over capacity; the entry minimizing
/// count x cost-per-metre wins, first entry on ties. The choice depends only
/// on flow and catalog, never on run length, so collection edges and export
/// links share it. Returns None only for an empty catalog.
pub fn select_cable_bundle<'a>(
    required_flow: f64,
    cable_options: &'a [CableType],
) -> Option<(&'a CableType, usize)> {
    let mut best: Option<(&CableType, usize)> = None;
    let mut best_cost_per_meter = f64::INFINITY;

    for cable_type in cable_options {
        let num_needed = (required_flow / cable_type.capacity).ceil() as usize;
        let cost_per_meter = num_needed as f64 * cable_type.cost_per_meter;
        if cost_per_meter < best_cost_per_meter {
            best_cost_per_meter = cost_per_meter;
            best = Some((cable_type, num_needed));
        }
    }

    best
}

/// A multiset of transformers covering a required power, with the exact
/// minimum cost the sizing DP computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerBank {
    pub total_cost: f64,
    pub units: HashMap<String, usize>,
}

impl TransformerBank {
    pub fn total_rated_power(&self, catalog: &[TransformerType]) -> f64 {
        self.units
            .iter()
            .map(|(name, count)| {
                catalog
                    .iter()
                    .find(|t| &t.name == name)
                    .map(|t| t.rated_power * *count as f64)
                    .unwrap_or(0.0)
            })
            .sum()
    }
}

/// Minimum-cost unbounded multiset of transformers whose summed rating
/// covers `total_power`, by dynamic programming over integer power levels.
///
/// Alongside the cost table the forward pass records, per reachable level,
/// which transformer type got there and from where. Reconstruction is then
/// an exact backward walk over that choice table; no floating-point
/// tolerance is involved. Returns Ok(None) when no combination is feasible.
pub fn size_transformer_bank(
    total_power: f64,
    transformers: &[TransformerType],
) -> Result<Option<TransformerBank>, NetworkError> {
    let target = total_power.max(0.0).ceil() as usize;

    // dp[p] = minimum transformer cost to cover at least p units of power,
    // choice[p] = (type index, predecessor level) realizing dp[p].
    let mut dp = vec![f64::INFINITY; target + 1];
    let mut choice: Vec<Option<(usize, usize)>> = vec![None; target + 1];
    dp[0] = 0.0;

    for p in 0..=target {
        if !dp[p].is_finite() {
            continue;
        }
        for (idx, transformer) in transformers.iter().enumerate() {
            let step = transformer.rated_power as usize;
            let next = (p + step).min(target);
            let candidate = dp[p] + transformer.cost;
            if candidate < dp[next] {
                dp[next] = candidate;
                choice[next] = Some((idx, p));
            }
        }
    }

    if !dp[target].is_finite() {
        return Ok(None);
    }

    let mut units: HashMap<String, usize> = HashMap::new();
    let mut level = target;
    while level > 0 {
        let (idx, previous) = choice[level].ok_or(NetworkError::BankReconstruction { level })?;
        *units.entry(transformers[idx].name.clone()).or_insert(0) += 1;
        level = previous;
    }

    Ok(Some(TransformerBank {
        total_cost: dp[target],
        units,
    }))
}
