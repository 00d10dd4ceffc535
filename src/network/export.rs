use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::catalog::{validate_cables, validate_transformers, CableType, TransformerType};
use crate::models::node::{Ccp, Node};
use crate::network::error::NetworkError;
use crate::network::selection::{select_cable_bundle, size_transformer_bank, TransformerBank};

/// The chosen export configuration from CCP to shore. `transformers` is
/// populated only when the HV option won the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPlan {
    pub cost: f64,
    pub transformers: Option<TransformerBank>,
}

/// Minimum-cost export configuration: MV cable alone, or HV cable plus a
/// transformer bank sized by the knapsack DP.
///
/// The MV option is always priced. The HV option exists only when both an
/// HV catalog and a transformer catalog are supplied; its cable is sized to
/// the raw total power (capacity does not depend on the transformer count).
/// When no transformer bank is feasible, or on a cost tie, MV wins.
pub fn compute_export_cost(
    ccp: &Ccp,
    onshore: &Node,
    total_power: f64,
    mv_cables: &[CableType],
    hv_cables: Option<&[CableType]>,
    transformers: Option<&[TransformerType]>,
) -> Result<ExportPlan, NetworkError> {
    validate_cables(mv_cables)?;
    let hv_cables = hv_cables.filter(|catalog| !catalog.is_empty());
    let transformers = transformers.filter(|catalog| !catalog.is_empty());
    if let Some(catalog) = hv_cables {
        validate_cables(catalog)?;
    }
    if let Some(catalog) = transformers {
        validate_transformers(catalog)?;
    }

    let distance = ccp.node().distance_to(onshore);

    let (mv_cable, mv_num) =
        select_cable_bundle(total_power, mv_cables).ok_or(NetworkError::EmptyCableCatalog)?;
    let mv_cost = mv_num as f64 * mv_cable.cost_per_meter * distance;

    let (Some(hv_cables), Some(transformers)) = (hv_cables, transformers) else {
        return Ok(ExportPlan {
            cost: mv_cost,
            transformers: None,
        });
    };

    let (hv_cable, hv_num) =
        select_cable_bundle(total_power, hv_cables).ok_or(NetworkError::EmptyCableCatalog)?;
    let hv_cable_cost = hv_num as f64 * hv_cable.cost_per_meter * distance;

    let Some(bank) = size_transformer_bank(total_power, transformers)? else {
        return Ok(ExportPlan {
            cost: mv_cost,
            transformers: None,
        });
    };

    let hv_total_cost = hv_cable_cost + bank.total_cost;
    debug!(mv_cost, hv_total_cost, distance, "export options priced");

    if hv_total_cost < mv_cost {
        Ok(ExportPlan {
            cost: hv_total_cost,
            transformers: Some(bank),
        })
    } else {
        Ok(ExportPlan {
            cost: mv_cost,
            transformers: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::node::onshore_reference;

    fn mv_catalog() -> Vec<CableType> {
        vec![
            CableType::new("mv1", 58.29, 1110.0),
            CableType::new("mv2", 90.87, 1515.0),
        ]
    }

    fn hv_catalog() -> Vec<CableType> {
        vec![
            CableType::new("hv1", 404.67, 1926.0),
            CableType::new("hv2", 490.41, 2475.0),
        ]
    }

    fn transformer_catalog() -> Vec<TransformerType> {
        vec![
            TransformerType::new("tr1", 180.0, 3.09e6),
            TransformerType::new("tr2", 360.0, 5.16e6),
        ]
    }

    #[test]
    fn mv_only_when_hv_unavailable() {
        let ccp = Ccp::new(3_000.0, 4_000.0);
        let onshore = onshore_reference();
        let plan =
            compute_export_cost(&ccp, &onshore, 24.0, &mv_catalog(), None, None).unwrap();
        // 24 MW fits one mv1 over 5 km.
        assert_eq!(plan.cost, 1110.0 * 5_000.0);
        assert!(plan.transformers.is_none());
    }

    #[test]
    fn hv_wins_for_large_farms_over_long_distance() {
        // 336 MW (28 turbines) over ~25 km: MV needs 4 x mv2 strings, HV a
        // single hv1 plus a transformer bank, which undercuts it.
        let ccp = Ccp::new(25_000.0, 3_000.0);
        let onshore = onshore_reference();
        let distance = ccp.node().distance_to(&onshore);
        let plan = compute_export_cost(
            &ccp,
            &onshore,
            336.0,
            &mv_catalog(),
            Some(&hv_catalog()),
            Some(&transformer_catalog()),
        )
        .unwrap();

        let mv_cost = 4.0 * 1515.0 * distance;
        let hv_cost = 1926.0 * distance + 5.16e6;
        assert!(hv_cost < mv_cost);
        assert_eq!(plan.cost, hv_cost);
        let bank = plan.transformers.unwrap();
        assert_eq!(bank.units.get("tr2"), Some(&1));
    }

    #[test]
    fn mv_wins_over_short_distance() {
        // Close to shore the fixed transformer cost cannot amortize.
        let ccp = Ccp::new(500.0, 0.0);
        let onshore = onshore_reference();
        let plan = compute_export_cost(
            &ccp,
            &onshore,
            336.0,
            &mv_catalog(),
            Some(&hv_catalog()),
            Some(&transformer_catalog()),
        )
        .unwrap();
        assert_eq!(plan.cost, 4.0 * 1515.0 * 500.0);
        assert!(plan.transformers.is_none());
    }

    #[test]
    fn empty_hv_catalog_behaves_like_absent() {
        let ccp = Ccp::new(3_000.0, 4_000.0);
        let onshore = onshore_reference();
        let empty: Vec<CableType> = Vec::new();
        let with_empty = compute_export_cost(
            &ccp,
            &onshore,
            24.0,
            &mv_catalog(),
            Some(empty.as_slice()),
            Some(&transformer_catalog()),
        )
        .unwrap();
        let without =
            compute_export_cost(&ccp, &onshore, 24.0, &mv_catalog(), None, None).unwrap();
        assert_eq!(with_empty, without);
    }
}
