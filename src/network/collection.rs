use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::catalog::{validate_cables, CableType};
use crate::models::edge::Edge;
use crate::models::node::{Ccp, Node, NodeRole, Turbine};
use crate::network::error::NetworkError;
use crate::network::selection::select_cable_bundle;

/// A fully assigned collection network: every edge carries its flow, cable
/// type and bundle count, and the cost is the sum over all edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionNetwork {
    pub edges: Vec<Edge>,
    pub total_cost: f64,
}

/// Rooted tree over the node arena: children[i] lists (child arena index,
/// edge index) pairs discovered under arena node i.
struct RootedTree {
    children: Vec<Vec<(usize, usize)>>,
}

/// Prim's algorithm rooted at arena index 0 (the CCP). The O(n^2) scan over
/// (in-tree, out-of-tree) pairs is fine at tens to low hundreds of turbines.
/// Ties break on the first minimum found in iteration order; callers rely on
/// that for reproducible layouts.
fn build_rooted_mst(arena: &[Node]) -> Result<(Vec<Edge>, RootedTree), NetworkError> {
    let n = arena.len();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut tree = RootedTree {
        children: vec![Vec::new(); n],
    };
    if n <= 1 {
        return Ok((edges, tree));
    }

    let mut in_tree = vec![false; n];
    in_tree[0] = true;
    let mut joined = 1;

    while joined < n {
        let mut best: Option<(usize, usize)> = None;
        let mut best_distance = f64::INFINITY;
        for (i, node) in arena.iter().enumerate() {
            if !in_tree[i] {
                continue;
            }
            for (j, other) in arena.iter().enumerate() {
                if in_tree[j] {
                    continue;
                }
                let distance = node.distance_to(other);
                if distance < best_distance {
                    best_distance = distance;
                    best = Some((i, j));
                }
            }
        }

        // A complete graph always has a crossing edge; hitting this means
        // the in-tree bookkeeping is broken.
        let (parent, child) = best.ok_or(NetworkError::MstSelection)?;
        in_tree[child] = true;
        tree.children[parent].push((child, edges.len()));
        edges.push(Edge::new(arena[parent].clone(), arena[child].clone()));
        joined += 1;
    }

    Ok((edges, tree))
}

/// Derive per-edge power flow from the rooted tree. Each edge carries the
/// total output of the subtree hanging below it; the CCP itself contributes
/// nothing. Traversal is an explicit stack, so deep strings of turbines
/// cannot overflow the call stack.
fn propagate_flows(
    arena: &[Node],
    tree: &RootedTree,
    turbine_power: f64,
) -> HashMap<(i32, i32), f64> {
    let mut order = Vec::with_capacity(arena.len());
    let mut stack = vec![0usize];
    while let Some(index) = stack.pop() {
        order.push(index);
        for (child, _) in &tree.children[index] {
            stack.push(*child);
        }
    }

    // Children appear after their parent in `order`, so a reverse sweep sees
    // every subtree total before the node above it needs it.
    let mut subtree_power = vec![0.0; arena.len()];
    for index in order.iter().rev() {
        let mut total = match arena[*index].role {
            NodeRole::Turbine => turbine_power,
            NodeRole::Collector | NodeRole::Onshore => 0.0,
        };
        for (child, _) in &tree.children[*index] {
            total += subtree_power[*child];
        }
        subtree_power[*index] = total;
    }

    let mut flows = HashMap::new();
    for (parent, children) in tree.children.iter().enumerate() {
        for (child, _) in children {
            flows.insert(
                (arena[parent].id, arena[*child].id),
                subtree_power[*child],
            );
        }
    }
    flows
}

/// Update turbine neighbor lists and the CCP's connected-turbine list to
/// reflect the realized tree. All bookkeeping entry points are idempotent,
/// so re-running a build over the same entities cannot duplicate links.
fn apply_connections(turbines: &mut [Turbine], ccp: &mut Ccp, edges: &[Edge]) {
    let by_id: HashMap<i32, usize> = turbines
        .iter()
        .enumerate()
        .map(|(index, turbine)| (turbine.id(), index))
        .collect();

    for edge in edges {
        for (this, other) in [
            (&edge.node_a, &edge.node_b),
            (&edge.node_b, &edge.node_a),
        ] {
            match this.role {
                NodeRole::Turbine => {
                    if let Some(index) = by_id.get(&this.id) {
                        turbines[*index].add_neighbor(other.id);
                    }
                }
                NodeRole::Collector => {
                    if other.role == NodeRole::Turbine {
                        ccp.connect_turbine(other.id);
                    }
                }
                NodeRole::Onshore => {}
            }
        }
    }
}

/// Design the capacity-aware collection network wiring every turbine to the
/// CCP.
///
/// Builds the rooted MST, derives per-edge flows, sizes the cheapest
/// adequate MV cable bundle onto each edge, updates relationship
/// bookkeeping, and returns the completed edges with their summed cost.
/// An edge whose flow is missing from the flow map, or that finishes
/// unassigned, surfaces as a fatal `NetworkError`.
pub fn design_collection_network(
    turbines: &mut [Turbine],
    ccp: &mut Ccp,
    cable_options: &[CableType],
    turbine_power: f64,
) -> Result<CollectionNetwork, NetworkError> {
    validate_cables(cable_options)?;

    // CCP first: arena index 0 is the MST root.
    let arena: Vec<Node> = std::iter::once(ccp.node().clone())
        .chain(turbines.iter().map(|turbine| turbine.node().clone()))
        .collect();

    let (mut edges, tree) = build_rooted_mst(&arena)?;
    let flows = propagate_flows(&arena, &tree, turbine_power);

    for edge in edges.iter_mut() {
        let key = edge.endpoint_ids();
        let flow = *flows.get(&key).ok_or(NetworkError::MissingFlow {
            parent: key.0,
            child: key.1,
        })?;
        let (cable, num_cables) =
            select_cable_bundle(flow, cable_options).ok_or(NetworkError::EmptyCableCatalog)?;
        edge.assign(flow, cable.clone(), num_cables);
    }

    apply_connections(turbines, ccp, &edges);

    let mut total_cost = 0.0;
    for edge in &edges {
        let (node_a, node_b) = edge.endpoint_ids();
        total_cost += edge.cost().ok_or(NetworkError::UnassignedEdge { node_a, node_b })?;
    }

    debug!(
        turbines = turbines.len(),
        edges = edges.len(),
        total_cost,
        "collection network built"
    );

    Ok(CollectionNetwork { edges, total_cost })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn mv_catalog() -> Vec<CableType> {
        vec![CableType::new("mv1", 58.29, 1110.0)]
    }

    fn line_of_turbines(count: usize) -> Vec<Turbine> {
        (0..count)
            .map(|i| Turbine::new(i as i32 + 1, 25_000.0 + 500.0 * i as f64, 2_000.0))
            .collect()
    }

    #[test]
    fn network_is_a_spanning_tree() {
        let mut turbines = line_of_turbines(6);
        let mut ccp = Ccp::new(24_000.0, 2_000.0);
        let network =
            design_collection_network(&mut turbines, &mut ccp, &mv_catalog(), 12.0).unwrap();

        // N turbines, N edges, every turbine reached exactly once.
        assert_eq!(network.edges.len(), 6);
        let mut reached: HashSet<i32> = HashSet::new();
        for edge in &network.edges {
            let (_, child) = edge.endpoint_ids();
            assert!(reached.insert(child), "node {} added twice", child);
        }
        assert_eq!(reached.len(), 6);
    }

    #[test]
    fn flows_accumulate_down_the_string() {
        // A line of turbines hangs off the CCP as a single string, so the
        // edge nearest the CCP carries the whole farm.
        let mut turbines = line_of_turbines(4);
        let mut ccp = Ccp::new(24_000.0, 2_000.0);
        let network =
            design_collection_network(&mut turbines, &mut ccp, &mv_catalog(), 12.0).unwrap();

        let mut flows: Vec<f64> = network.edges.iter().map(|e| e.flow).collect();
        flows.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(flows, vec![12.0, 24.0, 36.0, 48.0]);
    }

    #[test]
    fn every_edge_is_fully_assigned() {
        let mut turbines = line_of_turbines(5);
        let mut ccp = Ccp::new(24_000.0, 2_000.0);
        let network =
            design_collection_network(&mut turbines, &mut ccp, &mv_catalog(), 12.0).unwrap();
        for edge in &network.edges {
            assert!(edge.cable.is_some());
            assert!(edge.num_cables >= 1);
            assert!(edge.cost().is_some());
        }
    }

    #[test]
    fn bookkeeping_reflects_the_tree() {
        let mut turbines = line_of_turbines(3);
        let mut ccp = Ccp::new(24_000.0, 2_000.0);
        design_collection_network(&mut turbines, &mut ccp, &mv_catalog(), 12.0).unwrap();

        // Nearest turbine hangs off the CCP, the rest chain along the line.
        assert_eq!(ccp.connected_turbines(), &[1]);
        assert_eq!(turbines[0].neighbors(), &[0, 2]);
        assert_eq!(turbines[1].neighbors(), &[1, 3]);
        assert_eq!(turbines[2].neighbors(), &[2]);
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let mut turbines = line_of_turbines(5);
        let mut ccp = Ccp::new(24_000.0, 2_000.0);
        let first =
            design_collection_network(&mut turbines, &mut ccp, &mv_catalog(), 12.0).unwrap();
        let second =
            design_collection_network(&mut turbines, &mut ccp, &mv_catalog(), 12.0).unwrap();
        assert_eq!(first, second);
        assert_eq!(ccp.connected_turbines().len(), 1);
    }

    #[test]
    fn empty_layout_yields_empty_network() {
        let mut turbines: Vec<Turbine> = Vec::new();
        let mut ccp = Ccp::new(24_000.0, 2_000.0);
        let network =
            design_collection_network(&mut turbines, &mut ccp, &mv_catalog(), 12.0).unwrap();
        assert!(network.edges.is_empty());
        assert_eq!(network.total_cost, 0.0);
    }

    #[test]
    fn invalid_catalog_is_rejected() {
        let mut turbines = line_of_turbines(2);
        let mut ccp = Ccp::new(24_000.0, 2_000.0);
        let bad = vec![CableType::new("mv1", -1.0, 1110.0)];
        assert!(design_collection_network(&mut turbines, &mut ccp, &bad, 12.0).is_err());
    }
}
