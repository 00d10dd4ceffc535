use serde::{Deserialize, Serialize};

use crate::config::catalog::CableType;
use crate::models::node::Node;

/// A cable run between two nodes. Built without a cable assignment, then
/// completed once the flow is known; an edge still unassigned when a network
/// is finalized is a consistency bug, never a reportable result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub node_a: Node,
    pub node_b: Node,
    pub flow: f64,
    pub cable: Option<CableType>,
    pub num_cables: usize,
}

impl Edge {
    pub fn new(node_a: Node, node_b: Node) -> Self {
        Self {
            node_a,
            node_b,
            flow: 0.0,
            cable: None,
            num_cables: 0,
        }
    }

    pub fn length(&self) -> f64 {
        self.node_a.distance_to(&self.node_b)
    }

    /// Endpoint ids in tree orientation: node_a is the in-tree endpoint the
    /// edge was discovered from.
    pub fn endpoint_ids(&self) -> (i32, i32) {
        (self.node_a.id, self.node_b.id)
    }

    pub fn assign(&mut self, flow: f64, cable: CableType, num_cables: usize) {
        self.flow = flow;
        self.cable = Some(cable);
        self.num_cables = num_cables;
    }

    /// Cost = bundle count x cable cost per metre x run length.
    /// None until a cable has been assigned.
    pub fn cost(&self) -> Option<f64> {
        self.cable
            .as_ref()
            .map(|cable| self.num_cables as f64 * cable.cost_per_meter * self.length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::node::NodeRole;

    #[test]
    fn unassigned_edge_has_no_cost() {
        let a = Node::new(0, 0.0, 0.0, NodeRole::Collector);
        let b = Node::new(1, 100.0, 0.0, NodeRole::Turbine);
        let edge = Edge::new(a, b);
        assert!(edge.cost().is_none());
    }

    #[test]
    fn cost_scales_with_bundle_and_length() {
        let a = Node::new(0, 0.0, 0.0, NodeRole::Collector);
        let b = Node::new(1, 500.0, 0.0, NodeRole::Turbine);
        let mut edge = Edge::new(a, b);
        edge.assign(24.0, CableType::new("mv1", 58.29, 1110.0), 2);
        assert_eq!(edge.cost(), Some(2.0 * 1110.0 * 500.0));
        assert_eq!(edge.endpoint_ids(), (0, 1));
    }
}
