use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::constants::{CCP_NODE_ID, ONSHORE_NODE_ID};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Behavioral role of a node in the network. Turbines source power, the
/// collector sinks it, the onshore point only anchors the export link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeRole {
    Turbine,
    Collector,
    Onshore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: i32,
    pub coordinate: Coordinate,
    pub role: NodeRole,
}

impl Node {
    pub fn new(id: i32, x: f64, y: f64, role: NodeRole) -> Self {
        Self {
            id,
            coordinate: Coordinate::new(x, y),
            role,
        }
    }

    pub fn distance_to(&self, other: &Node) -> f64 {
        self.coordinate.distance_to(&other.coordinate)
    }
}

/// The onshore reference point at the grid origin. Id -1 is reserved for it
/// and never appears in a turbine layout.
pub fn onshore_reference() -> Node {
    Node::new(ONSHORE_NODE_ID, 0.0, 0.0, NodeRole::Onshore)
}

/// A wind turbine with its realized cable relationships. Coordinates are
/// fixed for the lifetime of the entity; only the relationship lists change,
/// and only while a network is being built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turbine {
    node: Node,
    neighbors: Vec<i32>,
    connected: Vec<i32>,
}

impl Turbine {
    pub fn new(id: i32, x: f64, y: f64) -> Self {
        Self {
            node: Node::new(id, x, y, NodeRole::Turbine),
            neighbors: Vec::new(),
            connected: Vec::new(),
        }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn id(&self) -> i32 {
        self.node.id
    }

    pub fn x(&self) -> f64 {
        self.node.coordinate.x
    }

    pub fn y(&self) -> f64 {
        self.node.coordinate.y
    }

    /// Idempotent: recording the same neighbor twice is a no-op.
    pub fn add_neighbor(&mut self, id: i32) {
        if !self.neighbors.contains(&id) {
            self.neighbors.push(id);
        }
        if !self.connected.contains(&id) {
            self.connected.push(id);
        }
    }

    /// Read-only view of the realized cable neighbors.
    pub fn neighbors(&self) -> &[i32] {
        &self.neighbors
    }

    pub fn connected(&self) -> &[i32] {
        &self.connected
    }
}

/// Collection/Converter Point: the single site where all turbine strings
/// terminate before export to shore. Id 0 is reserved for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ccp {
    node: Node,
    connected_turbines: Vec<i32>,
    transformer_usage: Option<HashMap<String, usize>>,
}

impl Ccp {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            node: Node::new(CCP_NODE_ID, x, y, NodeRole::Collector),
            connected_turbines: Vec::new(),
            transformer_usage: None,
        }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn x(&self) -> f64 {
        self.node.coordinate.x
    }

    pub fn y(&self) -> f64 {
        self.node.coordinate.y
    }

    /// Idempotent: a turbine already on the list is not recorded twice.
    pub fn connect_turbine(&mut self, turbine_id: i32) {
        if !self.connected_turbines.contains(&turbine_id) {
            self.connected_turbines.push(turbine_id);
        }
    }

    /// Read-only view of the turbines wired directly to this CCP.
    pub fn connected_turbines(&self) -> &[i32] {
        &self.connected_turbines
    }

    pub fn set_transformer_usage(&mut self, usage: Option<HashMap<String, usize>>) {
        self.transformer_usage = usage;
    }

    /// Transformer-type name -> count, populated only when the optimal
    /// export configuration includes transformers.
    pub fn transformer_usage(&self) -> Option<&HashMap<String, usize>> {
        self.transformer_usage.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_distance() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn neighbor_bookkeeping_is_idempotent() {
        let mut turbine = Turbine::new(1, 25_000.0, 2_000.0);
        turbine.add_neighbor(2);
        turbine.add_neighbor(2);
        turbine.add_neighbor(0);
        assert_eq!(turbine.neighbors(), &[2, 0]);
        assert_eq!(turbine.connected(), &[2, 0]);
    }

    #[test]
    fn ccp_connection_is_idempotent() {
        let mut ccp = Ccp::new(10_000.0, 1_000.0);
        ccp.connect_turbine(3);
        ccp.connect_turbine(3);
        assert_eq!(ccp.connected_turbines(), &[3]);
        assert!(ccp.transformer_usage().is_none());
    }

    #[test]
    fn reserved_identifiers() {
        assert_eq!(Ccp::new(0.0, 0.0).node().id, 0);
        assert_eq!(onshore_reference().id, -1);
        assert_eq!(onshore_reference().role, NodeRole::Onshore);
    }
}
