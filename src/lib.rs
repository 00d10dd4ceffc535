// Module declarations for the seagrid offshore network designer

// Core solver modules
pub mod network {
    pub mod collection;
    pub mod error;
    pub mod export;
    pub mod selection;
    pub mod siting;
}

// Configuration modules
pub mod config {
    pub mod catalog;
    pub mod constants;
}

// Model definitions
pub mod models {
    pub mod edge;
    pub mod node;
}

// Data generation and loading
pub mod data {
    pub mod catalog_loader;
    pub mod layout;
}

// Solution reporting
pub mod analysis {
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod csv_export;
    pub mod logging;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::network::collection::design_collection_network;
pub use crate::network::export::compute_export_cost;
pub use crate::network::siting::optimize_ccp_on_ray;
pub use crate::models::node::{Ccp, Turbine};
