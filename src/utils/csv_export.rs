use std::error::Error;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use crate::models::node::{Ccp, Turbine};
use crate::network::collection::CollectionNetwork;
use crate::network::export::ExportPlan;

#[derive(Debug, Serialize)]
struct EdgeRecord<'a> {
    from_id: i32,
    to_id: i32,
    length_m: f64,
    flow_mw: f64,
    cable: &'a str,
    num_cables: usize,
    cost: f64,
}

#[derive(Debug, Serialize)]
struct SolutionRecord<'a> {
    scenario: &'a str,
    turbines: &'a [Turbine],
    ccp: &'a Ccp,
    collection: &'a CollectionNetwork,
    export: &'a ExportPlan,
    total_cost: f64,
}

/// Write the solved network to a timestamped directory: an edge table as CSV
/// and the full solution as JSON. Returns the directory created.
pub fn export_solution(
    output_dir: &str,
    label: &str,
    turbines: &[Turbine],
    ccp: &Ccp,
    network: &CollectionNetwork,
    export: &ExportPlan,
) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let dir = Path::new(output_dir).join(format!("{}_{}", label, timestamp));
    fs::create_dir_all(&dir)?;

    let mut writer = csv::Writer::from_path(dir.join("edges.csv"))?;
    for edge in &network.edges {
        let (from_id, to_id) = edge.endpoint_ids();
        writer.serialize(EdgeRecord {
            from_id,
            to_id,
            length_m: edge.length(),
            flow_mw: edge.flow,
            cable: edge
                .cable
                .as_ref()
                .map(|cable| cable.name.as_str())
                .unwrap_or("unassigned"),
            num_cables: edge.num_cables,
            cost: edge.cost().unwrap_or(0.0),
        })?;
    }
    writer.flush()?;

    let solution = SolutionRecord {
        scenario: label,
        turbines,
        ccp,
        collection: network,
        export,
        total_cost: network.total_cost + export.cost,
    };
    let file = File::create(dir.join("solution.json"))?;
    serde_json::to_writer_pretty(file, &solution)?;

    Ok(dir)
}
