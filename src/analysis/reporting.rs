use crate::models::node::{Ccp, Turbine};
use crate::network::collection::CollectionNetwork;
use crate::network::export::ExportPlan;

pub fn print_solution_summary(
    label: &str,
    turbines: &[Turbine],
    ccp: &Ccp,
    network: &CollectionNetwork,
    export: &ExportPlan,
) {
    println!("\nScenario: {}", label);
    println!("----------------------------------------");
    println!("Turbines: {}", turbines.len());
    println!("CCP position: ({:.1}, {:.1})", ccp.x(), ccp.y());
    println!(
        "Turbines wired directly to CCP: {}",
        ccp.connected_turbines().len()
    );
    println!("Collection edges: {}", network.edges.len());
    println!("Financial Summary:");
    println!("  Collection cost: ${:.2}", network.total_cost);
    println!("  Export cost: ${:.2}", export.cost);
    println!("  Total cost: ${:.2}", network.total_cost + export.cost);
    match ccp.transformer_usage() {
        Some(usage) => {
            println!("Export configuration: HV + transformers");
            let mut units: Vec<_> = usage.iter().collect();
            units.sort();
            for (name, count) in units {
                println!("  {} x {}", count, name);
            }
        }
        None => println!("Export configuration: MV only"),
    }
    println!("----------------------------------------");
}

pub fn print_edge_details(network: &CollectionNetwork) {
    println!("\nCollection Edges:");
    println!("----------------------------------------");
    for edge in &network.edges {
        let (from, to) = edge.endpoint_ids();
        let cable = edge
            .cable
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("unassigned");
        println!(
            "{} -> {}: {:.0} m, {:.1} MW, {} x {}, ${:.2}",
            from,
            to,
            edge.length(),
            edge.flow,
            edge.num_cables,
            cable,
            edge.cost().unwrap_or(0.0),
        );
    }
    println!("----------------------------------------");
}
