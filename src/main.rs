use std::error::Error;

use clap::Parser;
use tracing::info;

use seagrid::analysis::reporting;
use seagrid::cli::cli::Args;
use seagrid::config::catalog::{CableType, TransformerType};
use seagrid::data::catalog_loader::{self, CatalogFile};
use seagrid::data::layout::{generate_jittered_layout, generate_turbine_layout};
use seagrid::models::node::{onshore_reference, Turbine};
use seagrid::network::collection::design_collection_network;
use seagrid::network::export::compute_export_cost;
use seagrid::network::siting::optimize_ccp_on_ray;
use seagrid::utils::csv_export::export_solution;
use seagrid::utils::logging::{self, OperationCategory};

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging());

    println!("Seagrid Offshore Collection Network Designer");
    println!(
        "Debug logging: {}, CSV export: {}, Timing: {}",
        if args.debug_logging() { "enabled" } else { "disabled" },
        if args.enable_csv_export() { "enabled" } else { "disabled" },
        if args.enable_timing() { "enabled" } else { "disabled" }
    );

    let catalogs = load_catalogs(&args);

    if args.demo() {
        run_demo_scenarios(&args, &catalogs)?;
    } else {
        let turbines = build_layout(&args, args.rows(), args.cols());
        let hv_cables = if args.mv_only() {
            None
        } else {
            catalogs.hv_cables.as_deref()
        };
        let transformers = if args.mv_only() {
            None
        } else {
            catalogs.transformers.as_deref()
        };
        let label = format!("{}x{}", args.rows(), args.cols());
        solve_scenario(
            &args,
            &label,
            turbines,
            &catalogs.mv_cables,
            hv_cables,
            transformers,
        )?;
    }

    logging::print_timing_report();
    Ok(())
}

fn load_catalogs(args: &Args) -> CatalogFile {
    match args.catalogs() {
        Some(path) => match catalog_loader::load_catalogs(path) {
            Ok(catalogs) => catalogs,
            Err(e) => {
                eprintln!(
                    "Failed to load catalogs from {}: {}. Using built-in catalogs.",
                    path, e
                );
                catalog_loader::default_catalogs()
            }
        },
        None => catalog_loader::default_catalogs(),
    }
}

fn build_layout(args: &Args, rows: usize, cols: usize) -> Vec<Turbine> {
    match args.seed() {
        Some(seed) if args.jitter() > 0.0 => {
            generate_jittered_layout(rows, cols, args.jitter(), seed)
        }
        _ => generate_turbine_layout(rows, cols),
    }
}

fn solve_scenario(
    args: &Args,
    label: &str,
    mut turbines: Vec<Turbine>,
    mv_cables: &[CableType],
    hv_cables: Option<&[CableType]>,
    transformers: Option<&[TransformerType]>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!(
        scenario = label,
        turbines = turbines.len(),
        hv_available = hv_cables.is_some(),
        "solving scenario"
    );

    let mut ccp = {
        let _timing = logging::start_timing("optimize_ccp_on_ray", OperationCategory::SitingSearch);
        optimize_ccp_on_ray(
            &turbines,
            mv_cables,
            hv_cables,
            transformers,
            args.turbine_power(),
            args.tolerance(),
        )?
    };

    // Materialize the final network and export configuration at the
    // optimized site for reporting.
    let network = {
        let _timing =
            logging::start_timing("design_collection_network", OperationCategory::NetworkBuild);
        design_collection_network(&mut turbines, &mut ccp, mv_cables, args.turbine_power())?
    };
    let export = {
        let _timing = logging::start_timing("compute_export_cost", OperationCategory::ExportSizing);
        compute_export_cost(
            &ccp,
            &onshore_reference(),
            args.turbine_power() * turbines.len() as f64,
            mv_cables,
            hv_cables,
            transformers,
        )?
    };

    reporting::print_solution_summary(label, &turbines, &ccp, &network, &export);
    if args.debug_logging() {
        reporting::print_edge_details(&network);
    }

    if args.enable_csv_export() {
        let _timing = logging::start_timing("export_solution", OperationCategory::FileIO);
        let dir = export_solution(
            args.output_dir(),
            label,
            &turbines,
            &ccp,
            &network,
            &export,
        )?;
        println!("Solution written to {}", dir.display());
    }

    Ok(())
}

// The four reference scenarios: small and large staggered farms, each solved
// with and without the HV export option.
fn run_demo_scenarios(
    args: &Args,
    catalogs: &CatalogFile,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let grids = [(4usize, 7usize), (6, 10)];
    for (rows, cols) in grids {
        for hv_available in [true, false] {
            let turbines = build_layout(args, rows, cols);
            let label = format!(
                "{}x{}_{}",
                rows,
                cols,
                if hv_available { "hv" } else { "mv_only" }
            );
            let hv_cables = if hv_available {
                catalogs.hv_cables.as_deref()
            } else {
                None
            };
            let transformers = if hv_available {
                catalogs.transformers.as_deref()
            } else {
                None
            };
            solve_scenario(
                args,
                &label,
                turbines,
                &catalogs.mv_cables,
                hv_cables,
                transformers,
            )?;
        }
    }
    Ok(())
}
