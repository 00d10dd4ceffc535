use clap::Parser;

use crate::config::constants::{DEFAULT_SITING_TOLERANCE, DEFAULT_TURBINE_POWER_MW};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short = 'r', long, default_value_t = 4)]
    rows: usize,

    #[arg(short = 'c', long, default_value_t = 7)]
    cols: usize,

    #[arg(long, default_value_t = DEFAULT_TURBINE_POWER_MW, help = "Per-turbine power output in MW")]
    turbine_power: f64,

    #[arg(long, default_value_t = DEFAULT_SITING_TOLERANCE, help = "Siting search convergence tolerance")]
    tolerance: f64,

    #[arg(long, help = "JSON file with cable and transformer catalogs")]
    catalogs: Option<String>,

    #[arg(short = 'o', long, default_value = "results")]
    output_dir: String,

    #[arg(long, default_value_t = 0.0, help = "Positional jitter applied to the grid, in metres")]
    jitter: f64,

    #[arg(long, help = "Random seed for deterministic layout jitter")]
    seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    mv_only: bool,

    #[arg(long, default_value_t = false)]
    enable_csv_export: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,

    #[arg(long, help = "Run the built-in demo scenarios instead of a single run", default_value_t = false)]
    demo: bool,
}

// Getter methods for all fields
impl Args {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn turbine_power(&self) -> f64 {
        self.turbine_power
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn catalogs(&self) -> Option<&str> {
        self.catalogs.as_deref()
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn mv_only(&self) -> bool {
        self.mv_only
    }

    pub fn enable_csv_export(&self) -> bool {
        self.enable_csv_export
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }

    pub fn demo(&self) -> bool {
        self.demo
    }
}
