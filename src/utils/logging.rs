use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

// Categories for the operations worth timing separately.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum OperationCategory {
    NetworkBuild,
    ExportSizing,
    SitingSearch,
    FileIO,
    Other,
}

impl OperationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationCategory::NetworkBuild => "Network Build",
            OperationCategory::ExportSizing => "Export Sizing",
            OperationCategory::SitingSearch => "Siting Search",
            OperationCategory::FileIO => "File I/O",
            OperationCategory::Other => "Other Operations",
        }
    }
}

lazy_static! {
    static ref TIMING_ENABLED: AtomicBool = AtomicBool::new(false);
    static ref FUNCTION_TIMINGS: Arc<RwLock<HashMap<String, (Duration, usize)>>> =
        Arc::new(RwLock::new(HashMap::new()));
    static ref CATEGORY_TIMINGS: Arc<RwLock<HashMap<OperationCategory, (Duration, usize)>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

pub struct TimingGuard {
    function_name: String,
    category: OperationCategory,
    start: Instant,
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        record_timing_end(&self.function_name, self.start.elapsed(), &self.category);
    }
}

pub fn start_timing(function_name: &str, category: OperationCategory) -> TimingGuard {
    TimingGuard {
        function_name: function_name.to_string(),
        category,
        start: Instant::now(),
    }
}

fn record_timing_end(function_name: &str, duration: Duration, category: &OperationCategory) {
    if !is_timing_enabled() {
        return;
    }

    {
        let mut timings = FUNCTION_TIMINGS.write();
        let entry = timings
            .entry(function_name.to_string())
            .or_insert((Duration::from_nanos(0), 0));
        entry.0 += duration;
        entry.1 += 1;
    }

    {
        let mut timings = CATEGORY_TIMINGS.write();
        let entry = timings
            .entry(category.clone())
            .or_insert((Duration::from_nanos(0), 0));
        entry.0 += duration;
        entry.1 += 1;
    }
}

pub fn init_logging(enable_timing: bool, debug_logging: bool) {
    TIMING_ENABLED.store(enable_timing, Ordering::SeqCst);

    let mut env_filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());
    if debug_logging {
        env_filter = env_filter.add_directive("seagrid=debug".parse().expect("valid directive"));
    }

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty());

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set up tracing subscriber");
}

pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::SeqCst)
}

pub fn print_timing_report() {
    if !is_timing_enabled() {
        return;
    }

    println!("\nPerformance Report");
    println!("==================");

    println!("\nBy function:");
    let function_timings = FUNCTION_TIMINGS.read();
    let mut entries: Vec<_> = function_timings.iter().collect();
    entries.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));
    for (function_name, (total, count)) in entries {
        let avg = total.div_f64(*count as f64);
        println!(
            "{}: total={:.2}s, count={}, avg={:.2}ms",
            function_name,
            total.as_secs_f64(),
            count,
            avg.as_secs_f64() * 1000.0,
        );
    }

    println!("\nBy category:");
    let category_timings = CATEGORY_TIMINGS.read();
    let mut categories: Vec<_> = category_timings.iter().collect();
    categories.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));
    for (category, (total, count)) in categories {
        println!(
            "{}: total={:.2}s, count={}",
            category.as_str(),
            total.as_secs_f64(),
            count,
        );
    }
    println!("==================\n");
}
