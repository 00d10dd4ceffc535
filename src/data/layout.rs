use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::constants::{
    LAYOUT_BASE_X, LAYOUT_BASE_Y, LAYOUT_COLUMN_PITCH, LAYOUT_ODD_ROW_OFFSET, LAYOUT_ROW_PITCH,
};
use crate::models::node::Turbine;

/// Generate a staggered offshore grid of turbines. Odd rows are shifted half
/// a column pitch so adjacent rows interleave. Identifiers start at 1; 0 is
/// reserved for the CCP and -1 for the onshore point.
pub fn generate_turbine_layout(num_rows: usize, num_cols: usize) -> Vec<Turbine> {
    let mut turbines = Vec::with_capacity(num_rows * num_cols);
    let mut node_id = 1;
    for row in 0..num_rows {
        let leftmost_x = if row % 2 == 0 {
            LAYOUT_BASE_X
        } else {
            LAYOUT_BASE_X + LAYOUT_ODD_ROW_OFFSET
        };
        let y = LAYOUT_BASE_Y + row as f64 * LAYOUT_ROW_PITCH;
        for col in 0..num_cols {
            let x = leftmost_x + LAYOUT_COLUMN_PITCH * col as f64;
            turbines.push(Turbine::new(node_id, x, y));
            node_id += 1;
        }
    }
    turbines
}

/// Same grid with seeded positional jitter, for irregular-layout
/// experiments. The same seed always produces the same layout.
pub fn generate_jittered_layout(
    num_rows: usize,
    num_cols: usize,
    jitter: f64,
    seed: u64,
) -> Vec<Turbine> {
    if jitter <= 0.0 {
        return generate_turbine_layout(num_rows, num_cols);
    }
    let mut rng = StdRng::seed_from_u64(seed);
    generate_turbine_layout(num_rows, num_cols)
        .into_iter()
        .map(|turbine| {
            let dx = rng.gen_range(-jitter..=jitter);
            let dy = rng.gen_range(-jitter..=jitter);
            Turbine::new(turbine.id(), turbine.x() + dx, turbine.y() + dy)
        })
        .collect()
}
