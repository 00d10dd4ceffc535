// Power Constants
pub const DEFAULT_TURBINE_POWER_MW: f64 = 12.0;

// Siting Constants
pub const CCP_CLEARANCE_RADIUS: f64 = 250.0;     // Minimum CCP-to-turbine spacing in metres
pub const DEFAULT_SITING_TOLERANCE: f64 = 1e-3;  // Ternary-search interval width

// Reserved Node Identifiers
pub const CCP_NODE_ID: i32 = 0;
pub const ONSHORE_NODE_ID: i32 = -1;

// Staggered Layout Geometry (metres)
pub const LAYOUT_BASE_X: f64 = 25_000.0;
pub const LAYOUT_ODD_ROW_OFFSET: f64 = 250.0;
pub const LAYOUT_BASE_Y: f64 = 2_000.0;
pub const LAYOUT_COLUMN_PITCH: f64 = 500.0;
pub const LAYOUT_ROW_PITCH: f64 = 750.0;
