use crate::config::catalog::CatalogError;

/// Failures of the network solver. Everything here is either a caller
/// configuration problem surfaced at input validation, or a fatal
/// internal-consistency bug in the builder/DP; there is no retry path.
#[derive(Debug)]
pub enum NetworkError {
    Catalog(CatalogError),
    EmptyCableCatalog,
    EmptyLayout,
    MstSelection,
    MissingFlow { parent: i32, child: i32 },
    UnassignedEdge { node_a: i32, node_b: i32 },
    BankReconstruction { level: usize },
}

impl From<CatalogError> for NetworkError {
    fn from(err: CatalogError) -> Self {
        NetworkError::Catalog(err)
    }
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::Catalog(e) => write!(f, "Catalog error: {}", e),
            NetworkError::EmptyCableCatalog => {
                write!(f, "No cable types available to size a bundle against")
            }
            NetworkError::EmptyLayout => {
                write!(f, "Cannot site a CCP for an empty turbine layout")
            }
            NetworkError::MstSelection => {
                write!(f, "No candidate edge found while the spanning tree is incomplete")
            }
            NetworkError::MissingFlow { parent, child } => {
                write!(f, "No flow recorded for tree edge ({}, {})", parent, child)
            }
            NetworkError::UnassignedEdge { node_a, node_b } => {
                write!(
                    f,
                    "Edge ({}, {}) completed network construction without a cable assignment",
                    node_a, node_b
                )
            }
            NetworkError::BankReconstruction { level } => {
                write!(
                    f,
                    "Transformer bank reconstruction found no predecessor at power level {}",
                    level
                )
            }
        }
    }
}

impl std::error::Error for NetworkError {}
