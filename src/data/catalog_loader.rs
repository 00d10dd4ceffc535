use std::fs::File;

use serde::{Deserialize, Serialize};

use crate::config::catalog::{
    validate_cables, validate_transformers, CableType, CatalogError, TransformerType,
};

/// Caller-supplied catalog configuration. Order matters only for
/// tie-breaking during selection, never for feasibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub mv_cables: Vec<CableType>,
    #[serde(default)]
    pub hv_cables: Option<Vec<CableType>>,
    #[serde(default)]
    pub transformers: Option<Vec<TransformerType>>,
}

#[derive(Debug)]
pub enum CatalogLoadError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Invalid(CatalogError),
}

impl From<std::io::Error> for CatalogLoadError {
    fn from(err: std::io::Error) -> Self {
        CatalogLoadError::IoError(err)
    }
}

impl From<serde_json::Error> for CatalogLoadError {
    fn from(err: serde_json::Error) -> Self {
        CatalogLoadError::JsonError(err)
    }
}

impl From<CatalogError> for CatalogLoadError {
    fn from(err: CatalogError) -> Self {
        CatalogLoadError::Invalid(err)
    }
}

impl std::fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogLoadError::IoError(e) => write!(f, "IO error: {}", e),
            CatalogLoadError::JsonError(e) => write!(f, "JSON error: {}", e),
            CatalogLoadError::Invalid(e) => write!(f, "Invalid catalog: {}", e),
        }
    }
}

impl std::error::Error for CatalogLoadError {}

/// Load and validate cable/transformer catalogs from a JSON file.
pub fn load_catalogs(path: &str) -> Result<CatalogFile, CatalogLoadError> {
    let file = File::open(path)?;
    let catalogs: CatalogFile = serde_json::from_reader(file)?;
    validate_cables(&catalogs.mv_cables)?;
    if let Some(hv_cables) = &catalogs.hv_cables {
        validate_cables(hv_cables)?;
    }
    if let Some(transformers) = &catalogs.transformers {
        validate_transformers(transformers)?;
    }
    Ok(catalogs)
}

/// Built-in catalogs used when no catalog file is supplied.
pub fn default_catalogs() -> CatalogFile {
    CatalogFile {
        mv_cables: vec![
            CableType::new("mv1", 58.29, 1110.0),
            CableType::new("mv2", 90.87, 1515.0),
        ],
        hv_cables: Some(vec![
            CableType::new("hv1", 404.67, 1926.0),
            CableType::new("hv2", 490.41, 2475.0),
        ]),
        transformers: Some(vec![
            TransformerType::new("tr1", 180.0, 3.09e6),
            TransformerType::new("tr2", 360.0, 5.16e6),
        ]),
    }
}
