use serde::{Deserialize, Serialize};

/// A medium- or high-voltage cable product. Costs scale with length,
/// capacity is per single cable; bundles of parallel cables multiply both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableType {
    pub name: String,
    pub capacity: f64,
    pub cost_per_meter: f64,
}

impl CableType {
    pub fn new(name: &str, capacity: f64, cost_per_meter: f64) -> Self {
        Self {
            name: name.to_string(),
            capacity,
            cost_per_meter,
        }
    }
}

/// A transformer product for HV export. Fixed cost, independent of cable length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerType {
    pub name: String,
    pub rated_power: f64,
    pub cost: f64,
}

impl TransformerType {
    pub fn new(name: &str, rated_power: f64, cost: f64) -> Self {
        Self {
            name: name.to_string(),
            rated_power,
            cost,
        }
    }
}

#[derive(Debug)]
pub enum CatalogError {
    InvalidCapacity(String),
    InvalidCableCost(String),
    InvalidRating(String),
    InvalidTransformerCost(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::InvalidCapacity(name) => {
                write!(f, "Cable '{}' has non-positive capacity", name)
            }
            CatalogError::InvalidCableCost(name) => {
                write!(f, "Cable '{}' has non-positive cost per meter", name)
            }
            CatalogError::InvalidRating(name) => {
                write!(f, "Transformer '{}' has non-positive rated power", name)
            }
            CatalogError::InvalidTransformerCost(name) => {
                write!(f, "Transformer '{}' has non-positive cost", name)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Reject cable entries a bundle can never be sized against. Ceiling division
/// is always finite for positive capacity, so this is the only place a bad
/// catalog can be caught.
pub fn validate_cables(cables: &[CableType]) -> Result<(), CatalogError> {
    for cable in cables {
        if cable.capacity <= 0.0 || !cable.capacity.is_finite() {
            return Err(CatalogError::InvalidCapacity(cable.name.clone()));
        }
        if cable.cost_per_meter <= 0.0 || !cable.cost_per_meter.is_finite() {
            return Err(CatalogError::InvalidCableCost(cable.name.clone()));
        }
    }
    Ok(())
}

pub fn validate_transformers(transformers: &[TransformerType]) -> Result<(), CatalogError> {
    for transformer in transformers {
        if transformer.rated_power <= 0.0 || !transformer.rated_power.is_finite() {
            return Err(CatalogError::InvalidRating(transformer.name.clone()));
        }
        if transformer.cost <= 0.0 || !transformer.cost.is_finite() {
            return Err(CatalogError::InvalidTransformerCost(transformer.name.clone()));
        }
    }
    Ok(())
}
