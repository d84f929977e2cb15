use thiserror::Error;

use super::config::ConfigError;
use super::orientation::OrientationError;
use crate::core::kinetics::energy::EnergyError;
use crate::core::models::reaction::UnknownReactionType;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid physical input: {source}")]
    InvalidPhysicalInput {
        #[from]
        source: EnergyError,
    },

    #[error("Degenerate geometry: {source}")]
    DegenerateGeometry {
        #[from]
        source: OrientationError,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error(transparent)]
    ReactionType(#[from] UnknownReactionType),

    #[error("Workflow phase '{phase}' failed: {reason}")]
    PhaseFailed { phase: &'static str, reason: String },
}
