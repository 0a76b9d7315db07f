pub mod dump;
pub mod sample;
pub mod sections;


use dietree_encoder::{ConstructionError, ResolutionError};

/// Failures surfaced to the user as `error: ...`.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Encoder(#[from] dietree_encoder::Error),
    #[error("failed to serialize section sizes: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
