use star_model::ValidationError;
use star_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("constellation {constellation} already holds {capacity} stars (Alpha to Omega)")]
    CapacityExceeded {
        constellation: String,
        capacity: usize,
    },

    #[error("no star matches '{key}'")]
    NotFound { key: String },

    #[error("'{key}' matches more than one star: {}", names.join(", "))]
    Ambiguous { key: String, names: Vec<String> },

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl CatalogError {
    /// Recoverable errors leave the catalog unchanged and can be shown to
    /// the user as a rejected request.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::CapacityExceeded { .. }
            | Self::NotFound { .. }
            | Self::Ambiguous { .. } => true,
            Self::Storage(error) => error.is_not_found(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
