// SPDX-License-Identifier: MIT

//! Application error types.

/// Error type for workout construction and session store operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid metric: {0}")]
    InvalidMetric(String),

    #[error("Workout id already in collection: {0}")]
    DuplicateId(String),

    #[error("Workout not found: {0}")]
    NotFound(String),

    #[error("Durable storage unavailable: {0}")]
    PersistenceUnavailable(#[from] anyhow::Error),
}

impl Error {
    /// True if the operation's in-memory effect still took place and only the
    /// snapshot write failed. Callers may treat this as a non-fatal warning.
    pub fn is_persistence_warning(&self) -> bool {
        matches!(self, Error::PersistenceUnavailable(_))
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;
