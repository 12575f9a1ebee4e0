//! Error types for the `skyhoard-db` crate.

/// Errors that can occur in the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A record or link payload failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The connection configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A requested record does not exist.
    #[error("record not found: {0}")]
    NotFound(String),
}
