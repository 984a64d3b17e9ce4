use thiserror::Error;

// Database modules
pub mod connection;

// Re-export database connection functions
pub use connection::{connect, DatabasePool};

/// Database error enum
#[derive(Debug, Clone, Error)]
pub enum DatabaseError {
    /// Connection error
    #[error("Failed to connect to database: {0}")]
    Connection(String),

    /// Schema preparation error
    #[error("Database schema error: {0}")]
    Schema(String),

    /// Query error
    #[error("Database query error: {0}")]
    Query(String),
}
