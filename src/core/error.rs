/// Application-wide Result type for startup and configuration paths
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors raised while bootstrapping the service.
///
/// Request-scoped failures never use this type; they travel as
/// [`Failure`](crate::core::Failure) inside an [`Outcome`](crate::core::Outcome).
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Database connection errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration errors
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Socket binding and server I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
