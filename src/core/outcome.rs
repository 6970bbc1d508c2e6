//! Uniform success/failure wrapper returned by every repository and service call.
//!
//! Services return [`Outcome<T>`], which is a plain `Result` so that `?`
//! short-circuits on the first failing step. Repositories return
//! `Result<T, Failure>` directly since they never attach success messages.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

use crate::core::traits::Entity;

/// Result of a service operation. `Outcome<()>` is the payload-free variant.
pub type Outcome<T = ()> = std::result::Result<Success<T>, Failure>;

/// Successful operation with its payload and any human-readable messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Success<T = ()> {
    pub data: T,
    pub messages: Vec<String>,
}

impl<T> Success<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            messages: Vec::new(),
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            messages: vec![message.into()],
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<U> {
        Success {
            data: f(self.data),
            messages: self.messages,
        }
    }
}

impl Success<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self::with_message((), message)
    }
}

/// Broad category of a failure, used to pick an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NotFound,
    Conflict,
    Persistence,
    Cancelled,
}

impl FailureKind {
    /// Message used when a failure is built without one.
    fn default_message(self) -> &'static str {
        match self {
            FailureKind::NotFound => "The requested record was not found",
            FailureKind::Conflict => "The request conflicts with stored data",
            FailureKind::Persistence => "The data store reported an error",
            FailureKind::Cancelled => "The operation was cancelled",
        }
    }
}

/// Failed operation carrying an ordered list of messages.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .messages.join("; "))]
pub struct Failure {
    kind: FailureKind,
    messages: Vec<String>,
}

impl Failure {
    pub fn new<I, S>(kind: FailureKind, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            messages.push(kind.default_message().to_string());
        }
        Self { kind, messages }
    }

    pub fn single(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            messages: vec![message.into()],
        }
    }

    /// Failure for a by-id lookup that matched nothing.
    pub fn not_found<E: Entity>(id: impl std::fmt::Display) -> Self {
        Self::single(
            FailureKind::NotFound,
            format!(
                "No {} with id matching '{}' was found in the database",
                E::NAME,
                id
            ),
        )
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::single(FailureKind::Conflict, message)
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::single(FailureKind::Persistence, message)
    }

    pub fn cancelled(operation: &str) -> Self {
        Self::single(
            FailureKind::Cancelled,
            format!("The {} operation was cancelled", operation),
        )
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl From<sqlx::Error> for Failure {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
                return Failure::conflict(db_err.message().to_string());
            }
        }
        Failure::persistence(err.to_string())
    }
}

/// JSON shape of an outcome on the wire.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub succeeded: bool,
    pub data: Option<T>,
    pub messages: Vec<String>,
}

impl<T> From<Success<T>> for Envelope<T> {
    fn from(success: Success<T>) -> Self {
        Self {
            succeeded: true,
            data: Some(success.data),
            messages: success.messages,
        }
    }
}

impl From<&Failure> for Envelope<()> {
    fn from(failure: &Failure) -> Self {
        Self {
            succeeded: false,
            data: None,
            messages: failure.messages.clone(),
        }
    }
}

impl ResponseError for Failure {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            FailureKind::NotFound => StatusCode::NOT_FOUND,
            FailureKind::Conflict => StatusCode::CONFLICT,
            FailureKind::Persistence => StatusCode::INTERNAL_SERVER_ERROR,
            FailureKind::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Envelope::from(self))
    }
}
