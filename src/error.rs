//! Typed errors returned by [`GameManager`](crate::GameManager) operations

use serde::Serialize;
use std::fmt;

/// Boxed underlying cause of a [`GameError`]
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification of a failed game operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameErrorKind {
    /// Fallback when nothing more specific is known
    #[default]
    Unknown,
    /// The schema could not be set up on the handle
    InitializationError,
    /// A statement failed to execute or its result could not be mapped
    InternalError,
    /// No row exists for the requested id
    NoGameFound,
    /// The operation needs a persisted game, but the id was unset
    MissingId,
}

impl fmt::Display for GameErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameErrorKind::Unknown => write!(f, "unknown error"),
            GameErrorKind::InitializationError => write!(f, "initialization error"),
            GameErrorKind::InternalError => write!(f, "internal error"),
            GameErrorKind::NoGameFound => write!(f, "no game found"),
            GameErrorKind::MissingId => write!(f, "game has no id"),
        }
    }
}

/// Failure of a game operation: a kind plus an optional cause
#[derive(Debug, Default, thiserror::Error)]
#[error("{kind}")]
pub struct GameError {
    kind: GameErrorKind,
    #[source]
    cause: Option<BoxedCause>,
}

impl GameError {
    pub fn new(kind: GameErrorKind) -> Self {
        Self { kind, cause: None }
    }

    pub fn with_cause(kind: GameErrorKind, cause: impl Into<BoxedCause>) -> Self {
        Self {
            kind,
            cause: Some(cause.into()),
        }
    }

    pub fn no_game_found() -> Self {
        Self::new(GameErrorKind::NoGameFound)
    }

    pub fn internal(cause: impl Into<BoxedCause>) -> Self {
        Self::with_cause(GameErrorKind::InternalError, cause)
    }

    pub fn kind(&self) -> GameErrorKind {
        self.kind
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl From<rusqlite::Error> for GameError {
    fn from(e: rusqlite::Error) -> Self {
        GameError::internal(e)
    }
}
