use thiserror::Error;

use super::{RequestError, ResolveError};

/// Everything that can sink one attempt. Never fatal: the worker logs one
/// line, counts the failure, and moves on.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Request(#[from] RequestError),
}
