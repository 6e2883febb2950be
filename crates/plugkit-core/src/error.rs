//! Error type shared by the flag helpers.

use thiserror::Error;

use crate::secret::SecretError;
use crate::threads::ThreadsError;

/// Landing page appended to user-facing validation messages.
pub const DOCUMENTATION_URL: &str = "https://jfrog.com/help/r/jfrog-cli";

pub fn documentation_message() -> String {
    format!("You can read the documentation at {}", DOCUMENTATION_URL)
}

/// Failure returned by the flag extraction helpers.
///
/// `Validation` and `Usage` are produced here; the remaining variants wrap a
/// collaborator's error unchanged so callers can still match on it.
#[derive(Debug, Error)]
pub enum FlagError {
    /// Malformed or out-of-range flag value.
    #[error("{0}")]
    Validation(String),
    /// Command help was printed alongside this message.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Threads(#[from] ThreadsError),
    #[error(transparent)]
    Secret(#[from] SecretError),
    /// The command context failed to print its help text.
    #[error("failed to print command help")]
    Help(#[source] std::io::Error),
}

impl FlagError {
    pub fn is_validation(&self) -> bool {
        matches!(self, FlagError::Validation(_))
    }
}
