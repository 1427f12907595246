//! Error types for transport dispatch.
//!
//! Provides [`DispatchError`] and the crate-wide [`Result`] alias.

use thiserror::Error;

/// Convenience alias used throughout the crate and by handler signatures.
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Errors surfaced by transport dispatch.
///
/// The dispatch layer itself produces exactly one failure,
/// [`UnsetVariant`](DispatchError::UnsetVariant). Everything else a dispatch
/// call can return originates in a handler and passes through verbatim:
/// dispatch never wraps, interprets, or retries a handler's error.
///
/// # Examples
///
/// ```
/// use transport_dispatch::{DispatchError, Transport};
///
/// let err = Transport::default()
///     .accept(|_| Ok(()), |_| Ok(()), |_| Ok(()))
///     .unwrap_err();
/// assert!(matches!(err, DispatchError::UnsetVariant));
/// assert_eq!(err.to_string(), "no transport variant set");
/// ```
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Dispatch was attempted on a record with no variant set.
    ///
    /// Only [`Transport::default`](crate::Transport::default) can produce
    /// such a record; the constructors always set exactly one variant.
    #[error("no transport variant set")]
    UnsetVariant,

    /// A handler failed with a message.
    #[error("{0}")]
    Handler(String),

    /// A wrapped error from handler code that carries its own error type.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl DispatchError {
    /// Builds a [`Handler`](DispatchError::Handler) error from any message.
    ///
    /// # Examples
    ///
    /// ```
    /// use transport_dispatch::DispatchError;
    ///
    /// let err = DispatchError::handler("odometer offline");
    /// assert_eq!(err.to_string(), "odometer offline");
    /// ```
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler(message.into())
    }

    /// Returns `true` if this is the [`UnsetVariant`](DispatchError::UnsetVariant)
    /// failure, the only error the dispatch layer itself can raise.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::UnsetVariant)
    }
}
