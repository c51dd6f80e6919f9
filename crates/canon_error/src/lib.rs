//! Error types for the canon toolkit.
//!
//! Every error records the source line and file where it was created, so a
//! failure surfaced by the command line points back at the code path that
//! produced it.

mod config;
mod convert;
mod load;

pub use config::ConfigError;
pub use convert::{ConvertError, ConvertErrorKind};
pub use load::{LoadError, LoadErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum CanonErrorKind {
    /// Canon loading error
    #[display("{}", _0)]
    Load(LoadError),
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
    /// Conversion error
    #[display("{}", _0)]
    Convert(ConvertError),
}

/// Canon error with kind discrimination.
///
/// # Examples
///
/// ```
/// use canon_error::{CanonError, CanonErrorKind, ConfigError};
///
/// let err = CanonError::from(ConfigError::new("bad layout"));
/// assert!(matches!(err.kind(), CanonErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display)]
#[display("Canon Error: {}", _0)]
pub struct CanonError(Box<CanonErrorKind>);

impl CanonError {
    /// Create a new error from a kind.
    pub fn new(kind: CanonErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CanonErrorKind {
        &self.0
    }
}

impl std::error::Error for CanonError {}

impl<T> From<T> for CanonError
where
    T: Into<CanonErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for canon operations.
pub type CanonResult<T> = std::result::Result<T, CanonError>;
