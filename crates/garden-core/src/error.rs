//! Error taxonomy for garden-core
//!
//! Domain failures share one type, [`GardenError`], tagged with an
//! [`ErrorKind`]. The kinds form a two-level hierarchy rooted at
//! [`ErrorKind::Garden`]:
//!
//! ```text
//! GardenError
//! ├── PlantError     (entity validation, wrapped diagnostics)
//! ├── WaterError     (water quantities)
//! └── SunLightError  (sunlight exposure)
//! ```
//!
//! Handlers "catch" a kind with [`GardenError::is`], which honours the
//! hierarchy: asking for `Garden` matches every domain error.
//!
//! Argument-type failures ([`TypeMismatch`]) and configuration failures are
//! not domain errors. They only meet domain errors in the crate-level
//! [`Error`] enum.

use std::fmt;

use strum::{Display, EnumIter};
use thiserror::Error;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Discriminant of a domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ErrorKind {
    /// Root kind, also used for registry failures of the garden itself
    #[strum(serialize = "GardenError")]
    Garden,
    #[strum(serialize = "PlantError")]
    Plant,
    #[strum(serialize = "WaterError")]
    Water,
    #[strum(serialize = "SunLightError")]
    SunLight,
}

impl ErrorKind {
    /// Parent in the hierarchy. `None` only for the root.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Garden => None,
            Self::Plant | Self::Water | Self::SunLight => Some(Self::Garden),
        }
    }

    /// Is-a relation: a kind is itself and every one of its ancestors.
    #[must_use]
    pub fn is_a(self, ancestor: Self) -> bool {
        std::iter::successors(Some(self), |kind| kind.parent()).any(|kind| kind == ancestor)
    }
}

// ============================================================================
// DOMAIN ERROR
// ============================================================================

/// A domain failure with an optional lower-level cause.
///
/// Display renders the message, then `": "` and the cause when present, so
/// a wrapped error never hides the rule that was first violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenError {
    kind: ErrorKind,
    message: String,
    cause: Option<Box<GardenError>>,
}

impl GardenError {
    /// Create an error of an explicit kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Root-kind error.
    pub fn garden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Garden, message)
    }

    /// Plant validation or diagnostic error.
    pub fn plant(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Plant, message)
    }

    /// Water quantity error.
    pub fn water(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Water, message)
    }

    /// Sunlight exposure error.
    pub fn sunlight(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SunLight, message)
    }

    /// Attach the lower-level error this one wraps.
    #[must_use]
    pub fn caused_by(mut self, cause: Self) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message of this layer only, without the cause.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }

    /// Whether a handler for `kind` catches this error.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind.is_a(kind)
    }
}

impl fmt::Display for GardenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {cause}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for GardenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

// ============================================================================
// TYPE MISMATCH
// ============================================================================

/// An untyped input carried the wrong kind of value for a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Type Error: '{field}' must be {expected}, not '{found}'.")]
pub struct TypeMismatch {
    pub field: String,
    pub expected: &'static str,
    pub found: &'static str,
}

impl TypeMismatch {
    pub fn new(field: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self {
            field: field.into(),
            expected,
            found,
        }
    }
}

// ============================================================================
// CRATE ERROR
// ============================================================================

/// Every failure garden-core can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A violated domain rule
    #[error(transparent)]
    Domain(#[from] GardenError),

    /// A value of the wrong type at an untyped boundary
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    /// Configuration failed validation or parsing
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// The domain error, if this is one.
    #[must_use]
    pub const fn domain(&self) -> Option<&GardenError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::TypeMismatch(_) | Self::InvalidConfig(_) => None,
        }
    }

    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(format!("Failed to parse config: {err}"))
    }
}

/// Result type alias for garden-core operations
pub type Result<T> = std::result::Result<T, Error>;
