//! Unified error types for termdiff.
//!
//! This module provides the error hierarchy for the library, with enough
//! context to point at the offending code or edge of a malformed input.

use crate::diff::GraphSide;
use crate::model::EdgeKey;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for termdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TermDiffError {
    /// A concept graph violates its construction invariants
    #[error("Malformed input: {context}")]
    MalformedInput {
        context: String,
        #[source]
        source: MalformedInputKind,
    },

    /// A neighborhood was requested around a code the diff graph does not contain
    #[error("Focus code '{code}' is not a vertex of the diff graph")]
    UnknownFocus { code: String },

    /// Errors while reading a concept graph from JSON or YAML
    #[error("Failed to parse concept graph: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific malformed-input kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedInputKind {
    #[error("duplicate code '{code}' in {side} input")]
    DuplicateCode { side: GraphSide, code: String },

    #[error("duplicate edge {edge} in {side} input")]
    DuplicateEdge { side: GraphSide, edge: EdgeKey },

    #[error("edge {edge} in {side} input references unknown code '{code}'")]
    UnknownEndpoint {
        side: GraphSide,
        edge: EdgeKey,
        code: String,
    },
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Empty document")]
    Empty,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for termdiff operations
pub type Result<T> = std::result::Result<T, TermDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl TermDiffError {
    /// Create a malformed-input error with context
    pub fn malformed(context: impl Into<String>, source: MalformedInputKind) -> Self {
        Self::MalformedInput {
            context: context.into(),
            source,
        }
    }

    /// Create an unknown-focus error
    pub fn unknown_focus(code: impl Into<String>) -> Self {
        Self::UnknownFocus { code: code.into() }
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The malformed-input detail, if this is a malformed-input error
    #[must_use]
    pub const fn malformed_kind(&self) -> Option<&MalformedInputKind> {
        match self {
            Self::MalformedInput { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for TermDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for TermDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for TermDiffError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost-first, so a failure deep inside a
/// build reads like `"comparing v1 and v2: validating left input: ..."`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<TermDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: TermDiffError, new_ctx: &str) -> TermDiffError {
    match err {
        TermDiffError::MalformedInput {
            context: existing,
            source,
        } => TermDiffError::MalformedInput {
            context: chain_context(new_ctx, &existing),
            source,
        },
        TermDiffError::Parse {
            context: existing,
            source,
        } => TermDiffError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        TermDiffError::Io {
            path,
            message,
            source,
        } => TermDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        TermDiffError::Config(msg) => TermDiffError::Config(chain_context(new_ctx, &msg)),
        TermDiffError::Validation(msg) => TermDiffError::Validation(chain_context(new_ctx, &msg)),
        // the focus code is the whole message
        other @ TermDiffError::UnknownFocus { .. } => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
