//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the duplex crate.
#[derive(Debug)]
pub enum DuplexError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// A character outside the {A, T, G, C} alphabet.
    InvalidBase(char),
    /// The two strands of a duplex differ in length.
    StrandLengthMismatch {
        /// Length of the primary strand.
        primary: usize,
        /// Length of the complementary strand.
        complement: usize,
    },
    /// The second strand is not the base-wise complement of the first.
    NotComplementary {
        /// First offending position.
        index: usize,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn the viewer process.
    Spawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
    /// Transport-level HTTP failure.
    Http(String),
    /// The server answered with a non-success status.
    HttpStatus(u16),
    /// A response body was not the JSON we expected.
    Json(serde_json::Error),
}

impl fmt::Display for DuplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::InvalidBase(c) => write!(f, "invalid base {c:?}"),
            Self::StrandLengthMismatch {
                primary,
                complement,
            } => write!(
                f,
                "strand length mismatch: primary has {primary} bases, \
                 complement has {complement}"
            ),
            Self::NotComplementary { index } => {
                write!(f, "strands are not complementary at position {index}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Spawn(e) => write!(f, "failed to spawn viewer: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
            Self::Http(msg) => write!(f, "HTTP error: {msg}"),
            Self::HttpStatus(code) => {
                write!(f, "request failed with status code {code}")
            }
            Self::Json(e) => write!(f, "malformed JSON response: {e}"),
        }
    }
}

impl std::error::Error for DuplexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) | Self::Spawn(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for DuplexError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for DuplexError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DuplexError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
