//! Error types for the layout engine

use thiserror_no_std::Error;

/// Errors raised while drawing, flushing or loading configuration.
///
/// Layout itself cannot fail: malformed constraints only produce odd
/// geometry. Errors come from the collaborators at the edges.
#[derive(Debug, Error)]
pub enum Error {
    /// The draw target refused a line or fill
    #[error("draw target rejected a primitive")]
    Canvas,

    /// The panel refused to refresh an area
    #[error("panel rejected a {width}x{height} update at ({x}, {y})")]
    Panel {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// Configuration blob could not be encoded or decoded
    #[error("invalid engine configuration: {0}")]
    Config(#[from] postcard::Error),
}

/// Result type for engine operations
pub type Result<T> = core::result::Result<T, Error>;
