use crate::board::Square;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or out-of-range algebraic input, detected at parse time.
    #[error("invalid coordinate {input:?}: expected a file A-H followed by a rank 1-8")]
    InvalidCoordinate { input: String },

    /// No knight path between two squares. The 8x8 knight graph is
    /// connected, so this never occurs for constructed squares; it is kept
    /// distinct from an empty result.
    #[error("no knight path from {from} to {to}")]
    UnreachableTarget { from: Square, to: Square },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
