use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Traversal exceeded the configured depth limit. An owned value tree
    /// cannot contain reference cycles, so cyclic-looking input can only show
    /// up as unbounded nesting; this is the guard against it.
    #[error("recursion limit of {limit} exceeded; input nested too deeply")]
    RecursionLimit { limit: usize },

    /// Strict path expansion found an object and a primitive at the same path.
    #[error("path conflict: key '{key}' maps to both an object and a leaf")]
    PathConflict { key: String },
}

pub type Result<T> = core::result::Result<T, Error>;
