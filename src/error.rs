//! Runtime errors.
//!
//! Layout, focus and rendering never fail; only the terminal runtime
//! returns these.

use thiserror::Error;

/// Errors raised while driving a [`Program`](crate::runtime::Program).
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal I/O failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An actor thread could not be started.
    #[error("failed to spawn {name} thread")]
    Spawn {
        /// Thread name.
        name: String,
        /// OS error.
        #[source]
        source: std::io::Error,
    },

    /// Every event source hung up while the program was still running.
    #[error("event channel disconnected")]
    Disconnected,
}

/// Result alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;
