pub mod snapshot;
pub mod text;

use softcraft_core::CraftError;
use thiserror::Error;

pub use snapshot::{load_snapshot, save_snapshot, CraftSnapshot};
pub use text::{load_structure, parse_structure, save_structure, write_structure};

/// Failure to read or write a structure. A failed load never modifies existing state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Model {
        line: usize,
        #[source]
        source: CraftError,
    },

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("snapshot holds an invalid structure: {0}")]
    InvalidSnapshot(#[from] CraftError),
}
