//! Error types for retrodis-core.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A second, different label was bound to an already labelled address.
    #[error(
        "label conflict at {address:#06x}: {existing:?} already bound, cannot bind {requested:?}"
    )]
    LabelConflict {
        address: u64,
        existing: String,
        requested: String,
    },
}

impl Error {
    /// Creates a new LabelConflict error.
    pub fn label_conflict(
        address: u64,
        existing: impl Into<String>,
        requested: impl Into<String>,
    ) -> Self {
        Self::LabelConflict {
            address,
            existing: existing.into(),
            requested: requested.into(),
        }
    }
}
