//! Error taxonomy for the state-tree core.
//!
//! Two distinct failure kinds:
//!
//! - [`DefinitionError`] — the model schema itself is malformed. These
//!   surface while a schema is being declared or first instantiated and
//!   should halt startup.
//! - [`UpdateError`] — a particular update attempt was rejected. The
//!   schema is fine; the caller can report the rejection and continue.
//!
//! [`TreeError`] wraps both for call sites that traverse the boundary.

use crate::ValidationReport;
use serde_json::Value;
use thiserror::Error;

/// Result type alias for operations that can fail either way.
pub type TreeResult<T> = std::result::Result<T, TreeError>;

/// The model schema is malformed.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The identifier factory was given a base type outside {string, number}.
    #[error(
        "only string and number types are acceptable as identifier base, got '{type_name}'"
    )]
    UnsupportedIdentifierBase {
        /// Name of the offending base type.
        type_name: String,
    },

    /// A second property on the same node attempted to claim the identifier role.
    #[error(
        "cannot define property '{attempted}' as identifier, property '{existing}' is already the identifier of this node"
    )]
    DuplicateIdentifier {
        /// The property that attempted the claim.
        attempted: String,
        /// The property already registered as identifier.
        existing: String,
    },

    /// An identifier property was instantiated without a model-backed parent.
    #[error(
        "identifier property '{property}' can only be instantiated as a direct child of a model node"
    )]
    DetachedIdentifier {
        /// The property that was being instantiated.
        property: String,
    },
}

/// An update attempt was rejected.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Reconciliation attempted to change an already-set identifier value.
    #[error(
        "tried to change identifier at '{path}' from {old} to {new}; changing identifiers is not allowed"
    )]
    IdentifierChanged {
        /// Path of the identifier node.
        path: String,
        /// The currently stored value.
        old: Value,
        /// The rejected replacement value.
        new: Value,
    },

    /// A snapshot failed validation against the type it was offered to.
    #[error("snapshot rejected by type '{type_name}': {report}")]
    SnapshotRejected {
        /// Name of the rejecting type.
        type_name: String,
        /// The violations found.
        report: ValidationReport,
    },
}

/// Top-level error for state-tree operations.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The schema is malformed; fatal at definition time.
    #[error("definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// The update was rejected; reportable, the tree is unchanged.
    #[error("update error: {0}")]
    Update(#[from] UpdateError),
}

impl TreeError {
    /// Whether this error indicates a malformed schema (as opposed to a
    /// rejected update).
    #[must_use]
    pub fn is_definition(&self) -> bool {
        matches!(self, Self::Definition(_))
    }
}
