//! Core type definitions for Arbor.
//!
//! This crate defines the fundamental, tree-agnostic types used throughout
//! the state-tree engine:
//! - Node identifiers (UUID v7)
//! - The closed classification of structural type kinds
//! - Validation context/report plumbing for snapshot checking
//! - The error taxonomy (schema-definition errors vs. rejected updates)
//!
//! Anything that knows about concrete nodes or concrete structural types
//! belongs in `arbor-tree` or `arbor-model`, not here.

mod error;
mod ids;
mod kind;
mod validation;

pub use error::{DefinitionError, TreeError, TreeResult, UpdateError};
pub use ids::NodeId;
pub use kind::TypeKind;
pub use validation::{ValidationContext, ValidationFailure, ValidationReport};
