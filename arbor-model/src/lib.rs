//! Structural types for Arbor.
//!
//! The static half of the state tree:
//! - [`PrimitiveType`] — string / number / boolean leaf types
//! - [`ModelType`] — composite type with named, typed properties
//! - [`LateType`] — deferred wrapper for forward/recursive declarations
//! - [`IdentifierType`] — marks one property as its parent node's unique,
//!   immutable identifier; constructed through [`identifier`] /
//!   [`identifier_of`] and classified with [`is_identifier_type`]
//!
//! Types implement the `NodeType` contract from `arbor-tree` and are
//! shared as `Arc<dyn NodeType>`.

mod identifier;
mod late;
mod model;
mod primitives;

pub use identifier::{
    IdentifierType, IdentifierValue, identifier, identifier_of, is_identifier_type,
};
pub use late::LateType;
pub use model::ModelType;
pub use primitives::PrimitiveType;
