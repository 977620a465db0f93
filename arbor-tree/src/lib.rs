//! Tree-node abstraction for Arbor.
//!
//! This crate defines the runtime side of the state tree:
//! - [`Node`] — the wrapper around a piece of stored state, tracking its
//!   type, path, value, children, and identifier slot
//! - [`IdentifierSlot`] — the once-settable record of which property is
//!   a node's identifier
//! - [`NodeType`] — the contract every structural type implements
//! - [`create_node`] — the generic node-construction primitive
//!
//! Concrete structural types (primitives, models, identifiers) live in
//! `arbor-model`.

mod contract;
mod node;
mod slot;

pub use contract::{NodeType, create_node};
pub use node::{Environment, Node, is_tree_backed};
pub use slot::IdentifierSlot;
