//! Closed classification of structural type kinds.
//!
//! Every structural type reports exactly one kind. Dispatch code matches
//! on the kind instead of inspecting the concrete type, and the lazy
//! wrapper reports [`TypeKind::Lazy`] rather than the kind it would
//! resolve to, so classification never forces resolution of a
//! forward/recursive type graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a structural type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// String-valued primitive.
    String,
    /// Number-valued primitive.
    Number,
    /// Boolean-valued primitive.
    Boolean,
    /// Composite type with named properties.
    Model,
    /// Identifier role wrapping a primitive base.
    Identifier,
    /// Deferred forward/recursive type reference.
    Lazy,
}

impl TypeKind {
    /// Whether this kind is one of the primitive value kinds.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Boolean)
    }

    /// Whether this kind marks the identifier role.
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier)
    }

    /// Whether this kind is the composite model kind.
    #[must_use]
    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model)
    }

    /// Whether this kind defers resolution of its underlying type.
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy)
    }

    /// Whether a value of this kind may serve as an identifier base.
    ///
    /// Only the string and number primitives qualify.
    #[must_use]
    pub fn is_valid_identifier_base(&self) -> bool {
        matches!(self, Self::String | Self::Number)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Model => "model",
            Self::Identifier => "identifier",
            Self::Lazy => "lazy",
        };
        f.write_str(s)
    }
}
