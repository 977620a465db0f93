//! The once-settable identifier slot.

use arbor_types::DefinitionError;

/// Records which property, if any, is the identifier of a node.
///
/// The slot starts empty and transitions to claimed exactly once, during
/// the first identifier-property instantiation. Every later claim is
/// rejected, including a re-claim of the same property, and leaves the
/// original claim intact. A claimed slot is never cleared for the node's
/// lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSlot {
    claimed: Option<String>,
}

impl IdentifierSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the identifier role for `property`.
    ///
    /// Fails with [`DefinitionError::DuplicateIdentifier`] if the slot is
    /// already claimed. The check happens before any mutation, so a
    /// failed claim leaves the slot unchanged.
    pub fn claim(&mut self, property: impl Into<String>) -> Result<(), DefinitionError> {
        let property = property.into();
        if let Some(existing) = &self.claimed {
            return Err(DefinitionError::DuplicateIdentifier {
                attempted: property,
                existing: existing.clone(),
            });
        }
        self.claimed = Some(property);
        Ok(())
    }

    /// The claimed property name, if any.
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.claimed.as_deref()
    }

    /// Whether the identifier role has been claimed.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed.is_some()
    }
}
