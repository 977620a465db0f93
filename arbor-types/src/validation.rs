//! Snapshot validation plumbing.
//!
//! Validation walks a snapshot alongside the type tree. The context
//! records where in the tree the walk currently is; failures carry the
//! rendered path so a schema author can locate the offending value
//! without re-running the walk.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a validation walk: the subpath entered and the name of
/// the type validating it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ContextEntry {
    segment: String,
    type_name: String,
}

/// The position of a validation walk within the tree.
///
/// Contexts are immutable; entering a child property produces an
/// extended copy, so sibling walks never observe each other's paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    entries: Vec<ContextEntry>,
}

impl ValidationContext {
    /// The context at the tree root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a context extended with one more path segment.
    #[must_use]
    pub fn enter(&self, segment: impl Into<String>, type_name: impl Into<String>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(ContextEntry {
            segment: segment.into(),
            type_name: type_name.into(),
        });
        Self { entries }
    }

    /// Renders the context as a JSON-pointer-style path (e.g. `/rows/3/id`).
    /// The root context renders as the empty string.
    #[must_use]
    pub fn pointer(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push('/');
            out.push_str(&entry.segment);
        }
        out
    }

    /// The name of the type currently validating, if the walk has
    /// descended below the root.
    #[must_use]
    pub fn current_type(&self) -> Option<&str> {
        self.entries.last().map(|e| e.type_name.as_str())
    }
}

/// A single validation violation, with the path where it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// JSON-pointer-style path to the violating value.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "at root: {}", self.message)
        } else {
            write!(f, "at '{}': {}", self.path, self.message)
        }
    }
}

/// The outcome of validating a snapshot against a type.
///
/// An empty report means the snapshot was accepted. Reports from child
/// walks are merged upward so the caller sees every violation in one
/// pass, not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    /// A report with no violations.
    #[must_use]
    pub fn ok() -> Self {
        Self::default()
    }

    /// A report with a single violation at the context's current path.
    #[must_use]
    pub fn failure(context: &ValidationContext, message: impl Into<String>) -> Self {
        Self {
            failures: vec![ValidationFailure {
                path: context.pointer(),
                message: message.into(),
            }],
        }
    }

    /// Whether the snapshot was accepted.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// The recorded violations, in walk order.
    #[must_use]
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Absorbs another report's violations into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.failures.extend(other.failures);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return f.write_str("ok");
        }
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}
