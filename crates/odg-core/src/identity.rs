//! # Draft Identity
//!
//! Newtype wrapper for draft identifiers. Schema entities are addressed by
//! plain string ids scoped to their [`EntityKind`](crate::kind::EntityKind)
//! namespace; the draft envelope itself gets a first-class identifier so a
//! report in a log line can always be traced back to the submission that
//! produced it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a draft under validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(pub Uuid);

impl DraftId {
    /// Generate a new random draft identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "draft:{}", self.0)
    }
}
