//! # Entity Kind: Single Source of Truth
//!
//! Defines the `EntityKind` enum with the five schema entity kinds. This is
//! the ONE definition used across the engine. Every `match` on `EntityKind`
//! must be exhaustive, so adding a kind forces every consumer to handle it at
//! compile time, so no checker can silently skip a kind.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::OdgError;

/// The kinds of schema entity a draft can touch.
///
/// Each kind occupies its own identifier namespace: a category and a
/// property may share an id without colliding. Entity lookup, reference
/// checking, and change classification all dispatch on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// The unit of inheritance, carrying property and subobject membership.
    Category,
    /// A typed property attachable to categories.
    Property,
    /// A nested record type attachable to categories.
    Subobject,
    /// A distributable bundle of categories, with dependencies on other modules.
    Module,
    /// A deployable selection of modules.
    Profile,
}

/// Total number of entity kinds. Used for compile-time assertions.
pub const ENTITY_KIND_COUNT: usize = 5;

impl EntityKind {
    /// Returns all five kinds in canonical order.
    pub fn all_kinds() -> &'static [EntityKind] {
        &[
            Self::Category,
            Self::Property,
            Self::Subobject,
            Self::Module,
            Self::Profile,
        ]
    }

    /// The snake_case wire label, as carried in `Finding::entity_type`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Property => "property",
            Self::Subobject => "subobject",
            Self::Module => "module",
            Self::Profile => "profile",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntityKind {
    type Err = OdgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::all_kinds()
            .iter()
            .copied()
            .find(|k| k.label() == s)
            .ok_or_else(|| OdgError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_count_matches_constant() {
        assert_eq!(EntityKind::all_kinds().len(), ENTITY_KIND_COUNT);
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<&str> = EntityKind::all_kinds().iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ENTITY_KIND_COUNT);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for kind in EntityKind::all_kinds() {
            assert_eq!(kind.label().parse::<EntityKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("template".parse::<EntityKind>().is_err());
        assert!("".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&EntityKind::Subobject).unwrap();
        assert_eq!(json, "\"subobject\"");
        let parsed: EntityKind = serde_json::from_str("\"module\"").unwrap();
        assert_eq!(parsed, EntityKind::Module);
    }
}
