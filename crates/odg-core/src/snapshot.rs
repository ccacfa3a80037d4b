//! # Canonical Snapshot
//!
//! The seam between the engine and whatever stores the persisted ontology.
//! A [`SnapshotProvider`] exposes the canonical entity ids and definitions,
//! batch-populated by the caller *before* validation begins. The engine
//! never fetches per check, which keeps runs deterministic and free of N+1
//! access patterns.
//!
//! A provider read failure is the one genuinely fatal condition in the
//! engine: it is infrastructure, not draft quality, and is propagated
//! rather than converted into findings.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::definition::EntityDefinition;
use crate::kind::EntityKind;

/// Error reading canonical state from a snapshot provider.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The backing store could not be read.
    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),

    /// The stored definition for an id could not be decoded.
    #[error("corrupt snapshot definition for {kind} '{entity_id}': {reason}")]
    Corrupt {
        /// The entity kind whose definition failed to decode.
        kind: EntityKind,
        /// The offending entity id.
        entity_id: String,
        /// Decoder failure detail.
        reason: String,
    },
}

/// Read-only access to the persisted canonical ontology.
///
/// Both methods answer from memory already populated by the caller. The
/// engine reads every id and definition exactly once per validation run,
/// at lookup construction.
pub trait SnapshotProvider {
    /// All canonical ids of the given kind.
    fn ids_of(&self, kind: EntityKind) -> Result<BTreeSet<String>, SnapshotError>;

    /// The canonical definition of one id, or `None` when absent.
    fn definition_of(
        &self,
        kind: EntityKind,
        entity_id: &str,
    ) -> Result<Option<EntityDefinition>, SnapshotError>;
}

/// An in-memory snapshot, the reference [`SnapshotProvider`].
///
/// Hosts build one from their store of record; tests build one by hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemorySnapshot {
    entities: BTreeMap<EntityKind, BTreeMap<String, EntityDefinition>>,
}

impl InMemorySnapshot {
    /// An empty snapshot: an ontology with no persisted entities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a canonical definition, replacing any existing one for the
    /// same kind and id.
    pub fn insert(
        &mut self,
        entity_id: impl Into<String>,
        definition: EntityDefinition,
    ) -> &mut Self {
        let kind = definition.kind();
        self.entities
            .entry(kind)
            .or_default()
            .insert(entity_id.into(), definition);
        self
    }

    /// Number of canonical entities across all kinds.
    pub fn len(&self) -> usize {
        self.entities.values().map(BTreeMap::len).sum()
    }

    /// Whether the snapshot holds no entities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SnapshotProvider for InMemorySnapshot {
    fn ids_of(&self, kind: EntityKind) -> Result<BTreeSet<String>, SnapshotError> {
        Ok(self
            .entities
            .get(&kind)
            .map(|defs| defs.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn definition_of(
        &self,
        kind: EntityKind,
        entity_id: &str,
    ) -> Result<Option<EntityDefinition>, SnapshotError> {
        Ok(self
            .entities
            .get(&kind)
            .and_then(|defs| defs.get(entity_id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{CategoryDef, PropertyDef};

    #[test]
    fn test_empty_snapshot() {
        let snapshot = InMemorySnapshot::new();
        assert!(snapshot.is_empty());
        assert!(snapshot.ids_of(EntityKind::Category).unwrap().is_empty());
        assert_eq!(
            snapshot
                .definition_of(EntityKind::Category, "cat_person")
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_insert_routes_by_kind() {
        let mut snapshot = InMemorySnapshot::new();
        snapshot.insert(
            "shared_id",
            EntityDefinition::Category(CategoryDef::default()),
        );
        snapshot.insert(
            "shared_id",
            EntityDefinition::Property(PropertyDef::default()),
        );

        // Same id in two kinds does not collide.
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot
            .ids_of(EntityKind::Category)
            .unwrap()
            .contains("shared_id"));
        assert!(snapshot
            .ids_of(EntityKind::Property)
            .unwrap()
            .contains("shared_id"));
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut snapshot = InMemorySnapshot::new();
        snapshot.insert(
            "prop_name",
            EntityDefinition::Property(PropertyDef {
                datatype: Some("Text".to_string()),
                ..Default::default()
            }),
        );
        snapshot.insert(
            "prop_name",
            EntityDefinition::Property(PropertyDef {
                datatype: Some("Number".to_string()),
                ..Default::default()
            }),
        );

        assert_eq!(snapshot.len(), 1);
        let def = snapshot
            .definition_of(EntityKind::Property, "prop_name")
            .unwrap()
            .expect("present");
        assert_eq!(
            def.as_property().unwrap().datatype.as_deref(),
            Some("Number")
        );
    }

    #[test]
    fn test_ids_are_sorted() {
        let mut snapshot = InMemorySnapshot::new();
        snapshot.insert("cat_b", EntityDefinition::Category(CategoryDef::default()));
        snapshot.insert("cat_a", EntityDefinition::Category(CategoryDef::default()));

        let ids: Vec<String> = snapshot
            .ids_of(EntityKind::Category)
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(ids, vec!["cat_a".to_string(), "cat_b".to_string()]);
    }
}
