//! # Merged Entity Lookup
//!
//! The single "effective definition" view over canonical and draft state:
//! draft definitions shadow canonical ones for the same id, and
//! delete-marked draft entities tombstone their id out of the view
//! entirely.
//!
//! The lookup is built once per validation run from one batch read of the
//! snapshot. Checkers never touch the provider directly, which keeps the
//! shadowing rule in exactly one place instead of being re-derived (and
//! drifting) inside each checker.

use std::collections::{BTreeMap, BTreeSet};

use odg_core::{
    DraftPayload, EntityDefinition, EntityKind, SnapshotError, SnapshotProvider,
};

/// Draft-shadowed view of the merged canonical+draft entity sets.
///
/// Holds no reference to the provider after construction: all canonical
/// state is copied in up front, so every query is infallible and the whole
/// run is deterministic.
#[derive(Debug)]
pub struct EntityLookup {
    canonical: BTreeMap<EntityKind, BTreeMap<String, EntityDefinition>>,
    draft: BTreeMap<EntityKind, BTreeMap<String, EntityDefinition>>,
    tombstones: BTreeMap<EntityKind, BTreeSet<String>>,
}

impl EntityLookup {
    /// Batch-read the snapshot and index the draft.
    ///
    /// This is the only operation in a validation run that can fail: a
    /// provider read error is an infrastructure failure and is propagated.
    pub fn build(
        draft: &DraftPayload,
        snapshot: &impl SnapshotProvider,
    ) -> Result<Self, SnapshotError> {
        let mut canonical = BTreeMap::new();
        for &kind in EntityKind::all_kinds() {
            let mut defs = BTreeMap::new();
            for id in snapshot.ids_of(kind)? {
                if let Some(def) = snapshot.definition_of(kind, &id)? {
                    defs.insert(id, def);
                }
            }
            canonical.insert(kind, defs);
        }

        let mut lookup = Self {
            canonical,
            draft: BTreeMap::new(),
            tombstones: BTreeMap::new(),
        };

        for entry in &draft.categories {
            lookup.index_draft(
                EntityKind::Category,
                &entry.entity_id,
                entry.deleted,
                EntityDefinition::Category(entry.definition.clone()),
            );
        }
        for entry in &draft.properties {
            lookup.index_draft(
                EntityKind::Property,
                &entry.entity_id,
                entry.deleted,
                EntityDefinition::Property(entry.definition.clone()),
            );
        }
        for entry in &draft.subobjects {
            lookup.index_draft(
                EntityKind::Subobject,
                &entry.entity_id,
                entry.deleted,
                EntityDefinition::Subobject(entry.definition.clone()),
            );
        }
        for entry in &draft.modules {
            lookup.index_draft(
                EntityKind::Module,
                &entry.entity_id,
                entry.deleted,
                EntityDefinition::Module(entry.definition.clone()),
            );
        }
        for entry in &draft.profiles {
            lookup.index_draft(
                EntityKind::Profile,
                &entry.entity_id,
                entry.deleted,
                EntityDefinition::Profile(entry.definition.clone()),
            );
        }

        Ok(lookup)
    }

    fn index_draft(&mut self, kind: EntityKind, id: &str, deleted: bool, def: EntityDefinition) {
        if deleted {
            self.tombstones
                .entry(kind)
                .or_default()
                .insert(id.to_string());
        } else {
            self.draft.entry(kind).or_default().insert(id.to_string(), def);
        }
    }

    /// Whether the id exists in the merged view.
    pub fn exists(&self, kind: EntityKind, id: &str) -> bool {
        if self.is_marked_deleted(kind, id) {
            return false;
        }
        self.draft
            .get(&kind)
            .is_some_and(|defs| defs.contains_key(id))
            || self
                .canonical
                .get(&kind)
                .is_some_and(|defs| defs.contains_key(id))
    }

    /// The effective definition: draft shadows canonical, tombstones hide
    /// both.
    pub fn effective(&self, kind: EntityKind, id: &str) -> Option<&EntityDefinition> {
        if self.is_marked_deleted(kind, id) {
            return None;
        }
        self.draft
            .get(&kind)
            .and_then(|defs| defs.get(id))
            .or_else(|| self.canonical.get(&kind).and_then(|defs| defs.get(id)))
    }

    /// The canonical definition, regardless of draft shadowing.
    pub fn canonical(&self, kind: EntityKind, id: &str) -> Option<&EntityDefinition> {
        self.canonical.get(&kind).and_then(|defs| defs.get(id))
    }

    /// Whether the draft delete-marks this id.
    pub fn is_marked_deleted(&self, kind: EntityKind, id: &str) -> bool {
        self.tombstones
            .get(&kind)
            .is_some_and(|ids| ids.contains(id))
    }

    /// Ids of every category in the merged view, in lexicographic order.
    ///
    /// This is the node set of the inheritance graph. Tombstoned ids are
    /// excluded: a deleted category is not a node.
    pub fn merged_category_ids(&self) -> BTreeSet<&str> {
        let kind = EntityKind::Category;
        let draft_ids = self
            .draft
            .get(&kind)
            .into_iter()
            .flat_map(|defs| defs.keys());
        let canonical_ids = self
            .canonical
            .get(&kind)
            .into_iter()
            .flat_map(|defs| defs.keys());

        draft_ids
            .chain(canonical_ids)
            .map(String::as_str)
            .filter(|id| !self.is_marked_deleted(kind, id))
            .collect()
    }
}
