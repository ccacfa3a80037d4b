//! # Draft Payload
//!
//! The value object a host hands to the engine: one draft bundling the
//! proposed creations, modifications, and deletions across all five entity
//! kinds, plus submission metadata.
//!
//! Drafts are typically partial. An entity absent from the draft is simply
//! untouched; absence is never read as deletion. Deletion is the explicit
//! `deleted` marker on a draft entry.

use serde::{Deserialize, Serialize};

use crate::definition::{CategoryDef, ModuleDef, ProfileDef, PropertyDef, SubobjectDef};
use crate::identity::DraftId;
use crate::temporal::Timestamp;

/// One entity in a draft: its id, its proposed definition, and whether the
/// draft deletes it.
///
/// A deleted entry's definition is retained for audit display but
/// contributes nothing to the merged view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "D: serde::Deserialize<'de> + Default"))]
pub struct DraftEntity<D> {
    /// Entity id, unique within its kind.
    pub entity_id: String,
    /// Explicit deletion marker.
    #[serde(default)]
    pub deleted: bool,
    /// The proposed definition body.
    #[serde(default)]
    pub definition: D,
}

impl<D> DraftEntity<D> {
    /// A draft entry proposing (or updating to) the given definition.
    pub fn upsert(entity_id: impl Into<String>, definition: D) -> Self {
        Self {
            entity_id: entity_id.into(),
            deleted: false,
            definition,
        }
    }

    /// A draft entry deleting the entity.
    pub fn delete(entity_id: impl Into<String>) -> Self
    where
        D: Default,
    {
        Self {
            entity_id: entity_id.into(),
            deleted: true,
            definition: D::default(),
        }
    }
}

/// A complete draft payload, supplied fresh per validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPayload {
    /// Identifier of the draft, when the host assigned one.
    #[serde(default)]
    pub draft_id: Option<DraftId>,
    /// Who authored the draft.
    #[serde(default)]
    pub author: Option<String>,
    /// When the draft was created.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// Proposed category changes.
    #[serde(default)]
    pub categories: Vec<DraftEntity<CategoryDef>>,
    /// Proposed property changes.
    #[serde(default)]
    pub properties: Vec<DraftEntity<PropertyDef>>,
    /// Proposed subobject changes.
    #[serde(default)]
    pub subobjects: Vec<DraftEntity<SubobjectDef>>,
    /// Proposed module changes.
    #[serde(default)]
    pub modules: Vec<DraftEntity<ModuleDef>>,
    /// Proposed profile changes.
    #[serde(default)]
    pub profiles: Vec<DraftEntity<ProfileDef>>,
}

impl DraftPayload {
    /// Whether the draft proposes no changes at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of draft entries across all kinds.
    pub fn len(&self) -> usize {
        self.categories.len()
            + self.properties.len()
            + self.subobjects.len()
            + self.modules.len()
            + self.profiles.len()
    }
}
