//! # Schema Definitions
//!
//! The per-kind definition bodies carried by draft entities and canonical
//! snapshots, plus the [`EntityDefinition`] tagged variant served by the
//! merged lookup view.
//!
//! Collection fields default to empty and scalar fields are optional: a
//! missing or null field deserializes to an empty value and is never a
//! crash condition. Validation decides what absence means, not the parser.

use serde::{Deserialize, Serialize};

use crate::datatype::Cardinality;
use crate::kind::EntityKind;

/// Definition body of a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    /// Parent category id, when the category inherits.
    #[serde(default)]
    pub parent: Option<String>,
    /// Ids of the properties attached to this category.
    #[serde(default)]
    pub properties: Vec<String>,
    /// Ids of the subobjects attached to this category.
    #[serde(default)]
    pub subobjects: Vec<String>,
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Definition body of a property.
///
/// The datatype is a raw label, not a [`Datatype`](crate::datatype::Datatype):
/// an unknown label must survive parsing so the datatype checker can report
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    /// Raw datatype label, checked against the vocabulary during validation.
    #[serde(default)]
    pub datatype: Option<String>,
    /// Whether the property is single- or multi-valued.
    #[serde(default)]
    pub cardinality: Option<Cardinality>,
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Definition body of a subobject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubobjectDef {
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Definition body of a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDef {
    /// Ids of the categories bundled by this module.
    #[serde(default)]
    pub category_ids: Vec<String>,
    /// Ids of the modules this module depends on.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Definition body of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDef {
    /// Ids of the modules this profile deploys.
    #[serde(default)]
    pub module_ids: Vec<String>,
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A definition tagged with its kind, as served by snapshots and the merged
/// lookup view.
///
/// Per-kind rule dispatch happens by matching this variant; checkers never
/// branch on kind strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityDefinition {
    /// A category definition.
    Category(CategoryDef),
    /// A property definition.
    Property(PropertyDef),
    /// A subobject definition.
    Subobject(SubobjectDef),
    /// A module definition.
    Module(ModuleDef),
    /// A profile definition.
    Profile(ProfileDef),
}

impl EntityDefinition {
    /// The kind tag of this definition.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Category(_) => EntityKind::Category,
            Self::Property(_) => EntityKind::Property,
            Self::Subobject(_) => EntityKind::Subobject,
            Self::Module(_) => EntityKind::Module,
            Self::Profile(_) => EntityKind::Profile,
        }
    }

    /// The human-readable label, when set. Every kind carries one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Category(d) => d.label.as_deref(),
            Self::Property(d) => d.label.as_deref(),
            Self::Subobject(d) => d.label.as_deref(),
            Self::Module(d) => d.label.as_deref(),
            Self::Profile(d) => d.label.as_deref(),
        }
    }

    /// The human-readable description, when set.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Category(d) => d.description.as_deref(),
            Self::Property(d) => d.description.as_deref(),
            Self::Subobject(d) => d.description.as_deref(),
            Self::Module(d) => d.description.as_deref(),
            Self::Profile(d) => d.description.as_deref(),
        }
    }

    /// The category body, when this is a category.
    pub fn as_category(&self) -> Option<&CategoryDef> {
        match self {
            Self::Category(d) => Some(d),
            _ => None,
        }
    }

    /// The property body, when this is a property.
    pub fn as_property(&self) -> Option<&PropertyDef> {
        match self {
            Self::Property(d) => Some(d),
            _ => None,
        }
    }

    /// The subobject body, when this is a subobject.
    pub fn as_subobject(&self) -> Option<&SubobjectDef> {
        match self {
            Self::Subobject(d) => Some(d),
            _ => None,
        }
    }

    /// The module body, when this is a module.
    pub fn as_module(&self) -> Option<&ModuleDef> {
        match self {
            Self::Module(d) => Some(d),
            _ => None,
        }
    }

    /// The profile body, when this is a profile.
    pub fn as_profile(&self) -> Option<&ProfileDef> {
        match self {
            Self::Profile(d) => Some(d),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag_matches_variant() {
        assert_eq!(
            EntityDefinition::Category(CategoryDef::default()).kind(),
            EntityKind::Category
        );
        assert_eq!(
            EntityDefinition::Profile(ProfileDef::default()).kind(),
            EntityKind::Profile
        );
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let def: CategoryDef = serde_json::from_str("{}").unwrap();
        assert_eq!(def.parent, None);
        assert!(def.properties.is_empty());
        assert!(def.subobjects.is_empty());
    }

    #[test]
    fn test_null_scalar_deserializes_to_none() {
        let def: PropertyDef = serde_json::from_str(r#"{"datatype": null}"#).unwrap();
        assert_eq!(def.datatype, None);
    }

    #[test]
    fn test_tagged_serialization() {
        let def = EntityDefinition::Property(PropertyDef {
            datatype: Some("Text".to_string()),
            ..Default::default()
        });
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["kind"], "property");
        assert_eq!(json["datatype"], "Text");
    }

    #[test]
    fn test_tagged_deserialization() {
        let def: EntityDefinition = serde_json::from_str(
            r#"{"kind": "module", "category_ids": ["cat_person"], "dependencies": []}"#,
        )
        .unwrap();
        let module = def.as_module().expect("module variant");
        assert_eq!(module.category_ids, vec!["cat_person".to_string()]);
    }

    #[test]
    fn test_accessors_reject_other_kinds() {
        let def = EntityDefinition::Subobject(SubobjectDef::default());
        assert!(def.as_category().is_none());
        assert!(def.as_property().is_none());
        assert!(def.as_subobject().is_some());
    }
}
