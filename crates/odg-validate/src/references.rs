//! # Reference Checker
//!
//! Verifies that every cross-entity reference in the draft resolves in the
//! merged view. Each unresolved reference value yields exactly one finding;
//! repeated offending ids are deliberately not merged, so the report
//! mirrors the payload one-to-one.
//!
//! Finding order is stable: draft entity order, then reference-field order
//! (parent, properties, subobjects / category_ids, dependencies /
//! module_ids), then value order as given in the payload.
//!
//! Delete-marked draft entities are skipped as reference *sources*; their
//! outgoing references die with them. Their *inbound* references still
//! fail, because a tombstoned id no longer exists in the merged view.

use odg_core::{DraftPayload, EntityKind, Finding, FindingCode};

use crate::lookup::EntityLookup;

/// Run the reference-existence checks over the draft.
pub fn check_references(draft: &DraftPayload, lookup: &EntityLookup) -> Vec<Finding> {
    let mut findings = Vec::new();

    for category in &draft.categories {
        if category.deleted {
            continue;
        }
        let def = &category.definition;

        if let Some(parent) = &def.parent {
            if !lookup.exists(EntityKind::Category, parent) {
                findings.push(missing_reference(
                    EntityKind::Category,
                    &category.entity_id,
                    "parent",
                    FindingCode::MissingParent,
                    "parent category",
                    parent,
                ));
            }
        }
        for property in &def.properties {
            if !lookup.exists(EntityKind::Property, property) {
                findings.push(missing_reference(
                    EntityKind::Category,
                    &category.entity_id,
                    "properties",
                    FindingCode::MissingProperty,
                    "property",
                    property,
                ));
            }
        }
        for subobject in &def.subobjects {
            if !lookup.exists(EntityKind::Subobject, subobject) {
                findings.push(missing_reference(
                    EntityKind::Category,
                    &category.entity_id,
                    "subobjects",
                    FindingCode::MissingSubobject,
                    "subobject",
                    subobject,
                ));
            }
        }
    }

    for module in &draft.modules {
        if module.deleted {
            continue;
        }
        let def = &module.definition;

        for category in &def.category_ids {
            if !lookup.exists(EntityKind::Category, category) {
                findings.push(missing_reference(
                    EntityKind::Module,
                    &module.entity_id,
                    "category_ids",
                    FindingCode::MissingCategory,
                    "category",
                    category,
                ));
            }
        }
        for dependency in &def.dependencies {
            if !lookup.exists(EntityKind::Module, dependency) {
                findings.push(missing_reference(
                    EntityKind::Module,
                    &module.entity_id,
                    "dependencies",
                    FindingCode::MissingModule,
                    "module",
                    dependency,
                ));
            }
        }
    }

    for profile in &draft.profiles {
        if profile.deleted {
            continue;
        }
        for module in &profile.definition.module_ids {
            if !lookup.exists(EntityKind::Module, module) {
                findings.push(missing_reference(
                    EntityKind::Profile,
                    &profile.entity_id,
                    "module_ids",
                    FindingCode::MissingModule,
                    "module",
                    module,
                ));
            }
        }
    }

    findings
}

/// One missing-reference finding, anchored at the referencing entity.
fn missing_reference(
    source_kind: EntityKind,
    source_id: &str,
    field: &str,
    code: FindingCode,
    target_noun: &str,
    target_id: &str,
) -> Finding {
    Finding::error(
        source_kind,
        source_id,
        code,
        format!("references missing {target_noun} '{target_id}'"),
    )
    .with_field(field)
}
