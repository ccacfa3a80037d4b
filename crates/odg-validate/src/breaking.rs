//! # Breaking-Change Detector
//!
//! Compares every entity the draft touches against its canonical
//! counterpart and classifies the difference by disruptiveness.
//!
//! Only entities *present in the draft* are examined. Drafts are partial:
//! an entity merely absent from the draft is untouched, and reading absence
//! as deletion would flood reports with false positives. Deletion is the
//! explicit `deleted` marker on a draft entry.
//!
//! Classification is per-kind, one handler each, all producing the same
//! finding contract:
//!
//! | change | code | severity | bump |
//! |---|---|---|---|
//! | no canonical counterpart | `ENTITY_ADDED` | info | minor |
//! | delete-marked canonical entity | `ENTITY_REMOVED` | warning | major |
//! | property datatype differs | `DATATYPE_CHANGED` | warning | major |
//! | cardinality multiple→single | `CARDINALITY_RESTRICTED` | warning | major |
//! | cardinality single→multiple | `CARDINALITY_RELAXED` | info | minor |
//! | category property dropped | `PROPERTY_REMOVED` | warning | major |
//! | category property added | `PROPERTY_ADDED` | info | minor |
//! | only label/description differ | `METADATA_CHANGED` | info | patch |
//!
//! A dropped category property is breaking because existing data instances
//! may still carry that property.

use odg_core::{
    Cardinality, CategoryDef, DraftPayload, EntityDefinition, EntityKind, Finding, FindingCode,
    ModuleDef, ProfileDef, PropertyDef, SemverBump, SubobjectDef,
};

use crate::lookup::EntityLookup;

/// Classify every drafted entity against its canonical counterpart.
pub fn check_breaking_changes(draft: &DraftPayload, lookup: &EntityLookup) -> Vec<Finding> {
    let mut findings = Vec::new();

    for entry in &draft.categories {
        if let Some(canonical) =
            classify_presence(EntityKind::Category, &entry.entity_id, entry.deleted, lookup, &mut findings)
        {
            if let Some(old) = canonical.as_category() {
                compare_category(&entry.entity_id, old, &entry.definition, &mut findings);
            }
        }
    }

    for entry in &draft.properties {
        if let Some(canonical) =
            classify_presence(EntityKind::Property, &entry.entity_id, entry.deleted, lookup, &mut findings)
        {
            if let Some(old) = canonical.as_property() {
                compare_property(&entry.entity_id, old, &entry.definition, &mut findings);
            }
        }
    }

    for entry in &draft.subobjects {
        if let Some(canonical) =
            classify_presence(EntityKind::Subobject, &entry.entity_id, entry.deleted, lookup, &mut findings)
        {
            if let Some(old) = canonical.as_subobject() {
                compare_subobject(&entry.entity_id, old, &entry.definition, &mut findings);
            }
        }
    }

    for entry in &draft.modules {
        if let Some(canonical) =
            classify_presence(EntityKind::Module, &entry.entity_id, entry.deleted, lookup, &mut findings)
        {
            if let Some(old) = canonical.as_module() {
                compare_module(&entry.entity_id, old, &entry.definition, &mut findings);
            }
        }
    }

    for entry in &draft.profiles {
        if let Some(canonical) =
            classify_presence(EntityKind::Profile, &entry.entity_id, entry.deleted, lookup, &mut findings)
        {
            if let Some(old) = canonical.as_profile() {
                compare_profile(&entry.entity_id, old, &entry.definition, &mut findings);
            }
        }
    }

    findings
}

/// The added/removed envelope shared by every kind.
///
/// Returns the canonical counterpart when a field-level comparison should
/// run; `None` means the entity was fully classified here.
fn classify_presence<'a>(
    kind: EntityKind,
    entity_id: &str,
    deleted: bool,
    lookup: &'a EntityLookup,
    findings: &mut Vec<Finding>,
) -> Option<&'a EntityDefinition> {
    let canonical = lookup.canonical(kind, entity_id);

    if deleted {
        if canonical.is_some() {
            findings.push(
                Finding::warning(
                    kind,
                    entity_id,
                    FindingCode::EntityRemoved,
                    format!("{kind} '{entity_id}' is deleted by this draft"),
                )
                .with_semver(SemverBump::Major),
            );
        }
        // Deleting an id that never existed canonically is a no-op.
        return None;
    }

    match canonical {
        None => {
            findings.push(
                Finding::info(
                    kind,
                    entity_id,
                    FindingCode::EntityAdded,
                    format!("{kind} '{entity_id}' is new in this draft"),
                )
                .with_semver(SemverBump::Minor),
            );
            None
        }
        Some(definition) => Some(definition),
    }
}

fn compare_category(
    entity_id: &str,
    old: &CategoryDef,
    new: &CategoryDef,
    findings: &mut Vec<Finding>,
) {
    for property in &old.properties {
        if !new.properties.contains(property) {
            findings.push(
                Finding::warning(
                    EntityKind::Category,
                    entity_id,
                    FindingCode::PropertyRemoved,
                    format!(
                        "property '{property}' removed from category; existing data instances may still carry it"
                    ),
                )
                .with_field("properties")
                .with_semver(SemverBump::Major)
                .with_change(Some(property.clone()), None),
            );
        }
    }
    for property in &new.properties {
        if !old.properties.contains(property) {
            findings.push(
                Finding::info(
                    EntityKind::Category,
                    entity_id,
                    FindingCode::PropertyAdded,
                    format!("property '{property}' added to category"),
                )
                .with_field("properties")
                .with_semver(SemverBump::Minor)
                .with_change(None, Some(property.clone())),
            );
        }
    }

    let structure_unchanged = old.parent == new.parent
        && old.properties == new.properties
        && old.subobjects == new.subobjects;
    if structure_unchanged {
        maybe_metadata_changed(
            EntityKind::Category,
            entity_id,
            (old.label.as_deref(), old.description.as_deref()),
            (new.label.as_deref(), new.description.as_deref()),
            findings,
        );
    }
}

fn compare_property(
    entity_id: &str,
    old: &PropertyDef,
    new: &PropertyDef,
    findings: &mut Vec<Finding>,
) {
    if old.datatype != new.datatype {
        findings.push(
            Finding::warning(
                EntityKind::Property,
                entity_id,
                FindingCode::DatatypeChanged,
                format!(
                    "datatype changed from {} to {}",
                    render_optional(old.datatype.as_deref()),
                    render_optional(new.datatype.as_deref()),
                ),
            )
            .with_field("datatype")
            .with_semver(SemverBump::Major)
            .with_change(old.datatype.clone(), new.datatype.clone()),
        );
    }

    match (old.cardinality, new.cardinality) {
        (Some(Cardinality::Multiple), Some(Cardinality::Single)) => {
            findings.push(
                Finding::warning(
                    EntityKind::Property,
                    entity_id,
                    FindingCode::CardinalityRestricted,
                    "cardinality tightened from multiple to single",
                )
                .with_field("cardinality")
                .with_semver(SemverBump::Major)
                .with_change(
                    Some(Cardinality::Multiple.label().to_string()),
                    Some(Cardinality::Single.label().to_string()),
                ),
            );
        }
        (Some(Cardinality::Single), Some(Cardinality::Multiple)) => {
            findings.push(
                Finding::info(
                    EntityKind::Property,
                    entity_id,
                    FindingCode::CardinalityRelaxed,
                    "cardinality relaxed from single to multiple",
                )
                .with_field("cardinality")
                .with_semver(SemverBump::Minor)
                .with_change(
                    Some(Cardinality::Single.label().to_string()),
                    Some(Cardinality::Multiple.label().to_string()),
                ),
            );
        }
        // Unchanged, or a transition involving an unset side: the two rules
        // above are the only classified cardinality transitions.
        _ => {}
    }

    let structure_unchanged =
        old.datatype == new.datatype && old.cardinality == new.cardinality;
    if structure_unchanged {
        maybe_metadata_changed(
            EntityKind::Property,
            entity_id,
            (old.label.as_deref(), old.description.as_deref()),
            (new.label.as_deref(), new.description.as_deref()),
            findings,
        );
    }
}

fn compare_subobject(
    entity_id: &str,
    old: &SubobjectDef,
    new: &SubobjectDef,
    findings: &mut Vec<Finding>,
) {
    maybe_metadata_changed(
        EntityKind::Subobject,
        entity_id,
        (old.label.as_deref(), old.description.as_deref()),
        (new.label.as_deref(), new.description.as_deref()),
        findings,
    );
}

fn compare_module(entity_id: &str, old: &ModuleDef, new: &ModuleDef, findings: &mut Vec<Finding>) {
    // Module membership edits are deliberately not classified as breaking
    // changes; only metadata-only edits are reported.
    let structure_unchanged =
        old.category_ids == new.category_ids && old.dependencies == new.dependencies;
    if structure_unchanged {
        maybe_metadata_changed(
            EntityKind::Module,
            entity_id,
            (old.label.as_deref(), old.description.as_deref()),
            (new.label.as_deref(), new.description.as_deref()),
            findings,
        );
    }
}

fn compare_profile(
    entity_id: &str,
    old: &ProfileDef,
    new: &ProfileDef,
    findings: &mut Vec<Finding>,
) {
    if old.module_ids == new.module_ids {
        maybe_metadata_changed(
            EntityKind::Profile,
            entity_id,
            (old.label.as_deref(), old.description.as_deref()),
            (new.label.as_deref(), new.description.as_deref()),
            findings,
        );
    }
}

/// Emit `METADATA_CHANGED` when label and/or description differ.
///
/// Callers invoke this only when every structural field compared equal, so
/// the finding really means "only label/description differ".
fn maybe_metadata_changed(
    kind: EntityKind,
    entity_id: &str,
    old: (Option<&str>, Option<&str>),
    new: (Option<&str>, Option<&str>),
    findings: &mut Vec<Finding>,
) {
    if old != new {
        findings.push(
            Finding::info(
                kind,
                entity_id,
                FindingCode::MetadataChanged,
                format!("only label or description of {kind} '{entity_id}' changed"),
            )
            .with_semver(SemverBump::Patch),
        );
    }
}

fn render_optional(value: Option<&str>) -> &str {
    value.unwrap_or("(unset)")
}
