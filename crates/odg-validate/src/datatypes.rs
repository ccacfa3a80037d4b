//! # Datatype Checker
//!
//! Enforces the closed datatype vocabulary over every property the draft
//! touches. Unknown labels are findings, not parse failures, so a draft
//! with a bad datatype still receives its full report.

use odg_core::{Datatype, DraftPayload, EntityKind, Finding, FindingCode};

/// Check every drafted property's datatype against the vocabulary.
///
/// An unset datatype is not a violation: the field is optional, and
/// absence carries no type claim to check.
pub fn check_datatypes(draft: &DraftPayload) -> Vec<Finding> {
    let mut findings = Vec::new();

    for property in &draft.properties {
        if property.deleted {
            continue;
        }
        let Some(datatype) = &property.definition.datatype else {
            continue;
        };
        if Datatype::from_label(datatype).is_none() {
            findings.push(
                Finding::error(
                    EntityKind::Property,
                    &property.entity_id,
                    FindingCode::InvalidDatatype,
                    format!(
                        "datatype '{}' is not permitted; allowed datatypes: {}",
                        datatype,
                        Datatype::vocabulary_list()
                    ),
                )
                .with_field("datatype"),
            );
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use odg_core::{DraftEntity, PropertyDef, Severity};

    fn property(datatype: Option<&str>) -> DraftEntity<PropertyDef> {
        DraftEntity::upsert(
            "prop_bio",
            PropertyDef {
                datatype: datatype.map(str::to_string),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_vocabulary_member_is_clean() {
        let draft = DraftPayload {
            properties: vec![property(Some("Text"))],
            ..Default::default()
        };
        assert!(check_datatypes(&draft).is_empty());
    }

    #[test]
    fn test_unknown_datatype_rejected() {
        let draft = DraftPayload {
            properties: vec![property(Some("Paragraph"))],
            ..Default::default()
        };
        let findings = check_datatypes(&draft);

        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.code, FindingCode::InvalidDatatype);
        assert_eq!(finding.severity, Severity::Error);
        assert_eq!(finding.entity_id, "prop_bio");
        assert_eq!(finding.field.as_deref(), Some("datatype"));
        assert!(finding.message.contains("Paragraph"));
        // The message lists the allowed set.
        assert!(finding.message.contains("Text"));
        assert!(finding.message.contains("Quantity"));
    }

    #[test]
    fn test_unset_datatype_is_not_checked() {
        let draft = DraftPayload {
            properties: vec![property(None)],
            ..Default::default()
        };
        assert!(check_datatypes(&draft).is_empty());
    }

    #[test]
    fn test_deleted_property_skipped() {
        let draft = DraftPayload {
            properties: vec![DraftEntity {
                entity_id: "prop_old".to_string(),
                deleted: true,
                definition: PropertyDef {
                    datatype: Some("Paragraph".to_string()),
                    ..Default::default()
                },
            }],
            ..Default::default()
        };
        assert!(check_datatypes(&draft).is_empty());
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let draft = DraftPayload {
            properties: vec![property(Some("text"))],
            ..Default::default()
        };
        assert_eq!(check_datatypes(&draft).len(), 1);
    }
}
