//! # Semver Aggregation
//!
//! Reduces the findings of a run to a single version-bump suggestion.
//! The highest hint present wins (major > minor > patch) and the reasons
//! are the winning bucket's findings, one line each.
//!
//! An invalid draft (any error-severity finding) is forced to `patch`: a
//! draft that cannot merge yet has no meaningful bump classification, and
//! suggesting `major` off a half-broken payload would mislead reviewers.

use odg_core::{Finding, SemverBump, Severity};

/// Reason attached when the error-override rule fires.
pub const UNRESOLVED_ERRORS_REASON: &str =
    "Draft has unresolved validation errors; fix them before classifying a version bump";

/// Reason attached when no finding carries a bump hint.
pub const NO_CHANGES_REASON: &str = "No breaking changes detected";

/// The aggregated version-bump suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemverSuggestion {
    /// The recommended bump.
    pub bump: SemverBump,
    /// Human-readable reasons for the recommendation.
    pub reasons: Vec<String>,
}

/// Aggregate all findings of a run into one suggestion.
pub fn aggregate_semver(findings: &[Finding]) -> SemverSuggestion {
    if findings.iter().any(|f| f.severity == Severity::Error) {
        return SemverSuggestion {
            bump: SemverBump::Patch,
            reasons: vec![UNRESOLVED_ERRORS_REASON.to_string()],
        };
    }

    match findings.iter().filter_map(|f| f.suggested_semver).max() {
        None => SemverSuggestion {
            bump: SemverBump::Patch,
            reasons: vec![NO_CHANGES_REASON.to_string()],
        },
        Some(bump) => SemverSuggestion {
            bump,
            reasons: findings
                .iter()
                .filter(|f| f.suggested_semver == Some(bump))
                .map(reason_line)
                .collect(),
        },
    }
}

/// `"<code>: <entity_id>"`, with `old -> new` appended when both sides of a
/// change are present.
fn reason_line(finding: &Finding) -> String {
    match (&finding.old_value, &finding.new_value) {
        (Some(old), Some(new)) => {
            format!("{}: {} ({} -> {})", finding.code, finding.entity_id, old, new)
        }
        _ => format!("{}: {}", finding.code, finding.entity_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odg_core::{EntityKind, FindingCode};

    fn added(entity_id: &str) -> Finding {
        Finding::info(
            EntityKind::Property,
            entity_id,
            FindingCode::EntityAdded,
            format!("property '{entity_id}' is new in this draft"),
        )
        .with_semver(SemverBump::Minor)
    }

    fn datatype_changed(entity_id: &str) -> Finding {
        Finding::warning(
            EntityKind::Property,
            entity_id,
            FindingCode::DatatypeChanged,
            "datatype changed from Text to Number",
        )
        .with_semver(SemverBump::Major)
        .with_change(Some("Text".to_string()), Some("Number".to_string()))
    }

    fn reference_error(entity_id: &str) -> Finding {
        Finding::error(
            EntityKind::Category,
            entity_id,
            FindingCode::MissingParent,
            "references missing parent category 'Ghost'",
        )
    }

    #[test]
    fn test_no_findings_means_patch() {
        let suggestion = aggregate_semver(&[]);
        assert_eq!(suggestion.bump, SemverBump::Patch);
        assert_eq!(suggestion.reasons, vec![NO_CHANGES_REASON.to_string()]);
    }

    #[test]
    fn test_highest_bump_wins() {
        let findings = vec![added("prop_a"), datatype_changed("prop_b"), added("prop_c")];
        let suggestion = aggregate_semver(&findings);

        assert_eq!(suggestion.bump, SemverBump::Major);
        // Only the winning bucket's reasons are reported.
        assert_eq!(
            suggestion.reasons,
            vec!["DATATYPE_CHANGED: prop_b (Text -> Number)".to_string()]
        );
    }

    #[test]
    fn test_minor_wins_over_patch() {
        let metadata = Finding::info(
            EntityKind::Category,
            "cat_person",
            FindingCode::MetadataChanged,
            "only label or description of category 'cat_person' changed",
        )
        .with_semver(SemverBump::Patch);

        let suggestion = aggregate_semver(&[metadata, added("prop_a")]);
        assert_eq!(suggestion.bump, SemverBump::Minor);
        assert_eq!(suggestion.reasons, vec!["ENTITY_ADDED: prop_a".to_string()]);
    }

    #[test]
    fn test_error_override_forces_patch() {
        let findings = vec![datatype_changed("prop_b"), reference_error("cat_x")];
        let suggestion = aggregate_semver(&findings);

        assert_eq!(suggestion.bump, SemverBump::Patch);
        assert_eq!(
            suggestion.reasons,
            vec![UNRESOLVED_ERRORS_REASON.to_string()]
        );
    }

    #[test]
    fn test_findings_without_hints_fall_back_to_patch() {
        // A warning with no semver hint contributes nothing.
        let unhinted = Finding::warning(
            EntityKind::Property,
            "prop_x",
            FindingCode::DatatypeChanged,
            "datatype changed",
        );
        let suggestion = aggregate_semver(&[unhinted]);
        assert_eq!(suggestion.bump, SemverBump::Patch);
        assert_eq!(suggestion.reasons, vec![NO_CHANGES_REASON.to_string()]);
    }

    #[test]
    fn test_reason_line_without_change_values() {
        let suggestion = aggregate_semver(&[added("prop_a")]);
        assert_eq!(suggestion.reasons, vec!["ENTITY_ADDED: prop_a".to_string()]);
    }

    #[test]
    fn test_multiple_winning_reasons_keep_order() {
        let findings = vec![datatype_changed("prop_a"), datatype_changed("prop_b")];
        let suggestion = aggregate_semver(&findings);
        assert_eq!(
            suggestion.reasons,
            vec![
                "DATATYPE_CHANGED: prop_a (Text -> Number)".to_string(),
                "DATATYPE_CHANGED: prop_b (Text -> Number)".to_string(),
            ]
        );
    }
}
