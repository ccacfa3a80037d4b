//! # Findings
//!
//! One reported consistency issue or classified change. Findings carry a
//! machine code, a severity, an optional version-bump hint, and the old/new
//! values for field-level changes.
//!
//! A finding is immutable once built: constructors plus consuming `with_*`
//! builders, no mutating API. Checkers produce findings; nothing downstream
//! edits them.

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;

/// Severity of a finding.
///
/// `Error` findings block submission. `Warning` findings are legal but
/// disruptive changes a submitter should acknowledge. `Info` findings are
/// advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocking consistency violation.
    Error,
    /// Legal but disruptive change.
    Warning,
    /// Non-breaking or purely informational change.
    Info,
}

impl Severity {
    /// The lowercase wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommended version-bump category.
///
/// `Ord` follows disruptiveness: `Major > Minor > Patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemverBump {
    /// Backwards-compatible fix or cosmetic change.
    Patch,
    /// Backwards-compatible addition.
    Minor,
    /// Breaking change.
    Major,
}

impl SemverBump {
    /// The lowercase wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl std::fmt::Display for SemverBump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Machine codes for every finding the engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingCode {
    /// Category parent does not resolve.
    MissingParent,
    /// Category property membership does not resolve.
    MissingProperty,
    /// Category subobject membership does not resolve.
    MissingSubobject,
    /// Module category membership does not resolve.
    MissingCategory,
    /// Module dependency or profile module membership does not resolve.
    MissingModule,
    /// Category inheritance forms a cycle.
    CircularInheritance,
    /// Property datatype is outside the vocabulary.
    InvalidDatatype,
    /// Entity exists in the draft but not canonically.
    EntityAdded,
    /// Draft deletes a canonical entity.
    EntityRemoved,
    /// Property datatype differs from canonical.
    DatatypeChanged,
    /// Property cardinality tightened from multiple to single.
    CardinalityRestricted,
    /// Property cardinality relaxed from single to multiple.
    CardinalityRelaxed,
    /// Property dropped from a category's membership list.
    PropertyRemoved,
    /// Property added to a category's membership list.
    PropertyAdded,
    /// Only label or description changed.
    MetadataChanged,
}

impl FindingCode {
    /// The SCREAMING_SNAKE wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingParent => "MISSING_PARENT",
            Self::MissingProperty => "MISSING_PROPERTY",
            Self::MissingSubobject => "MISSING_SUBOBJECT",
            Self::MissingCategory => "MISSING_CATEGORY",
            Self::MissingModule => "MISSING_MODULE",
            Self::CircularInheritance => "CIRCULAR_INHERITANCE",
            Self::InvalidDatatype => "INVALID_DATATYPE",
            Self::EntityAdded => "ENTITY_ADDED",
            Self::EntityRemoved => "ENTITY_REMOVED",
            Self::DatatypeChanged => "DATATYPE_CHANGED",
            Self::CardinalityRestricted => "CARDINALITY_RESTRICTED",
            Self::CardinalityRelaxed => "CARDINALITY_RELAXED",
            Self::PropertyRemoved => "PROPERTY_REMOVED",
            Self::PropertyAdded => "PROPERTY_ADDED",
            Self::MetadataChanged => "METADATA_CHANGED",
        }
    }
}

impl std::fmt::Display for FindingCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Kind of the entity the finding is about.
    pub entity_type: EntityKind,
    /// Id of the entity the finding is about.
    pub entity_id: String,
    /// The definition field concerned, for field-level findings.
    pub field: Option<String>,
    /// Machine code.
    pub code: FindingCode,
    /// Human-readable message.
    pub message: String,
    /// Severity classification.
    pub severity: Severity,
    /// Version-bump hint, when the finding implies one.
    pub suggested_semver: Option<SemverBump>,
    /// Prior value, for field-level changes.
    pub old_value: Option<String>,
    /// Proposed value, for field-level changes.
    pub new_value: Option<String>,
}

impl Finding {
    fn new(
        severity: Severity,
        entity_type: EntityKind,
        entity_id: impl Into<String>,
        code: FindingCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            entity_type,
            entity_id: entity_id.into(),
            field: None,
            code,
            message: message.into(),
            severity,
            suggested_semver: None,
            old_value: None,
            new_value: None,
        }
    }

    /// An error-severity finding.
    pub fn error(
        entity_type: EntityKind,
        entity_id: impl Into<String>,
        code: FindingCode,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, entity_type, entity_id, code, message)
    }

    /// A warning-severity finding.
    pub fn warning(
        entity_type: EntityKind,
        entity_id: impl Into<String>,
        code: FindingCode,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, entity_type, entity_id, code, message)
    }

    /// An info-severity finding.
    pub fn info(
        entity_type: EntityKind,
        entity_id: impl Into<String>,
        code: FindingCode,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Info, entity_type, entity_id, code, message)
    }

    /// Attach the definition field the finding concerns.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach a version-bump hint.
    pub fn with_semver(mut self, bump: SemverBump) -> Self {
        self.suggested_semver = Some(bump);
        self
    }

    /// Attach the old/new values of a field-level change.
    pub fn with_change(mut self, old_value: Option<String>, new_value: Option<String>) -> Self {
        self.old_value = old_value;
        self.new_value = new_value;
        self
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} {} '{}': {}",
            self.severity, self.code, self.entity_type, self.entity_id, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semver_ordering() {
        assert!(SemverBump::Major > SemverBump::Minor);
        assert!(SemverBump::Minor > SemverBump::Patch);
    }

    #[test]
    fn test_code_serde_screaming_snake() {
        let json = serde_json::to_string(&FindingCode::CircularInheritance).unwrap();
        assert_eq!(json, "\"CIRCULAR_INHERITANCE\"");
        let parsed: FindingCode = serde_json::from_str("\"MISSING_PARENT\"").unwrap();
        assert_eq!(parsed, FindingCode::MissingParent);
    }

    #[test]
    fn test_code_display_matches_serde() {
        for code in [
            FindingCode::MissingParent,
            FindingCode::InvalidDatatype,
            FindingCode::MetadataChanged,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{code}\""));
        }
    }

    #[test]
    fn test_builders() {
        let finding = Finding::warning(
            EntityKind::Property,
            "prop_age",
            FindingCode::DatatypeChanged,
            "datatype changed from Text to Number",
        )
        .with_field("datatype")
        .with_semver(SemverBump::Major)
        .with_change(Some("Text".to_string()), Some("Number".to_string()));

        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(finding.field.as_deref(), Some("datatype"));
        assert_eq!(finding.suggested_semver, Some(SemverBump::Major));
        assert_eq!(finding.old_value.as_deref(), Some("Text"));
        assert_eq!(finding.new_value.as_deref(), Some("Number"));
    }

    #[test]
    fn test_wire_field_names() {
        let finding = Finding::error(
            EntityKind::Category,
            "cat_person",
            FindingCode::MissingParent,
            "references missing parent category 'Ghost'",
        );
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["entity_type"], "category");
        assert_eq!(json["entity_id"], "cat_person");
        assert_eq!(json["code"], "MISSING_PARENT");
        assert_eq!(json["severity"], "error");
        assert!(json["field"].is_null());
        assert!(json["suggested_semver"].is_null());
        assert!(json["old_value"].is_null());
        assert!(json["new_value"].is_null());
    }

    #[test]
    fn test_display_format() {
        let finding = Finding::error(
            EntityKind::Category,
            "cat_person",
            FindingCode::MissingParent,
            "references missing parent category 'Ghost'",
        );
        let rendered = finding.to_string();
        assert!(rendered.contains("[error]"));
        assert!(rendered.contains("MISSING_PARENT"));
        assert!(rendered.contains("cat_person"));
    }
}
