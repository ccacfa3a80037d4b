//! # Datatype Vocabulary & Cardinality
//!
//! The closed set of permitted property datatype labels, plus the
//! cardinality of a property. Vocabulary membership is a configuration
//! constant established by the host ontology's type system, never
//! computed from data.
//!
//! Property definitions carry their datatype as a raw string so that an
//! unknown label survives deserialization and can be reported as a finding;
//! this enum is the membership authority the datatype checker consults.

use serde::{Deserialize, Serialize};

/// The permitted property datatypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Datatype {
    /// Free-form text.
    Text,
    /// Integer or decimal number.
    Number,
    /// True/false flag.
    Boolean,
    /// Calendar date, with optional time component.
    Date,
    /// Reference to another page in the host ontology.
    Page,
    /// Web address.
    #[serde(rename = "URL")]
    Url,
    /// Email address.
    Email,
    /// Telephone number.
    Telephone,
    /// Number with a unit of measure.
    Quantity,
    /// Source code or other preformatted text.
    Code,
}

/// Total number of permitted datatypes. Used for compile-time assertions.
pub const DATATYPE_COUNT: usize = 10;

impl Datatype {
    /// All permitted datatypes in canonical order.
    pub const ALL: &'static [Datatype] = &[
        Self::Text,
        Self::Number,
        Self::Boolean,
        Self::Date,
        Self::Page,
        Self::Url,
        Self::Email,
        Self::Telephone,
        Self::Quantity,
        Self::Code,
    ];

    /// The canonical label, as written in property definitions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::Page => "Page",
            Self::Url => "URL",
            Self::Email => "Email",
            Self::Telephone => "Telephone",
            Self::Quantity => "Quantity",
            Self::Code => "Code",
        }
    }

    /// Resolve a raw label against the vocabulary.
    pub fn from_label(label: &str) -> Option<Datatype> {
        Self::ALL.iter().copied().find(|d| d.label() == label)
    }

    /// The full vocabulary as a comma-separated list, for error messages.
    pub fn vocabulary_list() -> String {
        Self::ALL
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a property accepts one value or many per data instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// At most one value per instance.
    Single,
    /// Any number of values per instance.
    Multiple,
}

impl Cardinality {
    /// The lowercase wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_count_matches_constant() {
        assert_eq!(Datatype::ALL.len(), DATATYPE_COUNT);
    }

    #[test]
    fn test_from_label_roundtrip() {
        for datatype in Datatype::ALL {
            assert_eq!(Datatype::from_label(datatype.label()), Some(*datatype));
        }
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert_eq!(Datatype::from_label("Paragraph"), None);
        assert_eq!(Datatype::from_label("text"), None); // labels are case-sensitive
        assert_eq!(Datatype::from_label(""), None);
    }

    #[test]
    fn test_url_label_is_uppercase() {
        assert_eq!(Datatype::Url.label(), "URL");
        assert_eq!(serde_json::to_string(&Datatype::Url).unwrap(), "\"URL\"");
    }

    #[test]
    fn test_vocabulary_list_mentions_every_label() {
        let list = Datatype::vocabulary_list();
        for datatype in Datatype::ALL {
            assert!(list.contains(datatype.label()));
        }
    }

    #[test]
    fn test_cardinality_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Cardinality::Multiple).unwrap(),
            "\"multiple\""
        );
        let parsed: Cardinality = serde_json::from_str("\"single\"").unwrap();
        assert_eq!(parsed, Cardinality::Single);
    }
}
