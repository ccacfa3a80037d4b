//! # Validation Report
//!
//! The single output of a validation run: findings partitioned by severity,
//! the overall validity flag, and the aggregated version-bump suggestion
//! with its reasons.
//!
//! Hosts persist the report as an opaque JSON blob and render it as they
//! see fit; the engine makes no UI decisions, only severity classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OdgError;
use crate::finding::{Finding, SemverBump, Severity};

/// The result of validating one draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff `errors` is empty.
    pub is_valid: bool,
    /// Blocking consistency violations.
    pub errors: Vec<Finding>,
    /// Legal but disruptive changes.
    pub warnings: Vec<Finding>,
    /// Non-breaking or informational changes.
    pub info: Vec<Finding>,
    /// Recommended version bump.
    pub suggested_semver: SemverBump,
    /// Why the bump was suggested.
    pub semver_reasons: Vec<String>,
}

impl ValidationReport {
    /// Partition findings by severity and derive validity.
    ///
    /// Partitioning is stable: within each severity, findings keep the
    /// order they were emitted in.
    pub fn from_findings(
        findings: Vec<Finding>,
        suggested_semver: SemverBump,
        semver_reasons: Vec<String>,
    ) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut info = Vec::new();

        for finding in findings {
            match finding.severity {
                Severity::Error => errors.push(finding),
                Severity::Warning => warnings.push(finding),
                Severity::Info => info.push(finding),
            }
        }

        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            info,
            suggested_semver,
            semver_reasons,
        }
    }

    /// Total finding count across all severities.
    pub fn finding_count(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }

    /// All findings in report order: errors, then warnings, then info.
    pub fn iter_findings(&self) -> impl Iterator<Item = &Finding> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.info.iter())
    }

    /// Serialize for storage as a JSON column value.
    pub fn to_json(&self) -> Result<String, OdgError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "draft {}: {} finding(s), suggested bump {}",
            if self.is_valid { "valid" } else { "invalid" },
            self.finding_count(),
            self.suggested_semver
        )?;
        for finding in self.iter_findings() {
            writeln!(f, "  {finding}")?;
        }
        for reason in &self.semver_reasons {
            writeln!(f, "  reason: {reason}")?;
        }
        Ok(())
    }
}
