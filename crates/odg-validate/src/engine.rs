//! # Validation Pipeline
//!
//! Runs the checks over one draft in a fixed linear order: lookup build,
//! reference check, inheritance-cycle check, datatype check,
//! breaking-change check, semver aggregation, report assembly.
//!
//! Every stage runs unconditionally over the same inputs. A reference
//! error never suppresses cycle detection, and no stage can abort another:
//! missing or null payload fields were already normalized to empty values
//! at the type level, so there is nothing left to crash on.
//!
//! The engine holds no state across runs and performs no I/O. Cancellation
//! and timeouts are the hosting service's concern at its request boundary;
//! there is nothing blocking in here to cancel.

use thiserror::Error;
use tracing::debug;

use odg_core::{DraftPayload, SnapshotError, SnapshotProvider, ValidationReport};

use crate::breaking::check_breaking_changes;
use crate::datatypes::check_datatypes;
use crate::inheritance::check_inheritance;
use crate::lookup::EntityLookup;
use crate::references::check_references;
use crate::semver::aggregate_semver;

/// Fatal validation failure.
///
/// Draft data-quality problems never appear here; they are findings in
/// the report. The only fatal condition is the snapshot store itself
/// failing to read.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The canonical snapshot could not be read.
    #[error("canonical snapshot read failed: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Validate one draft against the canonical snapshot.
///
/// Pure and synchronous: the same `(draft, snapshot)` pair always yields a
/// byte-identical serialized report.
///
/// # Errors
///
/// Returns [`ValidationError::Snapshot`] when the provider cannot be read.
pub fn validate_draft(
    draft: &DraftPayload,
    snapshot: &impl SnapshotProvider,
) -> Result<ValidationReport, ValidationError> {
    let lookup = EntityLookup::build(draft, snapshot)?;

    let mut findings = Vec::new();

    let reference_findings = check_references(draft, &lookup);
    debug!(count = reference_findings.len(), "reference check complete");
    findings.extend(reference_findings);

    let cycle_findings = check_inheritance(&lookup);
    debug!(count = cycle_findings.len(), "inheritance cycle check complete");
    findings.extend(cycle_findings);

    let datatype_findings = check_datatypes(draft);
    debug!(count = datatype_findings.len(), "datatype check complete");
    findings.extend(datatype_findings);

    let breaking_findings = check_breaking_changes(draft, &lookup);
    debug!(count = breaking_findings.len(), "breaking-change check complete");
    findings.extend(breaking_findings);

    let suggestion = aggregate_semver(&findings);
    debug!(bump = %suggestion.bump, "semver aggregation complete");

    Ok(ValidationReport::from_findings(
        findings,
        suggestion.bump,
        suggestion.reasons,
    ))
}
