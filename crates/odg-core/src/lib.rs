//! # odg-core: Foundational Types for the Ontology Draft Governance Engine
//!
//! This crate is the bedrock of the ODG engine. It defines the value objects
//! shared by every consumer: the entity-kind taxonomy, the closed datatype
//! vocabulary, per-kind schema definitions, draft payloads, the canonical
//! snapshot seam, and the finding/report model a validation run produces.
//!
//! ## Key Design Principles
//!
//! 1. **Single `EntityKind` enum.** One definition, five variants, exhaustive
//!    `match` everywhere. Adding a kind forces every consumer to handle it.
//!
//! 2. **Closed datatype vocabulary.** `Datatype` enumerates the permitted
//!    property datatype labels. Membership is a configuration constant, not a
//!    computation. Property definitions carry the raw label as a string so an
//!    unknown label can be reported as a finding instead of failing to parse.
//!
//! 3. **Findings, not exceptions.** Data-quality problems in a draft are
//!    values (`Finding`), never `Err`. The only fallible operation anywhere
//!    in the engine is reading a `SnapshotProvider`.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `odg-*` crates (this is the leaf of the DAG).
//! - No I/O. Canonical state is batch-populated by the caller.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod datatype;
pub mod definition;
pub mod draft;
pub mod error;
pub mod finding;
pub mod identity;
pub mod kind;
pub mod report;
pub mod snapshot;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use datatype::{Cardinality, Datatype, DATATYPE_COUNT};
pub use definition::{
    CategoryDef, EntityDefinition, ModuleDef, ProfileDef, PropertyDef, SubobjectDef,
};
pub use draft::{DraftEntity, DraftPayload};
pub use error::OdgError;
pub use finding::{Finding, FindingCode, SemverBump, Severity};
pub use identity::DraftId;
pub use kind::{EntityKind, ENTITY_KIND_COUNT};
pub use report::ValidationReport;
pub use snapshot::{InMemorySnapshot, SnapshotError, SnapshotProvider};
pub use temporal::Timestamp;
