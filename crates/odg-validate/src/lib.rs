//! # odg-validate: Draft Validation & Change Classification
//!
//! Validates one draft of schema changes against the canonical ontology and
//! classifies how disruptive the draft is. The entry point is
//! [`validate_draft`], which runs a fixed linear pipeline:
//!
//! ```text
//! lookup build ──▶ reference check ──▶ cycle check ──▶ datatype check
//!                                                           │
//!                                                           ▼
//!            report ◀── semver aggregation ◀── breaking-change check
//! ```
//!
//! Every stage runs unconditionally over the same
//! (`DraftPayload`, `SnapshotProvider`) pair. A reference error never
//! suppresses cycle detection, and no stage can abort another.
//!
//! ## Determinism
//!
//! The engine is a pure, synchronous, single-pass computation over two
//! immutable inputs. It performs no I/O: canonical state is batch-read once
//! at lookup construction. Re-running with unchanged inputs yields a
//! byte-identical serialized report. Concurrent runs share no mutable
//! state; each run allocates its own lookup and graph structures.
//!
//! ## Error Policy
//!
//! Draft data-quality problems are findings, never `Err`. The only fatal
//! condition is a snapshot-provider read failure, which is infrastructure
//! and propagates as [`ValidationError`].
//!
//! ## Crate Policy
//!
//! - Depends only on `odg-core` internally.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod breaking;
pub mod datatypes;
pub mod engine;
pub mod inheritance;
pub mod lookup;
pub mod references;
pub mod semver;

pub use engine::{validate_draft, ValidationError};
pub use lookup::EntityLookup;
pub use semver::SemverSuggestion;
