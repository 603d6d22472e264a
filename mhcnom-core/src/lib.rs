//! # mhcnom-core
//!
//! Naming model for MHC (major histocompatibility complex) nomenclature.
//!
//! ## Purpose
//!
//! This crate holds the naming levels used throughout mhcnom: a [`models::Locus`]
//! is a species prefix plus a gene name (`HLA-A`), and an
//! [`models::AlleleGroup`] narrows a locus with a group identifier
//! (`HLA-A*02`). Both are immutable value objects that know how to render
//! themselves in canonical and compact textual forms and how to export
//! their fields as a flat map for downstream serialization.
//!
//! Parsing arbitrary nomenclature strings back into these objects is the
//! job of an external collaborator; this crate only guarantees the
//! object-to-string direction.
//!
//! ## Main Components
//!
//! - **`Locus`**: species prefix + gene name, rendered as `HLA-A` / `HLAA`
//! - **`AlleleGroup`**: locus + group id, rendered as `HLA-A*02` / `HLAA02`
//! - **`utils::normalize_string`**: the canonical key normalizer used by
//!   lookup tables keyed on these names
//!
//! ## Example
//!
//! ```rust
//! use mhcnom_core::models::AlleleGroup;
//!
//! let group = AlleleGroup::new("HLA", "A", "02").unwrap();
//! assert_eq!(group.normalized_string(true), "HLA-A*02");
//! assert_eq!(group.compact_string(true), "HLAA02");
//! ```
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-export things
pub use errors::*;
pub use models::*;
