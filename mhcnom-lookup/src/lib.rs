//! # mhcnom-lookup
//!
//! Key-normalizing associative tables for nomenclature lookups.
//!
//! ## Purpose
//!
//! Metadata tables keyed by nomenclature strings get probed with whatever
//! spelling a caller has on hand: `HLA-A*02`, `hla a*02`, and `HLA_A*02`
//! all name the same allele group. [`NormalizingMap`] stores values under
//! the normalized form of each key while remembering every original
//! spelling, so equivalent spellings resolve to one entry and the original
//! inputs stay recoverable.
//!
//! ## Design Philosophy
//!
//! String canonicalization itself lives in `mhcnom-core`; this crate only
//! decides *when* to apply it. Which normalizer a table uses is fixed per
//! key type through [`KeyNormalize`], so tables keyed by ids or flags get
//! the identity normalizer and behave like plain maps, with no runtime
//! type inspection anywhere.
//!
//! ## Main Components
//!
//! - **`NormalizingMap`**: the container, with original-key tracking,
//!   key/value mapping, and inversion into reverse lookup tables
//! - **`KeyNormalize`**: per-key-type default normalization
//! - **`InvertValue`**: how a stored value fans out into keys of an
//!   inverted table
//!
//! ## Example
//!
//! ```rust
//! use mhcnom_lookup::NormalizingMap;
//!
//! let table = NormalizingMap::from_pairs([
//!     ("HLA-A*02".to_string(), "common in Europe".to_string()),
//! ]);
//!
//! assert_eq!(
//!     table.get(&"hla a*02".to_string()),
//!     Some(&"common in Europe".to_string())
//! );
//! ```
//!
pub mod error;
pub mod invert;
pub mod map;
pub mod normalize;

// re-export things
pub use error::*;
pub use invert::*;
pub use map::*;
pub use normalize::*;
