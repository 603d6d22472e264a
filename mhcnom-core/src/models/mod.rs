pub mod allele_group;
pub mod locus;

// re-export for cleaner imports
pub use self::allele_group::{AlleleGroup, ToAlleleGroup};
pub use self::locus::Locus;
