use std::collections::HashMap;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::NomenclatureError;

///
/// A gene location identified by a species prefix and a gene name,
/// such as HLA-A.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Locus {
    species_prefix: String,
    gene_name: String,
}

impl Locus {
    ///
    /// Create a new locus. Both fields must be non-empty. No normalization
    /// happens here; callers hand in already-parsed components.
    ///
    pub fn new(
        species_prefix: impl Into<String>,
        gene_name: impl Into<String>,
    ) -> Result<Self, NomenclatureError> {
        let species_prefix = species_prefix.into();
        let gene_name = gene_name.into();
        if species_prefix.is_empty() {
            return Err(NomenclatureError::EmptySpeciesPrefix);
        }
        if gene_name.is_empty() {
            return Err(NomenclatureError::EmptyGeneName);
        }
        Ok(Locus {
            species_prefix,
            gene_name,
        })
    }

    pub fn species_prefix(&self) -> &str {
        &self.species_prefix
    }

    pub fn gene_name(&self) -> &str {
        &self.gene_name
    }

    ///
    /// Canonical rendering of this locus, e.g. `HLA-A`, or just the gene
    /// name when the species prefix is excluded.
    ///
    pub fn normalized_string(&self, include_species: bool) -> String {
        if include_species {
            format!("{}-{}", self.species_prefix, self.gene_name)
        } else {
            self.gene_name.clone()
        }
    }

    ///
    /// Same content as [`Locus::normalized_string`] with the separator
    /// removed, e.g. `HLAA`.
    ///
    pub fn compact_string(&self, include_species: bool) -> String {
        if include_species {
            format!("{}{}", self.species_prefix, self.gene_name)
        } else {
            self.gene_name.clone()
        }
    }

    ///
    /// Export the locus as a flat field map for downstream serialization.
    /// Richer naming levels extend this map, they never replace it.
    ///
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("species_prefix".to_string(), self.species_prefix.clone());
        map.insert("gene_name".to_string(), self.gene_name.clone());
        map.insert("locus".to_string(), self.normalized_string(true));
        map
    }
}

impl Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized_string(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn hla_a() -> Locus {
        Locus::new("HLA", "A").unwrap()
    }

    #[rstest]
    fn test_normalized_string(hla_a: Locus) {
        assert_eq!(hla_a.normalized_string(true), "HLA-A");
        assert_eq!(hla_a.normalized_string(false), "A");
    }

    #[rstest]
    fn test_compact_string(hla_a: Locus) {
        assert_eq!(hla_a.compact_string(true), "HLAA");
        assert_eq!(hla_a.compact_string(false), "A");
    }

    #[rstest]
    fn test_display_matches_normalized_form(hla_a: Locus) {
        assert_eq!(hla_a.to_string(), "HLA-A");
    }

    #[rstest]
    fn test_to_map(hla_a: Locus) {
        let map = hla_a.to_map();
        assert_eq!(map["species_prefix"], "HLA");
        assert_eq!(map["gene_name"], "A");
        assert_eq!(map["locus"], "HLA-A");
    }

    #[rstest]
    fn test_empty_fields_rejected() {
        assert_eq!(
            Locus::new("", "A").unwrap_err(),
            NomenclatureError::EmptySpeciesPrefix
        );
        assert_eq!(
            Locus::new("HLA", "").unwrap_err(),
            NomenclatureError::EmptyGeneName
        );
    }
}
