use std::collections::HashMap;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::locus::Locus;
use crate::errors::NomenclatureError;

///
/// A group of closely related alleles at one locus, identified by a
/// species, a gene, and a group id, such as HLA-A*02.
///
/// Allele groups are not serotypes (e.g. HLA-A2). A serotype names the
/// proteins recognized by a single antibody; a similarly named allele group
/// and serotype overlap heavily but neither contains the other.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlleleGroup {
    locus: Locus,
    group_id: String,
}

impl AlleleGroup {
    ///
    /// Create a new allele group from its three name components. All
    /// components must be non-empty.
    ///
    pub fn new(
        species_prefix: impl Into<String>,
        gene_name: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Result<Self, NomenclatureError> {
        Self::from_locus(Locus::new(species_prefix, gene_name)?, group_id)
    }

    ///
    /// Attach a group id to an existing locus.
    ///
    pub fn from_locus(
        locus: Locus,
        group_id: impl Into<String>,
    ) -> Result<Self, NomenclatureError> {
        let group_id = group_id.into();
        if group_id.is_empty() {
            return Err(NomenclatureError::EmptyGroupId);
        }
        Ok(AlleleGroup { locus, group_id })
    }

    pub fn locus(&self) -> &Locus {
        &self.locus
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    ///
    /// Canonical rendering: the locus form, then `*`, then the group id.
    /// The asterisk is the nomenclature separator between a locus and its
    /// group identifier.
    ///     HLA-A*02
    ///
    pub fn normalized_string(&self, include_species: bool) -> String {
        format!(
            "{}*{}",
            self.locus.normalized_string(include_species),
            self.group_id
        )
    }

    ///
    /// Compact rendering drops every separator, including the `*`.
    ///     Normalized: HLA-A*02
    ///     Compact: HLAA02
    ///
    pub fn compact_string(&self, include_species: bool) -> String {
        format!(
            "{}{}",
            self.locus.compact_string(include_species),
            self.group_id
        )
    }

    /// Project down to the enclosing locus, dropping the group id.
    pub fn to_locus(&self) -> Locus {
        self.locus.clone()
    }

    ///
    /// Export all fields of this allele group along with the fields of its
    /// locus.
    ///
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = self.locus.to_map();
        map.insert("allele_group".to_string(), self.normalized_string(true));
        map.insert("group_id".to_string(), self.group_id.clone());
        map
    }
}

///
/// Projection onto the allele-group naming level. For [`AlleleGroup`] this
/// is a plain copy; naming levels finer than an allele group implement it
/// by discarding their more specific fields.
///
pub trait ToAlleleGroup {
    fn to_allele_group(&self) -> AlleleGroup;
}

impl ToAlleleGroup for AlleleGroup {
    fn to_allele_group(&self) -> AlleleGroup {
        self.clone()
    }
}

impl Display for AlleleGroup {
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
    fn hla_a_02() -> AlleleGroup {
        AlleleGroup::new("HLA", "A", "02").unwrap()
    }

    #[rstest]
    fn test_normalized_string(hla_a_02: AlleleGroup) {
        assert_eq!(hla_a_02.normalized_string(true), "HLA-A*02");
        assert_eq!(hla_a_02.normalized_string(false), "A*02");
    }

    #[rstest]
    fn test_compact_string(hla_a_02: AlleleGroup) {
        assert_eq!(hla_a_02.compact_string(true), "HLAA02");
        assert_eq!(hla_a_02.compact_string(false), "A02");
    }

    #[rstest]
    fn test_to_locus_drops_group_id(hla_a_02: AlleleGroup) {
        assert_eq!(hla_a_02.to_locus(), Locus::new("HLA", "A").unwrap());
    }

    #[rstest]
    fn test_to_allele_group_is_a_copy(hla_a_02: AlleleGroup) {
        assert_eq!(hla_a_02.to_allele_group(), hla_a_02);
    }

    #[rstest]
    fn test_to_map_extends_locus_fields(hla_a_02: AlleleGroup) {
        let map = hla_a_02.to_map();
        assert_eq!(map["species_prefix"], "HLA");
        assert_eq!(map["gene_name"], "A");
        assert_eq!(map["locus"], "HLA-A");
        assert_eq!(map["allele_group"], "HLA-A*02");
        assert_eq!(map["group_id"], "02");
    }

    #[rstest]
    fn test_empty_group_id_rejected() {
        assert_eq!(
            AlleleGroup::new("HLA", "A", "").unwrap_err(),
            NomenclatureError::EmptyGroupId
        );
    }

    #[rstest]
    fn test_from_locus(hla_a_02: AlleleGroup) {
        let locus = Locus::new("HLA", "A").unwrap();
        assert_eq!(AlleleGroup::from_locus(locus, "02").unwrap(), hla_a_02);
    }
}
