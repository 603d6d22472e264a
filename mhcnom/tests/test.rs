//! End-to-end workflow: render allele groups to their canonical strings,
//! key a normalizing metadata table with them, invert the table into a
//! reverse lookup, and export field maps for serialization.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use rstest::*;

use mhcnom::core::models::{AlleleGroup, ToAlleleGroup};
use mhcnom::lookup::{LookupError, NormalizingMap};

#[fixture]
fn a2() -> AlleleGroup {
    AlleleGroup::new("HLA", "A", "02").unwrap()
}

#[fixture]
fn b7() -> AlleleGroup {
    AlleleGroup::new("HLA", "B", "07").unwrap()
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_rendering_forms(a2: AlleleGroup) {
        assert_eq!(a2.normalized_string(true), "HLA-A*02");
        assert_eq!(a2.normalized_string(false), "A*02");
        assert_eq!(a2.compact_string(true), "HLAA02");
        assert_eq!(a2.to_string(), "HLA-A*02");
    }

    #[rstest]
    fn test_metadata_table_tolerates_spelling_variants(a2: AlleleGroup, b7: AlleleGroup) {
        let mut frequencies: NormalizingMap<String, f64> = NormalizingMap::new();
        frequencies.insert(a2.normalized_string(true), 0.29);
        frequencies.insert(b7.normalized_string(true), 0.12);

        // case, punctuation and whitespace variants all reach the same slot
        assert_eq!(frequencies.get(&"hla a*02".to_string()), Some(&0.29));
        assert_eq!(frequencies.get(&"HLA_B*07".to_string()), Some(&0.12));
        assert_eq!(frequencies.len(), 2);

        assert_eq!(
            frequencies.original_key(&"hlaa*02".to_string()).unwrap(),
            "HLA-A*02"
        );
    }

    #[rstest]
    fn test_reverse_lookup_from_serotype_table() {
        // serotype -> allele groups, inverted into allele group -> serotypes
        let serotypes: NormalizingMap<String, Vec<String>> = NormalizingMap::from_pairs([
            (
                "A2".to_string(),
                vec!["A*02".to_string(), "A*68".to_string()],
            ),
            ("B7".to_string(), vec!["B*07".to_string()]),
        ]);

        let by_group = serotypes.invert();
        assert_eq!(by_group.len(), 3);
        assert!(by_group.get(&"a*68".to_string()).unwrap().contains("A2"));
        assert!(by_group.get(&"b*07".to_string()).unwrap().contains("B7"));
    }

    #[rstest]
    fn test_group_accumulation_with_default_factory(
        a2: AlleleGroup,
        b7: AlleleGroup,
    ) -> Result<(), LookupError> {
        let mut groups_by_locus: NormalizingMap<String, BTreeSet<String>> =
            NormalizingMap::with_default_factory(BTreeSet::new);

        for group in [&a2, &b7] {
            groups_by_locus
                .get_or_create(&group.locus().normalized_string(true))?
                .insert(group.normalized_string(true));
        }

        assert_eq!(groups_by_locus.len(), 2);
        assert!(
            groups_by_locus
                .get(&"hla a".to_string())
                .unwrap()
                .contains("HLA-A*02")
        );
        Ok(())
    }

    #[rstest]
    fn test_field_map_serializes(a2: AlleleGroup) {
        let json = serde_json::to_value(a2.to_map()).unwrap();
        assert_eq!(json["species_prefix"], "HLA");
        assert_eq!(json["gene_name"], "A");
        assert_eq!(json["locus"], "HLA-A");
        assert_eq!(json["allele_group"], "HLA-A*02");
        assert_eq!(json["group_id"], "02");
    }

    #[rstest]
    fn test_projections(a2: AlleleGroup) {
        assert_eq!(a2.to_allele_group(), a2);
        assert_eq!(a2.to_locus().normalized_string(true), "HLA-A");
    }
}
