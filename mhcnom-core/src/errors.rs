use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NomenclatureError {
    #[error("species prefix must be non-empty")]
    EmptySpeciesPrefix,

    #[error("gene name must be non-empty")]
    EmptyGeneName,

    #[error("allele group id must be non-empty")]
    EmptyGroupId,
}
