//! String normalization helpers shared by the naming model and the lookup
//! tables keyed on nomenclature strings.

/// Characters removed from a name during normalization.
pub const DEFAULT_STRIP_CHARS: &[char] = &['-', '_', '\'', ' '];

///
/// Normalize a nomenclature string: trim surrounding whitespace, uppercase,
/// then drop every occurrence of the characters in [`DEFAULT_STRIP_CHARS`],
/// so that `hla-a`, `HLA_A` and `hla a` all become `HLAA`.
///
/// Idempotent: feeding the output back in returns it unchanged.
///
/// # Arguments
///
/// - `name`: the candidate name to normalize
///
pub fn normalize_string(name: &str) -> String {
    normalize_string_with(name, DEFAULT_STRIP_CHARS)
}

///
/// Like [`normalize_string`] but with a caller-supplied removal set.
///
pub fn normalize_string_with(name: &str, strip_chars: &[char]) -> String {
    let name = if name.contains(' ') { name.trim() } else { name };
    let mut normalized = name.to_uppercase();
    normalized.retain(|c| !strip_chars.contains(&c));
    normalized
}
