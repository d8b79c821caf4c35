use unicode_normalization::UnicodeNormalization;

/// Normalize a string and return a mapping from normalized char indices to original char indices.
///
/// Characters are decomposed (NFD) and combining marks dropped, so `é` becomes `e`.
/// Returns (normalized_string, mapping) where mapping[i] gives the original char index
/// for the i-th character in the normalized string.
pub fn normalize_with_char_mapping(s: &str) -> (String, Vec<usize>) {
    let mut normalized = String::new();
    let mut mapping = Vec::new();

    for (orig_char_idx, orig_char) in s.chars().enumerate() {
        for decomposed_char in orig_char.nfd() {
            if !unicode_normalization::char::is_combining_mark(decomposed_char) {
                normalized.push(decomposed_char);
                mapping.push(orig_char_idx);
            }
        }
    }

    (normalized, mapping)
}

/// Map character indices from normalized string back to original string.
///
/// Several normalized characters may come from the same original one; the
/// mapped indices are deduplicated so they stay strictly increasing.
pub fn map_char_indices_to_original(normalized_indices: &[usize], char_mapping: &[usize]) -> Vec<usize> {
    let mut indices: Vec<usize> = normalized_indices
        .iter()
        .filter_map(|&idx| char_mapping.get(idx).copied())
        .collect();
    indices.dedup();
    indices
}
