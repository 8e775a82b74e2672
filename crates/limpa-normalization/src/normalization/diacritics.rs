//! Diacritic folding.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Superscript ordinal indicators (`Nº`, `1ª`). NFKD would expand them into a
/// standalone letter, so they are dropped like a mark.
const ORDINAL_INDICATORS: [char; 2] = ['\u{ba}', '\u{aa}'];

/// Strip diacritics from text.
///
/// Decomposes to NFKD, drops every combining mark and remaps `ç`/`Ç` to
/// `c`/`C`. Ordinal indicators are removed.
///
/// # Examples
///
/// ```
/// use limpa_normalization::normalization::fold_diacritics;
///
/// assert_eq!(fold_diacritics("Café Açaí"), "Cafe Acai");
/// assert_eq!(fold_diacritics("Nº 10"), "N 10");
/// ```
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .filter(|ch| !ORDINAL_INDICATORS.contains(ch))
        .nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .map(|ch| match ch {
            'ç' => 'c',
            'Ç' => 'C',
            other => other,
        })
        .collect()
}
