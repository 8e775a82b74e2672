//! Case folding.

use unicode_normalization::UnicodeNormalization;

/// True when the compatibility decomposition of `ch` has letters that still
/// change under lowercasing (`™` → `TM`, `ℌ` → `H`).
fn hides_capitals(ch: char) -> bool {
    ch.nfkd().any(|part| !part.to_lowercase().eq(std::iter::once(part)))
}

/// Lowercase text, independent of locale.
///
/// Compatibility characters that decompose into capitals (`™`, `№`, `ℌ`,
/// `ᴬ`) are replaced by their lowercased decomposition, so a later NFKD
/// pass cannot bring capitals back.
///
/// # Examples
///
/// ```
/// use limpa_normalization::normalization::fold_case;
///
/// assert_eq!(fold_case("AÇÃO Nº 5"), "ação nº 5");
/// assert_eq!(fold_case("Produto™"), "produtotm");
/// ```
pub fn fold_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    if !lowered.chars().any(hides_capitals) {
        return lowered;
    }

    let mut out = String::with_capacity(lowered.len() + 4);
    for ch in lowered.chars() {
        if hides_capitals(ch) {
            out.extend(ch.nfkd().flat_map(char::to_lowercase));
        } else {
            out.push(ch);
        }
    }
    out
}
