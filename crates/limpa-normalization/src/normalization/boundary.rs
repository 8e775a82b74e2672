//! Digit/letter boundary splitting.

use unicode_normalization::char::is_combining_mark;

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !is_combining_mark(ch)
}

fn is_transition(left: char, right: char) -> bool {
    (is_digit(left) && is_letter(right)) || (is_letter(left) && is_digit(right))
}

/// Combining marks belong to the preceding letter and never connect.
fn is_connector(ch: char) -> bool {
    !ch.is_alphanumeric() && !ch.is_whitespace() && !is_combining_mark(ch)
}

/// Separate digits from letters with a single space.
///
/// A space is inserted at every digit→letter and letter→digit transition. A
/// single connector character (neither alphanumeric nor whitespace) between a
/// digit and a letter is turned into that space instead. Combining marks stay
/// attached to their base character.
///
/// # Examples
///
/// ```
/// use limpa_normalization::normalization::split_alnum_boundary;
///
/// assert_eq!(split_alnum_boundary("Lote42X"), "Lote 42 X");
/// assert_eq!(split_alnum_boundary("12-kg"), "12 kg");
/// assert_eq!(split_alnum_boundary("kg/5"), "kg 5");
/// ```
pub fn split_alnum_boundary(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);

    // Last character that is not a combining mark.
    let mut base: Option<char> = None;

    for (idx, &ch) in chars.iter().enumerate() {
        if is_combining_mark(ch) {
            out.push(ch);
            continue;
        }
        let next = chars.get(idx + 1).copied();

        if let (Some(left), Some(right)) = (base, next)
            && is_connector(ch)
            && is_transition(left, right)
        {
            out.push(' ');
            base = Some(ch);
            continue;
        }
        if let Some(left) = base
            && is_transition(left, ch)
        {
            out.push(' ');
        }
        out.push(ch);
        base = Some(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_both_directions() {
        assert_eq!(split_alnum_boundary("ABC123"), "ABC 123");
        assert_eq!(split_alnum_boundary("12kg"), "12 kg");
        assert_eq!(split_alnum_boundary("a1b2"), "a 1 b 2");
    }

    #[test]
    fn splits_accented_letters() {
        assert_eq!(split_alnum_boundary("café2"), "café 2");
    }

    #[test]
    fn connector_between_digit_and_letter_becomes_space() {
        assert_eq!(split_alnum_boundary("12-kg"), "12 kg");
        assert_eq!(split_alnum_boundary("kg/5"), "kg 5");
        assert_eq!(split_alnum_boundary("NF-12345/AB"), "NF 12345 AB");
    }

    #[test]
    fn combining_marks_stay_with_their_letter() {
        assert_eq!(split_alnum_boundary("e\u{301}5"), "e\u{301} 5");
        assert_eq!(split_alnum_boundary("e\u{301}-5"), "e\u{301} 5");
        assert_eq!(split_alnum_boundary("5e\u{301}"), "5 e\u{301}");
        assert_eq!(split_alnum_boundary("a\u{301}b"), "a\u{301}b");
    }

    #[test]
    fn keeps_connectors_elsewhere() {
        assert_eq!(split_alnum_boundary("12-5"), "12-5");
        assert_eq!(split_alnum_boundary("ab-cd"), "ab-cd");
        assert_eq!(split_alnum_boundary("12--kg"), "12--kg");
        assert_eq!(split_alnum_boundary("-12"), "-12");
    }

    #[test]
    fn leaves_spaced_tokens_alone() {
        assert_eq!(split_alnum_boundary("12 kg"), "12 kg");
        assert_eq!(split_alnum_boundary(""), "");
    }

    #[test]
    fn is_idempotent() {
        for input in ["Lote42X", "x1-y2/z3", "10kg-5g", "A1.B2", "cafe\u{301}2"] {
            let once = split_alnum_boundary(input);
            assert_eq!(split_alnum_boundary(&once), once, "input {input}");
        }
    }
}
