//! Special-character substitution.

use std::collections::BTreeSet;

use limpa_model::DEFAULT_SPECIAL_CHARS;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;

use crate::error::{NormalizationError, Result};

const ZERO_WIDTH_NON_JOINER: char = '\u{200c}';
const ZERO_WIDTH_JOINER: char = '\u{200d}';

/// Compiled separator class: the default special characters plus any
/// caller-supplied extras, each matched literally.
#[derive(Debug, Clone)]
pub struct SpecialCharClass {
    members: BTreeSet<char>,
    pattern: Regex,
}

impl SpecialCharClass {
    /// Compile the class for `extra_chars`.
    ///
    /// Each character of `extra_chars` is one member. Code points that only
    /// exist as part of a multi-code-point cluster are rejected, and so is the
    /// whole configuration.
    pub fn new(extra_chars: &str) -> Result<Self> {
        for ch in extra_chars.chars() {
            validate_member(ch)?;
        }
        let members: BTreeSet<char> = DEFAULT_SPECIAL_CHARS
            .chars()
            .chain(extra_chars.chars())
            .collect();

        let mut class = String::from("[");
        let mut buf = [0u8; 4];
        for ch in &members {
            class.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
        }
        class.push(']');
        let pattern = Regex::new(&class)?;

        Ok(Self { members, pattern })
    }

    pub fn contains(&self, ch: char) -> bool {
        self.members.contains(&ch)
    }

    pub fn members(&self) -> impl Iterator<Item = char> + '_ {
        self.members.iter().copied()
    }

    /// Replace every member occurring in `text` with a single space.
    pub fn substitute(&self, text: &str) -> String {
        self.pattern.replace_all(text, " ").into_owned()
    }
}

fn validate_member(ch: char) -> Result<()> {
    let reason = if is_combining_mark(ch) {
        "combining mark cannot stand alone"
    } else if ch == ZERO_WIDTH_JOINER || ch == ZERO_WIDTH_NON_JOINER {
        "zero-width joiner only exists inside a cluster"
    } else if matches!(ch, '\u{fe00}'..='\u{fe0f}' | '\u{e0100}'..='\u{e01ef}') {
        "variation selector only exists inside a cluster"
    } else {
        return Ok(());
    };
    Err(NormalizationError::InvalidConfig {
        character: ch,
        reason,
    })
}

/// Replace special characters with spaces in one call.
///
/// Compiles the class on every call; use [`SpecialCharClass`] when cleaning
/// many values.
///
/// # Examples
///
/// ```
/// use limpa_normalization::normalization::substitute_specials;
///
/// assert_eq!(substitute_specials("A.B", "")?, "A B");
/// assert_eq!(substitute_specials("10€ §2", "€§")?, "10   2");
/// # Ok::<(), limpa_normalization::NormalizationError>(())
/// ```
pub fn substitute_specials(text: &str, extra_chars: &str) -> Result<String> {
    Ok(SpecialCharClass::new(extra_chars)?.substitute(text))
}
