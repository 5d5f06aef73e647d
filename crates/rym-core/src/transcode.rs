// Conversion of interchange text into the internal character domain.
//
// All rule patterns are defined over the Latin-2 repertoire described in
// `character`. Interchange text (UTF-8 strings) must pass through here
// before any pattern is applied; multi-script input never reaches the
// matcher.

use crate::character::is_internal_char;

/// How to treat characters that fall outside the supported repertoire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// Fail on the first unsupported character. Used by lookup.
    Strict,
    /// Silently drop unsupported characters. Used when normalizing raw
    /// word-list input during dictionary construction.
    Forgiving,
}

/// A word contained a character that the internal domain cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("word {word:?} contains character {ch:?} outside the supported alphabet")]
pub struct UnsupportedChar {
    /// The offending word, as given by the caller.
    pub word: String,
    /// The first unsupported character found in it.
    pub ch: char,
}

/// Convert a word into the internal character domain.
pub fn to_internal(word: &str, mode: DecodeMode) -> Result<Vec<char>, UnsupportedChar> {
    let mut out = Vec::with_capacity(word.len());
    for ch in word.chars() {
        if is_internal_char(ch) {
            out.push(ch);
        } else if mode == DecodeMode::Strict {
            return Err(UnsupportedChar {
                word: word.to_owned(),
                ch,
            });
        }
    }
    Ok(out)
}
