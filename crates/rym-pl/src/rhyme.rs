// Rhyme key derivation.
//
// Per chunk: spelling substitutions, syllabification, stress resolution,
// then extraction of the coda window at the stressed syllable with its
// onset stripped, leveled by the final rules. Hyphenated compounds are
// processed chunk by chunk and recombined before the generic leveling
// pass runs over the assembled key.

use rym_core::{to_internal, DecodeMode, RhymeKey, UnsupportedChar};
use rym_pattern::apply_rules;

use crate::accent::resolve_accent;
use crate::rules::RuleTable;
use crate::syllable::{coda_windows, correct_extra_syllable, scan_syllables, strip_prefix};

/// Derive syllable count and leveled coda for one hyphen-free chunk.
///
/// The returned coda has been through the final rules but not the generic
/// pass, which runs once per word rather than once per chunk.
pub(crate) fn derive_chunk(rules: &RuleTable, chunk: &[char]) -> (usize, Vec<char>) {
    let rewritten = apply_rules(&rules.substitutions, chunk.to_vec());
    let syllables = scan_syllables(rules, &rewritten);
    let mut codas = coda_windows(&syllables);
    let count = correct_extra_syllable(rules, &rewritten, chunk.len(), syllables.len(), &mut codas);

    let accent = resolve_accent(rules, chunk, count);
    let mut rhyme = codas[accent.syllables_from_end()].clone();
    strip_prefix(&rules.initial_consonants, &mut rhyme);
    let rhyme = apply_rules(&rules.final_rules, rhyme);
    (count, rhyme)
}

/// Derive count and pre-normalization key for a whole word.
///
/// Chunks are delimited by hyphens and processed independently; their
/// syllable counts sum. The key is the last chunk's key, except when that
/// chunk alone produced an empty key: then the key is recomputed from the
/// dehyphenated concatenation.
pub(crate) fn derive_word(rules: &RuleTable, word: &[char]) -> (usize, Vec<char>) {
    let chunks: Vec<&[char]> = word.split(|&c| c == '-').collect();
    let results: Vec<(usize, Vec<char>)> = chunks
        .iter()
        .map(|chunk| derive_chunk(rules, chunk))
        .collect();
    let total = results.iter().map(|(count, _)| count).sum();

    let last_rhyme = &results[results.len() - 1].1;
    if chunks.len() == 1 || !last_rhyme.is_empty() {
        (total, last_rhyme.clone())
    } else {
        let joined: Vec<char> = word.iter().copied().filter(|&c| c != '-').collect();
        (total, derive_chunk(rules, &joined).1)
    }
}

/// Apply the generic leveling pass to an assembled key.
pub fn normalize(rules: &RuleTable, key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    apply_rules(&rules.generic_rules, chars)
        .into_iter()
        .collect()
}

/// Derive the rhyme key and syllable count for a word.
///
/// In strict mode a character outside the supported alphabet is an error;
/// in forgiving mode it is dropped. A word with no addressable rhyme
/// yields an empty key and is not an error.
pub fn derive(rules: &RuleTable, word: &str, mode: DecodeMode) -> Result<RhymeKey, UnsupportedChar> {
    let internal = to_internal(word, mode)?;
    let (syllables, rhyme) = derive_word(rules, &internal);
    let key: String = rhyme.into_iter().collect();
    Ok(RhymeKey {
        key: normalize(rules, &key),
        syllables,
    })
}
