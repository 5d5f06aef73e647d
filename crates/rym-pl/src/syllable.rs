// Syllable scanning and coda windows.
//
// The scanner runs the syllable pattern repeatedly over the rewritten
// chunk. Characters between matches are dropped: only the syllabic
// material matters, because downstream we only ever look at whole-syllable
// suffixes (coda windows) of the word.

use rym_pattern::Pattern;

use crate::rules::RuleTable;

/// Number of coda windows kept per chunk: the empty window plus the last
/// one to four syllables, indexed by stress position.
pub const CODA_WINDOWS: usize = 5;

/// Split a rewritten chunk into its syllable substrings, left to right.
pub fn scan_syllables(rules: &RuleTable, text: &[char]) -> Vec<Vec<char>> {
    let mut syllables = Vec::new();
    let mut pos = 0;
    while let Some(m) = rules.syllable.find_at(text, pos) {
        syllables.push(text[m.start..m.end].to_vec());
        pos = if m.end > m.start { m.end } else { m.start + 1 };
    }
    syllables
}

/// Build the coda windows: window `k` is the concatenation of the last
/// `k` syllables (all of them when the word has fewer than `k`).
pub fn coda_windows(syllables: &[Vec<char>]) -> [Vec<char>; CODA_WINDOWS] {
    core::array::from_fn(|k| {
        let take = k.min(syllables.len());
        syllables[syllables.len() - take..].concat()
    })
}

/// Remove an anchored prefix match from the window, if any.
pub(crate) fn strip_prefix(pattern: &Pattern, text: &mut Vec<char>) {
    if let Some(m) = pattern.find(text) {
        text.drain(m.start..m.end);
    }
}

/// Correct the syllable count for vowel sequences that were scanned as one
/// nucleus but are spoken as two syllables.
///
/// When the chunk contains such a sequence and already has at least two
/// syllables, the reported count goes up by one, and every coda window
/// that reaches back past the end of the flagged sequence loses its onset
/// and then its first vowel, so that stress counting on the corrected
/// count stays aligned with the corrected windows. Window starts are
/// measured against the original chunk length, not the rewritten one.
///
/// At most one extra syllable is ever added, no matter how many flagged
/// sequences occur.
pub fn correct_extra_syllable(
    rules: &RuleTable,
    rewritten: &[char],
    original_len: usize,
    count: usize,
    codas: &mut [Vec<char>; CODA_WINDOWS],
) -> usize {
    let Some(m) = rules.more_syllables.find(rewritten) else {
        return count;
    };
    if count <= 1 {
        return count;
    }
    for coda in codas.iter_mut() {
        if m.end as isize > original_len as isize - coda.len() as isize {
            strip_prefix(&rules.initial_consonants, coda);
            strip_prefix(&rules.initial_vowel, coda);
        }
    }
    count + 1
}
