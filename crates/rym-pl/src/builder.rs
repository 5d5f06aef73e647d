// Dictionary construction.
//
// Turns a raw inflected word list into the sorted entry lines of the
// dictionary file. Words that cannot rhyme (empty key) or that contain
// characters outside the supported alphabet are dropped, not reported:
// construction is a bulk operation over hundreds of thousands of forms.

use hashbrown::HashSet;

use rym_core::DecodeMode;

use crate::rhyme::derive;
use crate::rules::RuleTable;

/// Polish collation: maps letters onto ASCII strings whose byte order is
/// the Polish alphabetical order, so that the words listed under one key
/// come out alphabetized. Apostrophes are ignored.
const COLLATE: &[(char, &str)] = &[
    ('ą', "a~"),
    ('ć', "c~"),
    ('é', "e"),
    ('ę', "e~"),
    ('ł', "l~"),
    ('ń', "n~"),
    ('ö', "oe"),
    ('ó', "o~"),
    ('ś', "s~"),
    ('ü', "ue"),
    ('ź', "z}"),
    ('ż', "z~"),
    ('-', "-"),
    ('\'', ""),
];

/// Characters whose presence disqualifies a word list entry: capitalized
/// words (proper names and abbreviations), digits, punctuation, and the
/// foreign letters the rule tables do not model.
const REMOVE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZÉŠÜàâäçčêñôōšúùûūĄĆĘŁŃÓŚŹŻ.;0123456789";

/// Collation key for a word, or `None` when the word must be skipped.
fn collate_key(word: &str) -> Option<String> {
    let mut collated = String::with_capacity(word.len());
    for ch in word.chars() {
        if REMOVE.contains(ch) {
            return None;
        }
        if ch.is_ascii_lowercase() {
            collated.push(ch);
        } else if let Some((_, mapped)) = COLLATE.iter().find(|(c, _)| *c == ch) {
            collated.push_str(mapped);
        } else {
            return None;
        }
    }
    Some(collated)
}

/// Accumulates word list entries and emits the sorted dictionary lines.
pub struct DictionaryBuilder<'a> {
    rules: &'a RuleTable,
    seen: HashSet<String>,
    entries: Vec<Entry>,
}

/// Sort order: by entry prefix (the file invariant), then by Polish
/// collation, then by raw word as a tiebreak.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    prefix: String,
    collated: String,
    word: String,
}

impl<'a> DictionaryBuilder<'a> {
    pub fn new(rules: &'a RuleTable) -> DictionaryBuilder<'a> {
        DictionaryBuilder {
            rules,
            seen: HashSet::new(),
            entries: Vec::new(),
        }
    }

    /// Consider one candidate word. Multi-word entries, repeated forms,
    /// disqualified spellings and words with no addressable rhyme are
    /// silently skipped.
    pub fn add_word(&mut self, word: &str) {
        if word.is_empty() || word.contains(' ') {
            return;
        }
        if !self.seen.insert(word.to_owned()) {
            return;
        }
        let Some(collated) = collate_key(word) else {
            return;
        };
        let Ok(key) = derive(self.rules, word, DecodeMode::Forgiving) else {
            return;
        };
        if !key.is_rhymable() {
            return;
        }
        self.entries.push(Entry {
            prefix: key.entry_prefix(),
            collated,
            word: word.to_owned(),
        });
    }

    /// Number of accepted entries so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sort and emit the dictionary lines.
    pub fn build(mut self) -> Vec<String> {
        self.entries.sort();
        self.entries
            .into_iter()
            .map(|entry| format!("{}{}", entry.prefix, entry.word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn build(words: &[&str]) -> Vec<String> {
        let mut builder = DictionaryBuilder::new(RuleTable::shared());
        for word in words {
            builder.add_word(word);
        }
        builder.build()
    }

    #[test]
    fn emits_sorted_lines_with_hex_counts() {
        let lines = build(&["matka", "chatka", "nauka"]);
        assert_eq!(
            lines,
            vec!["atka,2,chatka", "atka,2,matka", "uka,3,nauka"]
        );
    }

    #[test]
    fn words_under_one_key_are_alphabetized_by_polish_collation() {
        // All three share the key "atka,2,". In raw byte order "łatka"
        // would sort last; Polish order puts ł between l and m.
        let lines = build(&["matka", "łatka", "chatka"]);
        let words: Vec<&str> = lines
            .iter()
            .map(|l| l.splitn(3, ',').nth(2).unwrap())
            .collect();
        assert_eq!(words, vec!["chatka", "łatka", "matka"]);
    }

    #[test]
    fn duplicates_are_suppressed() {
        let lines = build(&["matka", "matka", "matka"]);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn disqualified_words_are_skipped() {
        let lines = build(&["Matka", "mat2ka", "mat.ka", "dwa słowa", "matka"]);
        assert_eq!(lines, vec!["atka,2,matka"]);
    }

    #[test]
    fn unrhymable_words_are_skipped() {
        assert!(build(&["grr"]).is_empty());
    }

    #[test]
    fn built_lines_satisfy_the_lookup_invariant() {
        let lines = build(&[
            "matka", "chatka", "łatka", "armatka", "nauka", "sztuka", "dąb", "ząb", "kąt", "ląd",
        ]);
        // Sorted by the `key,hexcount,` prefix; the word field itself is
        // not part of the file invariant.
        let prefix_of = |line: &str| {
            let second_comma = line.match_indices(',').nth(1).unwrap().0;
            line[..=second_comma].to_owned()
        };
        for pair in lines.windows(2) {
            assert!(
                prefix_of(&pair[0]) <= prefix_of(&pair[1]),
                "prefix order violated between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }

        let dict = Dictionary::from_lines(lines);
        let rhymes = dict.find("atka", Some(2));
        assert_eq!(rhymes, vec!["chatka", "łatka", "matka"]);
        assert_eq!(dict.find("omp", Some(1)), vec!["dąb", "ząb"]);
    }
}
