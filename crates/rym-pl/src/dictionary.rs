// The sorted rhyme dictionary and its range lookup.
//
// The on-disk format is one entry per line, `key,hexcount,word`, globally
// sorted by the byte value of the line up through the second comma. Lookup
// assumes that invariant and is a pair of binary searches; it never scans
// the whole file.

use std::path::Path;

use crate::RymError;

/// The field delimiter of the entry format. Keys never contain it.
pub const DELIMITER: char = ',';

/// An in-memory rhyme dictionary: the sorted lines of the dictionary file.
#[derive(Debug, Default)]
pub struct Dictionary {
    lines: Vec<String>,
}

impl Dictionary {
    /// Read a dictionary file fully into memory.
    ///
    /// A missing or unreadable file is fatal to the caller; there is no
    /// degraded mode without a dictionary.
    pub fn open(path: &Path) -> Result<Dictionary, RymError> {
        let data = std::fs::read_to_string(path).map_err(|source| RymError::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Dictionary::from_lines(
            data.lines().map(str::to_owned).collect(),
        ))
    }

    /// Build a dictionary from already-sorted entry lines (without
    /// trailing newlines). Lookup is only correct if the lines are sorted
    /// by their `key,hexcount,` prefix.
    pub fn from_lines(lines: Vec<String>) -> Dictionary {
        Dictionary { lines }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All words whose entry matches the key, and the syllable count when
    /// one is given, in stored (file) order.
    pub fn find(&self, key: &str, syllables: Option<usize>) -> Vec<&str> {
        let prefix = search_prefix(key, syllables);
        let (left, right) = self.range(prefix.as_bytes());
        self.lines[left..right]
            .iter()
            .map(|line| word_field(line))
            .collect()
    }

    /// The half-open index range of entries starting with `prefix`.
    ///
    /// The upper bound appends two maximal bytes to the prefix: every line
    /// that starts with the prefix compares below that sentinel, and every
    /// other line falls outside the range.
    fn range(&self, prefix: &[u8]) -> (usize, usize) {
        let left = self.lines.partition_point(|line| line.as_bytes() < prefix);
        let mut upper = prefix.to_vec();
        upper.extend_from_slice(&[0xFF, 0xFF]);
        let right = self
            .lines
            .partition_point(|line| line.as_bytes() < upper.as_slice());
        (left, right)
    }
}

/// Build the search prefix for a query: `key,` alone, or `key,hexcount,`.
pub fn search_prefix(key: &str, syllables: Option<usize>) -> String {
    match syllables {
        Some(count) => format!("{key}{DELIMITER}{count:x}{DELIMITER}"),
        None => format!("{key}{DELIMITER}"),
    }
}

/// Parse a syllable-count query token. Anything that is not a small
/// non-negative integer yields `None`, which callers treat as an
/// unconstrained query rather than an error.
pub fn parse_syllable_count(token: &str) -> Option<usize> {
    token.trim().parse().ok()
}

/// The word field of an entry line: everything after the second delimiter.
fn word_field(line: &str) -> &str {
    line.splitn(3, DELIMITER).nth(2).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Dictionary {
        Dictionary::from_lines(vec![
            "a,1,ja".to_owned(),
            "a,2,tara".to_owned(),
            "atka,2,chatka".to_owned(),
            "atka,2,matka".to_owned(),
            "atka,3,armatka".to_owned(),
            "b,1,herb".to_owned(),
        ])
    }

    #[test]
    fn key_query_returns_contiguous_range_in_file_order() {
        let dict = fixture();
        assert_eq!(dict.find("atka", None), vec!["chatka", "matka", "armatka"]);
    }

    #[test]
    fn count_narrows_the_range() {
        let dict = fixture();
        assert_eq!(dict.find("atka", Some(2)), vec!["chatka", "matka"]);
        assert_eq!(dict.find("atka", Some(3)), vec!["armatka"]);
        assert_eq!(dict.find("atka", Some(4)), Vec::<&str>::new());
    }

    #[test]
    fn counted_results_are_a_subsequence_of_uncounted() {
        let dict = fixture();
        let all = dict.find("atka", None);
        for count in 0..5 {
            let narrowed = dict.find("atka", Some(count));
            let mut rest = all.iter();
            for word in &narrowed {
                assert!(
                    rest.any(|w| w == word),
                    "{word} not in order within {all:?}"
                );
            }
        }
    }

    #[test]
    fn short_key_does_not_match_longer_keys() {
        let dict = fixture();
        // "a" must not pick up "atka" entries.
        assert_eq!(dict.find("a", None), vec!["ja", "tara"]);
        assert_eq!(dict.find("a", Some(1)), vec!["ja"]);
    }

    #[test]
    fn absent_key_returns_empty() {
        let dict = fixture();
        assert!(dict.find("c", None).is_empty());
        assert!(dict.find("", None).is_empty());
    }

    #[test]
    fn empty_dictionary_returns_empty() {
        let dict = Dictionary::from_lines(Vec::new());
        assert!(dict.find("a", None).is_empty());
        assert!(dict.is_empty());
    }

    #[test]
    fn range_bounds_are_monotonic() {
        let dict = fixture();
        for key in ["", "a", "atka", "b", "zzz"] {
            for syllables in [None, Some(1), Some(2), Some(9)] {
                let prefix = search_prefix(key, syllables);
                let (left, right) = dict.range(prefix.as_bytes());
                assert!(left <= right, "range inverted for {prefix:?}");
                assert!(right <= dict.len());
            }
        }
    }

    #[test]
    fn hex_counts_in_prefix() {
        assert_eq!(search_prefix("atka", Some(12)), "atka,c,");
        assert_eq!(search_prefix("atka", None), "atka,");
    }

    #[test]
    fn count_token_parsing_is_forgiving() {
        assert_eq!(parse_syllable_count("3"), Some(3));
        assert_eq!(parse_syllable_count(" 3 "), Some(3));
        assert_eq!(parse_syllable_count("three"), None);
        assert_eq!(parse_syllable_count("-1"), None);
        assert_eq!(parse_syllable_count(""), None);
    }

    #[test]
    fn missing_file_reports_path_and_cause() {
        let err = Dictionary::open(Path::new("/nonexistent/rhymes.dic")).unwrap_err();
        match err {
            RymError::Dictionary { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/rhymes.dic"));
            }
            other => panic!("expected dictionary error, got {other:?}"),
        }
    }
}
