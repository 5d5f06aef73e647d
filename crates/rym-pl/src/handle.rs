// RhymeFinder: the top-level integration point.
//
// Owns the compiled rule table and the loaded dictionary, and exposes the
// two operations a hosting application needs: derive a key for a word,
// and find the dictionary words rhyming with it.

use std::path::Path;

use rym_core::{DecodeMode, RhymeKey};

use crate::dictionary::Dictionary;
use crate::rhyme::derive;
use crate::rules::RuleTable;
use crate::RymError;

/// Rhyme lookup over a loaded dictionary.
pub struct RhymeFinder {
    rules: RuleTable,
    dictionary: Dictionary,
}

impl RhymeFinder {
    /// Create a finder over an already-loaded dictionary, compiling the
    /// built-in rule table.
    pub fn new(dictionary: Dictionary) -> RhymeFinder {
        RhymeFinder::with_rules(RuleTable::new(), dictionary)
    }

    /// Create a finder with an injected rule table.
    pub fn with_rules(rules: RuleTable, dictionary: Dictionary) -> RhymeFinder {
        RhymeFinder { rules, dictionary }
    }

    /// Load the dictionary file at `path` and create a finder over it.
    pub fn open(path: &Path) -> Result<RhymeFinder, RymError> {
        Ok(RhymeFinder::new(Dictionary::open(path)?))
    }

    /// Derive the rhyme key for a word (strict alphabet handling).
    pub fn rhyme_key(&self, word: &str) -> Result<RhymeKey, RymError> {
        Ok(derive(&self.rules, word, DecodeMode::Strict)?)
    }

    /// All dictionary words rhyming with `word`, optionally restricted to
    /// a syllable count, in stored order.
    ///
    /// The queried word itself is not filtered out: whether it appears
    /// depends only on whether it is in the dictionary.
    pub fn find(&self, word: &str, syllables: Option<usize>) -> Result<Vec<&str>, RymError> {
        let key = self.rhyme_key(word)?;
        Ok(self.dictionary.find(&key.key, syllables))
    }

    /// The rule table in use.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// The loaded dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder() -> RhymeFinder {
        RhymeFinder::new(Dictionary::from_lines(vec![
            "atka,2,chatka".to_owned(),
            "atka,2,matka".to_owned(),
            "atka,3,armatka".to_owned(),
            "omp,1,dąb".to_owned(),
            "omp,1,ząb".to_owned(),
        ]))
    }

    #[test]
    fn find_by_derived_key() {
        let finder = finder();
        assert_eq!(
            finder.find("łatka", None).unwrap(),
            vec!["chatka", "matka", "armatka"]
        );
        assert_eq!(finder.find("łatka", Some(2)).unwrap(), vec!["chatka", "matka"]);
    }

    #[test]
    fn spelling_differences_level_to_the_same_matches() {
        let finder = finder();
        assert_eq!(finder.find("dąb", None).unwrap(), vec!["dąb", "ząb"]);
        assert_eq!(finder.find("ząb", None).unwrap(), vec!["dąb", "ząb"]);
    }

    #[test]
    fn unsupported_word_is_an_error() {
        let finder = finder();
        assert!(matches!(
            finder.find("кот", None),
            Err(RymError::Word(_))
        ));
    }

    #[test]
    fn unrhymable_word_matches_nothing() {
        let finder = finder();
        assert!(finder.find("grr", None).unwrap().is_empty());
    }

    #[test]
    fn missing_dictionary_is_fatal() {
        assert!(matches!(
            RhymeFinder::open(Path::new("/nonexistent/rhymes.dic")),
            Err(RymError::Dictionary { .. })
        ));
    }
}
