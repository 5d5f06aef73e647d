// End-to-end pipeline tests: word in, rhyme key and dictionary matches out.

use rym_core::DecodeMode;
use rym_pl::builder::DictionaryBuilder;
use rym_pl::dictionary::{parse_syllable_count, Dictionary};
use rym_pl::rhyme::{derive, normalize};
use rym_pl::rules::RuleTable;
use rym_pl::RhymeFinder;

fn key(word: &str) -> (String, usize) {
    let k = derive(RuleTable::shared(), word, DecodeMode::Strict).unwrap();
    (k.key, k.syllables)
}

// ---------------------------------------------------------------------------
// Rhyme equivalence classes
// ---------------------------------------------------------------------------

#[test]
fn true_rhymes_share_a_key() {
    let groups: &[&[&str]] = &[
        &["matka", "chatka", "łatka"],
        &["dąb", "ząb"],
        &["kąt", "ląd"],
        &["nauka", "sztuka"],
        &["zrobiłybyśmy", "robiłybyśmy"],
    ];
    for group in groups {
        let (first, _) = key(group[0]);
        for word in &group[1..] {
            assert_eq!(key(word).0, first, "{word} should rhyme with {}", group[0]);
        }
    }
}

#[test]
fn different_rhymes_get_different_keys() {
    let pairs = [
        ("fizyka", "muzyka"),   // stressed vowel differs: FI-zy-ka / MU-zy-ka
        ("matka", "nauka"),
        ("dąb", "kąt"),
    ];
    for (a, b) in pairs {
        assert_ne!(key(a).0, key(b).0, "{a} must not rhyme with {b}");
    }
}

#[test]
fn syllable_counts_follow_pronunciation_not_spelling() {
    assert_eq!(key("sztuka").1, 2);
    assert_eq!(key("nauka").1, 3); // na-u-ka despite the "au" spelling
    assert_eq!(key("matematyka").1, 5);
}

// ---------------------------------------------------------------------------
// Contract scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_word_without_syllables() {
    let (rhyme, count) = key("grr");
    assert_eq!(count, 0);
    assert_eq!(rhyme, "");
}

#[test]
fn scenario_compound_uses_last_chunk() {
    let compound = key("czarno-biały");
    assert_eq!(compound.0, key("biały").0);
    assert_eq!(compound.1, key("czarno").1 + key("biały").1);
}

#[test]
fn scenario_compound_falls_back_to_dehyphenated() {
    let compound = key("czarno-grr");
    assert_eq!(compound.0, key("czarnogrr").0);
    assert_eq!(compound.1, key("czarno").1); // the vowelless chunk adds 0
}

#[test]
fn scenario_unparsable_count_token_means_unconstrained() {
    let dict = Dictionary::from_lines(vec![
        "atka,2,matka".to_owned(),
        "atka,3,armatka".to_owned(),
    ]);
    let unconstrained = dict.find("atka", None);
    let with_bad_token = dict.find("atka", parse_syllable_count("not-a-number"));
    assert_eq!(unconstrained, with_bad_token);
}

#[test]
fn scenario_three_line_dictionary_ranges() {
    let dict = Dictionary::from_lines(vec![
        "a,1,jeden".to_owned(),
        "a,2,dwa".to_owned(),
        "b,1,trzy".to_owned(),
    ]);
    assert_eq!(dict.find("a", None), vec!["jeden", "dwa"]);
    assert_eq!(dict.find("a", Some(1)), vec!["jeden"]);
    assert_eq!(dict.find("b", None), vec!["trzy"]);
    assert_eq!(dict.find("c", None), Vec::<&str>::new());
}

// ---------------------------------------------------------------------------
// Whole-system: build a dictionary, then look rhymes up in it
// ---------------------------------------------------------------------------

#[test]
fn built_dictionary_round_trip() {
    let words = [
        "matka", "chatka", "łatka", "armatka", "dąb", "ząb", "kąt", "ląd", "nauka", "sztuka",
        "fizyka", "muzyka", "biały", "czarno-biały", "grr",
    ];
    let mut builder = DictionaryBuilder::new(RuleTable::shared());
    for word in words {
        builder.add_word(word);
    }
    let finder = RhymeFinder::new(Dictionary::from_lines(builder.build()));

    // "grr" was dropped at build time.
    assert_eq!(finder.dictionary().len(), words.len() - 1);

    assert_eq!(
        finder.find("kwoka", None).unwrap(),
        Vec::<&str>::new(),
        "no -oka words in this dictionary"
    );
    assert_eq!(
        finder.find("łatka", Some(2)).unwrap(),
        vec!["chatka", "łatka", "matka"]
    );
    assert_eq!(finder.find("ząb", None).unwrap(), vec!["dąb", "ząb"]);
    // Keys level across spelling, so lookup by either spelling agrees.
    assert_eq!(
        finder.find("kąt", None).unwrap(),
        finder.find("ląd", None).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn derivation_is_deterministic() {
    for word in ["matka", "czarno-biały", "zrobiłybyśmy", "café", "nauka"] {
        assert_eq!(key(word), key(word));
    }
}

#[test]
fn generic_pass_is_idempotent_on_derived_keys() {
    let rules = RuleTable::shared();
    let words = [
        "matka", "chatka", "dąb", "ząb", "kąt", "ląd", "nauka", "sztuka", "fizyka", "muzyka",
        "matematyka", "biały", "czarno-biały", "zrobiłybyśmy", "jeśliby", "café", "ego",
        "klient", "austriacki", "ręka", "książka", "wszystko", "pierwszy", "chcę",
    ];
    for word in words {
        let (k, _) = key(word);
        assert_eq!(normalize(rules, &k), k, "second pass changed key of {word}");
    }
}
