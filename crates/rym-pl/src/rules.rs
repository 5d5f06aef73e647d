// The ordered rule tables.
//
// Rule order is load-bearing everywhere in this file: later rules assume
// earlier ones have already fired, both within each list and between the
// pipeline stages. Patterns are matched against the internal character
// domain of `rym_core::character`; the vowel and consonant classes are
// interpolated from there so the two stay in lockstep.

use std::sync::OnceLock;

use rym_core::character::{CONSONANTS, VOWELS};
use rym_pattern::{Pattern, Replacement, Rule};

// ---------------------------------------------------------------------------
// Spelling substitutions
// ---------------------------------------------------------------------------

/// Irregular spellings normalized before syllabification. Mostly loanwords
/// whose written form hides a syllable ("austriacki" is au-stry-jac-ki) or
/// shows one that is not pronounced ("marzły" has no rz sound).
const SUBSTITUTION_RULES: &[(&str, &str)] = &[
    ("austria([ck])", "austryja\\1"),
    ("^hm", "hym"),
    ("klien([ct])", "klijen\\1"),
    ("marz([lłn])", "mars\\1"),
    ("^(m[iu]r)z([aąęoó]|y$|y[^nń])", "\\1s\\2"),
    ("patrio([ct])", "patryjo\\1"),
    ("^sir$", "ser"),
    ("żmii$", "żmiji"),
];

/// An interjection written as a run of one vowel letter ("aaa", "eee")
/// counts as a single syllable; the run collapses to its first letter.
const VOWEL_RUN: &str = "^(a+|e+|i+|o+|u+|y+)$";

// ---------------------------------------------------------------------------
// Syllable shapes
// ---------------------------------------------------------------------------

/// Letters that spell a glide rather than a syllable nucleus: 'y' in
/// "lyo" (Lyon), 'u' after 'g' before a front vowel (Guido) and 'u'
/// after 'q' (quiz).
const NONSYLLABIC: &str = "(?:(?<=l)y(?=o)|(?<=g)u(?=[eiy])|(?<=q)u)?";

/// Vowel sequences that are one syllable despite two vowel letters:
/// native diphthong spellings plus a closed set of loanword patterns
/// (French eau/ai/oi, German ei, English -ay and friends).
const MONOSYLLABIC: &str = "ae$|[aeo]y|(?<!arc|ędz|prz)y[ao]|au|eau|eu|ée|oeh|ou|\
                            (?<=[dn])ai(?=s)|(?<=[lw])ai|(?<=[^i]m)ai(?=[lns])|(?<=[ln]t)ai|\
                            (?<=[blz])ei(?=t)|(?<=[mw])ei(?=n)|(?<=st)ei(?=n)|ei(?=f)|\
                            (?<=v)oi|(?<=çen)oi(?=s)|oi(?=x)";

/// Vowel sequences matched as one nucleus above that are nevertheless two
/// spoken syllables (na-u-ka, prze-u-czyć). A word containing one of these
/// gets its syllable count bumped by one and the affected coda windows
/// corrected.
const MORE_SYLLABLES: &str = "auł|nau(?=b[il]|cz|ga|j|k|m(?!ach)|r[ąz]|w|ż)|\
                              prau|zau(?=f|ł|r[ao].|s[tz]|w)|\
                              (?:ant|w|rz)y(?=[ao])|\
                              eu(?=sz)|kreu|nieu|przeu|seu(?=l)|\
                              [dnpw]ou|długou|samou";

// ---------------------------------------------------------------------------
// Stress exception classes, matched against the original spelling
// ---------------------------------------------------------------------------

/// Final-syllable stress: French-derived spellings (circumflexed vowels,
/// -é, -oi(s/x)) and a few fixed endings.
const ULTIMATE: &str = "[âçîô]|eu$|(?<!wi)é$|([^ir]|[^abks]r)é[^ćjmr]|voi|[çen]ois|oix";

/// Third-from-end stress: conditional-mood forms (-łaby, -liby, ...),
/// emphatic -że forms, Greek/Latin -ika/-yka nouns and a handful of
/// numerals and fixed phrases.
const ANTEPENULTIMATE: &str = "(ł[ao]?|^byle|^chociaż|^jeśli|^jeżeli)(bym|byś|by)$|\
                               [bćfhjklmńpśwzźż]że$|kądże$|\
                               (li|ły)(by|śmy|ście)$|\
                               (([afgm]|([by]|ta|cyk|ato|ncho)l|([hi]|[hmp]a|[lmrt]o)n|[eip]p)i|\
                               (([els]|[lt]o)d|ir|as|([eknpt]|[mn]a|li|[rz]o|.s|[ae]u|ry)t|\
                               (la|ab|e|f|[ft]o|p|met)r|[iuy]z)y)\
                               (ka|kiem|ku|cy|kach|kom|ce|ką|kę|ki|ko)$|\
                               ^cztery.|[^lrs]set$|kroć$|imum$|bruderszaf|cyferbla|\
                               rzecz.*pospolit|\
                               (^a|^aże|^choć|^gdy|^jak|^że)(byśmy|byście)$";

/// Fourth-from-end stress: first- and second-person plural conditionals
/// (-łybyśmy, -libyście).
const PREANTEPENULTIMATE: &str = "(li|ły|^byle|^chociaż|^jeśli|^jeżeli)(byśmy|byście)$";

// ---------------------------------------------------------------------------
// Final rules: position-sensitive leveling of the freshly extracted coda
// ---------------------------------------------------------------------------

/// Applied once per chunk, right after extraction, before chunks
/// recombine. Word-final cluster simplifications and double letters, plus
/// final -ę, which denasalizes to plain -e in speech. Final -ą is *not*
/// here: it levels in the generic pass instead, so the two nasal vowels
/// deliberately end up on opposite sides of the chunk boundary.
const FINAL_RULES: &[(&str, &str)] = &[
    ("tz$", "c"),
    ("trz$", "cz"),
    ("(?<!o)ck$", "k"),
    ("chs$", "ks"),
    ("cks$", "ks"),
    ("stw$", "s"),
    ("dt$", "t"),
    ("th$", "t"),
    ("ff$", "f"),
    ("gg$", "k"),
    ("kk$", "k"),
    ("ll$", "l"),
    ("łł$", "ł"),
    ("mm$", "m"),
    ("ss$", "s"),
    ("tt$", "t"),
    ("bł$", "b"),
    ("chł$", "ch"),
    ("dł$", "d"),
    ("gł$", "g"),
    ("kł$", "k"),
    ("pł$", "p"),
    ("rł$", "r"),
    ("sł$", "s"),
    ("tł$", "t"),
    ("zł$", "z"),
    ("ę$", "e"),
];

// ---------------------------------------------------------------------------
// Generic rules: position-general leveling of the assembled key
// ---------------------------------------------------------------------------

/// Applied once to the whole key after compound recombination. Word-final
/// devoicing, voicing assimilation inside clusters (each direction its own
/// rule), archaic and foreign digraph normalization, and nasal vowel
/// splitting conditioned on the following consonant class.
const GENERIC_RULES: &[(&str, &str)] = &[
    // Final devoicing.
    ("dz$", "c"),
    ("dż$", "cz"),
    ("dź$", "ć"),
    ("w$", "f"),
    ("g$", "k"),
    ("b$", "p"),
    ("(?<![crs])z$", "s"),
    ("rz$", "sz"),
    ("ż$", "sz"),
    ("ższ$", "sz"),
    ("strz$", "szcz"),
    ("zdrz$", "szcz"),
    ("żdż$", "szcz"),
    ("ź$", "ś"),
    ("źć$", "ść"),
    ("źdź$", "ść"),
    ("d$", "t"),
    // Foreign vowel letters.
    ("é", "e"),
    ("ö", "e"),
    ("ü", "i"),
    // Spellings that differ without a difference in sound.
    ("^i", "y"),
    ("ch", "h"),
    ("(?<=[^hkpt])rz", "ż"),
    ("(?<=[hkpt])rz", "sz"),
    ("ó", "u"),
    ("ck(?=[^aąeęioóuylnr])", "k"),
    // Voicing assimilation before voiceless and voiced clusters.
    ("b(?=[cćfhkpsśt])", "p"),
    ("p(?=[bdgźż])", "b"),
    ("d(?=[cćfhkpsśt])", "t"),
    ("t(?=[bdgźż])", "d"),
    ("dz(?=[cćfhkpsśt])", "c"),
    ("c(?=[bdgźż])", "dz"),
    ("dź(?=[cćfhkpsśt])", "ć"),
    ("ć(?=[bdgźż])", "dź"),
    ("dż(?=[cćfhkpsśt])", "cz"),
    ("cz(?=[bdgźż])", "dż"),
    ("g(?=[cćfhkpsśt])", "k"),
    ("k(?=[bdgźż])", "g"),
    ("w(?=[cćfhkpsśt])", "f"),
    ("f(?=[bdgźż])", "w"),
    ("(?<![cdrs])z(?=[cćfhkpsśt])", "s"),
    ("s(?=[bdgźż])", "z"),
    ("(?<!d)ź(?=[cćfhkpsśt])", "ś"),
    ("ś(?=[bdgźż])", "ź"),
    ("(?<!d)ż(?=[cćfhkpsśt])", "sz"),
    ("sz(?=[bdgźż])", "ż"),
    // Cluster simplifications.
    ("(?<=[śź])l(?=[cmn])", ""),
    ("błk", "pk"),
    ("wsk", "sk"),
    // Foreign spellings.
    ("ight", "ajt"),
    ("ais$", "e"),
    ("eaux?", "o"),
    ("ault", "o"),
    ("au(?!cz|k|ł)", "ał"),
    ("ohm", "om"),
    ("ohn", "on"),
    ("ou(?!ch|st)", "u"),
    ("v", "w"),
    ("x", "ks"),
    ("tsch", "cz"),
    // Nasal vowels split into vowel plus consonant, conditioned on what
    // follows; a bare final -ą levels to -o.
    ("ą(?=[ćfhsśwzźż])", "oł"),
    ("ą(?=[bp])", "om"),
    ("ą(?=[cdgkt])", "on"),
    ("ą(?=[lł])", "o"),
    ("ą$", "o"),
    ("ę(?=[ćfhsśwzźż])", "eł"),
    ("ę(?=[bp])", "em"),
    ("ę(?=[cdgkt])", "en"),
    ("ę(?=[lł])", "e"),
];

// ---------------------------------------------------------------------------
// RuleTable
// ---------------------------------------------------------------------------

/// All compiled rule sets, built once and read-only afterwards.
///
/// The table is plain data: the pipeline functions in [`crate::rhyme`],
/// [`crate::syllable`] and [`crate::accent`] borrow it, so callers can
/// inject an alternate table. [`RuleTable::shared`] provides the usual
/// process-wide instance.
#[derive(Debug)]
pub struct RuleTable {
    pub(crate) substitutions: Vec<Rule>,
    pub(crate) syllable: Pattern,
    pub(crate) more_syllables: Pattern,
    pub(crate) initial_consonants: Pattern,
    pub(crate) initial_vowel: Pattern,
    pub(crate) ultimate: Pattern,
    pub(crate) antepenultimate: Pattern,
    pub(crate) preantepenultimate: Pattern,
    pub(crate) final_rules: Vec<Rule>,
    pub(crate) generic_rules: Vec<Rule>,
}

fn pat(src: &str) -> Pattern {
    Pattern::compile(src).expect("built-in pattern must compile")
}

fn rule(src: &str, replacement: &str) -> Rule {
    Rule::new(src, replacement).expect("built-in rule must compile")
}

impl RuleTable {
    /// Compile every rule set.
    pub fn new() -> RuleTable {
        let consonants = format!("[{CONSONANTS}]*");
        let vowel = format!("[{VOWELS}]");

        let mut substitutions: Vec<Rule> = SUBSTITUTION_RULES
            .iter()
            .map(|(src, replacement)| rule(src, replacement))
            .collect();
        substitutions.push(
            Rule::with_replacement(VOWEL_RUN, Replacement::first_of_group(1))
                .expect("built-in rule must compile"),
        );

        // One syllable: optional onset (consonant cluster with glide
        // handling, or the French e'), a nucleus, a trailing cluster.
        let syllable = format!(
            "(?:e'|{consonants}{NONSYLLABIC}i?)?(?:{MONOSYLLABIC}|{vowel})(?:{consonants}{NONSYLLABIC})"
        );

        // The onset alone, anchored; strips the consonants before the
        // stressed vowel so the key starts at the nucleus.
        let initial_consonants = format!("^{consonants}{NONSYLLABIC}(?:i?(?={vowel}))");
        let initial_vowel = format!("^{vowel}");

        RuleTable {
            substitutions,
            syllable: pat(&syllable),
            more_syllables: pat(MORE_SYLLABLES),
            initial_consonants: pat(&initial_consonants),
            initial_vowel: pat(&initial_vowel),
            ultimate: pat(ULTIMATE),
            antepenultimate: pat(ANTEPENULTIMATE),
            preantepenultimate: pat(PREANTEPENULTIMATE),
            final_rules: FINAL_RULES
                .iter()
                .map(|(src, replacement)| rule(src, replacement))
                .collect(),
            generic_rules: GENERIC_RULES
                .iter()
                .map(|(src, replacement)| rule(src, replacement))
                .collect(),
        }
    }

    /// The process-wide table, built on first use.
    pub fn shared() -> &'static RuleTable {
        static SHARED: OnceLock<RuleTable> = OnceLock::new();
        SHARED.get_or_init(RuleTable::new)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::new()
    }
}
