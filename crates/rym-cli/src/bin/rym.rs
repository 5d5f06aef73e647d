// rym: find rhyming words in the precomputed dictionary.
//
// Usage:
//   rym [-d DICT_PATH] WORD [SYLLABLES]
//
// Prints the dictionary words whose rhyme key matches WORD, one per line,
// in dictionary order. With SYLLABLES, only words of that syllable count
// are printed; a token that is not a number is ignored and the query runs
// unconstrained.

use std::io::{self, Write};

use rym_pl::dictionary::parse_syllable_count;
use rym_pl::RhymeFinder;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = rym_cli::parse_dict_path(&args);

    if rym_cli::wants_help(&args) {
        println!("rym: find Polish rhymes.");
        println!();
        println!("Usage: rym [-d DICT_PATH] WORD [SYLLABLES]");
        println!();
        println!("Prints dictionary words rhyming with WORD, one per line.");
        println!("SYLLABLES restricts matches to that syllable count.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Rhyme dictionary file");
        println!("                         (default: {}, or ${})",
            rym_cli::DEFAULT_DICTIONARY,
            rym_cli::DICT_PATH_ENV
        );
        println!("  -h, --help             Print this help");
        return;
    }

    if args.is_empty() || args.len() > 2 {
        eprintln!("Usage: rym [-d DICT_PATH] WORD [SYLLABLES]");
        std::process::exit(1);
    }
    let word = &args[0];
    let syllables = args.get(1).and_then(|token| parse_syllable_count(token));

    let path = rym_cli::dictionary_path(dict_path.as_deref());
    let finder = RhymeFinder::open(&path).unwrap_or_else(|e| rym_cli::fatal(&e.to_string()));

    let words = finder
        .find(word, syllables)
        .unwrap_or_else(|e| rym_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for rhyme in words {
        let _ = writeln!(out, "{rhyme}");
    }
}
