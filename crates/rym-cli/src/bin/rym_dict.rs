// rym-dict: build the rhyme dictionary from a word list.
//
// Usage:
//   rym-dict [-o OUTPUT] WORDLIST
//
// The word list is a text file with one or more comma-separated inflected
// forms per line (the format of the sjp.pl inflection list). Every form
// gets a rhyme key; forms with no addressable rhyme, capitalized forms
// and forms with unsupported characters are skipped. The output is the
// sorted dictionary file that `rym` searches.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use rym_pl::builder::DictionaryBuilder;
use rym_pl::rules::RuleTable;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if rym_cli::wants_help(&args) {
        println!("rym-dict: build the Polish rhyme dictionary.");
        println!();
        println!("Usage: rym-dict [-o OUTPUT] WORDLIST");
        println!();
        println!("Reads comma-separated word forms, one group per line, and");
        println!("writes the sorted rhyme dictionary.");
        println!();
        println!("Options:");
        println!("  -o, --output PATH   Output file (default: polish-rhymes.dic)");
        println!("  -h, --help          Print this help");
        return;
    }

    let mut output = "polish-rhymes.dic".to_string();
    let mut wordlist: Option<String> = None;
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "-o" | "--output" => {
                if i + 1 < args.len() {
                    output = args[i + 1].clone();
                    skip_next = true;
                } else {
                    rym_cli::fatal(&format!("{arg} requires a value"));
                }
            }
            s if !s.starts_with('-') => wordlist = Some(arg.clone()),
            other => rym_cli::fatal(&format!("unknown option {other}")),
        }
    }

    let Some(wordlist) = wordlist else {
        eprintln!("Usage: rym-dict [-o OUTPUT] WORDLIST");
        std::process::exit(1);
    };

    let file = File::open(&wordlist)
        .unwrap_or_else(|e| rym_cli::fatal(&format!("cannot open {wordlist}: {e}")));

    let mut builder = DictionaryBuilder::new(RuleTable::shared());
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => rym_cli::fatal(&format!("cannot read {wordlist}: {e}")),
        };
        for form in line.trim().split(", ") {
            builder.add_word(form);
        }
    }

    let lines = builder.build();
    eprintln!("writing {} entries to {output}", lines.len());

    let out_file = File::create(&output)
        .unwrap_or_else(|e| rym_cli::fatal(&format!("cannot create {output}: {e}")));
    let mut out = BufWriter::new(out_file);
    for line in &lines {
        if let Err(e) = writeln!(out, "{line}") {
            rym_cli::fatal(&format!("cannot write {output}: {e}"));
        }
    }
    if let Err(e) = out.flush() {
        rym_cli::fatal(&format!("cannot write {output}: {e}"));
    }
}
