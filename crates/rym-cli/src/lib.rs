// rym-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;

/// Conventional install location of the rhyme dictionary.
pub const DEFAULT_DICTIONARY: &str = "/usr/local/share/dict/polish-rhymes.dic";

/// Environment variable overriding the dictionary location.
pub const DICT_PATH_ENV: &str = "RYM_DICT_PATH";

/// Resolve the dictionary path: explicit flag, then the environment
/// variable, then the conventional system path.
pub fn dictionary_path(flag: Option<&str>) -> PathBuf {
    if let Some(path) = flag {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var(DICT_PATH_ENV) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_DICTIONARY)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
