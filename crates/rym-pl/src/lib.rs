//! Polish rhyme-key derivation and rhyme dictionary lookup.
//!
//! A written word goes through an ordered rewrite pipeline: spelling
//! normalization, syllabification, stress resolution, rhyme extraction and
//! phoneme leveling. The result is a [`rym_core::RhymeKey`] that is equal
//! for words that truly rhyme, and a syllable count. A precomputed
//! dictionary sorted by key is then searched by key prefix.
//!
//! - [`rules`] -- the ordered rule tables ([`rules::RuleTable`])
//! - [`syllable`] -- syllable scanning and coda windows
//! - [`accent`] -- stress position resolution
//! - [`rhyme`] -- per-chunk extraction, compound handling, the generic
//!   leveling pass ([`rhyme::derive`])
//! - [`dictionary`] -- the sorted dictionary file and range lookup
//! - [`builder`] -- dictionary construction from a raw word list
//! - [`handle`] -- the [`handle::RhymeFinder`] tying it all together

use std::path::PathBuf;

pub mod accent;
pub mod builder;
pub mod dictionary;
pub mod handle;
pub mod rhyme;
pub mod rules;
pub mod syllable;

pub use handle::RhymeFinder;

/// Error type for rhyme derivation and dictionary access.
///
/// These are the only failure conditions visible to a hosting application:
/// a word outside the supported alphabet, and an unreadable dictionary
/// file. An empty rhyme key is not an error.
#[derive(Debug, thiserror::Error)]
pub enum RymError {
    /// The word contains a character the internal domain cannot represent.
    #[error(transparent)]
    Word(#[from] rym_core::UnsupportedChar),

    /// The dictionary file could not be read.
    #[error("cannot read rhyme dictionary {path}: {source}")]
    Dictionary {
        path: PathBuf,
        source: std::io::Error,
    },
}
