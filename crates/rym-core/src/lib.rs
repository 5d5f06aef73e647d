//! Shared vocabulary of the Polish rhyme engine.
//!
//! - [`character`] -- the supported character repertoire and the vowel and
//!   consonant classes that all rule patterns are authored against
//! - [`transcode`] -- strict and forgiving conversion of interchange text
//!   into the internal character domain
//! - [`key`] -- the `RhymeKey` value type and the `AccentPosition` enum

pub mod character;
pub mod key;
pub mod transcode;

pub use key::{AccentPosition, RhymeKey};
pub use transcode::{to_internal, DecodeMode, UnsupportedChar};
