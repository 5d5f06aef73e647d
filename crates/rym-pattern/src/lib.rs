//! Rewrite-rule pattern engine.
//!
//! The rhyme derivation pipeline is a sequence of ordered rewrite rules.
//! Every rule is a fixed, non-recursive pattern over the internal character
//! domain, so instead of a general regular-expression dependency the rules
//! are compiled here into a small backtracking matcher program.
//!
//! - [`syntax`] -- pattern notation parser
//! - [`program`] -- compilation of the parsed pattern into matcher
//!   instructions
//! - [`matcher`] -- the backtracking matcher ([`Pattern`], [`Match`])
//! - [`rewrite`] -- replacement expansion and ordered rule application
//!   ([`Rule`], [`apply_rules`])
//!
//! # Notation
//!
//! The supported subset: literals, `.`, enumerated `[...]` / `[^...]`
//! classes, `(...)` capturing and `(?:...)` non-capturing groups, ordered
//! `|` alternation, `^` / `$` anchors, `?` on any element, `*` and `+` on
//! single-character elements, and the four zero-width assertions `(?=...)`,
//! `(?!...)`, `(?<=...)`, `(?<!...)`. Lookbehind must have bounded width.
//! Matching is greedy with backtracking; alternation prefers the leftmost
//! branch.

pub mod matcher;
pub mod program;
pub mod rewrite;
pub mod syntax;

pub use matcher::{Match, Pattern};
pub use rewrite::{apply_rules, Replacement, Rule};

/// Error type for pattern compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("unexpected end of pattern")]
    UnexpectedEnd,
    #[error("unbalanced ')' at position {0}")]
    UnbalancedParen(usize),
    #[error("unknown group prefix at position {0}")]
    UnknownGroupPrefix(usize),
    #[error("unterminated character class")]
    UnterminatedClass,
    #[error("empty character class")]
    EmptyClass,
    #[error("quantifier '{quantifier}' at position {pos} has nothing to repeat")]
    DanglingQuantifier { quantifier: char, pos: usize },
    #[error("'*' and '+' apply only to single-character elements (position {0})")]
    UnsupportedRepeat(usize),
    #[error("lookbehind pattern has unbounded width")]
    UnboundedLookbehind,
    #[error("replacement references group {0} which the pattern does not define")]
    UnknownGroup(usize),
}
