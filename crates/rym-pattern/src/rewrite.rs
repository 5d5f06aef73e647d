// Replacement expansion and ordered rule application.
//
// A rule pairs a pattern with a replacement. Applying a rule substitutes
// every non-overlapping match, scanning left to right; applying a rule
// list runs each rule to completion before the next one starts, so later
// rules observe the text produced by earlier ones.

use crate::matcher::{Match, Pattern};
use crate::PatternError;

/// One segment of a replacement template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(Vec<char>),
    /// `\n` backreference: the literal captured text of group `n`.
    Group(usize),
}

/// The replacement side of a rule.
#[derive(Debug, Clone)]
pub struct Replacement {
    kind: ReplacementKind,
}

#[derive(Debug, Clone)]
enum ReplacementKind {
    /// Literal text with `\1`-style backreferences.
    Template(Vec<Segment>),
    /// The first character of the given group's capture. Used by the
    /// substitution that collapses a run of identical vowels.
    FirstOfGroup(usize),
}

impl Replacement {
    /// Parse a template string. Backslash followed by a digit is a group
    /// reference; backslash followed by anything else is that character.
    pub fn template(text: &str) -> Replacement {
        let mut segments = Vec::new();
        let mut literal = Vec::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                literal.push(c);
                continue;
            }
            match chars.next() {
                Some(d) if d.is_ascii_digit() => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Group(d as usize - '0' as usize));
                }
                Some(other) => literal.push(other),
                None => literal.push('\\'),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Replacement {
            kind: ReplacementKind::Template(segments),
        }
    }

    /// Replacement that keeps only the first character of a group.
    pub fn first_of_group(index: usize) -> Replacement {
        Replacement {
            kind: ReplacementKind::FirstOfGroup(index),
        }
    }

    /// Largest group index the replacement refers to.
    fn max_group(&self) -> usize {
        match &self.kind {
            ReplacementKind::Template(segments) => segments
                .iter()
                .map(|s| match s {
                    Segment::Group(n) => *n,
                    Segment::Literal(_) => 0,
                })
                .max()
                .unwrap_or(0),
            ReplacementKind::FirstOfGroup(n) => *n,
        }
    }

    fn expand(&self, text: &[char], m: &Match, out: &mut Vec<char>) {
        match &self.kind {
            ReplacementKind::Template(segments) => {
                for segment in segments {
                    match segment {
                        Segment::Literal(chars) => out.extend_from_slice(chars),
                        Segment::Group(n) => {
                            if let Some((a, b)) = m.group(*n) {
                                out.extend_from_slice(&text[a..b]);
                            }
                        }
                    }
                }
            }
            ReplacementKind::FirstOfGroup(n) => {
                if let Some((a, b)) = m.group(*n) {
                    if b > a {
                        out.push(text[a]);
                    }
                }
            }
        }
    }
}

/// A rewrite rule: pattern plus replacement.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    replacement: Replacement,
}

impl Rule {
    /// Build a rule from pattern source and a template replacement.
    pub fn new(pattern: &str, replacement: &str) -> Result<Rule, PatternError> {
        Rule::with_replacement(pattern, Replacement::template(replacement))
    }

    /// Build a rule with an explicit replacement.
    pub fn with_replacement(
        pattern: &str,
        replacement: Replacement,
    ) -> Result<Rule, PatternError> {
        let pattern = Pattern::compile(pattern)?;
        let max = replacement.max_group();
        if max > pattern.n_groups() {
            return Err(PatternError::UnknownGroup(max));
        }
        Ok(Rule {
            pattern,
            replacement,
        })
    }

    /// The rule's pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Substitute every non-overlapping match, left to right.
    pub fn apply(&self, text: &[char]) -> Vec<char> {
        let mut out = Vec::with_capacity(text.len());
        let mut pos = 0;
        while pos <= text.len() {
            match self.pattern.find_at(text, pos) {
                Some(m) => {
                    out.extend_from_slice(&text[pos..m.start]);
                    self.replacement.expand(text, &m, &mut out);
                    if m.is_empty() {
                        // A zero-width match consumes nothing; emit the next
                        // character and move past it to guarantee progress.
                        if m.start < text.len() {
                            out.push(text[m.start]);
                        }
                        pos = m.start + 1;
                    } else {
                        pos = m.end;
                    }
                }
                None => {
                    out.extend_from_slice(&text[pos..]);
                    break;
                }
            }
        }
        out
    }
}

/// Apply an ordered rule list: each rule fully applied before the next.
pub fn apply_rules(rules: &[Rule], text: Vec<char>) -> Vec<char> {
    rules.iter().fold(text, |current, rule| rule.apply(&current))
}
