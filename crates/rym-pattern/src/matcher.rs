// The backtracking matcher.
//
// Execution walks the instruction list with an explicit position into the
// text. `Split` tries its preferred branch via recursion and falls back to
// the alternate, which yields ordered alternation and greedy quantifiers.
// `Save` restores its capture slot when the continuation fails, so capture
// state is always consistent with the chosen path.

use crate::program::{compile, Inst, LookInst};
use crate::syntax::parse;
use crate::PatternError;

/// A compiled pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    src: String,
    prog: Vec<Inst>,
    n_groups: usize,
}

/// A single match: the span plus the spans of all capturing groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    groups: Vec<Option<(usize, usize)>>,
}

impl Match {
    /// Span of the 1-based capturing group, if it participated in the match.
    pub fn group(&self, index: usize) -> Option<(usize, usize)> {
        self.groups.get(index.checked_sub(1)?).copied().flatten()
    }

    /// Whether the match consumed no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Pattern {
    /// Compile a pattern from its source notation.
    pub fn compile(src: &str) -> Result<Pattern, PatternError> {
        let (ast, n_groups) = parse(src)?;
        let prog = compile(&ast, n_groups)?;
        Ok(Pattern {
            src: src.to_owned(),
            prog,
            n_groups,
        })
    }

    /// The source notation this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.src
    }

    /// Number of capturing groups.
    pub fn n_groups(&self) -> usize {
        self.n_groups
    }

    /// Find the leftmost match starting at or after `start`.
    pub fn find_at(&self, text: &[char], start: usize) -> Option<Match> {
        let mut slots = vec![None; 2 * self.n_groups];
        for s in start..=text.len() {
            slots.fill(None);
            if let Some(end) = exec(&self.prog, text, 0, s, None, &mut slots) {
                let groups = (0..self.n_groups)
                    .map(|g| match (slots[2 * g], slots[2 * g + 1]) {
                        (Some(a), Some(b)) => Some((a, b)),
                        _ => None,
                    })
                    .collect();
                return Some(Match {
                    start: s,
                    end,
                    groups,
                });
            }
        }
        None
    }

    /// Find the leftmost match in the whole text.
    pub fn find(&self, text: &[char]) -> Option<Match> {
        self.find_at(text, 0)
    }

    /// Whether the pattern matches anywhere in the text.
    pub fn is_match(&self, text: &[char]) -> bool {
        self.find(text).is_some()
    }
}

/// Execute the program from `pc` at text position `pos`.
///
/// Returns the end position of the match. `target_end` forces the match to
/// finish at an exact position; lookbehind uses this to anchor its
/// sub-pattern on both sides.
fn exec(
    prog: &[Inst],
    text: &[char],
    mut pc: usize,
    mut pos: usize,
    target_end: Option<usize>,
    slots: &mut Vec<Option<usize>>,
) -> Option<usize> {
    loop {
        match &prog[pc] {
            Inst::Char(c) => {
                if pos < text.len() && text[pos] == *c {
                    pos += 1;
                    pc += 1;
                } else {
                    return None;
                }
            }
            Inst::Any => {
                if pos < text.len() {
                    pos += 1;
                    pc += 1;
                } else {
                    return None;
                }
            }
            Inst::Class(spec) => {
                if pos < text.len() && spec.matches(text[pos]) {
                    pos += 1;
                    pc += 1;
                } else {
                    return None;
                }
            }
            Inst::AssertStart => {
                if pos == 0 {
                    pc += 1;
                } else {
                    return None;
                }
            }
            Inst::AssertEnd => {
                if pos == text.len() {
                    pc += 1;
                } else {
                    return None;
                }
            }
            Inst::Jmp(target) => pc = *target,
            Inst::Split {
                preferred,
                alternate,
            } => {
                if let Some(end) = exec(prog, text, *preferred, pos, target_end, slots) {
                    return Some(end);
                }
                pc = *alternate;
            }
            Inst::Save(slot) => {
                let saved = slots[*slot];
                slots[*slot] = Some(pos);
                return match exec(prog, text, pc + 1, pos, target_end, slots) {
                    Some(end) => Some(end),
                    None => {
                        slots[*slot] = saved;
                        None
                    }
                };
            }
            Inst::Look(look) => {
                if look_matches(look, text, pos) == look.negative {
                    return None;
                }
                pc += 1;
            }
            Inst::Done => {
                return match target_end {
                    None => Some(pos),
                    Some(te) if te == pos => Some(pos),
                    Some(_) => None,
                };
            }
        }
    }
}

/// Evaluate a zero-width assertion at `pos`.
fn look_matches(look: &LookInst, text: &[char], pos: usize) -> bool {
    let mut scratch = vec![None; look.n_slots];
    if look.behind {
        if look.min_width > pos {
            return false;
        }
        // The assertion must match exactly the text ending at `pos`; try
        // every candidate width the sub-pattern allows.
        let lo = pos.saturating_sub(look.max_width);
        let hi = pos - look.min_width;
        for start in lo..=hi {
            scratch.fill(None);
            if exec(&look.prog, text, 0, start, Some(pos), &mut scratch).is_some() {
                return true;
            }
        }
        false
    } else {
        exec(&look.prog, text, 0, pos, None, &mut scratch).is_some()
    }
}
