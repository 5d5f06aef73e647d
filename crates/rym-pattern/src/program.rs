// Compilation of the parsed pattern tree into matcher instructions.
//
// The program is a flat instruction list executed by a backtracking
// matcher. Alternation and quantifiers compile to `Split` (preferred
// branch first, so alternation is ordered and quantifiers are greedy).
// Lookaround assertions carry their own compiled sub-program.

use crate::syntax::{width, Ast, ClassSpec};
use crate::PatternError;

/// One matcher instruction.
#[derive(Debug, Clone)]
pub(crate) enum Inst {
    /// Consume one specific character.
    Char(char),
    /// Consume any one character.
    Any,
    /// Consume one character matching the class.
    Class(ClassSpec),
    /// Try `preferred` first; on failure continue at `alternate`.
    Split { preferred: usize, alternate: usize },
    /// Continue at the given address.
    Jmp(usize),
    /// Record the current position in a capture slot.
    Save(usize),
    /// Succeed only at the start of the text.
    AssertStart,
    /// Succeed only at the end of the text.
    AssertEnd,
    /// Zero-width assertion with its own sub-program.
    Look(Box<LookInst>),
    /// Pattern complete.
    Done,
}

/// A compiled zero-width assertion.
#[derive(Debug, Clone)]
pub(crate) struct LookInst {
    pub behind: bool,
    pub negative: bool,
    /// Width bounds of the assertion pattern; used to enumerate candidate
    /// start positions for lookbehind.
    pub min_width: usize,
    pub max_width: usize,
    pub prog: Vec<Inst>,
    /// Capture slot count of the *whole* pattern; sub-programs share the
    /// global group numbering.
    pub n_slots: usize,
}

/// Compile a parsed pattern into a program ending in [`Inst::Done`].
pub(crate) fn compile(ast: &Ast, n_groups: usize) -> Result<Vec<Inst>, PatternError> {
    let mut prog = Vec::new();
    emit(ast, n_groups, &mut prog)?;
    prog.push(Inst::Done);
    Ok(prog)
}

fn emit(ast: &Ast, n_groups: usize, out: &mut Vec<Inst>) -> Result<(), PatternError> {
    match ast {
        Ast::Literal(c) => out.push(Inst::Char(*c)),
        Ast::Any => out.push(Inst::Any),
        Ast::Class(spec) => out.push(Inst::Class(spec.clone())),
        Ast::AnchorStart => out.push(Inst::AssertStart),
        Ast::AnchorEnd => out.push(Inst::AssertEnd),
        Ast::Seq(items) => {
            for item in items {
                emit(item, n_groups, out)?;
            }
        }
        Ast::Alt(branches) => {
            // split B1, next; <B1>; jmp end; ...; <Bn>; end:
            let mut jumps = Vec::new();
            for branch in &branches[..branches.len() - 1] {
                let split_at = out.len();
                out.push(Inst::Jmp(0)); // placeholder
                emit(branch, n_groups, out)?;
                jumps.push(out.len());
                out.push(Inst::Jmp(0)); // placeholder
                out[split_at] = Inst::Split {
                    preferred: split_at + 1,
                    alternate: out.len(),
                };
            }
            emit(&branches[branches.len() - 1], n_groups, out)?;
            let end = out.len();
            for at in jumps {
                out[at] = Inst::Jmp(end);
            }
        }
        Ast::Group { capture, inner } => match capture {
            Some(index) => {
                out.push(Inst::Save(2 * (index - 1)));
                emit(inner, n_groups, out)?;
                out.push(Inst::Save(2 * (index - 1) + 1));
            }
            None => emit(inner, n_groups, out)?,
        },
        Ast::Repeat { inner, min: 0, max: Some(1) } => {
            // split in, next; in: <inner>; next:
            let split_at = out.len();
            out.push(Inst::Jmp(0)); // placeholder
            emit(inner, n_groups, out)?;
            out[split_at] = Inst::Split {
                preferred: split_at + 1,
                alternate: out.len(),
            };
        }
        Ast::Repeat { inner, min: 0, max: None } => {
            // loop: split in, next; in: <inner>; jmp loop; next:
            let loop_at = out.len();
            out.push(Inst::Jmp(0)); // placeholder
            emit(inner, n_groups, out)?;
            out.push(Inst::Jmp(loop_at));
            out[loop_at] = Inst::Split {
                preferred: loop_at + 1,
                alternate: out.len(),
            };
        }
        Ast::Repeat { inner, min: 1, max: None } => {
            // in: <inner>; split in, next
            let loop_at = out.len();
            emit(inner, n_groups, out)?;
            out.push(Inst::Split {
                preferred: loop_at,
                alternate: out.len() + 1,
            });
        }
        Ast::Repeat { inner, min, max } => {
            // The parser only produces the three shapes above; anything else
            // would be a new quantifier form added without matcher support.
            unreachable!("unsupported repeat {{{min},{max:?}}} over {inner:?}");
        }
        Ast::Look {
            behind,
            negative,
            inner,
        } => {
            let (min_width, max_width) = width(inner);
            let max_width = if *behind {
                max_width.ok_or(PatternError::UnboundedLookbehind)?
            } else {
                max_width.unwrap_or(0)
            };
            let mut prog = Vec::new();
            emit(inner, n_groups, &mut prog)?;
            prog.push(Inst::Done);
            out.push(Inst::Look(Box::new(LookInst {
                behind: *behind,
                negative: *negative,
                min_width,
                max_width,
                prog,
                n_slots: 2 * n_groups,
            })));
        }
    }
    Ok(())
}
