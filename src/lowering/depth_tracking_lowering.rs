//! Depth Tracking Lowering
//!
//! The reindenter: walks rewritten text line by line and re-emits each line
//! with indentation proportional to the running brace depth.
//!
//! For every line, after trimming:
//! - a line starting with `}` closes a level *before* it is emitted
//! - the line is emitted at `depth × indent unit`
//! - a line ending with `{` opens a level *after* it is emitted
//! - blank lines are emitted empty and do not touch the depth
//!
//! Depth is floored at zero. Unbalanced input is not an error; the final
//! depth is simply reported.

use crate::helpers::{closes_block, indent_unit, opens_block};

/// Nesting depth for a single reindent pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndentState {
    depth: usize,
}

impl IndentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn open(&mut self) {
        self.depth += 1;
    }

    /// Close one level, never below zero
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Output of a reindent pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reindented {
    pub lines: Vec<String>,
    /// Depth each line was emitted at (0 for blank lines)
    pub depths: Vec<usize>,
    /// Depth left open at end of input
    pub final_depth: usize,
}

impl Reindented {
    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }

    pub fn is_balanced(&self) -> bool {
        self.final_depth == 0
    }
}

/// Reindent lines, recording the depth of every emitted line
pub fn reindent_lines<I, S>(lines: I, indent_width: usize) -> Reindented
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unit = indent_unit(indent_width);
    let mut state = IndentState::new();
    let mut out = Vec::new();
    let mut depths = Vec::new();

    for line in lines {
        let trimmed = line.as_ref().trim();
        if trimmed.is_empty() {
            out.push(String::new());
            depths.push(0);
            continue;
        }

        if closes_block(trimmed) {
            state.close();
        }

        out.push(format!("{}{}", unit.repeat(state.depth()), trimmed));
        depths.push(state.depth());

        if opens_block(trimmed) {
            state.open();
        }
    }

    Reindented {
        lines: out,
        depths,
        final_depth: state.depth(),
    }
}

/// Reindent text; see module docs for the rules
pub fn reindent(text: &str, indent_width: usize) -> String {
    reindent_lines(text.lines(), indent_width).into_text()
}

/// Count `open` / `close` delimiters OUTSIDE of string literals
///
/// Braces inside `"hello {} world"` are format placeholders, not blocks.
///
/// # Returns
/// A tuple of (opening_count, closing_count)
pub fn count_delimiters_outside_strings(s: &str, open: char, close: char) -> (usize, usize) {
    let mut opens = 0;
    let mut closes = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }

        if c == '\\' && in_string {
            escape_next = true;
            continue;
        }

        if c == '"' {
            in_string = !in_string;
            continue;
        }

        if !in_string {
            if c == open {
                opens += 1;
            } else if c == close {
                closes += 1;
            }
        }
    }

    (opens, closes)
}
