//! Translation Module
//!
//! Structural rewriter: per-line pattern translators that turn Python block
//! headers (trailing `:`) into brace-opening Rust headers, plus expression
//! rewrites that run inside a line.
//!
//! Every translator is a `LinePattern`: a regex over one line with named
//! capture groups, and a replacement template using those names. Patterns
//! are grouped per construct in the submodules and composed left to right
//! by `StructuralRewriter`:
//!
//! 1. header forms: first match wins, the line is rewritten whole
//! 2. expression rewrites: every pattern runs, in order, on the result
//! 3. membership rewrites: condition and `let` lines only
//! 4. statement terminators: only when no header form matched
//!
//! A trailing `//` comment outside string literals is split off before any
//! of this and reattached unchanged, so patterns only ever see code.
//!
//! Nothing here closes blocks. `}` only appears when `else`/`elif` emit it;
//! Python dedent is invisible to a line-shape rewriter.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error_msg::TranspileError;
use crate::helpers::{is_condition_line, is_for_header, split_trailing_comment};

// Header translations
pub mod function_def_translate;
pub mod struct_def_translate;
pub mod assignment_translate;
pub mod control_flow_translate;

// In-line translations
pub mod expression_translate;
pub mod macro_translate;

/// Static description of a line pattern
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    pub name: &'static str,
    pub pattern: &'static str,
    pub template: &'static str,
}

impl PatternSpec {
    pub const fn new(name: &'static str, pattern: &'static str, template: &'static str) -> Self {
        PatternSpec { name, pattern, template }
    }
}

/// A compiled line pattern
#[derive(Debug, Clone)]
pub struct LinePattern {
    name: &'static str,
    regex: Regex,
    template: &'static str,
}

impl LinePattern {
    pub fn compile(spec: &PatternSpec) -> Result<Self, TranspileError> {
        let regex = Regex::new(spec.pattern).map_err(|source| TranspileError::Pattern {
            name: spec.name,
            source,
        })?;
        Ok(LinePattern {
            name: spec.name,
            regex,
            template: spec.template,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rewrite the whole line if it has this shape
    pub fn rewrite_line(&self, line: &str) -> Option<String> {
        let caps = self.regex.captures(line)?;
        let mut out = String::new();
        caps.expand(self.template, &mut out);
        Some(out)
    }

    /// Rewrite every occurrence inside the line
    pub fn rewrite_all(&self, line: &str) -> String {
        self.regex.replace_all(line, self.template).into_owned()
    }
}

fn compile_all(specs: &[&[PatternSpec]]) -> Result<Vec<LinePattern>, TranspileError> {
    specs
        .iter()
        .flat_map(|group| group.iter())
        .map(LinePattern::compile)
        .collect()
}

/// Ordered composition of all line translators
#[derive(Debug, Clone)]
pub struct StructuralRewriter {
    headers: Vec<LinePattern>,
    expressions: Vec<LinePattern>,
    membership: Vec<LinePattern>,
    terminators: Vec<LinePattern>,
}

impl StructuralRewriter {
    pub fn compile() -> Result<Self, TranspileError> {
        // Loop headers must run before the generic `range(` expression rewrite
        let headers = compile_all(&[
            function_def_translate::FUNCTION_DEF_PATTERNS,
            struct_def_translate::STRUCT_DEF_PATTERNS,
            assignment_translate::ASSIGNMENT_PATTERNS,
            control_flow_translate::CONTROL_FLOW_PATTERNS,
        ])?;
        let expressions = compile_all(&[
            macro_translate::PRINT_FORMAT_PATTERNS,
            expression_translate::EXPRESSION_PATTERNS,
        ])?;
        let membership = compile_all(&[expression_translate::MEMBERSHIP_PATTERNS])?;
        let terminators = compile_all(&[expression_translate::TERMINATOR_PATTERNS])?;

        debug!(
            headers = headers.len(),
            expressions = expressions.len(),
            membership = membership.len(),
            terminators = terminators.len(),
            "compiled structural patterns"
        );

        Ok(StructuralRewriter {
            headers,
            expressions,
            membership,
            terminators,
        })
    }

    /// Rewrite a single line
    pub fn rewrite_line(&self, line: &str) -> String {
        let (code, comment) = split_trailing_comment(line);
        if code.trim().is_empty() {
            return line.to_string();
        }

        let header = self.headers.iter().find_map(|p| p.rewrite_line(code));
        let matched_header = header.is_some();
        let mut out = header.unwrap_or_else(|| code.to_string());

        for pattern in &self.expressions {
            out = pattern.rewrite_all(&out);
        }

        let trimmed = out.trim_start();
        if is_condition_line(trimmed) && !is_for_header(trimmed) {
            for pattern in &self.membership {
                out = pattern.rewrite_all(&out);
            }
        }

        if !matched_header {
            if let Some(terminated) = self.terminators.iter().find_map(|p| p.rewrite_line(&out)) {
                out = terminated;
            }
        }

        out.push_str(comment);
        out
    }

    /// Rewrite every line of the text. Line count is preserved.
    pub fn rewrite(&self, text: &str) -> Vec<String> {
        text.lines().map(|line| self.rewrite_line(line)).collect()
    }
}

static STRUCTURAL_REWRITER: LazyLock<Result<StructuralRewriter, TranspileError>> =
    LazyLock::new(StructuralRewriter::compile);

/// Shared, lazily compiled rewriter
pub fn structural_rewriter() -> Result<&'static StructuralRewriter, TranspileError> {
    STRUCTURAL_REWRITER.as_ref().map_err(Clone::clone)
}
