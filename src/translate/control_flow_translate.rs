//! Control Flow Translation
//!
//! Block headers ending in `:` become brace-opening headers. Conditions and
//! iterables pass through verbatim.
//!
//! ```text
//! for i in range(5):        →  for i in 0..5 {
//! for i in range(2, 9):     →  for i in 2..9 {
//! for i in range(0, 9, 3):  →  for i in (0..9).step_by(3) {
//! for x in items:           →  for x in items {
//! while n > 0:              →  while n > 0 {
//! if x > 5:                 →  if x > 5 {
//! } else if x > 1:          →  } else if x > 1 {     (from `elif` via the rule table)
//! else:                     →  } else {
//! ```
//!
//! The `range` loop forms are listed before the generic `for .. in ..` form,
//! and the whole group runs before the `range(` expression rewrite, so a loop
//! header is rewritten exactly once.

use super::PatternSpec;

pub const CONTROL_FLOW_PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "for_range_step",
        r"^(?P<indent>\s*)for\s+(?P<var>\w+)\s+in\s+range\(\s*(?P<start>(?:[^,()]|\([^()]*\))+?)\s*,\s*(?P<end>(?:[^,()]|\([^()]*\))+?)\s*,\s*(?P<step>(?:[^,()]|\([^()]*\))+?)\s*\)\s*:\s*$",
        "${indent}for ${var} in (${start}..${end}).step_by(${step}) {",
    ),
    PatternSpec::new(
        "for_range_bounds",
        r"^(?P<indent>\s*)for\s+(?P<var>\w+)\s+in\s+range\(\s*(?P<start>(?:[^,()]|\([^()]*\))+?)\s*,\s*(?P<end>(?:[^,()]|\([^()]*\))+?)\s*\)\s*:\s*$",
        "${indent}for ${var} in ${start}..${end} {",
    ),
    PatternSpec::new(
        "for_range",
        r"^(?P<indent>\s*)for\s+(?P<var>\w+)\s+in\s+range\(\s*(?P<end>(?:[^,()]|\([^()]*\))+?)\s*\)\s*:\s*$",
        "${indent}for ${var} in 0..${end} {",
    ),
    PatternSpec::new(
        "for_in",
        r"^(?P<indent>\s*)for\s+(?P<var>[^:]+?)\s+in\s+(?P<iter>.+?)\s*:\s*$",
        "${indent}for ${var} in ${iter} {",
    ),
    PatternSpec::new(
        "while",
        r"^(?P<indent>\s*)while\s+(?P<cond>.+?)\s*:\s*$",
        "${indent}while ${cond} {",
    ),
    PatternSpec::new(
        "else_if",
        r"^(?P<indent>\s*)\}\s*else\s+if\s+(?P<cond>.+?)\s*:\s*$",
        "${indent}} else if ${cond} {",
    ),
    PatternSpec::new(
        "if",
        r"^(?P<indent>\s*)if\s+(?P<cond>.+?)\s*:\s*$",
        "${indent}if ${cond} {",
    ),
    PatternSpec::new(
        "else",
        r"^(?P<indent>\s*)else\s*:\s*$",
        "${indent}} else {",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::LinePattern;

    fn rewrite(line: &str) -> Option<String> {
        CONTROL_FLOW_PATTERNS
            .iter()
            .map(|spec| LinePattern::compile(spec).unwrap())
            .find_map(|p| p.rewrite_line(line))
    }

    #[test]
    fn test_for_range_single_bound() {
        assert_eq!(rewrite("for i in range(5):").as_deref(), Some("for i in 0..5 {"));
        assert_eq!(rewrite("for i in range(n):").as_deref(), Some("for i in 0..n {"));
    }

    #[test]
    fn test_for_range_two_bounds() {
        assert_eq!(rewrite("for i in range(1, 10):").as_deref(), Some("for i in 1..10 {"));
    }

    #[test]
    fn test_for_range_step() {
        assert_eq!(
            rewrite("for i in range(0, 10, 2):").as_deref(),
            Some("for i in (0..10).step_by(2) {")
        );
    }

    #[test]
    fn test_for_range_nested_call() {
        assert_eq!(
            rewrite("    for i in range(len(xs)):").as_deref(),
            Some("    for i in 0..len(xs) {")
        );
    }

    #[test]
    fn test_for_in_iterable() {
        assert_eq!(rewrite("for name in names:").as_deref(), Some("for name in names {"));
    }

    #[test]
    fn test_while() {
        assert_eq!(rewrite("while n > 0:").as_deref(), Some("while n > 0 {"));
    }

    #[test]
    fn test_if_else() {
        assert_eq!(rewrite("if x > 5:").as_deref(), Some("if x > 5 {"));
        assert_eq!(rewrite("else:").as_deref(), Some("} else {"));
        assert_eq!(rewrite("    else :").as_deref(), Some("    } else {"));
    }

    #[test]
    fn test_else_if_from_elif_rule() {
        assert_eq!(rewrite("} else if x > 1:").as_deref(), Some("} else if x > 1 {"));
    }

    #[test]
    fn test_condition_with_slice_colon() {
        assert_eq!(rewrite("if xs[1:3]:").as_deref(), Some("if xs[1:3] {"));
    }

    #[test]
    fn test_inline_body_not_rewritten() {
        assert_eq!(rewrite("if x: return 1"), None);
        assert_eq!(rewrite("notify(x):"), None);
    }
}
