//! Expression Translation
//!
//! In-line rewrites that need operands reordered, which the literal rule
//! table cannot express:
//!
//! - `len(xs)` → `xs.len()` (simple operands only)
//! - `range(a, b, s)` → `(a..b).step_by(s)`, `range(a, b)` → `a..b`,
//!   `range(n)` → `0..n`
//! - `f"..."` → `format!("...")`
//! - membership: `a in b` → `b.contains(&a)`, `a !in b` → `!b.contains(&a)`
//!
//! and statement terminators for lines that are neither headers nor `let`
//! bindings: `return ..`, bare calls, and place assignments get a `;`.
//!
//! `len` runs before `range` so `range(len(xs))` ends up as `0..xs.len()`.

use super::PatternSpec;

pub const EXPRESSION_PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "len_call",
        r#"\blen\(\s*(?P<arg>[\w.\[\]"']+)\s*\)"#,
        "${arg}.len()",
    ),
    PatternSpec::new(
        "range_step",
        r"\brange\(\s*(?P<start>(?:[^,()]|\([^()]*\))+?)\s*,\s*(?P<end>(?:[^,()]|\([^()]*\))+?)\s*,\s*(?P<step>(?:[^,()]|\([^()]*\))+?)\s*\)",
        "(${start}..${end}).step_by(${step})",
    ),
    PatternSpec::new(
        "range_bounds",
        r"\brange\(\s*(?P<start>(?:[^,()]|\([^()]*\))+?)\s*,\s*(?P<end>(?:[^,()]|\([^()]*\))+?)\s*\)",
        "${start}..${end}",
    ),
    PatternSpec::new(
        "range",
        r"\brange\(\s*(?P<end>(?:[^,()]|\([^()]*\))+?)\s*\)",
        "0..${end}",
    ),
    PatternSpec::new(
        "fstring",
        r#"\bf"(?P<body>[^"]*)""#,
        r#"format!("${body}")"#,
    ),
];

/// Only applied to `if` / `else if` / `while` headers and `let` lines.
/// The negated form arrives as `!in` because the rule table rewrites `not `.
pub const MEMBERSHIP_PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "not_in",
        r#"(?P<item>[\w.\[\]"']+)\s+!in\s+(?P<coll>[\w.\[\]]+)"#,
        "!${coll}.contains(&${item})",
    ),
    PatternSpec::new(
        "in",
        r#"(?P<item>[\w.\[\]"']+)\s+in\s+(?P<coll>[\w.\[\]]+)"#,
        "${coll}.contains(&${item})",
    ),
];

pub const TERMINATOR_PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "return",
        r"^(?P<indent>\s*)(?P<stmt>return\b[^;]*?)\s*$",
        "${indent}${stmt};",
    ),
    PatternSpec::new(
        "call_statement",
        r"^(?P<indent>\s*)(?P<call>[\w.:]+!?\([^;]*\))\s*$",
        "${indent}${call};",
    ),
    PatternSpec::new(
        "place_assignment",
        r#"^(?P<indent>\s*)(?P<stmt>[\w.\[\]"']+\s*[-+*/%|&^]?=\s*[^=\s][^;]*?)\s*$"#,
        "${indent}${stmt};",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::LinePattern;

    fn expr(line: &str) -> String {
        EXPRESSION_PATTERNS
            .iter()
            .map(|spec| LinePattern::compile(spec).unwrap())
            .fold(line.to_string(), |acc, p| p.rewrite_all(&acc))
    }

    fn membership(line: &str) -> String {
        MEMBERSHIP_PATTERNS
            .iter()
            .map(|spec| LinePattern::compile(spec).unwrap())
            .fold(line.to_string(), |acc, p| p.rewrite_all(&acc))
    }

    fn terminate(line: &str) -> Option<String> {
        TERMINATOR_PATTERNS
            .iter()
            .map(|spec| LinePattern::compile(spec).unwrap())
            .find_map(|p| p.rewrite_line(line))
    }

    #[test]
    fn test_len() {
        assert_eq!(expr("let n = len(xs);"), "let n = xs.len();");
        assert_eq!(expr("len(self.items)"), "self.items.len()");
    }

    #[test]
    fn test_len_complex_operand_untouched() {
        assert_eq!(expr("len(a + b)"), "len(a + b)");
    }

    #[test]
    fn test_range_forms() {
        assert_eq!(expr("let r = range(10);"), "let r = 0..10;");
        assert_eq!(expr("let r = range(2, 8);"), "let r = 2..8;");
        assert_eq!(expr("let r = range(0, 8, 2);"), "let r = (0..8).step_by(2);");
    }

    #[test]
    fn test_range_inside_call() {
        assert_eq!(expr("let xs = list(range(5));"), "let xs = list(0..5);");
    }

    #[test]
    fn test_range_of_len() {
        assert_eq!(expr("let r = range(len(xs));"), "let r = 0..xs.len();");
    }

    #[test]
    fn test_xrange_not_matched() {
        assert_eq!(expr("xrange(3)"), "xrange(3)");
    }

    #[test]
    fn test_fstring_to_format() {
        assert_eq!(expr("let s = f\"hi {name}\";"), "let s = format!(\"hi {name}\");");
    }

    #[test]
    fn test_membership() {
        assert_eq!(membership("if x in items {"), "if items.contains(&x) {");
        assert_eq!(membership("if x !in items {"), "if !items.contains(&x) {");
        assert_eq!(
            membership("if \"a\" in self.keys {"),
            "if self.keys.contains(&\"a\") {"
        );
    }

    #[test]
    fn test_return_terminator() {
        assert_eq!(terminate("    return a + b").as_deref(), Some("    return a + b;"));
        assert_eq!(terminate("return").as_deref(), Some("return;"));
        assert_eq!(
            terminate("return \"a // b\"").as_deref(),
            Some("return \"a // b\";")
        );
    }

    #[test]
    fn test_call_terminator() {
        assert_eq!(terminate("println!(\"X\")").as_deref(), Some("println!(\"X\");"));
        assert_eq!(terminate("    xs.append(3)").as_deref(), Some("    xs.append(3);"));
        assert_eq!(terminate("return_value(x)").as_deref(), Some("return_value(x);"));
    }

    #[test]
    fn test_place_assignment_terminator() {
        assert_eq!(terminate("self.x = 1").as_deref(), Some("self.x = 1;"));
        assert_eq!(terminate("    count += 1").as_deref(), Some("    count += 1;"));
        assert_eq!(terminate("xs[0] = 9").as_deref(), Some("xs[0] = 9;"));
    }

    #[test]
    fn test_no_terminator() {
        assert_eq!(terminate("fn f() {"), None);
        assert_eq!(terminate("}"), None);
        assert_eq!(terminate("x == 1"), None);
        assert_eq!(terminate("let x = 1;"), None);
        assert_eq!(terminate("// try equivalent"), None);
    }
}
