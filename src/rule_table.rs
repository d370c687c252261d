//! Rule Table
//!
//! Ordered literal substitutions applied to the whole source before any
//! line-shape rewriting. Each rule is a plain substring replacement; rules
//! run in declared order and every rule sees the output of the previous one.
//!
//! Patterns are literal, so they also fire inside identifiers, comments and
//! string literals (`"true or false"` becomes `"true || false"`). That is an
//! accepted limitation of the approach.
//!
//! Ordering constraints inside `DEFAULT_RULES`:
//! - `elif ` runs before anything that touches `if`, and emits the `} ` that
//!   closes the previous branch.
//! - ` is not ` runs before ` is ` (else `a is not b` → `a == not b`) and
//!   before `not ` (else `a is !b`).
//! - `not ` turns `x not in y` into `x !in y`; the membership rewrite in
//!   `translate::expression_translate` expects that shape.
//! - `range(`, `len(` and ` in ` are NOT literal rules. They need operand
//!   reordering and must not clobber `for VAR in range(..):` headers, so they
//!   live in the structural stage after the loop header patterns.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A single literal substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub pattern: Cow<'static, str>,
    pub replacement: Cow<'static, str>,
}

impl Rule {
    pub const fn literal(pattern: &'static str, replacement: &'static str) -> Self {
        Rule {
            pattern: Cow::Borrowed(pattern),
            replacement: Cow::Borrowed(replacement),
        }
    }

    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Rule {
            pattern: Cow::Owned(pattern.into()),
            replacement: Cow::Owned(replacement.into()),
        }
    }

    /// Replace every occurrence of the pattern. An empty pattern is a no-op.
    pub fn apply(&self, text: &str) -> String {
        if self.pattern.is_empty() {
            return text.to_string();
        }
        text.replace(self.pattern.as_ref(), self.replacement.as_ref())
    }
}

/// Default Python → Rust substitutions, in application order
pub const DEFAULT_RULES: &[Rule] = &[
    Rule::literal("print(", "println!("),
    Rule::literal("def ", "fn "),
    Rule::literal("elif ", "} else if "),
    Rule::literal("True", "true"),
    Rule::literal("False", "false"),
    Rule::literal("import ", "use "),
    Rule::literal("from ", "use "),
    Rule::literal("class ", "struct "),
    Rule::literal("__init__", "new"),
    Rule::literal("try:", "// try equivalent"),
    Rule::literal("except", "// except equivalent"),
    Rule::literal("raise", "panic!"),
    Rule::literal("lambda ", "|"),
    // identity: negated form first
    Rule::literal(" is not ", " != "),
    Rule::literal(" is ", " == "),
    // logical
    Rule::literal(" and ", " && "),
    Rule::literal(" or ", " || "),
    Rule::literal("not ", "!"),
    Rule::literal("# ", "// "),
];

/// Ordered rule list. Constant after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable {
            rules: DEFAULT_RULES.to_vec(),
        }
    }
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleTable { rules }
    }

    /// Append rules after the existing ones
    pub fn extend(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule to the whole text, sequentially
    pub fn apply(&self, source: &str) -> String {
        self.rules
            .iter()
            .fold(source.to_string(), |text, rule| rule.apply(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(src: &str) -> String {
        RuleTable::default().apply(src)
    }

    #[test]
    fn test_print_to_println() {
        assert_eq!(apply("print(\"X\")"), "println!(\"X\")");
    }

    #[test]
    fn test_def_and_booleans() {
        assert_eq!(apply("def f(a):"), "fn f(a):");
        assert_eq!(apply("x = True"), "x = true");
        assert_eq!(apply("y = False"), "y = false");
    }

    #[test]
    fn test_elif_closes_previous_branch() {
        assert_eq!(apply("elif x > 1:"), "} else if x > 1:");
    }

    #[test]
    fn test_is_not_ordered_before_is() {
        assert_eq!(apply("a is not b"), "a != b");
        assert_eq!(apply("a is b"), "a == b");
    }

    #[test]
    fn test_logical_operators() {
        assert_eq!(apply("a and b or c"), "a && b || c");
        assert_eq!(apply("not done"), "!done");
    }

    #[test]
    fn test_spaced_operators_leave_keywords_alone() {
        // `for` and `random` contain `or` / `and` without surrounding spaces
        assert_eq!(apply("for i in random_items"), "for i in random_items");
    }

    #[test]
    fn test_not_in_becomes_bang_in() {
        assert_eq!(apply("x not in items"), "x !in items");
    }

    #[test]
    fn test_literal_matches_inside_strings() {
        // accepted limitation
        assert_eq!(apply("s = \"cats and dogs\""), "s = \"cats && dogs\"");
    }

    #[test]
    fn test_sequential_not_simultaneous() {
        let table = RuleTable::new(vec![Rule::new("a", "b"), Rule::new("b", "c")]);
        assert_eq!(table.apply("a"), "c");
        let reversed = RuleTable::new(vec![Rule::new("b", "c"), Rule::new("a", "b")]);
        assert_eq!(reversed.apply("a"), "b");
    }

    #[test]
    fn test_empty_pattern_is_noop() {
        let table = RuleTable::new(vec![Rule::new("", "X")]);
        assert_eq!(table.apply("abc"), "abc");
    }

    #[test]
    fn test_missing_pattern_is_noop() {
        assert_eq!(apply("let x = 1;"), "let x = 1;");
    }

    #[test]
    fn test_extend_appends_after_defaults() {
        let table = RuleTable::default().extend([Rule::new("println!", "eprintln!")]);
        assert_eq!(table.len(), DEFAULT_RULES.len() + 1);
        assert_eq!(table.apply("print(1)"), "eprintln!(1)");
    }

    #[test]
    fn test_comment_marker() {
        assert_eq!(apply("# note"), "// note");
    }
}
