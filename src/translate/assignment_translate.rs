//! Assignment Translation
//!
//! Simple-name assignments become `let` bindings:
//!
//! ```text
//! total = a + b        →  let total = a + b;
//! items = [            →  let items = [
//! ```
//!
//! Only a bare identifier on the left is accepted. Attribute and index
//! targets (`self.x = 1`, `xs[0] = 1`) and augmented assignments are not
//! bindings and are handled by the statement terminators instead. `==` is
//! never mistaken for an assignment.
//!
//! Every assignment produces a fresh `let`, so reassignment shadows.

use super::PatternSpec;

pub const ASSIGNMENT_PATTERNS: &[PatternSpec] = &[
    // Expression continues on the following lines: no terminator, and the
    // trailing `{` lets the reindenter open a level
    PatternSpec::new(
        "assignment_open",
        r"^(?P<indent>\s*)(?P<name>\w+)\s*=\s*(?P<expr>(?:[^=\s].*)?[\[({])\s*$",
        "${indent}let ${name} = ${expr}",
    ),
    PatternSpec::new(
        "assignment",
        r"^(?P<indent>\s*)(?P<name>\w+)\s*=\s*(?P<expr>[^=\s].*?)\s*$",
        "${indent}let ${name} = ${expr};",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::LinePattern;

    fn rewrite(line: &str) -> Option<String> {
        ASSIGNMENT_PATTERNS
            .iter()
            .map(|spec| LinePattern::compile(spec).unwrap())
            .find_map(|p| p.rewrite_line(line))
    }

    #[test]
    fn test_simple_assignment() {
        assert_eq!(rewrite("x = 5").as_deref(), Some("let x = 5;"));
        assert_eq!(rewrite("x=5").as_deref(), Some("let x = 5;"));
    }

    #[test]
    fn test_leading_whitespace_preserved() {
        assert_eq!(rewrite("    total = a + b").as_deref(), Some("    let total = a + b;"));
    }

    #[test]
    fn test_equality_is_not_assignment() {
        assert_eq!(rewrite("x == 5"), None);
    }

    #[test]
    fn test_attribute_and_augmented_not_bindings() {
        assert_eq!(rewrite("self.x = 1"), None);
        assert_eq!(rewrite("x += 1"), None);
        assert_eq!(rewrite("xs[0] = 1"), None);
    }

    #[test]
    fn test_comment_marker_inside_string_kept_verbatim() {
        assert_eq!(
            rewrite("label = \"Item // 3\"").as_deref(),
            Some("let label = \"Item // 3\";")
        );
    }

    #[test]
    fn test_url_is_not_a_comment() {
        assert_eq!(
            rewrite("url = \"http://example.com\"").as_deref(),
            Some("let url = \"http://example.com\";")
        );
    }

    #[test]
    fn test_open_bracket_continues() {
        assert_eq!(rewrite("items = [").as_deref(), Some("let items = ["));
        assert_eq!(rewrite("config = {").as_deref(), Some("let config = {"));
        assert_eq!(rewrite("v = make(").as_deref(), Some("let v = make("));
    }
}
