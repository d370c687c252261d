//! Macro Translation
//!
//! Fixes up `println!` calls produced by the `print(` rule:
//!
//! - `println!("a {} b".format(x))` → `println!("a {} b", x)`
//! - `println!(f"x = {x}")` → `println!("x = {x}")`
//! - `println!(total)` → `println!("{}", total)`
//!
//! Inline `{name}` placeholders are valid Rust format arguments, so the
//! f-string body is kept as is. Arbitrary expressions inside `{}` are not.

use super::PatternSpec;

pub const PRINT_FORMAT_PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "println_format",
        r#"println!\("(?P<fmt>[^"]*)"\.format\((?P<args>.*)\)\)"#,
        r#"println!("${fmt}", ${args})"#,
    ),
    PatternSpec::new(
        "println_fstring",
        r#"println!\(f"(?P<fmt>[^"]*)""#,
        r#"println!("${fmt}""#,
    ),
    // must follow println_fstring, an f-string argument starts with `f`
    PatternSpec::new(
        "println_bare_arg",
        r#"println!\((?P<arg>[^"\s)][^)]*)\)"#,
        r#"println!("{}", ${arg})"#,
    ),
];
