//! Function Definition Translation
//!
//! Python function header:
//! ```text
//! def area(w, h) -> float:
//! ```
//!
//! Rust-like output:
//! ```text
//! fn area(w, h) -> float {
//! ```
//!
//! The rule table has usually rewritten `def ` to `fn ` by the time these
//! patterns run, so both keywords are accepted. Argument lists and return
//! annotations are carried over verbatim.

use super::PatternSpec;

pub const FUNCTION_DEF_PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "function_def_returning",
        r"^(?P<indent>\s*)(?:def|fn)\s+(?P<name>\w+)\s*\((?P<args>[^)]*)\)\s*->\s*(?P<ret>[^:]+?)\s*:\s*$",
        "${indent}fn ${name}(${args}) -> ${ret} {",
    ),
    PatternSpec::new(
        "function_def",
        r"^(?P<indent>\s*)(?:def|fn)\s+(?P<name>\w+)\s*\((?P<args>[^)]*)\)\s*:\s*$",
        "${indent}fn ${name}(${args}) {",
    ),
];
