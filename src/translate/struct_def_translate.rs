//! Struct Definition Translation
//!
//! `class Point:` / `class Point(Base):` reach this stage as
//! `struct Point:` after the rule table. Base classes are dropped; the body
//! is left to the following lines.

use super::PatternSpec;

pub const STRUCT_DEF_PATTERNS: &[PatternSpec] = &[PatternSpec::new(
    "struct_def",
    r"^(?P<indent>\s*)struct\s+(?P<name>\w+)\s*(?:\([^)]*\))?\s*:\s*$",
    "${indent}struct ${name} {",
)];
