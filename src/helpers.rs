//! Helper utility functions for the py2rs transpiler
//!
//! Small line predicates shared by the translate, lowering and
//! post-processing stages.

/// A run of `width` spaces
pub fn indent_unit(width: usize) -> String {
    " ".repeat(width)
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Line is a `for` loop header (Python or already rewritten)
pub fn is_for_header(trimmed: &str) -> bool {
    trimmed.starts_with("for ")
}

/// Line carries a condition that may hold a membership test
pub fn is_condition_line(trimmed: &str) -> bool {
    trimmed.starts_with("if ")
        || trimmed.starts_with("} else if ")
        || trimmed.starts_with("while ")
        || trimmed.starts_with("let ")
}

/// Split off a trailing `//` comment that sits outside string literals
///
/// `//` only starts a comment at line start or after whitespace. The
/// comment half keeps the whitespace in front of it, so
/// `format!("{}{}", code, comment)` restores the line.
pub fn split_trailing_comment(line: &str) -> (&str, &str) {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut escape_next = false;

    for (i, &b) in bytes.iter().enumerate() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match quote {
            Some(q) => {
                if b == b'\\' {
                    escape_next = true;
                } else if b == q {
                    quote = None;
                }
            }
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None => {
                let starts_comment = b == b'/'
                    && bytes.get(i + 1) == Some(&b'/')
                    && (i == 0 || bytes[i - 1].is_ascii_whitespace());
                if starts_comment {
                    let end = line[..i].trim_end().len();
                    return (&line[..end], &line[end..]);
                }
            }
        }
    }

    (line, "")
}

/// Line opens a block for the reindenter; a trailing comment is ignored
pub fn opens_block(trimmed: &str) -> bool {
    split_trailing_comment(trimmed).0.ends_with('{')
}

/// Line closes a block for the reindenter
pub fn closes_block(trimmed: &str) -> bool {
    trimmed.starts_with('}')
}
