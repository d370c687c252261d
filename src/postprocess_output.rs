//! Output post-processing pipeline for the py2rs transpiler
//!
//! Final steps applied to the rewritten lines: reindentation, then the
//! entry-point wrapper.

use tracing::debug;

use crate::config::TranspileConfig;
use crate::helpers::is_blank;
use crate::lowering::reindent_lines;

/// Detect an existing entry point by substring, not structure
pub fn has_entry_point(code: &str, config: &TranspileConfig) -> bool {
    code.contains(&config.entry_signature())
}

/// Wrap code in a synthetic entry point block
///
/// Every non-blank line gains one indent unit; blank lines stay empty.
/// The closing `}` is the last line, at depth 0.
pub fn wrap_in_entry_point(code: &str, config: &TranspileConfig) -> String {
    let unit = config.indent();
    let mut out = vec![config.entry_header()];
    out.extend(code.lines().map(|line| {
        if is_blank(line) {
            String::new()
        } else {
            format!("{}{}", unit, line)
        }
    }));
    out.push("}".to_string());
    out.join("\n")
}

/// Wrap unless the code already has an entry point or wrapping is disabled
pub fn ensure_entry_point(code: &str, config: &TranspileConfig) -> String {
    if !config.wrap_entry_point || has_entry_point(code, config) {
        return code.to_string();
    }
    wrap_in_entry_point(code, config)
}

/// Apply all post-processing to the rewritten lines
pub fn apply_postprocessing(lines: Vec<String>, config: &TranspileConfig) -> String {
    let reindented = reindent_lines(&lines, config.indent_width());
    if !reindented.is_balanced() {
        debug!(open = reindented.final_depth, "unclosed blocks at end of input");
    }
    ensure_entry_point(&reindented.into_text(), config)
}
