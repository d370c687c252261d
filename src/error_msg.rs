//! Error types and diagnostic rendering for the py2rs transpiler
//!
//! The public `transpile` entry point never returns an error. Internal
//! failures are rendered into the output text as `//` comment lines
//! followed by the best-effort fallback result.

use thiserror::Error;

/// Prefix reserved for diagnostic lines embedded in transpiled output
pub const DIAGNOSTIC_PREFIX: &str = "//";

/// Internal rewrite failures
#[derive(Debug, Clone, Error)]
pub enum TranspileError {
    /// A structural pattern failed to compile
    #[error("invalid structural pattern `{name}`: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// The injected code generator failed or produced nothing usable
    #[error("code generator failed: {0}")]
    Generator(String),

    /// A rewrite stage panicked
    #[error("rewrite stage panicked: {0}")]
    Panicked(String),
}

impl TranspileError {
    pub fn generator(message: impl Into<String>) -> Self {
        TranspileError::Generator(message.into())
    }
}

/// Render a failure as diagnostic comment lines followed by the fallback output
///
/// ```text
/// // Error during transpilation: <error>
/// // Falling back to rule-based conversion
///
/// <fallback>
/// ```
pub fn render_failure(err: &TranspileError, fallback: &str) -> String {
    format!(
        "{p} Error during transpilation: {}\n{p} Falling back to rule-based conversion\n\n{fallback}",
        one_line(err),
        p = DIAGNOSTIC_PREFIX,
    )
}

/// Diagnostics only, for when the fallback conversion failed as well
pub fn render_fatal(err: &TranspileError, fallback_err: &TranspileError) -> String {
    format!(
        "{p} Error during transpilation: {}\n{p} Fallback conversion failed: {}",
        one_line(err),
        one_line(fallback_err),
        p = DIAGNOSTIC_PREFIX,
    )
}

// Multi-line messages must stay inside the comment block
fn one_line(err: &TranspileError) -> String {
    err.to_string().replace('\n', " ")
}

/// Extract a readable message from a caught panic payload
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
