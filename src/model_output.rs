//! Generated Code Handling
//!
//! A code generator (for example a hosted language model) can be injected
//! into `Transpiler` as a `CodeGenerator`. This crate never loads a model;
//! it only builds the prompt, extracts the Rust block from whatever text
//! comes back, and normalizes it. Any failure here sends the caller back to
//! the rule-based path.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::TranspileConfig;
use crate::error_msg::TranspileError;
use crate::lowering::reindent;
use crate::postprocess_output::wrap_in_entry_point;

/// Capability that turns a prompt into generated text
pub trait CodeGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, TranspileError>;
}

/// Prompt asking for a Rust translation, left open at the rust fence
pub fn build_prompt(python_code: &str) -> String {
    format!(
        "Convert the following Python code to equivalent Rust code:\n\n```python\n{}\n```\n\n```rust",
        python_code
    )
}

// Closed fences first, then a fence left open to end of text
const FENCE_PATTERNS: &[&str] = &[
    r"(?is)```rust\n(.*?)```",
    r"(?is)```rust(.*?)```",
    r"(?is)```\n(.*?)```",
    r"(?is)```rust\n(.*?)$",
    r"(?is)```rust(.*?)$",
    r"(?is)```\n(.*?)$",
];

static FENCES: LazyLock<Result<Vec<Regex>, TranspileError>> = LazyLock::new(|| {
    FENCE_PATTERNS
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|source| TranspileError::Pattern {
                name: "code_fence",
                source,
            })
        })
        .collect()
});

static PRINTLN_FIXES: LazyLock<Result<Vec<(Regex, &'static str)>, TranspileError>> =
    LazyLock::new(|| {
        [
            (r#"println!\("\{\}","([^"]+)"\);"#, r#"println!("$1");"#),
            (r#"println!\("\{\}","([^"]+)", ([^)]+)\);"#, r#"println!("$1", $2);"#),
        ]
        .into_iter()
        .map(|(pattern, template)| {
            Regex::new(pattern)
                .map(|re| (re, template))
                .map_err(|source| TranspileError::Pattern {
                    name: "println_fix",
                    source,
                })
        })
        .collect()
    });

/// Pull the Rust code block out of generated text
///
/// Falls back to the whole text, trimmed, when no fence is found.
pub fn extract_rust_code(generated: &str) -> Result<String, TranspileError> {
    let fences = FENCES.as_ref().map_err(Clone::clone)?;
    for fence in fences {
        if let Some(caps) = fence.captures(generated) {
            return Ok(caps[1].trim().to_string());
        }
    }
    Ok(generated.trim().to_string())
}

/// Normalize generated Rust: flatten, fix common `println!` mistakes,
/// wrap in an entry point if needed, then reindent.
pub fn post_process_generated(code: &str, config: &TranspileConfig) -> Result<String, TranspileError> {
    let mut code = code
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    for (regex, template) in PRINTLN_FIXES.as_ref().map_err(Clone::clone)? {
        code = regex.replace_all(&code, *template).into_owned();
    }

    if config.wrap_entry_point
        && !code.contains(&config.entry_signature())
        && !code.starts_with("fn ")
    {
        code = wrap_in_entry_point(&code, config);
    }

    Ok(reindent(&code, config.indent_width()))
}
