//! Main Transpilation Entry Point
//!
//! Orchestrates the rule-based pipeline:
//!
//! ```text
//! source ─▶ rule table ─▶ structural rewriter ─▶ reindenter ─▶ entry-point wrapper ─▶ output
//! ```
//!
//! `transpile` always returns text. When the structural stage cannot run
//! (a pattern failed to compile, or a stage panicked) the output is a
//! diagnostic comment block followed by the regex-free fallback: rule
//! table, reindent, wrap. If the fallback panics too, only the diagnostic
//! lines are returned. Nothing is shared between calls except the compiled
//! patterns, which are immutable.
//!
//! Panics are caught, not suppressed: the process panic hook still runs, and
//! the default hook prints the message to stderr. Callers that want the
//! `//` diagnostic as the only trace install their own hook with
//! `std::panic::set_hook`; the `py2rs` binary routes them to `tracing`.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::TranspileConfig;
use crate::error_msg::{panic_message, render_failure, render_fatal, TranspileError};
use crate::model_output::{build_prompt, extract_rust_code, post_process_generated, CodeGenerator};
use crate::postprocess_output::apply_postprocessing;
use crate::rule_table::RuleTable;
use crate::translate::structural_rewriter;

/// Output of one pipeline run
#[derive(Debug, Clone)]
pub struct Conversion {
    pub rust_code: String,
    /// Set when the rule-based path failed and `rust_code` holds the fallback
    pub error: Option<TranspileError>,
}

impl Conversion {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Rule-based transpiler with an optional injected code generator
#[derive(Clone, Default)]
pub struct Transpiler {
    config: TranspileConfig,
    rules: RuleTable,
    generator: Option<Arc<dyn CodeGenerator>>,
}

impl std::fmt::Debug for Transpiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transpiler")
            .field("config", &self.config)
            .field("rules", &self.rules.len())
            .field("generator", &self.generator.is_some())
            .finish()
    }
}

impl Transpiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TranspileConfig) -> Self {
        let rules = config.rule_table();
        Transpiler {
            config,
            rules,
            generator: None,
        }
    }

    /// Replace the rule table
    pub fn rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Try `generator` first; fall back to the rules when it fails
    pub fn with_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn config(&self) -> &TranspileConfig {
        &self.config
    }

    pub fn rule_table(&self) -> &RuleTable {
        &self.rules
    }

    /// Transpile source text. Never fails.
    pub fn transpile(&self, source: &str) -> String {
        self.convert(source).rust_code
    }

    /// Transpile, keeping the internal failure next to the rendered output
    pub fn convert(&self, source: &str) -> Conversion {
        if let Some(generator) = &self.generator {
            let generated = panic::catch_unwind(AssertUnwindSafe(|| {
                self.generate(generator.as_ref(), source)
            }))
            .unwrap_or_else(|payload| Err(TranspileError::Panicked(panic_message(payload.as_ref()))));
            match generated {
                Ok(rust_code) => return Conversion { rust_code, error: None },
                Err(err) => warn!(error = %err, "code generator failed, using rule-based conversion"),
            }
        }

        match self.try_transpile(source) {
            Ok(rust_code) => Conversion { rust_code, error: None },
            Err(err) => {
                warn!(error = %err, "structural rewrite failed, using fallback");
                let rust_code = recover(&err, || self.fallback_transpile(source));
                Conversion {
                    rust_code,
                    error: Some(err),
                }
            }
        }
    }

    /// Rule-based pipeline, surfacing internal failures
    pub fn try_transpile(&self, source: &str) -> Result<String, TranspileError> {
        let rewriter = structural_rewriter()?;

        panic::catch_unwind(AssertUnwindSafe(|| {
            let substituted = self.rules.apply(source);
            let lines = rewriter.rewrite(&substituted);
            debug!(lines = lines.len(), "structural rewrite done");
            apply_postprocessing(lines, &self.config)
        }))
        .map_err(|payload| TranspileError::Panicked(panic_message(payload.as_ref())))
    }

    /// Rule table, reindent, wrap. No patterns involved.
    pub fn fallback_transpile(&self, source: &str) -> String {
        let substituted = self.rules.apply(source);
        let lines: Vec<String> = substituted.lines().map(str::to_string).collect();
        apply_postprocessing(lines, &self.config)
    }

    fn generate(&self, generator: &dyn CodeGenerator, source: &str) -> Result<String, TranspileError> {
        let generated = generator.generate(&build_prompt(source))?;
        let code = extract_rust_code(&generated)?;
        if code.is_empty() {
            return Err(TranspileError::generator("no code in generated text"));
        }
        post_process_generated(&code, &self.config)
    }
}

/// Render `err` over the fallback output, or the diagnostics alone when the
/// fallback panics as well
fn recover(err: &TranspileError, fallback: impl FnOnce() -> String) -> String {
    match panic::catch_unwind(AssertUnwindSafe(fallback)) {
        Ok(fallback) => render_failure(err, &fallback),
        Err(payload) => {
            let fallback_err = TranspileError::Panicked(panic_message(payload.as_ref()));
            warn!(error = %fallback_err, "fallback conversion failed");
            render_fatal(err, &fallback_err)
        }
    }
}

/// Transpile with the default configuration and rule table
pub fn transpile(source: &str) -> String {
    Transpiler::new().transpile(source)
}

/// Like `transpile`, but returns internal failures instead of embedding them
pub fn try_transpile(source: &str) -> Result<String, TranspileError> {
    Transpiler::new().try_transpile(source)
}
