use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::helpers::indent_unit;
use crate::rule_table::{Rule, RuleTable};

/// Widest accepted indent unit
pub const MAX_INDENT_WIDTH: usize = 16;

/// Transpiler configuration
///
/// ```toml
/// indent_width = 4
/// entry_point = "main"
/// wrap_entry_point = true
///
/// [[extra_rules]]
/// pattern = "pass"
/// replacement = "// pass"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranspileConfig {
    /// Spaces per nesting level, at most `MAX_INDENT_WIDTH`
    pub indent_width: usize,

    /// Name of the synthetic entry point
    pub entry_point: String,

    /// Wrap output lacking an entry point
    pub wrap_entry_point: bool,

    /// Literal rules applied after the default table
    pub extra_rules: Vec<Rule>,
}

impl Default for TranspileConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            entry_point: "main".to_string(),
            wrap_entry_point: true,
            extra_rules: Vec::new(),
        }
    }
}

impl TranspileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot honor
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.indent_width > MAX_INDENT_WIDTH {
            anyhow::bail!(
                "indent_width {} exceeds the maximum of {}",
                self.indent_width,
                MAX_INDENT_WIDTH
            );
        }
        Ok(())
    }

    /// Indent width clamped to `MAX_INDENT_WIDTH`
    ///
    /// Fields are public, so an unvalidated config can still reach the
    /// pipeline; every stage reads the width through here.
    pub fn indent_width(&self) -> usize {
        self.indent_width.min(MAX_INDENT_WIDTH)
    }

    /// Save configuration as TOML
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn indent(&self) -> String {
        indent_unit(self.indent_width())
    }

    /// `fn main()`, used to detect an existing entry point
    pub fn entry_signature(&self) -> String {
        format!("fn {}()", self.entry_point)
    }

    /// `fn main() {`
    pub fn entry_header(&self) -> String {
        format!("{} {{", self.entry_signature())
    }

    /// Default rule table followed by `extra_rules`
    pub fn rule_table(&self) -> RuleTable {
        RuleTable::default().extend(self.extra_rules.iter().cloned())
    }
}
