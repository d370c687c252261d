//! py2rs: rule-based Python → Rust source rewriter
//!
//! A best-effort text transform, not a compiler. Source goes through four
//! stages, each feeding the next:
//!
//! 1. `rule_table`: ordered literal substitutions (`print(` → `println!(`, ...)
//! 2. `translate`: per-line header and expression patterns (`if x:` → `if x {`)
//! 3. `lowering`: brace-depth reindentation
//! 4. `postprocess_output`: synthetic `fn main()` wrapper
//!
//! Python blocks end by dedent, which a line rewriter cannot see. Blocks are
//! only closed where the output itself carries a `}` (`else`, `elif`), so
//! deeply nested input may come out with unbalanced braces.

// Pipeline stages
pub mod rule_table;
pub mod translate;
pub mod lowering;
pub mod postprocess_output;
pub mod transpile_main;

// Supporting modules
pub mod config;
pub mod error_msg;
pub mod helpers;
pub mod model_output;
pub mod rust_sanity;


// Re-exports for convenience
pub use config::TranspileConfig;
pub use error_msg::TranspileError;
pub use model_output::CodeGenerator;
pub use rule_table::{Rule, RuleTable, DEFAULT_RULES};
pub use transpile_main::{transpile, try_transpile, Conversion, Transpiler};
