//! Lowering Module
//!
//! Structural bookkeeping that runs after translation: brace-depth tracking
//! and reindentation.

// Depth tracking
pub mod depth_tracking_lowering;

// Re-exports for convenience
pub use depth_tracking_lowering::{
    count_delimiters_outside_strings,
    reindent,
    reindent_lines,
    IndentState,
    Reindented,
};
