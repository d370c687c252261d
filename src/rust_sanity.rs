//! Rust Sanity Report
//!
//! Advisory delimiter-balance check for transpiled output. The transpiler
//! never consults it. The line rewriter cannot see Python dedent, so an
//! imbalance is reported, not repaired.
//!
//! Delimiters inside string literals are ignored.

use crate::lowering::count_delimiters_outside_strings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterImbalance {
    pub open: char,
    pub close: char,
    pub opens: usize,
    pub closes: usize,
}

impl std::fmt::Display for DelimiterImbalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unbalanced `{}{}`: {} opening vs {} closing",
            self.open, self.close, self.opens, self.closes
        )
    }
}

/// Result of sanity check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanityReport {
    pub issues: Vec<DelimiterImbalance>,
}

impl SanityReport {
    pub fn is_balanced(&self) -> bool {
        self.issues.is_empty()
    }
}

const DELIMITER_PAIRS: &[(char, char)] = &[('{', '}'), ('(', ')'), ('[', ']')];

/// Count each delimiter pair across the whole output
pub fn check_balanced_delimiters(code: &str) -> SanityReport {
    let issues = DELIMITER_PAIRS
        .iter()
        .filter_map(|&(open, close)| {
            let (opens, closes) = code
                .lines()
                .map(|line| count_delimiters_outside_strings(line, open, close))
                .fold((0, 0), |(o, c), (lo, lc)| (o + lo, c + lc));
            (opens != closes).then_some(DelimiterImbalance {
                open,
                close,
                opens,
                closes,
            })
        })
        .collect();

    SanityReport { issues }
}
