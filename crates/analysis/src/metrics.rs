//! Coarse structural census of a source snippet.
//!
//! Counts are plain occurrence tallies of keywords and quote marks, so `format`
//! counts as a loop keyword and `diff` as a conditional.
//!
//! # Usage
//! ```rust
//! use rustveil_analysis::analyze;
//!
//! let result = analyze(r#"fn main() { let name = "x"; if true { run(name); } }"#);
//! assert_eq!(result.functions, 1);
//! assert_eq!(result.strings, 1);
//! ```

use rustveil_core::matcher::{count, PatternKind};
use serde::{Deserialize, Serialize};

/// Occurrence counts computed from one buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// `fn ` occurrences.
    pub functions: usize,
    /// `let ` occurrences.
    pub bindings: usize,
    /// `for`, `while` and `loop` occurrences.
    pub loops: usize,
    /// `if` and `match` occurrences.
    pub conditionals: usize,
    /// Quote marks halved, rounded down.
    pub strings: usize,
    /// Always zero; reserved.
    pub comments: usize,
}

/// Computes the census for `source`. Total: an empty or unrecognisable buffer
/// yields all zeros.
pub fn analyze(source: &str) -> AnalysisResult {
    AnalysisResult {
        functions: count(PatternKind::FunctionKeyword, source),
        bindings: count(PatternKind::BindingKeyword, source),
        loops: count(PatternKind::LoopKeyword, source),
        conditionals: count(PatternKind::ConditionalKeyword, source),
        strings: count(PatternKind::QuoteMark, source) / 2,
        comments: 0,
    }
}

impl AnalysisResult {
    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.functions + self.bindings + self.loops + self.conditionals + self.strings + self.comments
    }
}
