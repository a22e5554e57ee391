use crate::metrics::AnalysisResult;
use rustveil_core::buffer::line_count;
use serde::{Deserialize, Serialize};

/// Weighted structural complexity and size change between an input snippet
/// and its transformed output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Lines in the input.
    pub lines: usize,
    /// Weighted complexity of the input census.
    pub complexity: usize,
    /// Input length in bytes.
    pub input_len: usize,
    /// Output length in bytes.
    pub output_len: usize,
    /// Output/input length ratio scaled so an unchanged buffer scores 50, capped at 100.
    pub obfuscation_level: u32,
    /// Size change as a percentage of the input length.
    pub size_increase_percentage: f64,
}

/// Weights: functions 5, bindings 1, loops 3, conditionals 2.
pub fn complexity(analysis: &AnalysisResult) -> usize {
    analysis.functions * 5 + analysis.bindings + analysis.loops * 3 + analysis.conditionals * 2
}

/// Compares an input snippet, its census and the transformed output.
pub fn compare(input: &str, output: &str, analysis: &AnalysisResult) -> Comparison {
    let input_len = input.len();
    let output_len = output.len();
    let ratio = output_len as f64 / input_len.max(1) as f64;
    let size_increase_percentage = if input_len > 0 {
        (output_len as f64 - input_len as f64) / input_len as f64 * 100.0
    } else {
        0.0
    };

    Comparison {
        lines: line_count(input),
        complexity: complexity(analysis),
        input_len,
        output_len,
        obfuscation_level: (ratio * 50.0).floor().min(100.0) as u32,
        size_increase_percentage,
    }
}
