pub mod comparison;
pub mod metrics;

pub use comparison::{compare, complexity, Comparison};
pub use metrics::{analyze, AnalysisResult};
