pub mod catalogue;
pub mod constants;
pub mod control_flow;
pub mod dead_code;
pub mod numeric;
pub mod obfuscator;
pub mod opaque_predicate;
pub mod operator;
pub mod rename;
pub mod string_obfuscate;

pub use obfuscator::{
    apply_operator, deobfuscate, deobfuscate_source, obfuscate, obfuscate_source, obfuscate_with,
    PipelineConfig,
};
pub use operator::{Family, OperatorDescriptor, OperatorId, OperatorSelection};

use rustveil_core::SourceBuffer;
use thiserror::Error;

/// Transform error type.
///
/// Rewriting itself never fails; these only come from resolving operators by name.
#[derive(Debug, Error)]
pub enum Error {
    /// No operator answers to the given name.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    /// The operator only runs on its own and cannot join a pipeline selection.
    #[error("{0} is a standalone operator; run it with `techniques --demo`")]
    StandaloneOperator(String),
}

/// Transform result type
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for source rewrite operators.
pub trait Transform: Send + Sync {
    /// Identifier of the operator in the catalogue.
    fn id(&self) -> OperatorId;

    /// Returns the transform's name for logging and identification.
    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Produces the rewritten buffer. Occurrences the operator cannot safely
    /// rewrite are copied through untouched.
    fn apply(&self, source: &SourceBuffer, choice: &mut dyn Choice) -> SourceBuffer;
}

/// Source of the random decisions made by randomised operators.
///
/// Any [`rand::Rng`] is a `Choice`; tests substitute [`FixedChoice`] to pin
/// the output text.
pub trait Choice {
    /// Picks an index in `0..options`. Returns 0 when `options` is 0.
    fn pick(&mut self, options: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> Choice for R {
    fn pick(&mut self, options: usize) -> usize {
        if options <= 1 {
            0
        } else {
            self.random_range(0..options)
        }
    }
}

/// Always picks the same option (modulo the number offered).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedChoice(pub usize);

impl Choice for FixedChoice {
    fn pick(&mut self, options: usize) -> usize {
        if options == 0 {
            0
        } else {
            self.0 % options
        }
    }
}
