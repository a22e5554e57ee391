use crate::{Choice, OperatorId, Transform};
use rustveil_core::matcher::{self, PatternKind};
use rustveil_core::SourceBuffer;
use tracing::debug;

/// Tautology substituted for a literal `true` condition.
pub const OPAQUE_CONDITION: &str = "if (1 + 1 == 2)";

/// Operators whose presence in a parenthesised condition marks it as collapsible.
pub const COLLAPSIBLE_OPERATORS: [&str; 4] = ["==", ">", "||", "!="];

/// Replaces every `if true` with a condition that always holds but reads like logic.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpaquePredicate;

impl Transform for OpaquePredicate {
    fn id(&self) -> OperatorId {
        OperatorId::OpaquePredicate
    }

    fn apply(&self, source: &SourceBuffer, _choice: &mut dyn Choice) -> SourceBuffer {
        let out = matcher::rewrite(PatternKind::LiteralTrueCondition, source, |_| {
            Some(OPAQUE_CONDITION.to_string())
        });
        debug!("OpaquePredicate: {} predicate(s) inserted", out.rewritten);
        SourceBuffer::new(out.text)
    }
}

/// Collapses parenthesised conditions back to `if true`.
///
/// Any condition containing a comparison, `||` or `!=` is collapsed, whether
/// it was inserted by [`OpaquePredicate`] or written by hand. Text alone
/// cannot tell the two apart.
#[derive(Debug, Default, Clone, Copy)]
pub struct PredicateSimplification;

impl Transform for PredicateSimplification {
    fn id(&self) -> OperatorId {
        OperatorId::PredicateSimplification
    }

    fn apply(&self, source: &SourceBuffer, _choice: &mut dyn Choice) -> SourceBuffer {
        let out = matcher::rewrite(PatternKind::ParenthesizedCondition, source, |occ| {
            let condition = occ.as_str();
            COLLAPSIBLE_OPERATORS
                .iter()
                .any(|op| condition.contains(op))
                .then(|| "if true".to_string())
        });
        debug!(
            "PredicateSimplification: {} condition(s) collapsed, {} kept",
            out.rewritten, out.skipped
        );
        SourceBuffer::new(out.text)
    }
}
