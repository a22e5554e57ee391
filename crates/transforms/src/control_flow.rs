//! Two-branch `if`/`else` to boolean `match`, and back.
//!
//! ```text
//! if x > 5 { big(); } else { small(); }
//! // becomes
//! match x > 5 { true => { big(); }, false => { small(); } }
//! ```
//!
//! Bodies are taken up to the first closing brace, so nested blocks are not
//! recognised and stay as written.

use crate::{Choice, OperatorId, Transform};
use rustveil_core::matcher::{self, PatternKind};
use rustveil_core::SourceBuffer;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct ControlFlowRestructuring;

impl Transform for ControlFlowRestructuring {
    fn id(&self) -> OperatorId {
        OperatorId::ControlFlowRestructuring
    }

    fn apply(&self, source: &SourceBuffer, _choice: &mut dyn Choice) -> SourceBuffer {
        let text = source.as_str();
        let out = matcher::rewrite(PatternKind::IfElse, text, |occ| {
            // `else match` is not valid, so the tail of an else-if chain stays put.
            if text[..occ.range().start].trim_end().ends_with("else") {
                return None;
            }
            let condition = occ.capture(1)?;
            let if_body = occ.capture(2)?;
            let else_body = occ.capture(3)?;
            Some(format!(
                "match {condition} {{ true => {{{if_body}}}, false => {{{else_body}}} }}"
            ))
        });
        debug!(
            "ControlFlowRestructuring: {} if/else rewritten, {} skipped",
            out.rewritten, out.skipped
        );
        SourceBuffer::new(out.text)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ControlFlowSimplification;

impl Transform for ControlFlowSimplification {
    fn id(&self) -> OperatorId {
        OperatorId::ControlFlowSimplification
    }

    fn apply(&self, source: &SourceBuffer, _choice: &mut dyn Choice) -> SourceBuffer {
        let out = matcher::rewrite(PatternKind::BooleanMatch, source, |occ| {
            let condition = occ.capture(1)?;
            let true_arm = occ.capture(2)?;
            let false_arm = occ.capture(3)?;
            Some(format!(
                "if {condition} {{{true_arm}}} else {{{false_arm}}}"
            ))
        });
        debug!(
            "ControlFlowSimplification: {} match(es) rewritten",
            out.rewritten
        );
        SourceBuffer::new(out.text)
    }
}
