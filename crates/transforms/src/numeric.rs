//! Numeric literal diffusion and its inverse.
//!
//! ```text
//! // Original
//! let retries = 30;
//!
//! // Transformed (randomised variant)
//! let retries = (15 + 15);   // or (40 - 10)
//! ```

use crate::{Choice, OperatorId, Transform};
use rustveil_core::matcher::{self, PatternKind};
use rustveil_core::SourceBuffer;
use tracing::debug;

/// Literals at or below this value are left alone.
pub const LOWER_BOUND: u64 = 10;
/// Literals at or above this value are left alone.
pub const UPPER_BOUND: u64 = 9999;

/// Number of arithmetic forms a literal can be diffused into.
pub const FORMS: usize = 2;

/// Rewrites integer literals as arithmetic expressions that evaluate to them.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericDiffusion;

impl NumericDiffusion {
    /// Expression for `n` in the given form: 0 is the halves sum, 1 the offset.
    pub fn diffuse(n: u64, form: usize) -> String {
        match form % FORMS {
            0 => {
                let half = n / 2;
                format!("({} + {})", half, n - half)
            }
            _ => format!("({} - 10)", n + 10),
        }
    }

    fn in_range(n: u64) -> bool {
        LOWER_BOUND < n && n < UPPER_BOUND
    }
}

impl Transform for NumericDiffusion {
    fn id(&self) -> OperatorId {
        OperatorId::NumericDiffusion
    }

    fn apply(&self, source: &SourceBuffer, choice: &mut dyn Choice) -> SourceBuffer {
        let text = source.as_str();
        let out = matcher::rewrite(PatternKind::IntegerLiteral, text, |occ| {
            if is_field_or_fraction(text, occ.range().start, occ.range().end) {
                return None;
            }
            let n: u64 = occ.capture(1)?.parse().ok()?;
            if !Self::in_range(n) {
                return None;
            }
            Some(Self::diffuse(n, choice.pick(FORMS)))
        });

        debug!(
            "NumericDiffusion: {} literal(s) diffused, {} left as-is",
            out.rewritten, out.skipped
        );
        SourceBuffer::new(out.text)
    }
}

/// True when the digits at `start..end` are part of a float like `1.25` or a
/// field access like `pair.1`. Range bounds such as `0..12` still qualify.
fn is_field_or_fraction(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let after_dot = start >= 1
        && bytes[start - 1] == b'.'
        && !(start >= 2 && bytes[start - 2] == b'.');
    let before_dot = bytes.get(end) == Some(&b'.')
        && bytes.get(end + 1).is_some_and(|b| b.is_ascii_digit());
    after_dot || before_dot
}

/// Folds `(a op b)` expressions over integer literals back into a literal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericSimplification;

impl NumericSimplification {
    /// Evaluates `a op b`, `None` on overflow or an unknown operator.
    pub fn evaluate(a: i64, op: &str, b: i64) -> Option<i64> {
        match op {
            "+" => a.checked_add(b),
            "-" => a.checked_sub(b),
            "*" => a.checked_mul(b),
            _ => None,
        }
    }
}

impl Transform for NumericSimplification {
    fn id(&self) -> OperatorId {
        OperatorId::NumericSimplification
    }

    fn apply(&self, source: &SourceBuffer, _choice: &mut dyn Choice) -> SourceBuffer {
        let out = matcher::rewrite(PatternKind::ParenthesizedArithmetic, source, |occ| {
            let a: i64 = occ.capture(1)?.parse().ok()?;
            let b: i64 = occ.capture(3)?.parse().ok()?;
            Self::evaluate(a, occ.capture(2)?, b).map(|value| value.to_string())
        });

        debug!(
            "NumericSimplification: {} expression(s) folded, {} left as-is",
            out.rewritten, out.skipped
        );
        SourceBuffer::new(out.text)
    }
}
