//! Standalone string literal operators: base64 encoding and midpoint splitting.
//!
//! Neither has an inverse in the deobfuscate family.

use crate::{Choice, OperatorId, Transform};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rustveil_core::matcher::{self, PatternKind};
use rustveil_core::SourceBuffer;
use tracing::debug;

/// Shortest literal, in characters, that gets encoded.
pub const MIN_ENCODE_LEN: usize = 2;
/// Shortest literal, in characters, that gets split.
pub const MIN_SPLIT_LEN: usize = 4;

/// Replaces string literals with a base64 decode of their bytes at the use site.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringEncoding;

impl StringEncoding {
    /// The decode expression for `contents`, or `None` if the literal's value
    /// cannot be recovered from its source text.
    pub fn encode(contents: &str) -> Option<String> {
        if contents.chars().count() < MIN_ENCODE_LEN || contents.contains('{') {
            return None;
        }
        let value = unescape(contents)?;
        Some(format!(
            "base64::decode(\"{}\").unwrap()",
            STANDARD.encode(value.as_bytes())
        ))
    }
}

impl Transform for StringEncoding {
    fn id(&self) -> OperatorId {
        OperatorId::StringEncoding
    }

    fn apply(&self, source: &SourceBuffer, _choice: &mut dyn Choice) -> SourceBuffer {
        let out = matcher::rewrite(PatternKind::StringLiteral, source, |occ| {
            Self::encode(occ.capture(1)?)
        });
        debug!(
            "StringEncoding: {} literal(s) encoded, {} left as-is",
            out.rewritten, out.skipped
        );
        SourceBuffer::new(out.text)
    }
}

/// Replaces string literals with a `concat!` of their two halves.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringSplitting;

impl StringSplitting {
    /// Splits at character index `len / 2`. Declines when that point falls
    /// inside an escape sequence.
    pub fn split(contents: &str) -> Option<(&str, &str)> {
        let len = contents.chars().count();
        if len < MIN_SPLIT_LEN || contents.contains('{') {
            return None;
        }
        if !on_escape_boundary(contents, len / 2) {
            return None;
        }
        let mid = contents
            .char_indices()
            .nth(len / 2)
            .map_or(contents.len(), |(idx, _)| idx);
        Some(contents.split_at(mid))
    }
}

impl Transform for StringSplitting {
    fn id(&self) -> OperatorId {
        OperatorId::StringSplitting
    }

    fn apply(&self, source: &SourceBuffer, _choice: &mut dyn Choice) -> SourceBuffer {
        let out = matcher::rewrite(PatternKind::StringLiteral, source, |occ| {
            let (head, tail) = Self::split(occ.capture(1)?)?;
            Some(format!("concat!(\"{head}\", \"{tail}\")"))
        });
        debug!(
            "StringSplitting: {} literal(s) split, {} left as-is",
            out.rewritten, out.skipped
        );
        SourceBuffer::new(out.text)
    }
}

/// Whether character index `at` sits between two escape sequences rather
/// than inside one.
fn on_escape_boundary(contents: &str, at: usize) -> bool {
    let mut chars = contents.chars();
    let mut pos = 0;
    while pos < at {
        let Some(c) = chars.next() else {
            return false;
        };
        pos += 1;
        if c == '\\' {
            let width = match chars.next() {
                Some('x') => 3,
                Some(_) => 1,
                None => 0,
            };
            for _ in 1..width {
                chars.next();
            }
            pos += width;
        }
    }
    pos == at
}

/// Resolves the simple escapes of a string literal body. Unicode and
/// non-ASCII byte escapes are not resolved.
fn unescape(contents: &str) -> Option<String> {
    let mut value = String::with_capacity(contents.len());
    let mut chars = contents.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next()? {
            'n' => value.push('\n'),
            'r' => value.push('\r'),
            't' => value.push('\t'),
            '0' => value.push('\0'),
            '\\' => value.push('\\'),
            '"' => value.push('"'),
            '\'' => value.push('\''),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                let byte = u8::from_str_radix(&hex, 16).ok().filter(u8::is_ascii)?;
                value.push(char::from(byte));
            }
            _ => return None,
        }
    }
    Some(value)
}
