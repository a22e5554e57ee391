//! Inert statement insertion at function entry, and removal of exactly those statements.

use crate::{Choice, OperatorId, Transform};
use regex::Regex;
use rustveil_core::matcher::{self, PatternKind};
use rustveil_core::SourceBuffer;
use std::sync::LazyLock;
use tracing::debug;

/// Statements that compile but never affect the program.
pub const SNIPPETS: [&str; 2] = [
    "if false { let _unused = 42; }",
    "let _dummy = 0; let _dummy2 = _dummy * 0;",
];

/// Text placed between the function's opening brace and the snippet.
const INDENT: &str = "\n    ";

static SNIPPET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = SNIPPETS.iter().map(|s| regex::escape(s)).collect();
    let pattern = format!(r"\s*(?:{})", alternatives.join("|"));
    Regex::new(&pattern).expect("escaped snippets form a valid regex")
});

/// Inserts one randomly chosen inert statement after every function opening.
///
/// Running it twice inserts twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeadCodeInsertion;

impl Transform for DeadCodeInsertion {
    fn id(&self) -> OperatorId {
        OperatorId::DeadCodeInsertion
    }

    fn apply(&self, source: &SourceBuffer, choice: &mut dyn Choice) -> SourceBuffer {
        let out = matcher::rewrite(PatternKind::FunctionOpening, source, |occ| {
            let snippet = SNIPPETS[choice.pick(SNIPPETS.len())];
            Some(format!("{}{INDENT}{snippet}", occ.as_str()))
        });
        debug!("DeadCodeInsertion: {} function(s) padded", out.rewritten);
        SourceBuffer::new(out.text)
    }
}

/// Deletes the catalogued snippets and the whitespace leading up to them.
/// Dead code in any other form is left in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeadCodeRemoval;

impl Transform for DeadCodeRemoval {
    fn id(&self) -> OperatorId {
        OperatorId::DeadCodeRemoval
    }

    fn apply(&self, source: &SourceBuffer, _choice: &mut dyn Choice) -> SourceBuffer {
        let removed = SNIPPET_PATTERN.find_iter(source).count();
        debug!("DeadCodeRemoval: {} snippet(s) removed", removed);
        SourceBuffer::new(SNIPPET_PATTERN.replace_all(source, "").into_owned())
    }
}
