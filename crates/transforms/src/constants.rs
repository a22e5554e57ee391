//! Hoisting string literals into `const` declarations, and inlining them back.
//!
//! ```text
//! // Original
//! let name = "Example";
//!
//! // Transformed
//! const STR_0: &str = "Example";
//!
//! let name = STR_0;
//! ```

use crate::{Choice, OperatorId, Transform};
use indexmap::IndexMap;
use rustveil_core::matcher::{self, FreshNames, PatternKind};
use rustveil_core::SourceBuffer;
use tracing::debug;

/// Shortest literal, in characters, worth hoisting.
pub const MIN_EXTRACT_LEN: usize = 3;

#[derive(Debug, Default, Clone, Copy)]
pub struct StringConstantExtraction;

impl StringConstantExtraction {
    /// Format placeholders contain `{`; those literals must stay in place.
    pub fn is_extractable(contents: &str) -> bool {
        contents.chars().count() >= MIN_EXTRACT_LEN && !contents.contains('{')
    }
}

impl Transform for StringConstantExtraction {
    fn id(&self) -> OperatorId {
        OperatorId::StringConstantExtraction
    }

    fn apply(&self, source: &SourceBuffer, _choice: &mut dyn Choice) -> SourceBuffer {
        let mut names = FreshNames::new("STR_", source);
        // constant name -> quoted literal, in extraction order
        let mut constants: IndexMap<String, &str> = IndexMap::new();
        let out = matcher::rewrite(PatternKind::StringLiteral, source, |occ| {
            if !Self::is_extractable(occ.capture(1)?) {
                return None;
            }
            let name = names.next()?;
            constants.insert(name.clone(), occ.as_str());
            Some(name)
        });

        debug!(
            "StringConstantExtraction: {} literal(s) hoisted, {} left in place",
            out.rewritten, out.skipped
        );
        if constants.is_empty() {
            return source.clone();
        }

        let declarations: Vec<String> = constants
            .iter()
            .map(|(name, literal)| format!("const {name}: &str = {literal};"))
            .collect();
        SourceBuffer::new(format!("{}\n\n{}", declarations.join("\n"), out.text))
    }
}

/// Reads back the declaration block, deletes it and substitutes each
/// constant name with its literal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstantInlining;

impl Transform for ConstantInlining {
    fn id(&self) -> OperatorId {
        OperatorId::ConstantInlining
    }

    fn apply(&self, source: &SourceBuffer, _choice: &mut dyn Choice) -> SourceBuffer {
        let mut constants: IndexMap<&str, &str> = IndexMap::new();
        let stripped = matcher::rewrite(PatternKind::ConstantDeclaration, source, |occ| {
            constants.insert(occ.capture(1)?, occ.capture(2)?);
            Some(String::new())
        });

        if constants.is_empty() {
            debug!("ConstantInlining: no constant declarations found");
            return source.clone();
        }

        debug!("ConstantInlining: inlining {} constant(s)", constants.len());
        let inlined = matcher::replace_words(
            &stripped.text,
            constants.iter().map(|(name, literal)| (*name, *literal)),
        );
        SourceBuffer::new(inlined.trim())
    }
}
