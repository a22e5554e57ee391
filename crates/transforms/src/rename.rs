use crate::{Choice, OperatorId, Transform};
use indexmap::IndexMap;
use rustveil_core::matcher::{self, FreshNames, PatternKind};
use rustveil_core::{SourceBuffer, ENTRY_POINT};
use tracing::debug;

/// Renames `let`-bound identifiers to `var_<k>` placeholders.
///
/// Names are numbered in first-declaration order and every whole-word use of
/// a renamed name is rewritten, not just its declaration.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentifierRenaming;

impl IdentifierRenaming {
    /// Whether a declared name is eligible for renaming.
    pub fn is_renamable(name: &str) -> bool {
        name.chars().count() > 1 && !name.starts_with('_') && name != ENTRY_POINT
    }

    /// Builds the original-name to placeholder table for `text`.
    ///
    /// Placeholders already present as words in `text` are skipped so a
    /// renamed binding never lands on an existing name.
    pub fn renaming_table(text: &str) -> IndexMap<&str, String> {
        let mut placeholders = FreshNames::new("var_", text);
        let mut table = IndexMap::new();
        for occurrence in matcher::occurrences(PatternKind::BindingDeclaration, text) {
            let Some(name) = occurrence.capture(2) else {
                continue;
            };
            if !Self::is_renamable(name) || table.contains_key(name) {
                continue;
            }
            let Some(placeholder) = placeholders.next() else {
                break;
            };
            table.insert(name, placeholder);
        }
        table
    }
}

impl Transform for IdentifierRenaming {
    fn id(&self) -> OperatorId {
        OperatorId::IdentifierRenaming
    }

    fn apply(&self, source: &SourceBuffer, _choice: &mut dyn Choice) -> SourceBuffer {
        let table = Self::renaming_table(source);
        if table.is_empty() {
            debug!("IdentifierRenaming: no renamable bindings");
            return source.clone();
        }

        debug!("IdentifierRenaming: renaming {} binding(s)", table.len());
        let renamed = matcher::replace_words(
            source,
            table.iter().map(|(name, placeholder)| (*name, placeholder.as_str())),
        );
        SourceBuffer::new(renamed)
    }
}
