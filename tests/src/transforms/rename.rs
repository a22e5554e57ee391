use proptest::prelude::*;
use rustveil_core::matcher::{occurrences, PatternKind};
use rustveil_core::SourceBuffer;
use rustveil_transform::rename::IdentifierRenaming;
use rustveil_transform::{FixedChoice, Transform};
use std::collections::HashSet;

fn bindings(text: &str) -> HashSet<&str> {
    occurrences(PatternKind::BindingDeclaration, text)
        .filter_map(|occ| occ.capture(2))
        .collect()
}

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{1,7}".prop_filter("keyword", |name| {
        !matches!(name.as_str(), "let" | "mut" | "fn" | "if" | "for" | "in" | "as")
    })
}

proptest! {
    #[test]
    fn renaming_is_collision_free(names in prop::collection::vec(name(), 1..8)) {
        let body: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("let {name} = {i}; use_it({name});"))
            .collect();
        let source = SourceBuffer::new(format!("fn main() {{ {} }}", body.join(" ")));

        let table = IdentifierRenaming::renaming_table(&source);
        let placeholders: HashSet<&str> = table.values().map(String::as_str).collect();
        prop_assert_eq!(placeholders.len(), table.len());
        prop_assert!(table.keys().all(|name| IdentifierRenaming::is_renamable(name)));

        let renamed = IdentifierRenaming.apply(&source, &mut FixedChoice(0));
        prop_assert_eq!(bindings(&renamed).len(), bindings(&source).len());
        for original in table.keys() {
            prop_assert!(!bindings(&renamed).contains(original));
        }
    }
}

#[test]
fn test_numbering_follows_first_declaration() {
    let source = SourceBuffer::from("let beta = 1; let alpha = beta; let beta = alpha;");
    let table = IdentifierRenaming::renaming_table(&source);
    let order: Vec<(&str, &str)> = table.iter().map(|(k, v)| (*k, v.as_str())).collect();
    assert_eq!(order, vec![("beta", "var_0"), ("alpha", "var_1")]);
}

#[test]
fn test_entry_point_is_never_renamed() {
    let source = SourceBuffer::from("fn main() { let main = 1; }");
    assert_eq!(IdentifierRenaming.apply(&source, &mut FixedChoice(0)), source);
}
