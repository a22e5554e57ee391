use rustveil_core::matcher::{count, occurrences, rewrite, PatternKind};

const SNIPPET: &str = r#"fn main() {
    let x = 42;
    let mut name = "Example";
    if true {
        print(name);
    }
    if x > 10 { small(); } else { large(); }
}"#;

#[test]
fn test_counts_per_kind() {
    assert_eq!(count(PatternKind::IntegerLiteral, SNIPPET), 2);
    assert_eq!(count(PatternKind::StringLiteral, SNIPPET), 1);
    assert_eq!(count(PatternKind::BindingDeclaration, SNIPPET), 2);
    assert_eq!(count(PatternKind::LiteralTrueCondition, SNIPPET), 1);
    assert_eq!(count(PatternKind::IfElse, SNIPPET), 1);
    assert_eq!(count(PatternKind::FunctionOpening, SNIPPET), 1);
}

#[test]
fn test_binding_captures_mutability() {
    let bindings: Vec<_> = occurrences(PatternKind::BindingDeclaration, SNIPPET)
        .map(|occ| (occ.capture(1).is_some(), occ.capture(2).unwrap()))
        .collect();
    assert_eq!(bindings, vec![(false, "x"), (true, "name")]);
}

#[test]
fn test_binding_must_start_lowercase() {
    assert_eq!(count(PatternKind::BindingDeclaration, "let Point { x, y } = p;"), 0);
    assert_eq!(count(PatternKind::BindingDeclaration, "let _guard = lock();"), 1);
}

#[test]
fn test_if_true_is_exact() {
    assert_eq!(count(PatternKind::LiteralTrueCondition, "if  true {}"), 1);
    assert_eq!(count(PatternKind::LiteralTrueCondition, "if trueish {}"), 0);
    assert_eq!(count(PatternKind::LiteralTrueCondition, "elif true {}"), 0);
}

#[test]
fn test_function_opening_covers_signature() {
    let occ = occurrences(PatternKind::FunctionOpening, "pub fn add(a: u8, b: u8) -> u8 { a + b }")
        .next()
        .unwrap();
    assert_eq!(occ.as_str(), "fn add(a: u8, b: u8) -> u8 {");
}

#[test]
fn test_nested_if_else_is_out_of_reach() {
    let text = "if a { if b { c(); } } else { d(); }";
    assert_eq!(count(PatternKind::IfElse, text), 0);
}

#[test]
fn test_rewrite_without_matches_is_identity() {
    let out = rewrite(PatternKind::StringLiteral, "no strings here", |_| None);
    assert_eq!(out.text, "no strings here");
    assert_eq!((out.rewritten, out.skipped), (0, 0));
}
