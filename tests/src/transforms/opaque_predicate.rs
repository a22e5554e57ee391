use pretty_assertions::assert_eq;
use rustveil_core::SourceBuffer;
use rustveil_transform::opaque_predicate::{OpaquePredicate, PredicateSimplification};
use rustveil_transform::{deobfuscate, obfuscate, FixedChoice, OperatorId, OperatorSelection, Transform};

#[test]
fn test_round_trip_restores_literal_true() {
    let source = SourceBuffer::from("fn main() {\n    if true {\n        go();\n    }\n}");
    let selection = OperatorSelection::only([OperatorId::OpaquePredicate]);

    let obfuscated = obfuscate(&source, &selection);
    assert!(obfuscated.contains("if (1 + 1 == 2)"));
    assert!(!obfuscated.contains("if true"));
    assert_eq!(deobfuscate(&obfuscated, &selection), source);
}

#[test]
fn test_non_literal_conditions_untouched() {
    let source = SourceBuffer::from("if ready { go(); } if truthy { stop(); }");
    assert_eq!(OpaquePredicate.apply(&source, &mut FixedChoice(0)), source);
}

#[test]
fn test_simplification_collapses_hand_written_comparisons() {
    let source = SourceBuffer::from("if (a > b) { x(); } if (flag) { y(); } if (a != b) { z(); }");
    let out = PredicateSimplification.apply(&source, &mut FixedChoice(0));
    assert_eq!(
        out.as_str(),
        "if true { x(); } if (flag) { y(); } if true { z(); }"
    );
}
