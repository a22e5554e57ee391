use pretty_assertions::assert_eq;
use rustveil_core::SourceBuffer;
use rustveil_transform::control_flow::{ControlFlowRestructuring, ControlFlowSimplification};
use rustveil_transform::{FixedChoice, Transform};

#[test]
fn test_restructure_then_simplify_restores_text() {
    let cases = [
        "fn f(x: i32) { if x > 5 { big(); } else { small(); } }",
        "fn g(a: bool, b: bool) { if a && b { both(); } else { neither(); } }",
    ];
    for case in cases {
        let source = SourceBuffer::from(case);
        let restructured = ControlFlowRestructuring.apply(&source, &mut FixedChoice(0));
        assert!(restructured.contains("true => {"));
        assert_eq!(
            ControlFlowSimplification.apply(&restructured, &mut FixedChoice(0)),
            source
        );
    }
}

#[test]
fn test_single_branch_if_untouched() {
    let source = SourceBuffer::from("fn f() { if ready { go(); } }");
    assert_eq!(
        ControlFlowRestructuring.apply(&source, &mut FixedChoice(0)),
        source
    );
}

#[test]
fn test_non_boolean_match_untouched() {
    let source = SourceBuffer::from("match n { 0 => { zero(); }, _ => { other(); } }");
    assert_eq!(
        ControlFlowSimplification.apply(&source, &mut FixedChoice(0)),
        source
    );
}
