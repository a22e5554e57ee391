use pretty_assertions::assert_eq;
use rustveil_core::SourceBuffer;
use rustveil_transform::dead_code::{DeadCodeInsertion, DeadCodeRemoval, SNIPPETS};
use rustveil_transform::{FixedChoice, Transform};

const PROGRAM: &str = "fn helper(n: u32) -> u32 { n * 2 }\n\nfn main() {\n    helper(4);\n}";

#[test]
fn test_insertion_then_removal_restores_text() {
    let source = SourceBuffer::from(PROGRAM);
    for variant in 0..SNIPPETS.len() {
        let padded = DeadCodeInsertion.apply(&source, &mut FixedChoice(variant));
        assert_eq!(padded.matches(SNIPPETS[variant]).count(), 2);
        assert_eq!(DeadCodeRemoval.apply(&padded, &mut FixedChoice(0)), source);
    }
}

#[test]
fn test_inserting_twice_pads_twice() {
    let source = SourceBuffer::from("fn main() { run(); }");
    let once = DeadCodeInsertion.apply(&source, &mut FixedChoice(0));
    let twice = DeadCodeInsertion.apply(&once, &mut FixedChoice(0));
    assert_eq!(twice.matches(SNIPPETS[0]).count(), 2);
}

#[test]
fn test_removal_ignores_other_dead_code() {
    let source = SourceBuffer::from("fn main() { if false { let _other = 1; } }");
    assert_eq!(DeadCodeRemoval.apply(&source, &mut FixedChoice(0)), source);
}

#[test]
fn test_no_functions_is_a_no_op() {
    let source = SourceBuffer::from("let x = 1;");
    assert_eq!(DeadCodeInsertion.apply(&source, &mut FixedChoice(0)), source);
}
