use proptest::prelude::*;
use rustveil_core::SourceBuffer;
use rustveil_transform::constants::{ConstantInlining, StringConstantExtraction};
use rustveil_transform::{FixedChoice, Transform};

fn program(literals: &[String]) -> String {
    let body: Vec<String> = literals
        .iter()
        .enumerate()
        .map(|(i, literal)| format!("    let s{i} = \"{literal}\";"))
        .collect();
    format!("fn main() {{\n{}\n}}", body.join("\n"))
}

proptest! {
    #[test]
    fn inlining_undoes_extraction(literals in prop::collection::vec("[a-zA-Z0-9 _]{0,12}", 1..6)) {
        let source = SourceBuffer::new(program(&literals));
        let extracted = StringConstantExtraction.apply(&source, &mut FixedChoice(0));
        let inlined = ConstantInlining.apply(&extracted, &mut FixedChoice(0));
        prop_assert_eq!(inlined, source);
    }
}

#[test]
fn test_declarations_precede_program() {
    let source = SourceBuffer::new(program(&["Example".to_string(), "hi".to_string()]));
    let out = StringConstantExtraction.apply(&source, &mut FixedChoice(0));
    assert_eq!(
        out.as_str(),
        "const STR_0: &str = \"Example\";\n\nfn main() {\n    let s0 = STR_0;\n    let s1 = \"hi\";\n}"
    );
}

#[test]
fn test_duplicate_literals_get_separate_constants() {
    let source = SourceBuffer::from("a(\"same\"); b(\"same\");");
    let out = StringConstantExtraction.apply(&source, &mut FixedChoice(0));
    assert!(out.contains("const STR_0: &str = \"same\";"));
    assert!(out.contains("const STR_1: &str = \"same\";"));
    assert!(out.ends_with("a(STR_0); b(STR_1);"));
}

#[test]
fn test_existing_constant_names_survive_a_round_trip() {
    let source = SourceBuffer::from(
        "const STR_0: u8 = 7;\nfn main() {\n    let v = STR_0;\n    let s = \"hello\";\n}",
    );
    let extracted = StringConstantExtraction.apply(&source, &mut FixedChoice(0));
    assert!(extracted.starts_with("const STR_1: &str = \"hello\";"));
    assert!(extracted.contains("let v = STR_0;"));
    assert_eq!(ConstantInlining.apply(&extracted, &mut FixedChoice(0)), source);
}
