use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustveil_analysis::analyze;
use rustveil_core::seed::Seed;
use rustveil_core::SourceBuffer;
use rustveil_transform::obfuscator::Direction;
use rustveil_transform::{
    deobfuscate, deobfuscate_source, obfuscate, obfuscate_source, obfuscate_with, FixedChoice,
    OperatorId, OperatorSelection, PipelineConfig,
};

const EXAMPLE: &str =
    r#"fn main() { let x = 42; let name = "Example"; if true { print(name); print(x); } }"#;
const FIXED_SEED: &str = "0x5eed5eed5eed5eed5eed5eed5eed5eed5eed5eed5eed5eed5eed5eed5eed5eed";

#[test]
fn test_opaque_predicate_only_touches_the_condition() {
    let source = SourceBuffer::from(EXAMPLE);
    let out = obfuscate(&source, &OperatorSelection::only([OperatorId::OpaquePredicate]));
    assert_eq!(
        out.as_str(),
        r#"fn main() { let x = 42; let name = "Example"; if (1 + 1 == 2) { print(name); print(x); } }"#
    );
}

#[test]
fn test_default_round_trip_leaves_only_renaming() {
    let source = SourceBuffer::from(EXAMPLE);
    let selection = OperatorSelection::default();
    let expected =
        r#"fn main() { let x = 42; let var_0 = "Example"; if true { print(var_0); print(x); } }"#;

    for seed in 0..16 {
        let obfuscated = obfuscate_with(&source, &selection, &mut StdRng::seed_from_u64(seed));
        assert!(!obfuscated.contains("if true"));
        assert!(!obfuscated.contains("let x = 42;"));
        assert_eq!(deobfuscate(&obfuscated, &selection).as_str(), expected);
    }
}

#[test]
fn test_full_selection_round_trip_inlines_every_constant() {
    let source = SourceBuffer::from(EXAMPLE);
    let selection = OperatorSelection::all();
    let expected =
        r#"fn main() { let x = 42; let var_0 = "Example"; if true { print(var_0); print(x); } }"#;

    let obfuscated = obfuscate_with(&source, &selection, &mut FixedChoice(0));
    assert!(obfuscated.starts_with("const STR_0: &str = \"Example\";"));
    assert!(!obfuscated.contains("base64::decode"));
    assert!(!obfuscated.contains("concat!"));

    for seed in 0..8 {
        let obfuscated = obfuscate_with(&source, &selection, &mut StdRng::seed_from_u64(seed));
        let restored = deobfuscate(&obfuscated, &selection);
        assert!(!restored.contains("STR_"));
        assert_eq!(restored.as_str(), expected);
    }
}

#[test]
fn test_if_else_and_constants_round_trip() {
    let source = SourceBuffer::from(
        "fn main() {\n    let mode = \"release\";\n    if mode == \"debug\" { trace(); } else { run(); }\n}",
    );
    let selection = OperatorSelection::only([
        OperatorId::ControlFlowRestructuring,
        OperatorId::StringConstantExtraction,
    ]);

    let obfuscated = obfuscate(&source, &selection);
    assert!(obfuscated.starts_with("const STR_0: &str = \"release\";"));
    assert!(obfuscated.contains("match mode == STR_1 { true => {"));
    assert_eq!(deobfuscate(&obfuscated, &selection), source);
}

#[test]
fn test_seeded_reports_are_reproducible() {
    let source = SourceBuffer::from(EXAMPLE);
    let config = PipelineConfig {
        seed: Seed::from_hex(FIXED_SEED).unwrap(),
        selection: OperatorSelection::all(),
    };

    let first = obfuscate_source(&source, &config);
    let second = obfuscate_source(&source, &config);
    assert_eq!(first.output, second.output);
    assert_eq!(first.analysis, analyze(EXAMPLE));
    assert_eq!(first.metadata.direction, Direction::Obfuscate);
    assert_eq!(
        first.metadata.operators_applied,
        vec![
            "numeric-diffusion",
            "opaque-predicate",
            "dead-code-insertion",
            "identifier-renaming",
            "control-flow-restructuring",
            "string-constant-extraction",
        ]
    );
    assert!(first.comparison.obfuscation_level > 50);
    assert!(first.comparison.size_increase_percentage > 0.0);
}

#[test]
fn test_deobfuscating_plain_text_is_harmless() {
    let source = SourceBuffer::from(EXAMPLE);
    let config = PipelineConfig::with_seed(Seed::from_hex(FIXED_SEED).unwrap());
    let result = deobfuscate_source(&source, &config);
    assert_eq!(result.output, source);
    assert_eq!(result.metadata.direction, Direction::Deobfuscate);
    assert!(result.metadata.operators_changed.is_empty());
    assert_eq!(result.comparison.obfuscation_level, 50);
}

#[test]
fn test_report_serialises_to_json() {
    let source = SourceBuffer::from(EXAMPLE);
    let config = PipelineConfig::with_seed(Seed::from_hex(FIXED_SEED).unwrap());
    let report = serde_json::to_value(obfuscate_source(&source, &config)).unwrap();
    assert_eq!(report["metadata"]["direction"], "obfuscate");
    assert_eq!(report["metadata"]["seed"], FIXED_SEED);
    assert_eq!(report["analysis"]["bindings"], 2);
}
