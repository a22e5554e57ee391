use crate::operator::{OperatorId, OperatorSelection};
use crate::Choice;
use rustveil_analysis::{analyze, compare, AnalysisResult, Comparison};
use rustveil_core::seed::Seed;
use rustveil_core::SourceBuffer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Forward order of the paired obfuscate operators. String encoding and
/// splitting are standalone and only run through [`apply_operator`].
pub const OBFUSCATE_ORDER: [OperatorId; 6] = [
    OperatorId::NumericDiffusion,
    OperatorId::OpaquePredicate,
    OperatorId::DeadCodeInsertion,
    OperatorId::IdentifierRenaming,
    OperatorId::ControlFlowRestructuring,
    OperatorId::StringConstantExtraction,
];

/// Inverses in reverse order: the last obfuscation step is undone first.
pub const DEOBFUSCATE_ORDER: [OperatorId; 5] = [
    OperatorId::ConstantInlining,
    OperatorId::ControlFlowSimplification,
    OperatorId::DeadCodeRemoval,
    OperatorId::PredicateSimplification,
    OperatorId::NumericSimplification,
];

/// Which way a pipeline run rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Obfuscate,
    Deobfuscate,
}

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Seed for the randomised operators; the same seed reproduces the same text.
    pub seed: Seed,
    /// Enabled operators
    pub selection: OperatorSelection,
}

impl PipelineConfig {
    /// Create config with a specific seed
    pub fn with_seed(seed: Seed) -> Self {
        Self {
            seed,
            selection: OperatorSelection::default(),
        }
    }
}

/// Result of a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObfuscationResult {
    /// The rewritten snippet
    pub output: SourceBuffer,
    /// Census of the input, taken before any operator ran
    pub analysis: AnalysisResult,
    /// Complexity and size change between input and output
    pub comparison: Comparison,
    pub metadata: ObfuscationMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObfuscationMetadata {
    pub direction: Direction,
    /// Operators run, in execution order
    pub operators_applied: Vec<String>,
    /// Operators whose output differed from their input
    pub operators_changed: Vec<String>,
    /// Seed used for randomised operators, hex with 0x prefix
    pub seed: String,
}

/// Applies the enabled obfuscate operators in forward order using a fresh
/// source of randomness.
pub fn obfuscate(source: &SourceBuffer, selection: &OperatorSelection) -> SourceBuffer {
    obfuscate_with(source, selection, &mut rand::rng())
}

/// [`obfuscate`] with the random decisions drawn from `choice`.
pub fn obfuscate_with(
    source: &SourceBuffer,
    selection: &OperatorSelection,
    choice: &mut dyn Choice,
) -> SourceBuffer {
    run(source, forward(selection), choice).0
}

/// Applies the inverses of the enabled operators in reverse order.
///
/// Any text is acceptable input; on text that was never obfuscated this is a
/// best-effort cleanup pass.
pub fn deobfuscate(source: &SourceBuffer, selection: &OperatorSelection) -> SourceBuffer {
    run(source, backward(selection), &mut crate::FixedChoice(0)).0
}

/// Runs a single operator of either family, standalone operators included.
pub fn apply_operator(
    id: OperatorId,
    source: &SourceBuffer,
    choice: &mut dyn Choice,
) -> SourceBuffer {
    id.transform().apply(source, choice)
}

/// Obfuscates `source` and reports on the run. The census is taken from the
/// input, before any operator runs.
pub fn obfuscate_source(source: &SourceBuffer, config: &PipelineConfig) -> ObfuscationResult {
    let analysis = analyze(source);
    let mut rng = config.seed.create_deterministic_rng();
    let (output, trace) = run(source, forward(&config.selection), &mut rng);
    report(source, output, analysis, Direction::Obfuscate, trace, config)
}

/// Deobfuscates `source` and reports on the run.
pub fn deobfuscate_source(source: &SourceBuffer, config: &PipelineConfig) -> ObfuscationResult {
    let analysis = analyze(source);
    let (output, trace) = run(
        source,
        backward(&config.selection),
        &mut crate::FixedChoice(0),
    );
    report(source, output, analysis, Direction::Deobfuscate, trace, config)
}

fn forward(selection: &OperatorSelection) -> Vec<OperatorId> {
    OBFUSCATE_ORDER
        .into_iter()
        .filter(|id| selection.is_enabled(*id))
        .collect()
}

fn backward(selection: &OperatorSelection) -> Vec<OperatorId> {
    DEOBFUSCATE_ORDER
        .into_iter()
        .filter(|id| selection.is_enabled(*id))
        .collect()
}

/// (operator, changed) per operator run
type Trace = Vec<(OperatorId, bool)>;

fn run(
    source: &SourceBuffer,
    operators: Vec<OperatorId>,
    choice: &mut dyn Choice,
) -> (SourceBuffer, Trace) {
    debug!("Running {} operator(s)", operators.len());

    let mut current = source.clone();
    let mut trace = Vec::with_capacity(operators.len());
    for id in operators {
        let next = id.transform().apply(&current, choice);
        let changed = next != current;
        let delta = next.len() as i64 - current.len() as i64;
        info!("{:>28} changed={} Δ{:+} bytes", id.name(), changed, delta);
        trace.push((id, changed));
        current = next;
    }
    (current, trace)
}

fn report(
    source: &SourceBuffer,
    output: SourceBuffer,
    analysis: AnalysisResult,
    direction: Direction,
    trace: Trace,
    config: &PipelineConfig,
) -> ObfuscationResult {
    let comparison = compare(source, &output, &analysis);
    debug!(
        "Pipeline finished: {} → {} bytes ({:+.1}%)",
        comparison.input_len, comparison.output_len, comparison.size_increase_percentage
    );

    ObfuscationResult {
        output,
        analysis,
        comparison,
        metadata: ObfuscationMetadata {
            direction,
            operators_applied: trace.iter().map(|(id, _)| id.name().to_string()).collect(),
            operators_changed: trace
                .iter()
                .filter(|(_, changed)| *changed)
                .map(|(id, _)| id.name().to_string())
                .collect(),
            seed: config.seed.to_hex(),
        },
    }
}
