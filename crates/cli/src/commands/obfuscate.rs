//! Module for the `obfuscate` subcommand, which runs the enabled obfuscate
//! operators over a snippet and prints the rewritten text.

use crate::commands::{read_input, SelectionArgs};
use clap::Args;
use rustveil_core::seed::Seed;
use rustveil_transform::obfuscator::{obfuscate_source, ObfuscationResult, PipelineConfig};
use std::error::Error;
use std::fs;

/// Arguments for the `obfuscate` subcommand.
#[derive(Args)]
pub struct ObfuscateArgs {
    /// Snippet text, a path to a source file, or `-` for stdin.
    pub input: String,
    #[command(flatten)]
    pub selection: SelectionArgs,
    /// 256-bit hex seed for reproducible output, as printed in a run report.
    #[arg(long, value_name = "HEX")]
    seed: Option<Seed>,
    /// Path to write the run report as JSON.
    #[arg(long, value_name = "PATH")]
    emit: Option<String>,
    /// Print the run report as JSON instead of the rewritten text.
    #[arg(long)]
    json: bool,
}

impl super::Command for ObfuscateArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        let ObfuscateArgs {
            input,
            selection,
            seed,
            emit,
            json,
        } = self;

        let source = read_input(&input)?;

        let mut config = seed.map(PipelineConfig::with_seed).unwrap_or_default();
        config.selection = selection.selection()?;

        let result = obfuscate_source(&source, &config);
        write_report(&result, emit.as_deref(), json)
    }
}

/// Prints the output text (or the JSON report) to stdout, the summary to
/// stderr, and writes the report to `emit` if given.
pub(crate) fn write_report(
    result: &ObfuscationResult,
    emit: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if let Some(path) = emit {
        fs::write(path, serde_json::to_string_pretty(result)?)?;
        eprintln!("Wrote run report to {path}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print_summary(result);
        println!("{}", result.output);
    }
    Ok(())
}

fn print_summary(result: &ObfuscationResult) {
    let analysis = &result.analysis;
    let comparison = &result.comparison;
    eprintln!(
        "Operators applied: {:?}",
        result.metadata.operators_applied
    );
    eprintln!(
        "Input: {} lines, {} functions, {} bindings, {} loops, {} conditionals, {} strings",
        comparison.lines,
        analysis.functions,
        analysis.bindings,
        analysis.loops,
        analysis.conditionals,
        analysis.strings
    );
    eprintln!(
        "Complexity {} | level {} | size {} → {} bytes ({:+.1}%)",
        comparison.complexity,
        comparison.obfuscation_level,
        comparison.input_len,
        comparison.output_len,
        comparison.size_increase_percentage
    );
}
