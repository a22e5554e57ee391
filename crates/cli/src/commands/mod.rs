use clap::{Args, Subcommand};
use rustveil_core::SourceBuffer;
use rustveil_transform::OperatorSelection;
use std::error::Error;
use std::io::Read;
use std::path::Path;

pub mod analyze;
pub mod deobfuscate;
pub mod obfuscate;
pub mod techniques;

use thiserror::Error;

/// Errors raised while preparing or reporting a run.
#[derive(Debug, Error)]
pub enum CommandError {
    /// File or stdin read/write error.
    #[error("file error: {0}")]
    File(#[from] std::io::Error),
    /// Input or seed rejected by the core.
    #[error("{0}")]
    Core(#[from] rustveil_core::Error),
    /// Invalid operator name in `--passes`.
    #[error("invalid pass: {0}")]
    InvalidPass(#[from] rustveil_transform::Error),
    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// CLI subcommands for Rustveil.
#[derive(Subcommand)]
pub enum Cmd {
    /// Obfuscate a snippet with the selected operators.
    Obfuscate(obfuscate::ObfuscateArgs),
    /// Undo the selected operators as far as their heuristic inverses allow.
    Deobfuscate(deobfuscate::DeobfuscateArgs),
    /// Print the structural census of a snippet.
    Analyze(analyze::AnalyzeArgs),
    /// List the technique library or run one technique's demo.
    Techniques(techniques::TechniquesArgs),
}

/// Trait for executing CLI subcommands.
pub trait Command {
    /// Executes the subcommand.
    fn execute(self) -> Result<(), Box<dyn Error>>;
}

impl Command for Cmd {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        match self {
            Cmd::Obfuscate(args) => args.execute(),
            Cmd::Deobfuscate(args) => args.execute(),
            Cmd::Analyze(args) => args.execute(),
            Cmd::Techniques(args) => args.execute(),
        }
    }
}

/// Operator selection flags shared by both pipeline directions.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Comma-separated operators to enable, e.g. `numbers,predicates,control_flow`
    /// (default: numeric-diffusion, opaque-predicate, dead-code-insertion, identifier-renaming).
    #[arg(long, value_name = "LIST", conflicts_with = "all")]
    pub passes: Option<String>,
    /// Enable every pipeline operator (string encoding and splitting are
    /// standalone, see `techniques --demo`).
    #[arg(long)]
    pub all: bool,
}

impl SelectionArgs {
    pub fn selection(&self) -> Result<OperatorSelection, CommandError> {
        if self.all {
            return Ok(OperatorSelection::all());
        }
        match &self.passes {
            Some(list) => Ok(list.parse()?),
            None => Ok(OperatorSelection::default()),
        }
    }
}

/// Reads input from stdin (`-`), an existing file, or takes the argument as
/// the snippet itself.
pub fn read_input(input: &str) -> Result<SourceBuffer, CommandError> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(SourceBuffer::new(text))
    } else if Path::new(input).is_file() {
        Ok(SourceBuffer::from_path(input)?)
    } else {
        Ok(SourceBuffer::from(input))
    }
}
