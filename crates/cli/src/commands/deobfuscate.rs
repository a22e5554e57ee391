use crate::commands::obfuscate::write_report;
use crate::commands::{read_input, SelectionArgs};
use clap::Args;
use rustveil_transform::obfuscator::{deobfuscate_source, PipelineConfig};
use std::error::Error;

/// Arguments for the `deobfuscate` subcommand.
#[derive(Args)]
pub struct DeobfuscateArgs {
    /// Snippet text, a path to a source file, or `-` for stdin.
    pub input: String,
    #[command(flatten)]
    pub selection: SelectionArgs,
    /// Path to write the run report as JSON.
    #[arg(long, value_name = "PATH")]
    emit: Option<String>,
    /// Print the run report as JSON instead of the rewritten text.
    #[arg(long)]
    json: bool,
}

impl super::Command for DeobfuscateArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        let source = read_input(&self.input)?;
        let config = PipelineConfig {
            selection: self.selection.selection()?,
            ..PipelineConfig::default()
        };

        let result = deobfuscate_source(&source, &config);
        write_report(&result, self.emit.as_deref(), self.json)
    }
}
