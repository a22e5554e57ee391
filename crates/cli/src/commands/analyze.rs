use crate::commands::read_input;
use clap::Args;
use rustveil_analysis::{analyze, complexity};
use std::error::Error;

/// Print the structural census of a snippet.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Snippet text, a path to a source file, or `-` for stdin.
    #[arg(value_name = "SOURCE")]
    pub input: String,
    /// Print the census as JSON.
    #[arg(long)]
    json: bool,
}

impl super::Command for AnalyzeArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        let source = read_input(&self.input)?;
        let result = analyze(&source);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        println!("Lines:        {}", source.line_count());
        println!("Functions:    {}", result.functions);
        println!("Bindings:     {}", result.bindings);
        println!("Loops:        {}", result.loops);
        println!("Conditionals: {}", result.conditionals);
        println!("Strings:      {}", result.strings);
        println!("Comments:     {}", result.comments);
        println!("Complexity:   {}", complexity(&result));
        Ok(())
    }
}
