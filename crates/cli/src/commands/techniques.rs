use crate::commands::{read_input, CommandError};
use clap::Args;
use rustveil_transform::catalogue::{technique, CATALOGUE};
use rustveil_transform::{Error as TransformError, OperatorId};
use std::error::Error;

/// List the technique library or demo a single technique.
#[derive(Args)]
pub struct TechniquesArgs {
    /// Technique to demonstrate, e.g. `splitting` or `opaque-predicate`.
    #[arg(long, value_name = "NAME")]
    demo: Option<String>,
    /// Demo input instead of the technique's canonical example.
    #[arg(long, requires = "demo")]
    input: Option<String>,
    /// Print the catalogue as JSON.
    #[arg(long, conflicts_with = "demo")]
    json: bool,
}

impl super::Command for TechniquesArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        let Some(name) = self.demo else {
            if self.json {
                println!("{}", serde_json::to_string_pretty(&CATALOGUE)?);
            } else {
                for entry in &CATALOGUE {
                    println!("{:<28} {}", entry.id.name(), entry.title);
                    println!("    {}", entry.description);
                }
            }
            return Ok(());
        };

        let id: OperatorId = name.parse().map_err(CommandError::from)?;
        let entry = technique(id)
            .ok_or_else(|| CommandError::from(TransformError::UnknownOperator(name.clone())))?;

        let input = match self.input {
            Some(input) => read_input(&input)?,
            None => entry.example.into(),
        };
        let output = entry.demo(&input, &mut rand::rng());

        println!("{}\n", entry.title);
        println!("{}\n", entry.description);
        for pro in entry.pros {
            println!("  + {pro}");
        }
        for con in entry.cons {
            println!("  - {con}");
        }
        println!("\nInput:\n{input}\n\nOutput:\n{output}");
        Ok(())
    }
}
