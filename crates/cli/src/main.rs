use clap::Parser;
use rustveil_cli::commands::{Cmd, Command};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Rustveil CLI
///
/// Rustveil rewrites short source snippets into a harder-to-read but equivalent
/// form, partially reverses that rewrite, and reports a coarse structural census.
#[derive(Parser)]
#[command(name = "rustveil")]
#[command(about = "Rustveil: source snippet obfuscator")]
struct Cli {
    /// Log each operator as it runs.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .init();

    cli.command.execute()
}
