use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod evidence;
mod parsing;
mod scoring;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("contig_score=debug,info")
    } else {
        EnvFilter::new("contig_score=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Evidence(args) => {
            cli::evidence::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Score(args) => {
            cli::score::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Assess(args) => {
            cli::assess::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
