use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for radixfft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    /// Build the library without `std`
    #[command(name = "no-std")]
    NoStd,
    Clippy,
    Fmt,
    /// Run fmt, then clippy
    Analyze,
    /// Criterion benchmarks against rustfft
    Bench,
}

fn run(mut cmd: std::process::Command) -> Result<()> {
    let status = cmd.status()?;
    if !status.success() {
        bail!("{:?} failed with {}", cmd, status);
    }
    Ok(())
}

#[cfg(not(test))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    match cli.command {
        Commands::Build => run(build_command(&cfg)),
        Commands::Test => run(test_command(&cfg)),
        Commands::NoStd => run(no_std_command()),
        Commands::Clippy => run(clippy_command()),
        Commands::Fmt => run(fmt_command()),
        Commands::Analyze => {
            run(fmt_command())?;
            run(clippy_command())
        }
        Commands::Bench => run(bench_command(&cfg)),
    }
}
