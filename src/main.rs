use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use eytzinger_layout::driver::{self, DriverConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use eytzinger_layout::{Placeholder, Strategy};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "eytzinger-layout",
    about = "Rearrange sorted records into Eytzinger (BFS) order for branch-free lookup"
)]
struct Cli {
    /// Sorted records, one per line.
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Destination file; slot 0 (the placeholder) is written first.
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Token written for the unused slot 0. Records equal to it are logged.
    #[arg(long, default_value = Placeholder::DEFAULT_TOKEN)]
    placeholder: Placeholder,
    /// Traversal used to place records.
    #[arg(long, value_enum, default_value_t = StrategyArg::Iterative)]
    strategy: StrategyArg,
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    /// Direct recursion over heap positions.
    Recursive,
    /// Explicit stack, no call-stack growth.
    Iterative,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recursive => Strategy::Recursive,
            StrategyArg::Iterative => Strategy::Iterative,
        }
    }
}

impl Cli {
    fn into_config(self) -> DriverConfig {
        DriverConfig {
            input: self.input,
            output: self.output,
            placeholder: self.placeholder,
            strategy: self.strategy.into(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.into_config();

    let summary = driver::run(&config).with_context(|| {
        format!(
            "failed to lay out {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    println!(
        "{}\trecords={}\theight={}\tplaceholder_collisions={}\tblake3={}",
        config.output.display(),
        summary.records,
        summary.height,
        summary.placeholder_collisions,
        summary.fingerprint
    );

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "eytzinger_layout=debug"
    } else {
        "eytzinger_layout=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
