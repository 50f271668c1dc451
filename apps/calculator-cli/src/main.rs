mod config;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use calculator::CalculatorModule;
use calculator_sdk::{CalculatorClientV1, Operation};
use clap::{Args, Parser, Subcommand};

use crate::config::{AppConfig, CliOverrides};

/// Calculator - add, subtract, multiply and divide integers
#[derive(Parser)]
#[command(name = "calculator")]
#[command(about = "Calculator - add, subtract, multiply and divide integers")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON (overrides config)
    #[arg(long, global = true)]
    json: bool,

    /// Digits after the decimal point for division results (overrides config)
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two integers
    Add(Operands),
    /// Subtract the second integer from the first
    #[command(visible_alias = "sub")]
    Subtract(Operands),
    /// Multiply two integers
    #[command(visible_alias = "mul")]
    Multiply(Operands),
    /// Divide the first integer by the second
    #[command(visible_alias = "div")]
    Divide(Operands),
    /// Apply an operation given by name or symbol (add, sub, *, /, ...)
    Eval {
        operation: Operation,
        #[command(flatten)]
        operands: Operands,
    },
    /// Validate configuration and exit
    Check,
}

#[derive(Args)]
struct Operands {
    /// First operand
    #[arg(allow_negative_numbers = true)]
    a: i64,
    /// Second operand
    #[arg(allow_negative_numbers = true)]
    b: i64,
}

impl Commands {
    /// The requested operation and its operands, if this is an arithmetic command.
    fn operation(&self) -> Option<(Operation, i64, i64)> {
        let (operation, operands) = match self {
            Self::Add(operands) => (Operation::Add, operands),
            Self::Subtract(operands) => (Operation::Subtract, operands),
            Self::Multiply(operands) => (Operation::Multiply, operands),
            Self::Divide(operands) => (Operation::Divide, operands),
            Self::Eval {
                operation,
                operands,
            } => (*operation, operands),
            Self::Check => return None,
        };
        Some((operation, operands.a, operands.b))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (CALCULATOR__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        json: cli.json,
        precision: cli.precision,
    });

    logging::init_logging(&config.logging, cli.verbose);

    tracing::info!("calculator starting");

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let command = cli.command.unwrap_or(Commands::Check);
    match command.operation() {
        Some((operation, a, b)) => calculate(&config, operation, a, b).await,
        None => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_json()?);
    Ok(())
}

async fn calculate(config: &AppConfig, operation: Operation, a: i64, b: i64) -> Result<()> {
    let module = CalculatorModule::new();
    let client = module.client();

    let evaluation = client.evaluate(operation, a, b).await?;
    tracing::debug!(%evaluation, "evaluation completed");

    println!("{}", output::render(&evaluation, &config.output)?);
    Ok(())
}
