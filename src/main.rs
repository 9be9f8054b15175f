//! `flowshop` command-line driver.
//!
//! Loads a processing-time matrix and optimization parameters (JSON files,
//! overridable by flags), runs CDS + GA, and prints a text report or the
//! full result as JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::Level;

use flowshop_cds_ga::ga::operators::{CrossoverType, MutationType};
use flowshop_cds_ga::models::{OptimizationResult, ProcessingTimeMatrix};
use flowshop_cds_ga::{FlowShopOptimizer, OptimizationParams, OptimizeError};

/// Flow-shop sequencing with CDS and a genetic algorithm
#[derive(Parser, Debug)]
#[command(name = "flowshop")]
#[command(about = "Minimizes flow-shop makespan with the CDS heuristic refined by a small GA")]
struct Args {
    /// Processing-time matrix as a JSON number[][] (defaults to the built-in 5x10 plant)
    #[arg(long)]
    matrix: Option<PathBuf>,

    /// Optimization parameters as JSON (camelCase fields; missing fields use defaults)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Units per job type, comma separated (e.g. 1,2,0,1,1)
    #[arg(long, value_delimiter = ',')]
    quantities: Option<Vec<usize>>,

    /// Crossover method: pmx or ox
    #[arg(long)]
    crossover: Option<CrossoverType>,

    /// Mutation method: inversion or swap
    #[arg(long)]
    mutation: Option<MutationType>,

    /// Mutation probability per call
    #[arg(long)]
    mutation_rate: Option<f64>,

    /// Generation budget
    #[arg(long)]
    max_generations: Option<usize>,

    /// Stop once the best makespan is at or below this
    #[arg(long)]
    target_makespan: Option<u64>,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the full result as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Optimize(#[from] OptimizeError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let matrix = match &args.matrix {
        Some(path) => read_json::<ProcessingTimeMatrix>(path)?,
        None => ProcessingTimeMatrix::default_plant(),
    };
    let params = build_params(args)?;

    let result = FlowShopOptimizer::new(matrix).optimize(&params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn build_params(args: &Args) -> Result<OptimizationParams, CliError> {
    let mut params = match &args.params {
        Some(path) => read_json::<OptimizationParams>(path)?,
        None => OptimizationParams::default(),
    };

    if let Some(quantities) = &args.quantities {
        params.job_quantities = quantities.clone();
    }
    if let Some(method) = args.crossover {
        params.crossover_method = method;
    }
    if let Some(method) = args.mutation {
        params.mutation_method = method;
    }
    if let Some(rate) = args.mutation_rate {
        params.mutation_rate = rate;
    }
    if let Some(generations) = args.max_generations {
        params.max_generations = generations;
    }
    if let Some(target) = args.target_makespan {
        params.target_makespan = target;
    }
    if args.seed.is_some() {
        params.seed = args.seed;
    }
    Ok(params)
}

fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_report(result: &OptimizationResult) {
    let matrix = &result.processing_matrix;

    println!("Processing times ({} jobs x {} machines)", matrix.job_types(), matrix.machines());
    print!("{:>5}", "Job");
    for m in 1..=matrix.machines() {
        print!("{:>5}", format!("M{m}"));
    }
    println!();
    for (job, row) in matrix.rows().iter().enumerate() {
        print!("{:>5}", job + 1);
        for time in row {
            print!("{time:>5}");
        }
        println!();
    }

    println!();
    println!("CDS candidates (best first)");
    for (rank, (k, candidate)) in result.ranked_cds().into_iter().enumerate() {
        let marker = if rank == 0 { " *" } else { "" };
        println!(
            "  k={k:<3} makespan={:<5} sequence: {}{marker}",
            candidate.makespan,
            join(&candidate.sequence)
        );
    }

    let ga = &result.ga;
    println!();
    println!("Genetic algorithm");
    println!("  best makespan:   {}", ga.best_makespan);
    println!("  best generation: {}", ga.best_generation);
    println!("  best sequence:   {}", join(&ga.best_sequence));
    println!("  improvement over CDS: {}", result.ga_improvement());

    for record in &ga.history {
        println!();
        println!(
            "  Generation {} (best so far {}): {}",
            record.generation,
            record.makespan,
            join(&record.sequence)
        );
        for (i, member) in record.population.iter().enumerate() {
            println!(
                "    #{} makespan={:<5} {}",
                i + 1,
                member.makespan,
                join(&member.sequence)
            );
        }
    }
}
