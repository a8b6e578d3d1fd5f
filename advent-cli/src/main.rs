//! Command-line runner for the Advent of Code puzzle solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Link the puzzle crate so its solver plugins are collected
use advent_puzzles as _;

use advent_solver::{SolverRegistry, SolverRegistryBuilder};
use aggregator::{ResultAggregator, ResultKey};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use input::InputStore;
use itertools::Itertools;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();
    log::debug!("{config:?}");

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing_inputs = missing_inputs(&work_items, executor.inputs());
    if !missing_inputs.is_empty() && !config.quiet {
        println!("Missing {} input file(s):", missing_inputs.len());
        for (year, day) in &missing_inputs {
            println!(
                "  - {}/day{:02} ({})",
                year,
                day,
                executor.inputs().input_path(*year, *day).display()
            );
        }
    }

    run_executor(executor, work_items, config.quiet)
}

/// Work items whose input file does not exist
fn missing_inputs(work_items: &[WorkItem], inputs: &InputStore) -> Vec<(u16, u8)> {
    work_items
        .iter()
        .filter(|w| !inputs.contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

/// Run the executor and print results in `(year, day, part)` order
fn run_executor(executor: Executor, work_items: Vec<WorkItem>, quiet: bool) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys = work_items.iter().flat_map(|w| {
        w.parts.clone().map(move |part| ResultKey {
            year: w.year,
            day: w.day,
            part,
        })
    });
    let mut aggregator = ResultAggregator::new(expected_keys);

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        let missing = aggregator.missing().map(ToString::to_string).join(", ");
        log::warn!("no result received for {missing}");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    let registry = builder.build();
    log::info!("{} solver(s) registered", registry.storage().len());
    Ok(registry)
}
