//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use advent_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the first result produced from a parsed instance
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

/// The part of the executor shared by reference across worker threads
pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        let inputs = match &config.input_file {
            Some(file) => InputStore::single(config.input_dir.clone(), file.clone()),
            None => InputStore::new(config.input_dir.clone()),
        };

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs,
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.sync_executor_config.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        log::info!(
            "running {} puzzle(s), parallelized by {:?}",
            work_items.len(),
            self.sync_executor_config.parallelize_by
        );

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => self.execute_sequential(work_items, &tx),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Day and Part both fan out over work items; Part also splits each puzzle
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items one after another inside the pool, so solvers
    /// that use rayon internally still respect the thread count
    fn execute_sequential(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            let mut collected_error: Option<ArcExecutorError> = None;
            for work in work_items {
                if let Err(e) = run_solver(&work, tx, sync_executor_config) {
                    collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                }
            }
            collected_error.map_or(Ok(()), Err)
        })
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_solver(&work, tx, sync_executor_config).err())
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_solver(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Parts to run given the part filter and the solver's part count
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Send the same failure for every part of `work`
fn send_failures(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    error: ArcExecutorError,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(tx, SolverResult::failed(work.year, work.day, part, error.clone()))?;
    }
    Ok(())
}

/// Read the input of one puzzle and solve its parts
fn run_solver(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let input = match sync_executor_config.inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            log::warn!("skipping {year}/{day}: {source}");
            let error = ExecutorError::Input { year, day, source }.into();
            return send_failures(work, tx, error);
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, &sync_executor_config.registry)
    } else {
        run_solver_sequential(work, &input, tx, &sync_executor_config.registry)
    }
}

/// Solve each part on its own parsed instance, emitting results in part order
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match registry.create_solver(year, day, input) {
            Ok(mut solver) => {
                let mut result = solve_part(year, day, part, &mut *solver);
                result.parse_duration = Some(solver.parse_duration());
                result
            }
            Err(e) => SolverResult::failed(year, day, part, ExecutorError::from(e).into()),
        })
        .collect();

    results.sort_by_key(|r| r.part);
    for result in results {
        send(tx, result)?;
    }
    Ok(())
}

/// Parse once, then solve the parts in order, streaming each result
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut solver = match registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            log::warn!("{year}/{day} failed to start: {e}");
            return send_failures(work, tx, ExecutorError::from(e).into());
        }
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part(year, day, part, &mut *solver);
        result.parse_duration = parse_duration.take();
        send(tx, result)?;
    }
    Ok(())
}

/// Solve a single part
fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    log::debug!("solving {year}/{day} part {part}");
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration: None,
        },
        Err(e) => {
            log::warn!("{year}/{day} part {part} failed: {e}");
            let error = ExecutorError::Solver(e.into()).into();
            SolverResult::failed(year, day, part, error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use advent_solver::SolverRegistryBuilder;
    use advent_puzzles::solutions::year_2024::day_1::HistorianHysteria;
    use advent_puzzles::solutions::year_2024::day_25::CodeChronicle;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn executor(temp: &TempDir, extra: &[&str]) -> Executor {
        let dir = temp.path().to_string_lossy().into_owned();
        let argv = ["advent", "--input-dir", dir.as_str(), "--threads", "2"]
            .into_iter()
            .chain(extra.iter().copied());
        let config = Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap();
        let registry = SolverRegistryBuilder::new()
            .register_solver::<HistorianHysteria>(2024, 1)
            .unwrap()
            .register_solver::<CodeChronicle>(2024, 25)
            .unwrap()
            .build();
        Executor::new(registry, &config).unwrap()
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    fn write_day1(temp: &TempDir) {
        let dir = temp.path().join("2024");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("day01.txt"), "3 4\n4 3\n2 5\n1 3\n3 9\n3 3\n").unwrap();
    }

    #[test]
    fn work_items_follow_filters() {
        let temp = TempDir::new().unwrap();
        let all = executor(&temp, &[]).collect_work_items();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].parts, 1..=1);

        let part2 = executor(&temp, &["-p", "2"]).collect_work_items();
        assert_eq!(part2.len(), 1);
        assert_eq!((part2[0].day, part2[0].parts.clone()), (1, 2..=2));
    }

    #[test]
    fn missing_input_yields_error_results() {
        let temp = TempDir::new().unwrap();
        write_day1(&temp);
        let results = run(&executor(&temp, &[]));

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].answer.as_deref().unwrap(), "11");
        assert_eq!(results[1].answer.as_deref().unwrap(), "31");
        let missing = results[2].answer.as_ref().unwrap_err();
        assert!(matches!(missing.inner(), ExecutorError::Input { day: 25, .. }));
    }

    /// Answers with the width of the rayon pool it runs on
    struct PoolWidth;

    impl advent_solver::AocParser for PoolWidth {
        type SharedData<'a> = ();

        fn parse<'a>(_input: &'a str) -> Result<Self::SharedData<'a>, advent_solver::ParseError> {
            Ok(())
        }
    }

    impl advent_solver::Solver for PoolWidth {
        const PARTS: u8 = 1;

        fn solve_part(
            _shared: &mut Self::SharedData<'_>,
            _part: u8,
        ) -> Result<String, advent_solver::SolveError> {
            Ok(rayon::current_num_threads().to_string())
        }
    }

    #[test]
    fn every_mode_runs_inside_the_pool() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("2024");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("day02.txt"), "").unwrap();
        let input_dir = temp.path().to_string_lossy().into_owned();

        for mode in ["sequential", "year", "day", "part"] {
            let argv = [
                "advent",
                "--input-dir",
                input_dir.as_str(),
                "--threads",
                "3",
                "--parallelize-by",
                mode,
            ];
            let config = Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap();
            let registry = SolverRegistryBuilder::new()
                .register_solver::<PoolWidth>(2024, 2)
                .unwrap()
                .build();
            let results = run(&Executor::new(registry, &config).unwrap());
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].answer.as_deref().unwrap(), "3", "mode {mode}");
        }
    }

    #[test]
    fn every_mode_gives_the_same_answers() {
        let temp = TempDir::new().unwrap();
        write_day1(&temp);
        for mode in ["sequential", "year", "day", "part"] {
            let results = run(&executor(&temp, &["-d", "1", "--parallelize-by", mode]));
            let answers: Vec<_> = results
                .iter()
                .map(|r| r.answer.as_deref().unwrap().to_string())
                .collect();
            assert_eq!(answers, vec!["11", "31"], "mode {mode}");
            assert!(results.iter().any(|r| r.parse_duration.is_some()));
        }
    }

    #[test]
    fn parse_failure_reported_per_part() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("2024");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("day01.txt"), "3 x\n").unwrap();

        let results = run(&executor(&temp, &["-d", "1"]));
        assert_eq!(results.len(), 2);
        for result in &results {
            let err = result.answer.as_ref().unwrap_err();
            assert!(matches!(err.inner(), ExecutorError::Solver(_)));
        }
    }
}
