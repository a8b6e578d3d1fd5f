//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{answer}"),
            (Err(e), true) => eprintln!("Error: {e}"),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(_), false) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        println!();
        print!("{}", format_summary(results, self.start_time.elapsed()));
    }
}

fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{prefix}: {answer} ({parse_timing}solve: {})",
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{prefix}: Error - {e}"),
    }
}

fn format_summary(results: &[SolverResult], elapsed: Duration) -> String {
    let total = results.len();
    let successes = results.iter().filter(|r| r.answer.is_ok()).count();
    let failures = total - successes;

    let total_parse_time: TimeDelta = results
        .iter()
        .filter(|r| r.answer.is_ok())
        .filter_map(|r| r.parse_duration)
        .sum();
    let total_solve_time: TimeDelta = results
        .iter()
        .filter(|r| r.answer.is_ok())
        .map(|r| r.solve_duration)
        .sum();
    let total_compute_time = total_parse_time + total_solve_time;

    let mut summary = format!(
        "--- Summary ---\n\
         Solvers: {successes} solved, {failures} failed\n\
         Total parse time: {}\n\
         Total solve time: {}\n\
         Elapsed wall-clock time: {}\n",
        format_duration(total_parse_time),
        format_duration(total_solve_time),
        format_std_duration(elapsed),
    );
    if !elapsed.is_zero() {
        let total_compute_secs =
            total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
        let speedup = total_compute_secs / elapsed.as_secs_f64();
        summary.push_str(&format!("Speedup factor: {speedup:.2}x\n"));
    }
    summary
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: Duration) -> String {
    TimeDelta::from_std(d).map_or_else(|_| "N/A".to_string(), format_duration)
}
