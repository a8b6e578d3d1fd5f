//! Memo tables for recursive searches
//!
//! A [`DpCache`] lazily evaluates a [`DpProblem`]: asking for an index first
//! resolves the indices it depends on, then computes and stores its value.
//! Every index is computed at most once per cache.
//!
//! # Backends
//!
//! - [`VecBackend`]: dense `usize` indices (grid cells, string offsets)
//! - [`HashMapBackend`]: any hashable index (`(stone, blinks)`, `(from, to, depth)`)
//!
//! # Cycles
//!
//! There is no cycle detection. A dependency cycle recurses until the stack
//! overflows, so dependencies must form a DAG.
//!
//! # Example
//!
//! ```rust
//! use advent_puzzles::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! /// Ways to climb `n` steps taking 1 or 2 at a time
//! struct Stairs;
//!
//! impl DpProblem<usize, u64> for Stairs {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, _n: &usize, deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Stairs);
//! assert_eq!(cache.get(&10), 89);
//! ```
//!
//! The closure form is handy for one-off searches:
//!
//! ```rust
//! use advent_puzzles::utils::dp_cache::{DpCache, HashMapBackend};
//!
//! let collatz = DpCache::new(
//!     HashMapBackend::new(),
//!     |n: &u64| match n { 1 => vec![], n if n % 2 == 0 => vec![n / 2], n => vec![3 * n + 1] },
//!     |_n: &u64, deps: Vec<u32>| deps.first().map_or(0, |d| d + 1),
//! );
//! assert_eq!(collatz.get(&27), 111);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::{ClosureProblem, DpProblem};
