//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::{ClosureProblem, DpProblem};

/// A memo table with lazy evaluation and dependency resolution.
///
/// # Type Parameters
///
/// - `I`: Index type
/// - `K`: Value type, cloned out of the table on every [`get`](Self::get)
/// - `B`: Backend storage type
/// - `P`: Problem definition
///
/// Dependencies are resolved recursively, so the recursion depth equals the
/// longest dependency chain.
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value of `index`, computing it and its dependencies on first use.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index).cloned() {
            return value;
        }

        // No borrow is held while dependencies resolve
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect();

        let value = self.problem.compute(index, dep_values);
        self.backend
            .borrow_mut()
            .insert(index.clone(), value.clone());
        value
    }

    /// Number of values computed so far.
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}

impl<I, K, B, D, C> DpCache<I, K, B, ClosureProblem<I, K, D, C>>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    /// Cache over a closure-defined problem.
    pub fn new(backend: B, dep_fn: D, compute_fn: C) -> Self {
        Self::with_problem(backend, ClosureProblem::new(dep_fn, compute_fn))
    }
}
