//! Reorders results arriving from worker threads into `(year, day, part)` order
//!
//! The full set of keys is known before any solver runs, so the aggregator
//! walks that sorted list and releases a result as soon as every key before
//! it has been released.

use crate::executor::SolverResult;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02} part {}", self.year, self.day, self.part)
    }
}

pub struct ResultAggregator {
    /// Keys not yet released, ascending
    expected: VecDeque<ResultKey>,
    /// Results that arrived ahead of their turn
    early: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        let mut expected: Vec<_> = expected_keys.into_iter().collect();
        expected.sort_unstable();
        expected.dedup();
        Self {
            expected: expected.into(),
            early: BTreeMap::new(),
        }
    }

    /// Accept `result` and return every result that is now next in line
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.early.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.front() {
            let Some(result) = self.early.remove(next) else {
                break;
            };
            self.expected.pop_front();
            ready.push(result);
        }
        ready
    }

    /// Everything still held back, in order, regardless of gaps
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let early = std::mem::take(&mut self.early);
        self.expected.retain(|key| !early.contains_key(key));
        early.into_values().collect()
    }

    /// Keys that were expected but never arrived
    pub fn missing(&self) -> impl Iterator<Item = &ResultKey> {
        self.expected.iter()
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn make_result(k: ResultKey) -> SolverResult {
        SolverResult {
            year: k.year,
            day: k.day,
            part: k.part,
            answer: Ok(k.to_string()),
            parse_duration: Some(TimeDelta::milliseconds(5)),
            solve_duration: TimeDelta::milliseconds(10),
        }
    }

    fn keys_of(results: &[SolverResult]) -> Vec<ResultKey> {
        results.iter().map(ResultKey::from).collect()
    }

    #[test]
    fn releases_in_order_as_results_arrive() {
        let mut agg = ResultAggregator::new([key(2023, 1, 2), key(2023, 1, 1)]);

        assert_eq!(keys_of(&agg.add(make_result(key(2023, 1, 1)))), vec![key(2023, 1, 1)]);
        assert!(!agg.is_complete());
        assert_eq!(keys_of(&agg.add(make_result(key(2023, 1, 2)))), vec![key(2023, 1, 2)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn holds_results_until_the_gap_fills() {
        let mut agg =
            ResultAggregator::new([key(2023, 9, 1), key(2023, 9, 2), key(2024, 1, 1)]);

        assert!(agg.add(make_result(key(2023, 9, 2))).is_empty());
        assert!(agg.add(make_result(key(2024, 1, 1))).is_empty());

        let ready = agg.add(make_result(key(2023, 9, 1)));
        assert_eq!(
            keys_of(&ready),
            vec![key(2023, 9, 1), key(2023, 9, 2), key(2024, 1, 1)]
        );
        assert!(agg.is_complete());
    }

    #[test]
    fn drain_releases_past_a_missing_key() {
        let mut agg = ResultAggregator::new([key(2024, 5, 1), key(2024, 5, 2), key(2024, 6, 1)]);
        agg.add(make_result(key(2024, 6, 1)));
        agg.add(make_result(key(2024, 5, 2)));

        assert_eq!(keys_of(&agg.drain()), vec![key(2024, 5, 2), key(2024, 6, 1)]);
        assert_eq!(agg.missing().copied().collect::<Vec<_>>(), vec![key(2024, 5, 1)]);
        assert!(!agg.is_complete());
    }

    #[test]
    fn key_display() {
        assert_eq!(key(2024, 3, 2).to_string(), "2024/03 part 2");
    }

    proptest! {
        #[test]
        fn any_arrival_order_is_emitted_sorted(
            keys in prop::collection::btree_set((2015u16..2035, 1u8..=25, 1u8..=2), 1..40)
                .prop_map(|set| set.into_iter().map(|(y, d, p)| key(y, d, p)).collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let mut agg = ResultAggregator::new(keys.iter().copied());
            let mut emitted = Vec::new();
            for k in &keys {
                emitted.extend(keys_of(&agg.add(make_result(*k))));
            }
            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(emitted, sorted);
            prop_assert!(agg.is_complete());
            prop_assert!(agg.drain().is_empty());
        }
    }
}
