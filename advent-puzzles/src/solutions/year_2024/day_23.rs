use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::Context;
use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::utils::{Set, to_parse_error};

/// LAN Party
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 23, tags = ["2024", "graph"])]
pub struct LanParty;

/// Undirected computer network, keyed by computer name
#[derive(Debug, Default)]
pub struct Network<'a> {
    peers: FxHashMap<&'a str, Set<&'a str>>,
}

impl<'a> Network<'a> {
    fn connect(&mut self, a: &'a str, b: &'a str) {
        self.peers.entry(a).or_default().put(b);
        self.peers.entry(b).or_default().put(a);
    }

    fn connected(&self, a: &str, b: &str) -> bool {
        self.peers.get(a).is_some_and(|p| p.has(&b))
    }

    /// Every fully connected trio, each listed once in name order
    fn triangles(&self) -> Vec<[&'a str; 3]> {
        let mut found = Vec::new();
        for (&a, peers) in &self.peers {
            for (&b, &c) in peers.iter().tuple_combinations() {
                if a < b && b < c && self.connected(b, c) {
                    found.push([a, b, c]);
                } else if a < c && c < b && self.connected(b, c) {
                    found.push([a, c, b]);
                }
            }
        }
        found
    }

    /// Bron-Kerbosch with pivoting, keeping the largest clique seen
    fn grow(
        &self,
        clique: &mut Vec<&'a str>,
        mut candidates: Set<&'a str>,
        mut excluded: Set<&'a str>,
        best: &mut Vec<&'a str>,
    ) {
        if candidates.is_empty() && excluded.is_empty() {
            if clique.len() > best.len() {
                log::debug!("new largest clique of {}", clique.len());
                *best = clique.clone();
            }
            return;
        }
        let empty = Set::new();
        let pivot_peers = candidates
            .iter()
            .chain(excluded.iter())
            .max_by_key(|v| self.peers.get(**v).map_or(0, Set::len))
            .and_then(|v| self.peers.get(*v))
            .unwrap_or(&empty);
        let choices: Vec<&'a str> = candidates
            .iter()
            .filter(|v| !pivot_peers.has(*v))
            .copied()
            .collect();

        for v in choices {
            let peers = self.peers.get(v).unwrap_or(&empty);
            clique.push(v);
            self.grow(
                clique,
                candidates.intersection(peers).copied().collect(),
                excluded.intersection(peers).copied().collect(),
                best,
            );
            clique.pop();
            candidates.remove(&v);
            excluded.put(v);
        }
    }

    fn largest_clique(&self) -> Vec<&'a str> {
        let mut best = Vec::new();
        let everyone = self.peers.keys().copied().collect();
        self.grow(&mut Vec::new(), everyone, Set::new(), &mut best);
        best
    }
}

impl AocParser for LanParty {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut network = Network::default();
        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (a, b) = line
                .split_once('-')
                .with_context(|| format!("line {}: {line:?} is not a link `a-b`", idx + 1))
                .map_err(to_parse_error)?;
            network.connect(a, b);
        }
        Ok(network)
    }
}

impl PartSolver<1> for LanParty {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let with_t = shared
            .triangles()
            .iter()
            .filter(|trio| trio.iter().any(|name| name.starts_with('t')))
            .count();
        Ok(with_t.to_string())
    }
}

impl PartSolver<2> for LanParty {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut clique = shared.largest_clique();
        clique.sort_unstable();
        Ok(clique.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::solve;

    const SAMPLE: &str = "kh-tc
qp-kh
de-cg
ka-co
yn-aq
qp-ub
cg-tb
vc-aq
tb-ka
wh-tc
yn-cg
kh-ub
ta-co
de-co
tc-td
tb-wq
wh-td
ta-ka
td-qp
aq-cg
wq-ub
ub-vc
de-ta
wq-aq
wq-vc
wh-yn
ka-de
kh-ta
co-tc
wh-qp
tb-vc
td-yn
";

    #[test]
    fn part1_sample() {
        assert_eq!(solve::<LanParty>(SAMPLE, 1), "7");
    }

    #[test]
    fn part2_sample() {
        assert_eq!(solve::<LanParty>(SAMPLE, 2), "co,de,ka,ta");
    }

    #[test]
    fn counts_every_triangle_once() {
        let network = LanParty::parse(SAMPLE).unwrap();
        assert_eq!(network.triangles().len(), 12);
    }

    #[test]
    fn rejects_malformed_link() {
        assert!(LanParty::parse("ab-cd\nefgh\n").is_err());
    }
}
