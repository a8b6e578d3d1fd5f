use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::Context;
use rayon::prelude::*;

use crate::utils::{Coordinate, parse_lines, strings_to_ints, to_parse_error};

/// Restroom Redoubt
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 14, tags = ["2024", "simulation", "parallel"])]
pub struct RestroomRedoubt;

/// Size of the bathroom the robots patrol
const ROOM: Coordinate = Coordinate::new(101, 103);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    position: Coordinate,
    velocity: Coordinate,
}

impl Robot {
    /// Position after `seconds`, wrapping around the room edges
    fn after(&self, room: Coordinate, seconds: i32) -> Coordinate {
        let moved = self.position + self.velocity * seconds;
        Coordinate::new(moved.x.rem_euclid(room.x), moved.y.rem_euclid(room.y))
    }
}

/// Product of the robot counts per quadrant; robots on a middle line don't count
fn safety_factor(robots: &[Robot], room: Coordinate, seconds: i32) -> usize {
    let (mid_x, mid_y) = (room.x / 2, room.y / 2);
    let mut quadrants = [0usize; 4];
    for robot in robots {
        let p = robot.after(room, seconds);
        if p.x == mid_x || p.y == mid_y {
            continue;
        }
        let q = usize::from(p.x > mid_x) + 2 * usize::from(p.y > mid_y);
        quadrants[q] += 1;
    }
    quadrants.iter().product()
}

/// Second within one full period with the lowest safety factor
///
/// Positions repeat every `room.x * room.y` seconds, so the period is
/// searched exhaustively. Ties go to the earliest second.
fn least_safe_second(robots: &[Robot], room: Coordinate) -> (usize, i32) {
    (0..room.x * room.y)
        .into_par_iter()
        .map(|t| (safety_factor(robots, room, t), t))
        .min()
        .unwrap_or((0, 0))
}

fn parse_pair(text: &str, prefix: &str) -> anyhow::Result<Coordinate> {
    let values = text
        .strip_prefix(prefix)
        .with_context(|| format!("expected {prefix:?} in {text:?}"))?;
    let xy: Vec<i32> = strings_to_ints(values.split(','))?;
    match xy[..] {
        [x, y] => Ok(Coordinate::new(x, y)),
        _ => anyhow::bail!("expected two values in {values:?}"),
    }
}

impl AocParser for RestroomRedoubt {
    type SharedData<'a> = Vec<Robot>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let (p, v) = line.split_once(' ').context("no space")?;
            Ok(Robot {
                position: parse_pair(p, "p=")?,
                velocity: parse_pair(v, "v=")?,
            })
        })
        .map_err(to_parse_error)
    }
}

impl PartSolver<1> for RestroomRedoubt {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safety_factor(shared, ROOM, 100).to_string())
    }
}

impl PartSolver<2> for RestroomRedoubt {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (score, second) = least_safe_second(shared, ROOM);
        log::debug!("lowest safety factor {score} at {second}s");
        Ok(second.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3
";

    const SAMPLE_ROOM: Coordinate = Coordinate::new(11, 7);

    #[test]
    fn sample_safety_factor() {
        let robots = RestroomRedoubt::parse(SAMPLE).unwrap();
        assert_eq!(safety_factor(&robots, SAMPLE_ROOM, 100), 12);
    }

    #[test]
    fn robot_wraps_around() {
        let robot = Robot {
            position: Coordinate::new(2, 4),
            velocity: Coordinate::new(2, -3),
        };
        assert_eq!(robot.after(SAMPLE_ROOM, 1), Coordinate::new(4, 1));
        assert_eq!(robot.after(SAMPLE_ROOM, 2), Coordinate::new(6, 5));
        assert_eq!(robot.after(SAMPLE_ROOM, 5), Coordinate::new(1, 3));
    }

    #[test]
    fn least_safe_second_prefers_earliest_tie() {
        // A lone robot always scores 0, so second 0 wins
        let robots = [Robot {
            position: Coordinate::new(1, 1),
            velocity: Coordinate::new(1, 1),
        }];
        assert_eq!(least_safe_second(&robots, SAMPLE_ROOM), (0, 0));
    }

    #[test]
    fn least_safe_second_is_within_one_period() {
        let robots = RestroomRedoubt::parse(SAMPLE).unwrap();
        let (score, second) = least_safe_second(&robots, SAMPLE_ROOM);
        assert!((0..77).contains(&second));
        assert_eq!(score, safety_factor(&robots, SAMPLE_ROOM, second));
        assert!((0..77).all(|t| safety_factor(&robots, SAMPLE_ROOM, t) >= score));
    }

    #[test]
    fn rejects_malformed_robot() {
        assert!(RestroomRedoubt::parse("p=1,2 x=3,4\n").is_err());
    }
}
