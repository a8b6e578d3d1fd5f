use advent_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, SolverPlugin,
    SolverRegistryBuilder, inventory,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 7, tags = ["macro-test", "tagged"])]
struct Tagged;

impl AocParser for Tagged {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|w| w.parse().map_err(|_| ParseError::InvalidFormat(w.into())))
            .collect()
    }
}

impl PartSolver<1> for Tagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u32>().to_string())
    }
}

impl PartSolver<2> for Tagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2019, day = 8)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("done".into())
    }
}

fn find(year: u16, day: u8) -> Option<&'static SolverPlugin> {
    inventory::iter::<SolverPlugin>().find(|p| p.year == year && p.day == day)
}

#[test]
fn submits_plugin_with_tags() {
    let plugin = find(2019, 7).expect("plugin submitted");
    assert_eq!(plugin.tags, &["macro-test", "tagged"]);
    assert_eq!(plugin.solver.parts(), 2);
}

#[test]
fn tags_default_to_empty() {
    let plugin = find(2019, 8).expect("plugin submitted");
    assert!(plugin.tags.is_empty());
    assert_eq!(plugin.solver.parts(), 1);
}

#[test]
fn registered_plugin_solves() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.year == 2019)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2019, 7, "4 5 6").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "15");
    assert_eq!(solver.solve(2).unwrap().answer, "3");

    let mut solver = registry.create_solver(2019, 8, "").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "done");
}
