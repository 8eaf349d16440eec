use approx::assert_abs_diff_eq;

use simplex_tableau::algorithm::{Classification, Solve};
use simplex_tableau::algorithm::two_phase::Simplex;
use simplex_tableau::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use simplex_tableau::config::SolverConfig;
use simplex_tableau::data::linear_program::definition::LinearProgram;
use simplex_tableau::data::linear_program::solution::Solution;
use simplex_tableau::error::SolveError;
use simplex_tableau::io::error::ImportError;
use simplex_tableau::io::import;

use super::get_test_file_path;

fn read(name: &str) -> LinearProgram {
    import(&get_test_file_path(name)).unwrap()
}

fn solve(name: &str) -> Solution {
    read(name).solve().unwrap()
}

fn assert_optimum(solution: &Solution, expected_values: &[f64], expected_value: f64) {
    let values = solution.solution_vector().unwrap();
    assert_eq!(values.len(), expected_values.len());
    for (value, expected) in values.iter().zip(expected_values) {
        assert_abs_diff_eq!(value, expected, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(solution.objective_value().unwrap(), expected_value, epsilon = 1e-9);
}

#[test]
fn wyndor() {
    let solution = solve("wyndor");
    assert_eq!(solution.classification(), Classification::Unique);
    assert_optimum(&solution, &[2f64, 6f64], 36f64);
    assert!(solution.to_string().ends_with("Single solution found for result value."));
}

#[test]
fn diet() {
    let solution = solve("diet");
    assert_eq!(solution.classification(), Classification::Unique);
    assert_optimum(&solution, &[3f64, 1f64], 9f64);
}

#[test]
fn cover() {
    let solution = solve("cover");
    assert_eq!(solution.classification(), Classification::Multiple);
    assert_optimum(&solution, &[10f64, 0f64], 10f64);
    assert!(solution.to_string().ends_with("Infinite solutions found for result value."));
}

#[test]
fn contradictory() {
    let solution = solve("contradictory");
    assert_eq!(solution.classification(), Classification::Infeasible);
    assert_eq!(solution.nr_iterations(), 0);
    assert_eq!(solution.to_string(), "Can't solve. No possible solution.");
}

#[test]
fn unbounded() {
    let solution = solve("unbounded");
    assert_eq!(solution.classification(), Classification::Unbounded);
    assert_eq!(
        solution.solution_vector(),
        Err(SolveError::NotSolved { classification: Classification::Unbounded }),
    );
}

#[test]
fn redundant() {
    let solution = solve("redundant");
    assert_eq!(solution.classification(), Classification::Unique);
    assert_optimum(&solution, &[2f64, 0f64], 2f64);
}

#[test]
fn transportation() {
    let program = read("transportation");
    let solution = program.solve().unwrap();
    assert_eq!(solution.classification(), Classification::Unique);
    assert_optimum(&solution, &[0f64, 20f64, 15f64, 45f64, 0f64, 5f64], 740f64);
    assert!(program.is_feasible(solution.solution_vector().unwrap(), 1e-9));

    let other_rule = Simplex::<FirstProfitable>::new(&program, &SolverConfig::default()).unwrap()
        .run().unwrap();
    assert_abs_diff_eq!(other_rule.objective_value().unwrap(), 740f64, epsilon = 1e-9);
}

#[test]
fn bad_relation() {
    match import(&get_test_file_path("bad_relation")) {
        Err(ImportError::Parse(error)) => {
            let location = error.location().unwrap();
            assert_eq!((location.token, location.line), (8, 5));
            assert_eq!(location.text, "2");
        },
        other => panic!("Expected a parse error, got {:?}", other),
    }
}

#[test]
fn missing_file() {
    assert!(matches!(import(&get_test_file_path("missing")), Err(ImportError::IO(_))));
}
