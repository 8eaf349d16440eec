use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use crate::algorithm::{Classification, Solve};
use crate::algorithm::two_phase::{Mode, Pivot, Simplex};
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use crate::config::SolverConfig;
use crate::data::linear_program::definition::LinearProgram;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::error::{ConfigurationError, SolveError};
use crate::tests::{problem_1, problem_2};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn program(
    objective: Objective,
    cost: Vec<f64>,
    constraints: Vec<Vec<f64>>,
    b: Vec<f64>,
    constraint_types: Vec<ConstraintType>,
) -> LinearProgram {
    LinearProgram::new(objective, cost, constraints, b, constraint_types).unwrap()
}

#[test]
fn textbook_maximization() {
    init();
    let program = problem_1::linear_program();
    let mut simplex = Simplex::<SteepestDescentAlongVariable>::new(&program, &SolverConfig::default()).unwrap();

    assert_eq!(simplex.step(), Ok(Some(Pivot { mode: Mode::Optimize, row: 1, column: 1, element: 2f64 })));
    assert_eq!(simplex.step(), Ok(Some(Pivot { mode: Mode::Optimize, row: 2, column: 0, element: 3f64 })));
    assert_eq!(simplex.step(), Ok(None));
    assert_eq!(simplex.classification(), Classification::Unique);
    assert_eq!(simplex.tableau(), &problem_1::optimal_tableau_form(&program));

    let solution = simplex.into_solution().unwrap();
    assert_eq!(solution.solution_vector(), Ok(&[2f64, 6f64][..]));
    assert_eq!(solution.objective_value(), Ok(36f64));
    assert_eq!(solution.nr_iterations(), 2);
}

#[test]
fn first_profitable_reaches_the_same_optimum() {
    let program = problem_1::linear_program();
    let solution = Simplex::<FirstProfitable>::new(&program, &SolverConfig::default()).unwrap()
        .run().unwrap();

    assert_eq!(solution.classification(), Classification::Unique);
    assert_eq!(solution.nr_iterations(), 3);
    assert_eq!(solution.objective_value(), Ok(36f64));
    let values = solution.solution_vector().unwrap();
    assert_abs_diff_eq!(values[0], 2f64);
    assert_abs_diff_eq!(values[1], 6f64);
}

#[test]
fn no_single_variable_perturbation_improves() {
    let program = problem_1::linear_program();
    let solution = program.solve().unwrap();
    let optimum = solution.solution_vector().unwrap();
    let value = solution.objective_value().unwrap();

    for j in 0..program.nr_variables() {
        for delta in [-1e-3f64, 1e-3f64] {
            let mut perturbed = optimum.to_vec();
            perturbed[j] += delta;
            if program.is_feasible(&perturbed, 0f64) {
                assert!(program.objective_value(&perturbed) <= value);
            }
        }
    }
}

#[test]
fn greater_constraint_bounded_below() {
    let program = program(
        Objective::Minimize,
        vec![1f64, 1f64],
        vec![vec![1f64, 1f64]],
        vec![10f64],
        vec![ConstraintType::Greater],
    );
    let solution = program.solve().unwrap();

    // All points on x1 + x2 = 10 are optimal
    assert_eq!(solution.classification(), Classification::Multiple);
    assert_eq!(solution.objective_value(), Ok(10f64));
    assert_eq!(solution.solution_vector(), Ok(&[10f64, 0f64][..]));
    assert_eq!(solution.nr_iterations(), 1);
}

#[test]
fn mixed_relations() {
    let program = problem_2::linear_program();
    let solution = program.solve().unwrap();

    assert_eq!(solution.classification(), Classification::Unique);
    assert_eq!(solution.solution_vector(), Ok(&[3f64, 1f64][..]));
    assert_eq!(solution.objective_value(), Ok(9f64));
}

#[test]
fn contradictory_equalities() {
    let program = program(
        Objective::Maximize,
        vec![1f64, 1f64],
        vec![vec![1f64, 1f64], vec![1f64, 1f64]],
        vec![2f64, 5f64],
        vec![ConstraintType::Equal; 2],
    );
    let mut simplex = Simplex::<SteepestDescentAlongVariable>::new(&program, &SolverConfig::default()).unwrap();
    assert_eq!(simplex.classification(), Classification::Infeasible);
    assert_eq!(simplex.step(), Ok(None));

    let solution = simplex.into_solution().unwrap();
    assert_eq!(solution.classification(), Classification::Infeasible);
    assert_eq!(solution.nr_iterations(), 0);
    assert_eq!(
        solution.solution_vector(),
        Err(SolveError::NotSolved { classification: Classification::Infeasible }),
    );
}

#[test]
fn inconsistent_equalities_among_inequalities() {
    init();
    let program = program(
        Objective::Minimize,
        vec![1f64, 2f64],
        vec![vec![1f64, 0f64], vec![1f64, 1f64], vec![0f64, 1f64], vec![1f64, 2f64]],
        vec![4f64, 1f64, 1f64, 4f64],
        vec![ConstraintType::Less, ConstraintType::Equal, ConstraintType::Greater, ConstraintType::Equal],
    );
    // The equalities alone are consistent, but imply x2 = 3 and x1 = -2
    let solution = program.solve().unwrap();
    assert_eq!(solution.classification(), Classification::Infeasible);
    assert_eq!(solution.nr_iterations(), 3);
}

#[test]
fn infeasible_by_repair() {
    // x1 >= 1 and x1 <= 0
    let program = program(
        Objective::Maximize,
        vec![1f64],
        vec![vec![1f64], vec![1f64]],
        vec![1f64, 0f64],
        vec![ConstraintType::Greater, ConstraintType::Less],
    );
    let mut simplex = Simplex::<SteepestDescentAlongVariable>::new(&program, &SolverConfig::default()).unwrap();

    assert_eq!(simplex.step(), Ok(Some(Pivot { mode: Mode::Repair, row: 0, column: 0, element: -1f64 })));
    assert_eq!(simplex.tableau().b(), &[1f64, -1f64]);
    assert_eq!(simplex.step(), Ok(None));
    assert_eq!(simplex.classification(), Classification::Infeasible);
}

#[test]
fn unbounded() {
    let program = program(
        Objective::Maximize,
        vec![1f64, 0f64],
        vec![vec![1f64, -1f64]],
        vec![1f64],
        vec![ConstraintType::Less],
    );
    let solution = program.solve().unwrap();

    assert_eq!(solution.classification(), Classification::Unbounded);
    assert_eq!(solution.nr_iterations(), 1);
    assert_eq!(
        solution.objective_value(),
        Err(SolveError::NotSolved { classification: Classification::Unbounded }),
    );
}

#[test]
fn redundant_equalities() {
    let program = program(
        Objective::Minimize,
        vec![1f64, 2f64],
        vec![vec![1f64, 1f64], vec![2f64, 2f64]],
        vec![2f64, 4f64],
        vec![ConstraintType::Equal; 2],
    );
    let mut simplex = Simplex::<SteepestDescentAlongVariable>::new(&program, &SolverConfig::default()).unwrap();

    assert_eq!(simplex.step(), Ok(Some(Pivot { mode: Mode::Repair, row: 0, column: 0, element: 1f64 })));
    assert!(simplex.tableau().is_redundant_row(1));
    assert_eq!(simplex.step(), Ok(None));

    let solution = simplex.into_solution().unwrap();
    assert_eq!(solution.classification(), Classification::Unique);
    assert_eq!(solution.solution_vector(), Ok(&[2f64, 0f64][..]));
    assert_eq!(solution.objective_value(), Ok(2f64));
}

#[test]
fn idempotent() {
    for program in [problem_1::linear_program(), problem_2::linear_program()] {
        let before = program.clone();
        assert_eq!(program.solve(), program.solve());
        assert_eq!(program, before);
    }
}

#[test]
fn iteration_limit() {
    let program = problem_1::linear_program();
    let config = SolverConfig { max_iterations: Some(1), ..SolverConfig::default() };
    assert_eq!(program.solve_with(&config), Err(SolveError::NoConvergence { iterations: 1 }));

    let config = SolverConfig { max_iterations: Some(2), ..SolverConfig::default() };
    assert!(program.solve_with(&config).is_ok());
    let config = SolverConfig { max_iterations: None, ..SolverConfig::default() };
    assert!(program.solve_with(&config).is_ok());
}

#[test]
fn invalid_configuration() {
    let program = problem_1::linear_program();
    let config = SolverConfig { epsilon: 0f64, ..SolverConfig::default() };
    assert_eq!(
        program.solve_with(&config),
        Err(SolveError::Configuration(ConfigurationError::InvalidTolerance(0f64))),
    );
}

#[test]
fn not_solved_yet() {
    let program = problem_1::linear_program();
    let simplex = Simplex::<SteepestDescentAlongVariable>::new(&program, &SolverConfig::default()).unwrap();
    assert_eq!(simplex.classification(), Classification::Undetermined);
    assert_eq!(
        simplex.into_solution(),
        Err(SolveError::NotSolved { classification: Classification::Undetermined }),
    );
}

/// Maximization problems with positive coefficients on the `<=` rows; `x = 0` is feasible and
/// the feasible region is bounded.
fn bounded_program() -> impl Strategy<Value = LinearProgram> {
    (1..4usize, 1..4usize)
        .prop_flat_map(|(n, m)| (
            prop::collection::vec(-5..=5i32, n),
            prop::collection::vec(prop::collection::vec(1..=9i32, n), m),
            prop::collection::vec(0..=20i32, m),
        ))
        .prop_map(|(cost, rows, b)| {
            let nr_rows = rows.len();
            LinearProgram::new(
                Objective::Maximize,
                cost.into_iter().map(f64::from).collect(),
                rows.into_iter().map(|row| row.into_iter().map(f64::from).collect()).collect(),
                b.into_iter().map(f64::from).collect(),
                vec![ConstraintType::Less; nr_rows],
            ).unwrap()
        })
}

proptest! {
    #[test]
    fn bounded_problems_have_feasible_optimum(program in bounded_program()) {
        let solution = program.solve().unwrap();
        prop_assert!(solution.classification().is_optimal());

        let values = solution.solution_vector().unwrap();
        prop_assert!(program.is_feasible(values, 1e-6));
        let value = solution.objective_value().unwrap();
        prop_assert!((program.objective_value(values) - value).abs() < 1e-6);
        // The origin is feasible
        prop_assert!(value >= -1e-6);
    }

    #[test]
    fn solving_twice_gives_the_same_result(program in bounded_program()) {
        prop_assert_eq!(program.solve(), program.solve());
    }
}
