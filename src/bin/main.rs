use std::path::PathBuf;
use std::process::exit;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use simplex_tableau::algorithm::two_phase::Simplex;
use simplex_tableau::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, SteepestDescentAlongVariable};
use simplex_tableau::config::{DisplayConfig, SolverConfig};
use simplex_tableau::data::linear_program::definition::LinearProgram;
use simplex_tableau::data::linear_program::solution::Solution;
use simplex_tableau::error::SolveError;
use simplex_tableau::io::import;

/// Rule to select the entering column with once the basis is feasible.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum Rule {
    /// Most profitable relative cost
    Steepest,
    /// First profitable relative cost
    First,
}

/// A dense tableau linear program solver.
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// File containing the problem description
    #[arg(value_name = "FILE")]
    problem_file: PathBuf,

    /// Computed values within this distance of an integer are snapped to it
    #[arg(long, default_value_t = SolverConfig::DEFAULT_EPSILON)]
    epsilon: f64,

    /// Maximum number of pivots [default: 10000]
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Don't limit the number of pivots, degenerate problems may not terminate
    #[arg(long, conflicts_with = "max_iterations")]
    no_iteration_limit: bool,

    /// Entering column rule
    #[arg(long, value_enum, default_value = "steepest")]
    pivot_rule: Rule,

    /// Print the tableau after every pivot
    #[arg(long)]
    trace: bool,

    /// Width of the cells of printed tableaus
    #[arg(long, default_value_t = 10)]
    cell_width: usize,

    /// Digits after the decimal point in printed tableaus
    #[arg(long, default_value_t = 2)]
    precision: usize,

    /// Log more, may be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let program = match import(&opts.problem_file) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("Couldn't read problem file \"{}\": {}", opts.problem_file.to_string_lossy(), error);
            exit(1);
        },
    };
    println!("{}", program);

    let config = SolverConfig {
        epsilon: opts.epsilon,
        max_iterations: if opts.no_iteration_limit {
            None
        } else {
            Some(opts.max_iterations.unwrap_or(SolverConfig::DEFAULT_MAX_ITERATIONS))
        },
    };
    let trace = opts.trace.then_some(DisplayConfig {
        cell_width: opts.cell_width,
        precision: opts.precision,
    });

    let result = match opts.pivot_rule {
        Rule::Steepest => solve::<SteepestDescentAlongVariable>(&program, &config, trace),
        Rule::First => solve::<FirstProfitable>(&program, &config, trace),
    };
    match result {
        Ok(solution) => println!("{}", solution),
        Err(error) => {
            eprintln!("Couldn't solve the problem: {}", error);
            exit(1);
        },
    }
}

/// Solve step by step, printing the tableau after each pivot if a layout is given.
fn solve<PR: PivotRule>(
    program: &LinearProgram,
    config: &SolverConfig,
    trace: Option<DisplayConfig>,
) -> Result<Solution, SolveError> {
    let mut simplex = Simplex::<PR>::new(program, config)?;
    if let Some(layout) = &trace {
        println!("Initial tableau:\n{}", simplex.tableau().display(layout));
    }

    while let Some(pivot) = simplex.step()? {
        if let Some(layout) = &trace {
            println!(
                "Iteration {} ({:?}): pivot on row {}, column {}, element {}\n{}",
                simplex.nr_iterations(), pivot.mode, pivot.row, pivot.column, pivot.element,
                simplex.tableau().display(layout),
            );
        }
    }

    simplex.into_solution()
}
