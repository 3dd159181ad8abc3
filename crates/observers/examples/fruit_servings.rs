//! Step-by-step graphical method for the fruit-servings problem.
//!
//! A family wants exactly five fruit servings a day, split between bananas
//! (`x1`, 5 rupees and 8.8 mg vitamin C per serving) and apples (`x2`, 10
//! rupees and 5.2 mg per serving), with between 20 and 60 mg of vitamin C.
//! Which split costs the least?
//!
//! # Usage
//!
//! ```text
//! cargo run --example fruit_servings            # all six steps
//! cargo run --example fruit_servings -- 4       # step 5 only (0-based index)
//! RUST_LOG=debug cargo run --example fruit_servings
//! ```
//!
//! The step index is owned here; the solver knows nothing about steps.

use std::error::Error;

use segment_lp_core::{Bound, EqualityConstraint, Goal, LinearExpr, Relation};
use segment_lp_observers::TracingObserver;
use segment_lp_solvers::segment::{
    self, Config, Evaluation, Solution, feasible_segment, optimize, sample,
};
use tracing_subscriber::EnvFilter;

const STEPS: [&str; 6] = [
    "Plot the Equality Constraint",
    "Check Minimum Vitamin C",
    "Check Maximum Vitamin C",
    "Identify Feasible Region",
    "Evaluate Corner Points",
    "Optimal Solution",
];

struct Problem {
    equality: EqualityConstraint,
    bounds: [Bound; 2],
    cost: LinearExpr,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let step = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(step) if step < STEPS.len() => Some(step),
            _ => {
                eprintln!("Invalid step: {arg}");
                eprintln!("Usage: fruit_servings [0-5]");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let vitamin_c = LinearExpr::new(8.8, 5.2);
    let problem = Problem {
        equality: EqualityConstraint::sum(5.0),
        bounds: [
            Bound::at_least(vitamin_c, 20.0),
            Bound::at_most(vitamin_c, 60.0),
        ],
        cost: LinearExpr::new(5.0, 10.0),
    };

    let solution = optimize(
        &problem.equality,
        &problem.bounds,
        &problem.cost,
        Goal::Minimize,
        &Config::default(),
        TracingObserver::new("fruit-servings"),
    )?;

    match step {
        Some(step) => show_step(step, &problem, &solution)?,
        None => {
            for step in 0..STEPS.len() {
                show_step(step, &problem, &solution)?;
            }
        }
    }

    Ok(())
}

fn show_step(step: usize, problem: &Problem, solution: &Solution) -> Result<(), Box<dyn Error>> {
    println!("\nStep {}: {}", step + 1, STEPS[step]);
    println!("{}", "-".repeat(40));

    match step {
        0 => {
            println!("x1 + x2 = 5 means x2 = 5 - x1: a line, not an area.");
            print_samples(problem, &sample::Config::new(1.0, 5.0)?);
            for eval in &solution.evaluations {
                println!("Endpoint {}", eval.corner);
            }
        }
        1 | 2 => {
            let index = step - 1;
            let bound = &problem.bounds[index];
            let symbol = match bound.relation {
                Relation::AtLeast => ">=",
                Relation::AtMost => "<=",
            };
            println!("Constraint: 8.8x1 + 5.2x2 {symbol} {}", bound.threshold);
            for eval in &solution.evaluations {
                let check = &eval.bounds[index];
                println!(
                    "  {}: vitamin C = {:.1} mg {symbol} {} {}",
                    eval.corner,
                    check.value,
                    bound.threshold,
                    mark(check.satisfied),
                );
            }
        }
        3 => match feasible_segment(&problem.equality, &problem.bounds, &Config::default())? {
            Some(segment) if segment.is_whole() => println!(
                "The whole segment from ({}, {}) to ({}, {}) is feasible.",
                segment.start.x1, segment.start.x2, segment.end.x1, segment.end.x2
            ),
            Some(segment) => println!(
                "Only ({:.2}, {:.2}) to ({:.2}, {:.2}) is feasible.",
                segment.start.x1, segment.start.x2, segment.end.x1, segment.end.x2
            ),
            None => println!("No point on the segment satisfies every bound."),
        },
        4 => {
            for eval in &solution.evaluations {
                print_corner(eval);
            }
        }
        5 => match &solution.optimal {
            Some(optimal) => {
                println!(
                    "{} gives the minimum cost: {} banana and {} apple servings for Rs.{}.",
                    optimal.corner,
                    optimal.corner.x1(),
                    optimal.corner.x2(),
                    optimal.objective
                );
            }
            None => println!("{}", segment::Error::Infeasible),
        },
        _ => unreachable!("step index is validated in main"),
    }

    Ok(())
}

fn print_samples(problem: &Problem, config: &sample::Config) {
    println!("{:>6} {:>10} {:>10} {:>10}", "x1", "equality", "min vit C", "max vit C");
    let cell = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
    for row in &segment::sample_curve(&problem.equality, &problem.bounds, config) {
        println!(
            "{:>6.1} {:>10} {:>10} {:>10}",
            row.x1,
            cell(row.equality_x2),
            cell(row.bound_x2[0]),
            cell(row.bound_x2[1]),
        );
    }
}

fn print_corner(eval: &Evaluation) {
    println!(
        "  {}: cost = Rs.{}, vitamin C = {:.1} mg {}",
        eval.corner,
        eval.objective,
        eval.bounds[0].value,
        mark(eval.is_feasible()),
    );
}

fn mark(ok: bool) -> &'static str {
    if ok { "ok" } else { "violated" }
}
