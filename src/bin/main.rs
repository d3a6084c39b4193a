use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, error};

use tableau_simplex::Error;
use tableau_simplex::algorithm::options::{Mode, SolverOptions};
use tableau_simplex::algorithm::two_phase::explicit_basis::ExplicitBasis;
use tableau_simplex::algorithm::two_phase::session::Session;
use tableau_simplex::data::linear_program::canonical_form::CanonicalForm;
use tableau_simplex::data::number_types::float::Real;
use tableau_simplex::data::number_types::rational::Fraction;
use tableau_simplex::data::number_types::traits::NumberField;

/// Solve a small linear program in canonical form with the tableau simplex method.
///
/// Minimizes `c^T x + c_0` subject to `Ax = b` and `x >= 0`, printing every tableau.
#[derive(Parser)]
#[command(name = "tableau-simplex", version)]
struct Cli {
    /// A constraint row: the coefficients followed by the right-hand side, separated by spaces
    /// or commas. Repeat once per row.
    #[arg(short, long = "constraint", required = true, allow_hyphen_values = true)]
    constraints: Vec<String>,
    /// The cost coefficients followed by the constant term.
    #[arg(short, long, allow_hyphen_values = true)]
    objective: String,
    /// Compute with exact fractions instead of floating point numbers.
    #[arg(long)]
    fractions: bool,
    /// Start from these basic variables, counting from 1, instead of the artificial phase.
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u64).range(1..))]
    basis: Option<Vec<u64>>,
    /// Start from this basic feasible solution instead of the artificial phase.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "basis")]
    basis_values: Option<Vec<String>>,
    /// Choose every pivot from the candidates.
    #[arg(short, long)]
    interactive: bool,
    /// Give up after this many pivots.
    #[arg(long, default_value_t = SolverOptions::default().max_iterations)]
    max_iterations: usize,
    /// Largest number of constraints and of variables accepted.
    #[arg(long, default_value_t = SolverOptions::default().max_dimension)]
    max_dimension: usize,
    /// Log more, repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = if cli.fractions {
        run::<Fraction>(&cli)
    } else {
        run::<Real>(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        },
    }
}

fn run<F: NumberField>(cli: &Cli) -> Result<(), Error> {
    let constraints = cli.constraints.iter()
        .map(|row| parse_numbers(row))
        .collect::<Result<Vec<_>, _>>()?;
    let problem = CanonicalForm::new(constraints, parse_numbers(&cli.objective)?)?;

    let mode = if cli.interactive { Mode::Interactive } else { Mode::Automatic };
    let options = SolverOptions::new()
        .with_mode(mode)
        .with_max_iterations(cli.max_iterations)
        .with_max_dimension(cli.max_dimension);

    let basis = if let Some(indices) = &cli.basis {
        Some(ExplicitBasis::Indices(indices.iter().map(|&j| j as usize - 1).collect()))
    } else if let Some(values) = &cli.basis_values {
        let values = values.iter()
            .map(|value| value.trim().parse())
            .collect::<Result<Vec<F>, _>>()?;
        Some(ExplicitBasis::Values(values))
    } else {
        None
    };
    let mut session = match &basis {
        Some(basis) => Session::with_explicit_basis(problem, basis, options)?,
        None => Session::with_artificial_basis(problem, options)?,
    };

    if cli.interactive {
        interact(&mut session)
    } else {
        let result = session.solve()?;
        for step in session.history().iter() {
            println!("{step}");
        }
        print!("{result}");
        Ok(())
    }
}

fn interact<F: NumberField>(session: &mut Session<F>) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", session.current());
        if let Some(result) = session.outcome() {
            print!("{result}");
            return Ok(());
        }

        let candidates = session.candidates();
        for (k, cell) in candidates.iter().enumerate() {
            println!("[{}] pivot on {cell}", k + 1);
        }
        print!("pivot number, b to step back, q to quit: ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        match line.trim() {
            "q" => return Ok(()),
            "b" => {
                if !session.step_back() {
                    println!("already at the first step");
                }
            },
            selection => match selection.parse::<usize>() {
                Ok(k) if (1..=candidates.len()).contains(&k) => {
                    session.pivot(candidates[k - 1])?;
                },
                _ => println!("expected a number from 1 to {}", candidates.len()),
            },
        }
    }
}

fn parse_numbers<F: NumberField>(text: &str) -> Result<Vec<F>, Error> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().map_err(Error::from))
        .collect()
}
