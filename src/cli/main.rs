#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tpinit::{DegeneracyPolicy, Method, Solution, TransportProblem, Validator};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    NorthWest,
    Vogel,
    Russell,
    All,
}

impl MethodArg {
    fn methods(self) -> Vec<Method> {
        match self {
            MethodArg::NorthWest => vec![Method::NorthWestCorner],
            MethodArg::Vogel => vec![Method::Vogel],
            MethodArg::Russell => vec![Method::Russell],
            MethodArg::All => Method::ALL.to_vec(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DegeneracyArg {
    Ignore,
    Warn,
    Reject,
}

impl From<DegeneracyArg> for DegeneracyPolicy {
    fn from(arg: DegeneracyArg) -> Self {
        match arg {
            DegeneracyArg::Ignore => DegeneracyPolicy::Ignore,
            DegeneracyArg::Warn => DegeneracyPolicy::Warn,
            DegeneracyArg::Reject => DegeneracyPolicy::Reject,
        }
    }
}

/// Initial feasible solutions for balanced transportation problems
#[derive(Debug, Parser)]
#[command(name = "tpinit-cli", version)]
struct Cli {
    /// Supply of every source, comma separated
    #[arg(short, long, value_delimiter = ',', required = true)]
    supply: Vec<i64>,

    /// Demand of every destination, comma separated
    #[arg(short, long, value_delimiter = ',', required = true)]
    demand: Vec<i64>,

    /// CSV file with one row of unit costs per source (no header)
    #[arg(short, long)]
    costs: PathBuf,

    /// Heuristic to run
    #[arg(short, long, value_enum, default_value_t = MethodArg::All)]
    method: MethodArg,

    /// How to treat problems that look degenerate before allocation
    #[arg(long, value_enum, default_value_t = DegeneracyArg::Warn)]
    degeneracy: DegeneracyArg,

    /// Directory to write one `<method>.csv` allocation file per heuristic into
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// Function to read the cost matrix from a CSV file
fn read_costs_csv(filepath: &Path) -> Result<Vec<Vec<i64>>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(filepath)?;
    let rows: Result<Vec<Vec<i64>>, _> = rdr.deserialize().collect();
    Ok(rows?)
}

// Function to write an allocation matrix
fn write_csv(rows: &[Vec<i64>], filepath: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(filepath)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn file_name(method: Method) -> &'static str {
    match method {
        Method::NorthWestCorner => "north-west.csv",
        Method::Vogel => "vogel.csv",
        Method::Russell => "russell.csv",
    }
}

fn print_problem(problem: &TransportProblem<i64>) {
    println!("\nInput parameter table:");
    println!("------------------------------------------------------");
    print!("{:<16}|", "Supply \\ Demand");
    for j in 0..problem.destinations() {
        print!(" {:<8}|", format!("D{}", j + 1));
    }
    println!(" Supply");
    for (i, row) in problem.costs.iter().enumerate() {
        print!("{:<16}|", format!("S{}", i + 1));
        for cost in row {
            print!(" {cost:<8}|");
        }
        println!(" {}", problem.supply[i]);
    }
    print!("{:<16}|", "Demand");
    for demand in &problem.demand {
        print!(" {demand:<8}|");
    }
    println!();
    println!("------------------------------------------------------");
}

fn print_solution(solution: &Solution<i64>) {
    println!("\n{}:", solution.method);
    for row in solution.allocation.rows() {
        let cells: Vec<_> = row.iter().map(|q| format!("{q:>6}")).collect();
        println!("{}", cells.join(""));
    }
    println!("Total cost: {}", solution.cost);
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let costs = read_costs_csv(&cli.costs)?;
    let problem = TransportProblem::new(cli.supply.clone(), cli.demand.clone(), costs);
    let validator = Validator::default().with_degeneracy(cli.degeneracy.into());

    print_problem(&problem);

    let solutions = cli
        .method
        .methods()
        .into_iter()
        .map(|method| tpinit::solve(&problem, method, &validator))
        .collect::<Result<Vec<_>, _>>()?;
    tpinit::check(&problem, &solutions)?;

    for solution in &solutions {
        print_solution(solution);
    }

    if let Some(dir) = &cli.output {
        fs::create_dir_all(dir)?;
        for solution in &solutions {
            let path = dir.join(file_name(solution.method));
            write_csv(solution.allocation.rows(), &path)?;
            log::info!("wrote {} allocation to {}", solution.method, path.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialise logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
