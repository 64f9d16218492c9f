// order courses by their prerequisites
// - collect the pairs: arguments, file or stdin
// - check ids, toposort, print

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::exit;

use course_schedule::error::Error;
use course_schedule::input::{parse_pair, parse_prerequisites, validate};
use course_schedule::schedule;
use course_schedule::utils::init_tracing;

use tracing::{debug, info};

/// Print an order in which all courses can be taken, prerequisites first.
/// Exits with 1 if the prerequisites form a cycle.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// courses are numbered 0..NUM_COURSES
    num_courses: usize,

    /// `dependent,prerequisite`, may be repeated
    #[arg(long, short = 'p', value_parser = parse_pair)]
    pair: Vec<[usize; 2]>,

    /// read pairs from a file (`-` for stdin): JSON `[[1,0],...]` or one pair per line
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// only print whether all courses can be finished
    #[arg(long)]
    check: bool,

    /// print the order as a JSON array
    #[arg(long, conflicts_with = "check")]
    json: bool,
}

fn read_prerequisites(path: &Path) -> Result<Vec<[usize; 2]>, Error> {
    let text = if path == Path::new("-") {
        io::read_to_string(io::stdin())?
    } else {
        debug!("reading {}", path.display());
        fs::read_to_string(path)?
    };
    parse_prerequisites(&text)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing(cli.verbosity.tracing_level_filter());

    let mut prerequisites = cli.pair;
    if let Some(path) = &cli.file {
        prerequisites.extend(read_prerequisites(path)?);
    }
    validate(cli.num_courses, &prerequisites)?;
    info!(
        "{} courses, {} prerequisites",
        cli.num_courses,
        prerequisites.len()
    );

    let schedule = schedule(cli.num_courses, &prerequisites);

    if cli.check {
        println!("{}", schedule.is_feasible());
    } else if cli.json {
        println!("{}", serde_json::to_string(schedule.order())?);
    } else {
        let order: Vec<String> = schedule.order().iter().map(|c| c.to_string()).collect();
        println!("{}", order.join(" "));
    }

    if !schedule.is_feasible() {
        info!("prerequisites contain a cycle");
        exit(1);
    }
    Ok(())
}
