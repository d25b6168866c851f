//! Reads a weight matrix as JSON and prints shortest and longest path reports.
//!
//! Input: `{"matrix": [[0, 1], [1, 0]], "source": 0, "vertex_costs": [0, 2]}`
//! from the file named by the first argument, or stdin when absent.
//! `source` defaults to 0 and `vertex_costs` is optional.

use log::info;
use matrix_paths::report::{solve_report, Problem};
use std::env;
use std::fs;
use std::io::{self, Read};

fn read_input() -> io::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let problem: Problem = serde_json::from_str(&read_input()?)?;
    info!("loaded {}-vertex problem from source {}", problem.matrix.len(), problem.source);

    print!("{}", solve_report(&problem)?);
    Ok(())
}
