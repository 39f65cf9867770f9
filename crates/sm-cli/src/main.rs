//! Command-line front end: reads two square matrices from a token file,
//! multiplies them with the Strassen engine, and prints the diagonal of
//! the product.

mod error;
mod input;
mod output;

use std::env;
use std::io;
use std::path::Path;
use std::process;

use sm_strassen::{MatmulEngine, StrassenEngine};

use crate::error::{CliError, Result};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 3 {
        println!("Usage: sm-cli <flag> <dimension> <inputfile>");
        return;
    }
    // args[0] is a mode flag; it is accepted but plays no part in the
    // computation.
    if let Err(e) = run(&args[1], &args[2]) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(dimension: &str, inputfile: &str) -> Result<()> {
    let n: usize = dimension
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| CliError::BadDimension(dimension.to_string()))?;

    let (a, b) = input::read_matrices(Path::new(inputfile), n)?;
    let result = StrassenEngine::new().multiply(&a, &b)?;

    let stdout = io::stdout();
    output::write_diagonal(&mut stdout.lock(), &result)?;
    Ok(())
}
