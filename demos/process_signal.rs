//! Runs one processing request from the command line and prints the result.
//!
//! Usage:
//!
//! ```text
//! cargo run --example process_signal -- <signal1> <signal2> <operation> [parameter]
//! cargo run --example process_signal -- Square Sine "Amplitude Scaling" 2
//! ```
//!
//! Set `RUST_LOG=debug` to see what the generator and engine are doing.

use anyhow::{Context, Result};
use log::info;
use sigsys::{OperationOutput, Request};

/// Rows printed from each end of the table.
const PREVIEW_ROWS: usize = 8;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let first = args.first().map(String::as_str).unwrap_or("Sine");
    let second = args.get(1).map(String::as_str).unwrap_or("Sine");
    let operation = args.get(2).map(String::as_str).unwrap_or("Amplitude Scaling");
    let parameter = args
        .get(3)
        .map(|p| p.parse::<f64>())
        .transpose()
        .context("parameter must be a number")?;

    let request = Request::from_names(first, second, operation, parameter)?;
    info!("{}", request);
    println!("{}", request);
    println!("Operation: {}  [{}]", request.operation, request.operation.kind().formula());
    println!();

    let processed = request.process()?;
    let grid = &processed.grid;

    match &processed.output {
        OperationOutput::Single(result) => {
            println!("{:>10} {:>12} {:>12}", "t", "original", "result");
            for i in preview_indices(grid.len()) {
                println!(
                    "{:>10.4} {:>12.6} {:>12.6}",
                    grid.instants()[i],
                    processed.original[i],
                    result[i]
                );
            }
        }
        OperationOutput::Combined {
            first,
            second,
            result,
        } => {
            println!(
                "{:>10} {:>12} {:>12} {:>12}",
                "t", "signal 1", "signal 2", "result"
            );
            for i in preview_indices(grid.len()) {
                println!(
                    "{:>10.4} {:>12.6} {:>12.6} {:>12.6}",
                    grid.instants()[i],
                    first[i],
                    second[i],
                    result[i]
                );
            }
        }
    }

    if let Some((lo, hi)) = processed.output.result().range() {
        println!();
        println!("Result range: [{:.6}, {:.6}] over {} samples", lo, hi, grid.len());
    }

    Ok(())
}

fn preview_indices(len: usize) -> Vec<usize> {
    if len <= 2 * PREVIEW_ROWS {
        (0..len).collect()
    } else {
        (0..PREVIEW_ROWS).chain(len - PREVIEW_ROWS..len).collect()
    }
}
