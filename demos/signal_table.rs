//! Prints every signal kind and every operation with its formula, then
//! samples each kind on a coarse grid.
//!
//! ```text
//! cargo run --example signal_table
//! ```

use anyhow::Result;
use log::info;
use sigsys::{OperationKind, SignalKind, SignalParams, TimeGrid, generate};

fn main() -> Result<()> {
    env_logger::init();

    println!("Operations:");
    for kind in OperationKind::ALL {
        match kind.parameter() {
            Some(param) => println!(
                "  {:<22} {:<14} {} = {}",
                kind.name(),
                kind.formula(),
                param.label,
                param.default
            ),
            None => println!("  {:<22} {}", kind.name(), kind.formula()),
        }
    }
    println!();

    let grid = TimeGrid::linspace(0.0, 1.0, 11)?;
    info!("sampling {} kinds on {} instants", SignalKind::ALL.len(), grid.len());

    print!("{:<10}", "t");
    for t in grid.iter() {
        print!("{:>7.2}", t);
    }
    println!();

    for kind in SignalKind::ALL {
        let samples = generate(kind, &grid, SignalParams::default());
        print!("{:<10}", kind.name());
        for x in samples.iter() {
            print!("{:>7.2}", x);
        }
        println!();
    }

    Ok(())
}
