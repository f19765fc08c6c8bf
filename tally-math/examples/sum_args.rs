//! Sum the integers given on the command line.
//!
//! ```text
//! RUST_LOG=tally_math=debug cargo run -p tally-math --example sum_args -- 2147483642 3 3
//! ```

use anyhow::{Context, Result};
use tally_math::sum;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let values = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<i32>()
                .with_context(|| format!("not a 32-bit integer: {arg}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let total = sum(Some(values.as_slice())).context("summing arguments")?;
    println!("{total}");
    Ok(())
}
