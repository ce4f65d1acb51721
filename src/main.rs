//! Calendar grid CLI application.
//!
//! # Usage
//! ```ignore
//! gridcal              // Current year
//! gridcal 2022         // Year 2022
//! gridcal 2022 2025    // 2022 through 2024
//! gridcal -c 4 2022    // Four months per row
//! ```

use std::io::{BufWriter, Write};

use gridcal::args::{Args, CalConfig};
use gridcal::{logging, render};

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("gridcal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = CalConfig::new(args)?;
    tracing::info!(
        start = config.year_start,
        end = config.year_end,
        columns = config.layout.columns,
        "rendering calendar"
    );

    let lines = render(
        config.year_start,
        config.year_end,
        &config.layout,
        config.locale,
    )?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(())
}
