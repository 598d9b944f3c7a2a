//! Plot accuracy, precision and recall curves from experiment outfiles.
//!
//! Reads three line-oriented output files, each mixing `KEY=VALUE` property
//! lines with one floating-point metric reading per remaining line, and
//! renders the three metric sequences as line plots over a shared window
//! index. The three paths are interpreted positionally as the accuracy,
//! precision and recall sources; nothing is inferred from file contents.

mod outfile;
mod plot;

use anyhow::{Context, Result};
use clap::Parser;
use outfile::Properties;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Plot accuracy/precision/recall metric curves from experiment outfiles
#[derive(Parser, Debug)]
#[command(name = "plot-results")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Outfile holding the accuracy series
    outfile1: PathBuf,

    /// Outfile holding the precision series
    outfile2: PathBuf,

    /// Outfile holding the recall series
    outfile3: PathBuf,

    /// Path of the rendered SVG chart
    #[arg(short, long, default_value = "metrics.svg")]
    output: PathBuf,
}

/// Announce and read one outfile. The handle is closed on every exit path.
fn read_metric_file(path: &Path) -> Result<(Properties, Vec<f64>)> {
    println!("reading outfile `{}`", path.display());
    let file =
        File::open(path).with_context(|| format!("Failed to open outfile: {}", path.display()))?;
    let parsed = outfile::read_outfile(BufReader::new(file))
        .with_context(|| format!("Failed to parse outfile: {}", path.display()))?;
    Ok(parsed)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (props, accuracy) = read_metric_file(&args.outfile1)?;
    println!("props {:?}", props);

    let (props, precision) = read_metric_file(&args.outfile2)?;
    println!("props {:?}", props);

    let (props, recall) = read_metric_file(&args.outfile3)?;
    println!("props {:?}", props);

    plot::plot_metric_values(&accuracy, &precision, &recall, &args.output)?;
    println!("chart written to {}", args.output.display());

    Ok(())
}
