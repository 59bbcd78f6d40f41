//! # Stats Subcommand
//!
//! Loads the data file strictly and summarises it: codes indexed, rows
//! skipped, and how many codes fall in each GST slab.

use anyhow::Result;
use clap::Args;

use hsn_core::GstRate;
use hsn_index::HsnIndex;

use crate::context::RunContext;

/// Arguments for the stats subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the stats subcommand.
pub fn run_stats(args: &StatsArgs, ctx: &RunContext) -> Result<u8> {
    let index = ctx.index_strict()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary_json(&index))?);
    } else {
        print!("{}", summary_text(&index));
    }
    Ok(0)
}

fn summary_json(index: &HsnIndex) -> serde_json::Value {
    let rates: serde_json::Map<String, serde_json::Value> = index
        .rate_histogram()
        .into_iter()
        .map(|(rate, count)| (rate.to_string(), serde_json::json!(count)))
        .collect();
    serde_json::json!({
        "codes": index.len(),
        "build": index.stats(),
        "rates": rates,
    })
}

/// Plain-text summary, one fact per line.
pub fn summary_text(index: &HsnIndex) -> String {
    let stats = index.stats();
    let histogram = index.rate_histogram();
    let mut out = format!(
        "codes: {}\nrows read: {}\nblank codes skipped: {}\nduplicate codes: {}\n",
        index.len(),
        stats.rows,
        stats.skipped_blank,
        stats.duplicates
    );
    for rate in GstRate::all_rates() {
        let count = histogram.get(rate).copied().unwrap_or(0);
        out.push_str(&format!("GST {rate:>3}: {count}\n"));
    }
    out
}
