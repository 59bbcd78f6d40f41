//! # Classify Subcommand
//!
//! Shows the GST rate the classifier assigns a code and the rule behind
//! it. Works without a data file.

use anyhow::Result;
use clap::Args;

use hsn_core::{explain, Classification, RateBasis};

/// Arguments for the classify subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// HSN code to classify.
    pub code: String,

    /// Print the classification as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs) -> Result<u8> {
    let classification = explain(args.code.trim());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        println!("{}", describe(args.code.trim(), &classification));
    }
    Ok(0)
}

/// One-line human description of a classification.
pub fn describe(code: &str, classification: &Classification) -> String {
    let rate = classification.rate;
    match &classification.basis {
        RateBasis::Exception { key } => {
            format!("{code}: GST {rate} (exception for code {key})")
        }
        RateBasis::Range { prefix, band } => format!(
            "{code}: GST {rate} (prefix {prefix:04} in {}..={}, {})",
            band.min.max(0),
            band.max.min(9999),
            band.label
        ),
        RateBasis::Unbanded { prefix } => {
            format!("{code}: GST {rate} (prefix {prefix:04} outside every band; default rate)")
        }
        RateBasis::Unparseable { reason } => {
            format!("{code}: GST {rate} ({reason}; default rate)")
        }
    }
}
