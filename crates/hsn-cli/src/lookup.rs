//! # Lookup Subcommand
//!
//! Runs `get_info` for one code and prints the answer.
//!
//! ```bash
//! hsn --data HSN_SAC.csv lookup 0101
//! hsn --data HSN_SAC.csv lookup 101 --json
//! ```

use anyhow::Result;
use clap::Args;

use hsn_index::{get_info, HsnIndex, ToolResponse};

use crate::context::RunContext;

/// Arguments for the lookup subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// HSN code to look up. Leading zeros may be omitted.
    pub code: String,

    /// Print the tool response JSON instead of the report text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the lookup subcommand. Exit code 1 when nothing matched.
pub fn run_lookup(args: &LookupArgs, ctx: &RunContext) -> Result<u8> {
    let index = ctx.index_or_empty()?;
    let (text, found) = render_lookup(&index, args)?;
    println!("{text}");
    Ok(if found { 0 } else { 1 })
}

/// Render the lookup answer and whether it succeeded.
pub fn render_lookup(index: &HsnIndex, args: &LookupArgs) -> Result<(String, bool)> {
    let response = get_info(index, &args.code);
    let found = response.is_success();
    let text = if args.json {
        serde_json::to_string_pretty(&response)?
    } else {
        match response {
            ToolResponse::Success { report } => report,
            ToolResponse::Error { error_message } => error_message,
        }
    };
    Ok((text, found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsn_core::HsnCode;
    use hsn_index::ClassificationRecord;

    fn index() -> HsnIndex {
        HsnIndex::from_records([ClassificationRecord::new(
            HsnCode::new("2203").unwrap(),
            "Beer made from malt",
        )])
    }

    #[test]
    fn renders_report_text() {
        let args = LookupArgs { code: "2203".to_string(), json: false };
        let (text, found) = render_lookup(&index(), &args).unwrap();
        assert!(found);
        assert_eq!(text, "HSN Code 2203: Beer made from malt. Applicable GST: 28%.");
    }

    #[test]
    fn renders_json_error() {
        let args = LookupArgs { code: "9999".to_string(), json: true };
        let (text, found) = render_lookup(&index(), &args).unwrap();
        assert!(!found);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "error");
    }
}
