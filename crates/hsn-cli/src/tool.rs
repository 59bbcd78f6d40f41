//! # Tool Subcommands
//!
//! `hsn tool` speaks JSON lines on stdin/stdout so an agent host can call
//! `get_info` without linking the library:
//!
//! ```text
//! > {"code": "0101"}
//! < {"status":"success","report":"HSN Code 0101: ... Applicable GST: 0%."}
//! ```
//!
//! `hsn describe` prints the registration descriptor for the host.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use hsn_index::{descriptor, handle_line, HsnIndex, ToolResponse};

use crate::context::RunContext;

/// Arguments for the tool subcommand.
#[derive(Args, Debug)]
pub struct ToolArgs {
    /// Stop after answering this many requests.
    #[arg(long)]
    pub max_requests: Option<usize>,
}

/// Execute the tool subcommand until stdin closes.
pub fn run_tool(args: &ToolArgs, ctx: &RunContext) -> Result<u8> {
    let index = ctx.index_or_empty()?;
    tracing::info!(records = index.len(), "serving get_info over stdio");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let answered = serve_lines(&index, stdin.lock(), stdout.lock(), args.max_requests)?;
    tracing::info!(answered, "stdin closed");
    Ok(0)
}

/// Answer each non-blank request line with one response line. Returns the
/// number of requests answered.
///
/// A line that is not UTF-8 gets an error response like any other malformed
/// request; only I/O failures end the session.
pub fn serve_lines<R, W>(
    index: &HsnIndex,
    reader: R,
    mut writer: W,
    max_requests: Option<usize>,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut answered = 0;
    for line in reader.split(b'\n') {
        if max_requests.is_some_and(|max| answered >= max) {
            break;
        }
        let bytes = line.context("reading request")?;
        let response = match std::str::from_utf8(&bytes) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_line(index, line),
            Err(err) => {
                tracing::debug!(error = %err, "rejecting non-UTF-8 tool request");
                ToolResponse::Error {
                    error_message: format!("Invalid request: {err}. Requests must be UTF-8 JSON."),
                }
            }
        };
        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        answered += 1;
    }
    Ok(answered)
}

/// Execute the describe subcommand.
pub fn run_describe() -> Result<u8> {
    println!("{}", serde_json::to_string_pretty(&descriptor())?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsn_core::HsnCode;
    use hsn_index::ClassificationRecord;

    fn index() -> HsnIndex {
        HsnIndex::from_records([ClassificationRecord::new(
            HsnCode::new("0101").unwrap(),
            "Live horses",
        )])
    }

    fn responses(output: &[u8]) -> Vec<ToolResponse> {
        std::str::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn one_response_per_request() {
        let input = "{\"code\": \"0101\"}\n\n{\"code\": \"101\"}\nnot json\n{\"code\": \"9999\"}\n";
        let mut output = Vec::new();
        let answered = serve_lines(&index(), input.as_bytes(), &mut output, None).unwrap();
        assert_eq!(answered, 4);

        let out = responses(&output);
        assert!(out[0].is_success());
        assert!(out[1].is_success());
        assert!(!out[2].is_success());
        assert_eq!(
            out[3],
            ToolResponse::Error {
                error_message: "No data found for HSN code '9999'. Please verify the code."
                    .to_string()
            }
        );
    }

    #[test]
    fn invalid_utf8_line_keeps_session_open() {
        let mut input = b"{\"code\": \"0101\"}\n".to_vec();
        input.extend_from_slice(b"{\"code\": \"\xff\xfe\"}\n");
        input.extend_from_slice(b"{\"code\": \"101\"}\r\n");
        let mut output = Vec::new();
        let answered = serve_lines(&index(), input.as_slice(), &mut output, None).unwrap();
        assert_eq!(answered, 3);

        let out = responses(&output);
        assert_eq!(out.len(), 3);
        assert!(out[0].is_success());
        match &out[1] {
            ToolResponse::Error { error_message } => {
                assert!(error_message.starts_with("Invalid request"));
            }
            other => panic!("expected error, got {other:?}"),
        }
        assert!(out[2].is_success());
    }

    #[test]
    fn max_requests_stops_early() {
        let input = "{\"code\": \"0101\"}\n{\"code\": \"0101\"}\n{\"code\": \"0101\"}\n";
        let mut output = Vec::new();
        let answered = serve_lines(&index(), input.as_bytes(), &mut output, Some(2)).unwrap();
        assert_eq!(answered, 2);
        assert_eq!(responses(&output).len(), 2);
    }
}
