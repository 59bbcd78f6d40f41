//! # `get_info` Tool Contract
//!
//! The single operation an agent host calls. The host sends a code and gets
//! back either `{"status": "success", "report": ...}` or
//! `{"status": "error", "error_message": ...}`. Nothing else about the host
//! is assumed.
//!
//! [`handle_line`] wraps the contract for hosts that speak JSON lines; a
//! malformed request becomes an error response rather than a failure.

use serde::{Deserialize, Serialize};

use crate::index::HsnIndex;

/// Name under which the lookup is registered with an agent host.
pub const TOOL_NAME: &str = "get_hsn_info";

/// Response returned to the agent host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResponse {
    /// A record matched.
    Success {
        /// Human-readable report.
        report: String,
    },
    /// Nothing matched, or the request was unusable.
    Error {
        /// Explanation for the caller.
        error_message: String,
    },
}

impl ToolResponse {
    /// True for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// A JSON-lines request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRequest {
    /// The HSN code to look up.
    pub code: String,
}

/// Look up `code` and shape the outcome for the agent host.
pub fn get_info(index: &HsnIndex, code: &str) -> ToolResponse {
    match index.resolve(code) {
        Ok(resolution) => ToolResponse::Success {
            report: resolution.report(),
        },
        Err(err) => ToolResponse::Error {
            error_message: err.to_string(),
        },
    }
}

/// Answer one JSON-lines request.
pub fn handle_line(index: &HsnIndex, line: &str) -> ToolResponse {
    match serde_json::from_str::<ToolRequest>(line) {
        Ok(request) => get_info(index, &request.code),
        Err(err) => {
            tracing::debug!(error = %err, "rejecting malformed tool request");
            ToolResponse::Error {
                error_message: format!("Invalid request: {err}. Expected {{\"code\": \"<HSN code>\"}}."),
            }
        }
    }
}

/// Registration metadata for agent hosts.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// Tool name.
    pub name: &'static str,
    /// What the tool does, for the host's tool listing.
    pub description: &'static str,
    /// Suggested instruction for the assistant using the tool.
    pub instruction: &'static str,
    /// JSON Schema of the request.
    pub input_schema: serde_json::Value,
}

/// The descriptor advertised to agent hosts.
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME,
        description: "Provide information about HSN codes and their applicable GST rates.",
        instruction: "You are a helpful assistant who provides GST details for HSN codes.",
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "code": {
                    "type": "string",
                    "description": "HSN code to look up; leading zeros may be omitted."
                }
            },
            "required": ["code"]
        }),
    }
}
