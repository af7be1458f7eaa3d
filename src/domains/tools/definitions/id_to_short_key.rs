//! Id to short key tool definition.
//!
//! Encodes a numeric identifier into its short key.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::domains::short_key::{self, ShortKeyResult};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the id to short key tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IdToShortKeyParams {
    /// The numeric id to convert.
    #[schemars(description = "The numeric id to convert (non-negative integer)")]
    pub id: IdArgument,
}

/// An integer id as sent by the client.
///
/// Unsigned is tried first so the whole `u64` range is accepted; only
/// negative integers land in `Signed`. Fractional numbers match neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum IdArgument {
    Unsigned(u64),
    Signed(i64),
}

impl IdArgument {
    /// Encode this id, rejecting negative values.
    pub fn encode(self) -> ShortKeyResult<String> {
        match self {
            Self::Unsigned(id) => Ok(short_key::encode(id)),
            Self::Signed(id) => short_key::try_encode(id),
        }
    }
}

impl std::fmt::Display for IdArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsigned(id) => write!(f, "{}", id),
            Self::Signed(id) => write!(f, "{}", id),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Id to short key tool - encodes an id as a short key.
pub struct IdToShortKeyTool;

impl IdToShortKeyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "idToShortKey";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Convert a numeric id into a short key. Returns a base-60 string of at least 6 characters, left-padded with '0'.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(id = %params.id))]
    pub fn execute(params: &IdToShortKeyParams) -> CallToolResult {
        info!("Id to short key tool called");

        match params.id.encode() {
            Ok(key) => {
                info!("Encoded id {} as {}", params.id, key);
                CallToolResult::success(vec![Content::text(key)])
            }
            Err(e) => {
                warn!("Rejected id {}: {}", params.id, e);
                CallToolResult::error(vec![Content::text(format!("Error: {}", e))])
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: IdToShortKeyParams = serde_json::from_value(arguments).map_err(|e| {
            ToolError::invalid_arguments(format!("Missing or invalid 'id' parameter: {}", e))
        })?;

        let result = Self::execute(&params);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<IdToShortKeyParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: IdToShortKeyParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_params_deserialize() {
        let params: IdToShortKeyParams = serde_json::from_str(r#"{"id": 123456789}"#).unwrap();
        assert_eq!(params.id, IdArgument::Unsigned(123456789));

        let params: IdToShortKeyParams = serde_json::from_str(r#"{"id": -3}"#).unwrap();
        assert_eq!(params.id, IdArgument::Signed(-3));
    }

    #[test]
    fn test_params_accept_full_u64_range() {
        let params: IdToShortKeyParams =
            serde_json::from_str(r#"{"id": 18446744073709551615}"#).unwrap();
        assert_eq!(params.id, IdArgument::Unsigned(u64::MAX));
    }

    #[test]
    fn test_execute_max_id_round_trips() {
        let params: IdToShortKeyParams =
            serde_json::from_str(r#"{"id": 18446744073709551615}"#).unwrap();
        let result = IdToShortKeyTool::execute(&params);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "VVS953qfW0F");
        assert_eq!(short_key::decode(&text_of(&result)), Ok(u64::MAX));
    }

    #[test]
    fn test_params_reject_fractional_id() {
        let result = serde_json::from_str::<IdToShortKeyParams>(r#"{"id": 1.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_encodes_id() {
        let result = IdToShortKeyTool::execute(&IdToShortKeyParams {
            id: IdArgument::Unsigned(123456789),
        });
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "09WYY9");
    }

    #[test]
    fn test_execute_zero() {
        let result = IdToShortKeyTool::execute(&IdToShortKeyParams {
            id: IdArgument::Unsigned(0),
        });
        assert_eq!(text_of(&result), "000000");
    }

    #[test]
    fn test_execute_negative_is_error() {
        let result = IdToShortKeyTool::execute(&IdToShortKeyParams {
            id: IdArgument::Signed(-5),
        });
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("non-negative"));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = IdToShortKeyTool::to_tool();
        assert_eq!(tool.name, "idToShortKey");
        assert!(tool.input_schema.contains_key("properties"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_missing_id() {
        let result = IdToShortKeyTool::http_handler(serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_rejects_fractional_id() {
        let result = IdToShortKeyTool::http_handler(serde_json::json!({ "id": 2.5 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_max_id() {
        let result =
            IdToShortKeyTool::http_handler(serde_json::json!({ "id": u64::MAX })).unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], "VVS953qfW0F");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_negative_is_tool_error() {
        let result = IdToShortKeyTool::http_handler(serde_json::json!({ "id": -1 })).unwrap();
        assert_eq!(result["isError"], true);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_encodes() {
        let result = IdToShortKeyTool::http_handler(serde_json::json!({ "id": 60 })).unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], "000010");
    }
}
