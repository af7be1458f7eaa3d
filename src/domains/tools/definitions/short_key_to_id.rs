//! Short key to id tool definition.
//!
//! Decodes a short key back into the numeric identifier it encodes.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::domains::short_key;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the short key to id tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShortKeyToIdParams {
    /// The short key to convert.
    #[serde(rename = "shortKey")]
    #[schemars(description = "The short key to convert back into an id")]
    pub short_key: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Short key to id tool - decodes a short key into its id.
pub struct ShortKeyToIdTool;

impl ShortKeyToIdTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "shortKeyToId";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Convert a short key back into its numeric id. The id is returned as a decimal string. Keys are case-sensitive.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(short_key = %params.short_key))]
    pub fn execute(params: &ShortKeyToIdParams) -> CallToolResult {
        info!("Short key to id tool called");

        match short_key::decode(&params.short_key) {
            Ok(id) => {
                info!("Decoded {} as id {}", params.short_key, id);
                CallToolResult::success(vec![Content::text(id.to_string())])
            }
            Err(e) => {
                warn!("Failed to decode {:?}: {}", params.short_key, e);
                CallToolResult::error(vec![Content::text(format!("Error: {}", e))])
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let short_key = arguments
            .get("shortKey")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::invalid_arguments("Missing or invalid 'shortKey' parameter"))?
            .to_string();

        let result = Self::execute(&ShortKeyToIdParams { short_key });

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
            input_schema: cached_schema_for_type::<ShortKeyToIdParams>(),
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
                let params: ShortKeyToIdParams =
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

    fn run(key: &str) -> CallToolResult {
        ShortKeyToIdTool::execute(&ShortKeyToIdParams {
            short_key: key.to_string(),
        })
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_params_use_camel_case_key() {
        let params: ShortKeyToIdParams = serde_json::from_str(r#"{"shortKey": "abCD12"}"#).unwrap();
        assert_eq!(params.short_key, "abCD12");

        let missing = serde_json::from_str::<ShortKeyToIdParams>(r#"{"short_key": "abCD12"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_execute_decodes_key() {
        let result = run("abCD12");
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "27685198862");
    }

    #[test]
    fn test_execute_empty_key_is_zero() {
        assert_eq!(text_of(&run("")), "0");
    }

    #[test]
    fn test_execute_invalid_character() {
        let result = run("abCD1!");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Error: Invalid character in short key: '!'"
        );
    }

    #[test]
    fn test_execute_overflow() {
        let result = run("zzzzzzzzzzzz");
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("out of range"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_decodes() {
        let result =
            ShortKeyToIdTool::http_handler(serde_json::json!({ "shortKey": "09WYY9" })).unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], "123456789");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_wrong_type() {
        let result = ShortKeyToIdTool::http_handler(serde_json::json!({ "shortKey": 12 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
