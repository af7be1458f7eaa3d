//! Help resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Usage help for the conversion tools (static Markdown).
pub struct HelpResource;

impl ResourceDefinition for HelpResource {
    const URI: &'static str = "uuid-converter://help";
    const NAME: &'static str = "uuid-converter-help";
    const DESCRIPTION: &'static str = "How to use the id / short key conversion tools";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(HELP.to_string())
    }
}

const HELP: &str = r#"# Short Key MCP Server Help

This server converts numeric ids to short keys and back, using a base-60
alphabet (digits, upper and lower case letters, without `I` and `l`).

## Available Tools

1. idToShortKey - convert a numeric id into a short key
   - Parameter: id (the numeric id to convert)
   - Returns: the short key, at least 6 characters

2. shortKeyToId - convert a short key back into a numeric id
   - Parameter: shortKey (the short key to convert)
   - Returns: the decoded numeric id

## Examples

Id to short key: idToShortKey(id=123456789) returns "09WYY9"
Short key to id: shortKeyToId(shortKey="abCD12") returns "27685198862"
"#;
