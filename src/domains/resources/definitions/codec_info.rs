//! Codec description resource definition.

use super::{DynamicResourceProvider, ResourceDefinition};
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use crate::domains::short_key::{ALPHABET, BASE, MIN_LENGTH, PAD};
use rmcp::model::ResourceContents;

/// Describes the short key alphabet and layout (dynamic JSON).
pub struct CodecInfoResource;

impl ResourceDefinition for CodecInfoResource {
    const URI: &'static str = "uuid-converter://codec";
    const NAME: &'static str = "uuid-converter-codec";
    const DESCRIPTION: &'static str = "Alphabet, base and padding used for short keys";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::CodecInfo)
    }
}

impl DynamicResourceProvider for CodecInfoResource {
    fn resolve(uri: &str) -> Result<ResourceContents, String> {
        let info = serde_json::json!({
            "alphabet": String::from_utf8_lossy(ALPHABET),
            "base": BASE,
            "min_length": MIN_LENGTH,
            "pad": PAD.to_string(),
            "version": env!("CARGO_PKG_VERSION"),
        });

        Ok(ResourceContents::text(
            serde_json::to_string_pretty(&info).map_err(|e| e.to_string())?,
            uri,
        ))
    }
}
