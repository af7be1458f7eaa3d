//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and
//! content provider, then registered in `registry.rs`.

use rmcp::model::ResourceContents;

use super::service::ResourceContent;

pub mod codec_info;
pub mod help;

pub use codec_info::CodecInfoResource;
pub use help::HelpResource;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}

/// Trait for resources whose content is computed on every read.
pub trait DynamicResourceProvider {
    /// Resolve the dynamic content.
    fn resolve(uri: &str) -> Result<ResourceContents, String>;
}
