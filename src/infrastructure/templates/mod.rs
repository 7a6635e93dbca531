//! Template acquisition adapters
//!
//! Two mutually exclusive strategies implement the
//! [`crate::generation::TemplateSource`] port: reading the page from a
//! prepared wiki working copy, or fetching it from the hosted wiki over
//! HTTPS.

pub mod local_source;
pub mod remote_source;

pub use local_source::LocalTemplateSource;
pub use remote_source::RemoteTemplateSource;

/// Wiki page holding the base template for the Kotlin association maps
pub const TEMPLATE_PAGE: &str = "IconAssociationsTemplate.kt.md";
