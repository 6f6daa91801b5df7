pub mod error;
pub mod platform;
pub mod registry;
pub mod resource;

pub use platform::{Builder, Platform};
pub use registry::MetadataRegistry;
