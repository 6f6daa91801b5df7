pub mod actor;
pub mod config;
pub mod error;
pub mod metadata;
pub mod permission;
pub mod policy;
pub mod traits;
