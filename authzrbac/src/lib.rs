pub mod cache;
pub mod enforcer;
pub mod error;
pub mod source;

pub use cache::EnforcerCache;
pub use enforcer::{ResourceEnforcer, DEFAULT_MODEL};
pub use source::PolicySource;
