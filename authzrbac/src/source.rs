use authzcore::traits::PolicyStore;
use std::sync::Arc;

/// Where the policy rows for an enforcer build come from.
///
/// Static text is immutable for the process lifetime; a store is a live
/// adapter to an external policy backend whose content may change
/// between builds.  The enforcer builder consumes either variant
/// through [`PolicySource::load`] without caring which it is.
#[derive(Clone)]
pub enum PolicySource {
    /// Fixed policy text, one row per line in the usual csv layout:
    /// `p, subject, resource, action` or `g, subject, role`, with `#`
    /// starting a comment.
    Text(Arc<str>),
    /// Adapter-backed rows loaded at build time.
    Store(Arc<dyn PolicyStore>),
}

mod impls;
