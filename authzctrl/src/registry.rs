use authzcore::metadata::AuthorizationMetadata;
use std::collections::HashMap;

use crate::error::Error;

/// Static registry mapping operation identifiers to their declared
/// authorization metadata.
///
/// Populated through plain registration calls at process start; a
/// lookup for an operation that was never declared is a configuration
/// defect and resolves to [`Error::NotConfigured`], never to a default
/// allow.
#[derive(Debug)]
pub struct MetadataRegistry<T> {
    entries: HashMap<String, AuthorizationMetadata<T>>,
}

impl<T> Default for MetadataRegistry<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> MetadataRegistry<T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Declare the metadata for an operation.  A later declaration for
    /// the same operation replaces the earlier one.
    pub fn register(
        &mut self,
        operation: impl Into<String>,
        metadata: AuthorizationMetadata<T>,
    ) -> &mut Self {
        self.entries.insert(operation.into(), metadata);
        self
    }

    pub fn resolve(
        &self,
        operation: &str,
    ) -> Result<&AuthorizationMetadata<T>, Error> {
        self.entries
            .get(operation)
            .ok_or_else(|| Error::NotConfigured(operation.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
