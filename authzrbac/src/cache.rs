use parking_lot::Mutex;
use std::{
    collections::HashMap,
    sync::Arc,
};
use tokio::sync::OnceCell;

use crate::{
    enforcer::ResourceEnforcer,
    error::Error,
    source::PolicySource,
};

/// Cache key: the logical identity of the model text plus the policy
/// source, never the reference identity of either.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CacheKey {
    model: Box<str>,
    policy: Box<str>,
}

impl CacheKey {
    fn new(model: &str, source: &PolicySource) -> Self {
        Self {
            model: model.into(),
            policy: source.key().into(),
        }
    }
}

/// Process-lifetime cache of built enforcers.
///
/// At most one build runs per key: the index mutex is held only to
/// fetch or insert the cell for a key, and the cell serialises the
/// build itself, so concurrent requests for the same (model, policy
/// source) pair share one build and one resulting instance.  A failed
/// build leaves the cell empty for the next caller to retry.
///
/// Entries are never refreshed or mutated in place; when the data
/// behind a live store changes, [`invalidate`] must be called so the
/// next request produces a fresh entry.
///
/// [`invalidate`]: EnforcerCache::invalidate
#[derive(Default)]
pub struct EnforcerCache {
    entries: Mutex<HashMap<CacheKey, Arc<OnceCell<Arc<ResourceEnforcer>>>>>,
}

impl EnforcerCache {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the enforcer for the (model, source) pair, building it
    /// if no usable entry exists.
    pub async fn enforcer(
        &self,
        model: &str,
        source: &PolicySource,
    ) -> Result<Arc<ResourceEnforcer>, Error> {
        let key = CacheKey::new(model, source);
        let cell = self.entries.lock()
            .entry(key)
            .or_default()
            .clone();
        let enforcer = cell.get_or_try_init(|| async {
            log::debug!("building enforcer for {source:?}");
            Ok::<_, Error>(Arc::new(
                ResourceEnforcer::new(model, source).await?
            ))
        }).await?;
        Ok(enforcer.clone())
    }

    /// Drops the entry for the (model, source) pair.  A policy change
    /// in a live store must be followed by this call; there is no
    /// automatic refresh.
    pub fn invalidate(&self, model: &str, source: &PolicySource) {
        if self.entries.lock().remove(&CacheKey::new(model, source)).is_some() {
            log::debug!("invalidated enforcer for {source:?}");
        }
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod test {
    use async_trait::async_trait;
    use authzcore::{
        actor::Agent,
        error::BackendError,
        policy::{PolicyData, PolicyRule},
        traits::PolicyStore,
    };
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use crate::enforcer::DEFAULT_MODEL;
    use super::*;

    /// Counts loads so the tests can observe how many builds ran.
    struct CountingStore {
        loads: AtomicUsize,
        action: String,
    }

    impl CountingStore {
        fn new(action: &str) -> Arc<Self> {
            Arc::new(Self {
                loads: AtomicUsize::new(0),
                action: action.to_string(),
            })
        }
    }

    #[async_trait]
    impl PolicyStore for CountingStore {
        fn key(&self) -> String {
            "counting".to_string()
        }

        async fn load(&self) -> Result<PolicyData, BackendError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(PolicyData {
                rules: vec![PolicyRule {
                    subject: "reader".to_string(),
                    resource: "/item/*".to_string(),
                    action: self.action.clone(),
                }],
                groupings: Vec::new(),
            })
        }
    }

    struct FailingStore;

    #[async_trait]
    impl PolicyStore for FailingStore {
        fn key(&self) -> String {
            "failing".to_string()
        }

        async fn load(&self) -> Result<PolicyData, BackendError> {
            Err(BackendError::Unreachable("no route to store".to_string()))
        }
    }

    #[tokio::test]
    async fn concurrent_requests_share_one_build() -> anyhow::Result<()> {
        let cache = Arc::new(EnforcerCache::new());
        let store = CountingStore::new("read");
        let source = PolicySource::Store(store.clone());

        let (a, b) = tokio::join!(
            cache.enforcer(DEFAULT_MODEL, &source),
            cache.enforcer(DEFAULT_MODEL, &source),
        );
        let (a, b) = (a?, b?);

        assert_eq!(store.loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn key_is_logical_identity() -> anyhow::Result<()> {
        let cache = EnforcerCache::new();
        // two distinct allocations of the same text resolve to the same
        // entry
        let a = cache.enforcer(
            DEFAULT_MODEL,
            &PolicySource::from("p, reader, /item/1, read"),
        ).await?;
        let b = cache.enforcer(
            DEFAULT_MODEL,
            &PolicySource::from("p, reader, /item/1, read".to_string()),
        ).await?;
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        cache.enforcer(
            DEFAULT_MODEL,
            &PolicySource::from("p, reader, /item/2, read"),
        ).await?;
        assert_eq!(cache.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn invalidate_produces_fresh_build() -> anyhow::Result<()> {
        let cache = EnforcerCache::new();
        let store = CountingStore::new("read");
        let source = PolicySource::Store(store.clone());

        let before = cache.enforcer(DEFAULT_MODEL, &source).await?;
        let cached = cache.enforcer(DEFAULT_MODEL, &source).await?;
        assert!(Arc::ptr_eq(&before, &cached));
        assert_eq!(store.loads.load(Ordering::SeqCst), 1);

        cache.invalidate(DEFAULT_MODEL, &source);
        let after = cache.enforcer(DEFAULT_MODEL, &source).await?;
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(store.loads.load(Ordering::SeqCst), 2);

        // the old entry is unreachable but still usable by holders
        assert!(before.enforce(&Agent::Anonymous, Some("reader"), "/item/1", "read")?);
        Ok(())
    }

    #[tokio::test]
    async fn failed_build_is_retried() -> anyhow::Result<()> {
        let cache = EnforcerCache::new();
        let source = PolicySource::Store(Arc::new(FailingStore));

        assert!(cache.enforcer(DEFAULT_MODEL, &source).await.is_err());
        // the failure left no entry behind that poisons later attempts
        assert!(cache.enforcer(DEFAULT_MODEL, &source).await.is_err());

        let store = CountingStore::new("read");
        let working = PolicySource::Store(store);
        assert!(cache.enforcer(DEFAULT_MODEL, &working).await.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn clear() -> anyhow::Result<()> {
        let cache = EnforcerCache::new();
        cache.enforcer(
            DEFAULT_MODEL,
            &PolicySource::from("p, reader, /item/1, read"),
        ).await?;
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }
}
