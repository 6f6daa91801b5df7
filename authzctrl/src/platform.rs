use authzcore::{
    actor::Actor,
    config::AuthorizationConfig,
    metadata::AuthorizationMetadata,
    permission::{
        EffectivePermissionSet,
        PermissionKey,
    },
    policy::PolicyConfig,
    traits::{
        PolicyConfigSource,
        PolicyStore,
        RoleSource,
    },
};
use authzrbac::{
    cache::EnforcerCache,
    enforcer::ResourceEnforcer,
    source::PolicySource,
};
use std::sync::Arc;

use crate::{
    error::Error,
    registry::MetadataRegistry,
    resource::derive_resource,
};

pub struct Builder<T> {
    config: AuthorizationConfig,
    registry: MetadataRegistry<T>,
    // role-permission lookup
    role_source: Option<Box<dyn RoleSource<T>>>,
    // per (agent, resource) policy configuration, policy mode only
    policy_config_source: Option<Box<dyn PolicyConfigSource>>,
    // fallback policy source for configs without inline policy text
    policy_store: Option<Arc<dyn PolicyStore>>,
}

pub struct Platform<T> {
    config: AuthorizationConfig,
    registry: MetadataRegistry<T>,
    role_source: Box<dyn RoleSource<T>>,
    policy_config_source: Option<Box<dyn PolicyConfigSource>>,
    policy_store: Option<Arc<dyn PolicyStore>>,
    cache: EnforcerCache,
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self {
            config: AuthorizationConfig::default(),
            registry: MetadataRegistry::new(),
            role_source: None,
            policy_config_source: None,
            policy_store: None,
        }
    }
}

impl<T> Builder<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn config(mut self, val: AuthorizationConfig) -> Self {
        self.config = val;
        self
    }

    pub fn register(
        mut self,
        operation: impl Into<String>,
        metadata: AuthorizationMetadata<T>,
    ) -> Self {
        self.registry.register(operation, metadata);
        self
    }

    pub fn metadata_registry(mut self, val: MetadataRegistry<T>) -> Self {
        self.registry = val;
        self
    }

    pub fn role_source(mut self, val: impl RoleSource<T> + 'static) -> Self {
        self.role_source = Some(Box::new(val));
        self
    }

    pub fn policy_config_source(
        mut self,
        val: impl PolicyConfigSource + 'static,
    ) -> Self {
        self.policy_config_source = Some(Box::new(val));
        self
    }

    pub fn policy_store(mut self, val: impl PolicyStore + 'static) -> Self {
        self.policy_store = Some(Arc::new(val));
        self
    }

    pub fn build(self) -> Arc<Platform<T>> {
        Arc::new(Platform {
            config: self.config,
            registry: self.registry,
            role_source: self.role_source
                .expect("missing required argument role_source"),
            policy_config_source: self.policy_config_source,
            policy_store: self.policy_store,
            cache: EnforcerCache::new(),
        })
    }
}

impl<T> Platform<T> {
    /// Whether the path is exempted from authorization entirely.
    ///
    /// Exempted paths bypass everything including metadata resolution;
    /// callers consult this before invoking [`authorize`].
    ///
    /// [`authorize`]: Platform::authorize
    pub fn allow_always(&self, path: &str) -> bool {
        self.config.exempts(path)
    }

    /// The enforcer cache, exposed so deployments with a live policy
    /// store can invalidate entries when policy data changes.
    pub fn enforcer_cache(&self) -> &EnforcerCache {
        &self.cache
    }
}

// Permission-key path

impl<T: PermissionKey> Platform<T> {
    async fn effective_permissions(
        &self,
        actor: &Actor<T>,
    ) -> Result<EffectivePermissionSet<T>, Error> {
        let role_permissions = match actor.role.as_deref() {
            Some(role) => self.role_source.role_permissions(role).await?,
            None => Vec::new(),
        };
        Ok(EffectivePermissionSet::merge(
            &actor.overrides,
            &role_permissions,
        ))
    }
}

// Policy-engine path

impl<T: PermissionKey> Platform<T> {
    /// Resolves the policy configuration for the actor at the resource,
    /// rejecting resources outside the actor's allowed scope.
    pub async fn resolve_policy_config(
        &self,
        actor: &Actor<T>,
        resource: &str,
    ) -> Result<PolicyConfig, Error> {
        let source = self.policy_config_source
            .as_ref()
            .ok_or_else(|| Error::NotConfigured(
                "policy configuration source".to_string()
            ))?;
        let config = source.policy_config(&actor.agent, resource).await?;
        if !config.allows_resource(resource) {
            return Err(Error::ResourceNotAllowed(resource.to_string()));
        }
        Ok(config)
    }

    fn policy_source(&self, config: &PolicyConfig) -> Result<PolicySource, Error> {
        match config.policy.as_deref() {
            Some(text) => Ok(PolicySource::from(text)),
            None => self.policy_store
                .clone()
                .map(PolicySource::Store)
                .ok_or_else(|| Error::NotConfigured(
                    "policy store".to_string()
                )),
        }
    }

    fn enforce_permissions(
        &self,
        actor: &Actor<T>,
        enforcer: &ResourceEnforcer,
        resource: &str,
        permissions: &[T],
    ) -> Result<bool, Error> {
        let role = actor.role.as_deref();
        if permissions.is_empty() {
            // no declared permission keys; check the default action
            return Ok(enforcer.enforce(&actor.agent, role, resource, "")?);
        }
        for permission in permissions.iter() {
            if enforcer.enforce(
                &actor.agent,
                role,
                resource,
                &permission.to_string(),
            )? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

// Decision

impl<T: PermissionKey> Platform<T> {
    /// Decides whether the actor may invoke the operation.
    ///
    /// Missing metadata fails closed; an empty permission declaration
    /// outside policy mode allows.  The permission-key path merges the
    /// actor's overrides over its role permissions and requires a
    /// non-empty intersection with the declared permissions.  The
    /// policy-engine path derives the evaluation target from the path
    /// parameters when present, resolves the policy configuration, and
    /// evaluates the cached enforcer for it.
    ///
    /// Failures always propagate as errors, never as an allow.
    pub async fn authorize(
        &self,
        actor: &Actor<T>,
        operation: &str,
        path_params: &[String],
    ) -> Result<bool, Error> {
        let metadata = self.registry.resolve(operation)?;
        if !metadata.policy_mode {
            if metadata.permissions.is_empty() {
                return Ok(true);
            }
            let effective = self.effective_permissions(actor).await?;
            return Ok(effective.intersects(metadata.permissions.iter()));
        }
        let resource = if path_params.is_empty() {
            metadata.resource.clone()
        } else {
            derive_resource(path_params)?
        };
        let config = self.resolve_policy_config(actor, &resource).await?;
        let source = self.policy_source(&config)?;
        let enforcer = self.cache.enforcer(&config.model, &source).await?;
        self.enforce_permissions(
            actor,
            &enforcer,
            &resource,
            &metadata.permissions,
        )
    }

    /// Deny-and-report wrapper over [`authorize`]: every failure is
    /// logged according to its kind and converted into a deny, so the
    /// caller only ever observes a boolean.
    ///
    /// [`authorize`]: Platform::authorize
    pub async fn decide(
        &self,
        actor: &Actor<T>,
        operation: &str,
        path_params: &[String],
    ) -> bool {
        match self.authorize(actor, operation, path_params).await {
            Ok(decision) => decision,
            Err(err) => {
                match &err {
                    Error::NotConfigured(what) => log::error!(
                        "denied {operation}: not configured: {what}"
                    ),
                    Error::ResourceNotAllowed(resource) => log::warn!(
                        "denied {operation}: agent {} outside resource scope {resource}",
                        actor.agent,
                    ),
                    Error::InvalidResourceParams => log::warn!(
                        "denied {operation}: malformed path parameters"
                    ),
                    Error::Rbac(err) => log::error!(
                        "denied {operation}: enforcer failure: {err}"
                    ),
                    err => log::error!("denied {operation}: {err}"),
                }
                false
            }
        }
    }
}
