use casbin::{
    CoreApi,
    DefaultModel,
    MemoryAdapter,
    MgmtApi,
};
use authzcore::actor::Agent;

use crate::{
    error::Error,
    source::PolicySource,
};

/// The default model for deployments that share one rule grammar and
/// vary only the policy data per resource.
///
/// Requests and policy rows are `sub, res, act` triples.  A policy
/// subject is either a role name or an agent subject (see the `Display`
/// impl on [`Agent`]); the `g` rows bind agent subjects to roles within
/// the policy data itself.
pub const DEFAULT_MODEL: &str = "\
[request_definition]
r = sub, res, act

[policy_definition]
p = sub, res, act

[role_definition]
g = _, _

[policy_effect]
e = some(where (p.eft == allow))

[matchers]
m = (g(r.sub, p.sub) || r.sub == p.sub) && keyMatch2(r.res, p.res) && keyMatch(r.act, p.act)
";

/// A built policy-engine instance for one (model, policy source) pair.
///
/// Construction parses the rule grammar and loads every policy row, so
/// instances are expensive; they are shared through [`EnforcerCache`]
/// and never mutated after the build.
///
/// [`EnforcerCache`]: crate::cache::EnforcerCache
pub struct ResourceEnforcer {
    enforcer: casbin::Enforcer,
}

impl ResourceEnforcer {
    pub async fn new(
        model: &str,
        source: &PolicySource,
    ) -> Result<Self, Error> {
        let m = DefaultModel::from_str(model).await?;
        let a = MemoryAdapter::default();
        let mut enforcer = casbin::Enforcer::new(m, a).await?;
        let data = source.load().await?;
        let n = data.rules.len();
        if !data.rules.is_empty() {
            enforcer.add_named_policies("p", data.rules
                .into_iter()
                .map(Into::into)
                .collect()
            ).await?;
        }
        if !data.groupings.is_empty() {
            enforcer.add_named_grouping_policies("g", data.groupings
                .into_iter()
                .map(Into::into)
                .collect()
            ).await?;
        }
        log::debug!("new ResourceEnforcer set up with {n} policy rows");
        Ok(Self { enforcer })
    }

    /// Validates if the agent accessing the resource has the required
    /// rights.  The agent's own subject is checked first, then the role
    /// it carries for this request, if any.
    pub fn enforce(
        &self,
        agent: &Agent,
        role: Option<&str>,
        resource: &str,
        action: &str,
    ) -> Result<bool, Error> {
        if self.enforcer.enforce((
            agent.to_string().as_str(),
            resource,
            action,
        ))? {
            return Ok(true);
        }
        match role {
            Some(role) => Ok(self.enforcer.enforce((
                role,
                resource,
                action,
            ))?),
            None => Ok(false),
        }
    }
}
