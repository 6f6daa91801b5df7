use super::{GroupingRule, PolicyConfig, PolicyData, PolicyRule};

impl PolicyConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            .. Default::default()
        }
    }

    pub fn policy(mut self, val: impl Into<String>) -> Self {
        self.policy = Some(val.into());
        self
    }

    pub fn allowed_resources(mut self, val: Vec<String>) -> Self {
        self.allowed_resources = Some(val);
        self
    }

    /// Whether the resource is within the allowed scope.  Absence of an
    /// allow-list means no scoping is enforced.
    pub fn allows_resource(&self, resource: &str) -> bool {
        self.allowed_resources
            .as_ref()
            .map(|allowed| allowed.iter().any(|res| res == resource))
            .unwrap_or(true)
    }
}

impl From<PolicyRule> for Vec<String> {
    fn from(rule: PolicyRule) -> Self {
        vec![rule.subject, rule.resource, rule.action]
    }
}

impl From<GroupingRule> for Vec<String> {
    fn from(rule: GroupingRule) -> Self {
        vec![rule.subject, rule.role]
    }
}

impl PolicyData {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.groupings.is_empty()
    }
}
