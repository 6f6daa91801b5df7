use super::AuthorizationMetadata;

impl<T> AuthorizationMetadata<T> {
    pub fn new(permissions: Vec<T>, resource: impl Into<String>) -> Self {
        Self {
            permissions,
            resource: resource.into(),
            policy_mode: false,
        }
    }

    pub fn policy_mode(mut self, val: bool) -> Self {
        self.policy_mode = val;
        self
    }
}
