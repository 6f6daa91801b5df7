use crate::permission::UserPermission;
use super::{Actor, Agent, User};

impl From<User> for Agent {
    fn from(user: User) -> Agent {
        Agent::User(user)
    }
}

impl<T> Actor<T> {
    pub fn new(agent: Agent) -> Self {
        Self {
            agent,
            role: None,
            overrides: Vec::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(Agent::Anonymous)
    }

    pub fn role(mut self, val: impl Into<String>) -> Self {
        self.role = Some(val.into());
        self
    }

    pub fn overrides(mut self, val: Vec<UserPermission<T>>) -> Self {
        self.overrides = val;
        self
    }
}
