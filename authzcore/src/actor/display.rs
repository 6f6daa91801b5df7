use std::fmt;
use super::{Agent, User};

/// The enforcement subject for the agent; anonymous agents become `-`
/// and users are prefixed to keep them disjoint from role names.
impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agent::Anonymous => f.write_str("-"),
            Agent::User(User { name, .. }) => write!(f, "u:{name}"),
        }
    }
}
