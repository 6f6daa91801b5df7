//! Policy configuration and policy data records.
//!
//! The structs provided by this module carry the rule set identity and
//! the rule instances consumed by the policy-engine enforcer; they are
//! resolved or loaded per request and are not meant to be persisted
//! here.

use serde::{Deserialize, Serialize};

/// The policy configuration resolved for an (actor, resource) pair:
/// which model text applies, optionally an inline policy text, and
/// optionally the resource identifiers the actor may target at all.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PolicyConfig {
    pub model: String,
    pub policy: Option<String>,
    pub allowed_resources: Option<Vec<String>>,
}

/// A single policy row: the subject (a role or an agent subject) is
/// permitted the action at the resource.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct PolicyRule {
    pub subject: String,
    pub resource: String,
    pub action: String,
}

/// A grouping row binding an agent subject to a role within the policy
/// data itself.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GroupingRule {
    pub subject: String,
    pub role: String,
}

/// Everything a policy source yields for one enforcer build.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PolicyData {
    pub rules: Vec<PolicyRule>,
    pub groupings: Vec<GroupingRule>,
}

mod impls;
