use serde::{Deserialize, Serialize};
use crate::permission::UserPermission;

/// The authenticated identity behind a request, as resolved by the
/// authentication collaborator.
#[derive(Clone, Debug, Default, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum Agent {
    #[default]
    Anonymous,
    User(User),
}

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// An agent together with the inputs the decision layer reads from it:
/// the role reference and the actor-level permission overrides.  Both
/// are read-only here; they are owned by external collaborators.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Actor<T> {
    pub agent: Agent,
    pub role: Option<String>,
    pub overrides: Vec<UserPermission<T>>,
}

mod display;
mod impls;
