use authzcore::{
    error::BackendError,
    policy::{GroupingRule, PolicyData, PolicyRule},
    traits::PolicyStore,
};
use std::{
    fmt,
    sync::Arc,
};
use super::PolicySource;

impl PolicySource {
    /// Logical identity of the source for cache keying; never the
    /// reference identity of the backing value.
    pub fn key(&self) -> String {
        match self {
            PolicySource::Text(text) => format!("text:{text}"),
            PolicySource::Store(store) => format!("store:{}", store.key()),
        }
    }

    pub async fn load(&self) -> Result<PolicyData, BackendError> {
        match self {
            PolicySource::Text(text) => Ok(parse_policy_text(text)),
            PolicySource::Store(store) => store.load().await,
        }
    }
}

/// Parses policy text into rows; lines that do not form a complete row
/// are skipped, matching how the base policies are written with inline
/// comments.
pub fn parse_policy_text(text: &str) -> PolicyData {
    text.lines()
        .map(|line| line
            .split_once('#')
            .map_or(line, |(head, _)| head)
            .split(',')
            .map(str::trim)
            .map(str::to_string)
            .collect::<Vec<_>>()
        )
        .fold(PolicyData::default(), |mut data, fields| {
            match fields.as_slice() {
                [ptype, subject, resource, action] if ptype == "p" => {
                    data.rules.push(PolicyRule {
                        subject: subject.clone(),
                        resource: resource.clone(),
                        action: action.clone(),
                    });
                }
                [ptype, subject, role] if ptype == "g" => {
                    data.groupings.push(GroupingRule {
                        subject: subject.clone(),
                        role: role.clone(),
                    });
                }
                _ => (),
            }
            data
        })
}

impl fmt::Debug for PolicySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PolicySource")
            .field(&self.key())
            .finish()
    }
}

impl From<&str> for PolicySource {
    fn from(text: &str) -> Self {
        PolicySource::Text(text.into())
    }
}

impl From<String> for PolicySource {
    fn from(text: String) -> Self {
        PolicySource::Text(text.into())
    }
}

impl From<Arc<dyn PolicyStore>> for PolicySource {
    fn from(store: Arc<dyn PolicyStore>) -> Self {
        PolicySource::Store(store)
    }
}
