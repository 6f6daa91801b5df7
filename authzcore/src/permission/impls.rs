use std::{
    collections::HashSet,
    hash::Hash,
};
use super::{EffectivePermissionSet, UserPermission};

impl<T: Clone + Eq + Hash> EffectivePermissionSet<T> {
    /// Merge role-derived permissions with actor-level overrides.
    ///
    /// The role permissions form the base set; every override is then
    /// applied on top, so override semantics win regardless of input
    /// ordering.  An `allowed` override adds the permission, a denied
    /// one removes it if present.
    pub fn merge(
        overrides: &[UserPermission<T>],
        role_permissions: &[T],
    ) -> Self {
        let mut result = role_permissions
            .iter()
            .cloned()
            .collect::<HashSet<_>>();
        for UserPermission { permission, allowed } in overrides.iter() {
            if *allowed {
                result.insert(permission.clone());
            } else {
                result.remove(permission);
            }
        }
        Self(result)
    }

    pub fn contains(&self, permission: &T) -> bool {
        self.0.contains(permission)
    }

    /// True when at least one of the required permissions is effective.
    pub fn intersects<'a>(
        &self,
        required: impl IntoIterator<Item = &'a T>,
    ) -> bool
    where
        T: 'a,
    {
        required.into_iter().any(|p| self.0.contains(p))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// set equality needs the `Hash` bound the inner `HashSet` comparison
// requires, so these are written out rather than derived
impl<T: Eq + Hash> PartialEq for EffectivePermissionSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq + Hash> Eq for EffectivePermissionSet<T> {}

impl<T: Eq + Hash> FromIterator<T> for EffectivePermissionSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> From<EffectivePermissionSet<T>> for HashSet<T> {
    fn from(set: EffectivePermissionSet<T>) -> Self {
        set.0
    }
}

impl<T> UserPermission<T> {
    pub fn allow(permission: T) -> Self {
        Self { permission, allowed: true }
    }

    pub fn deny(permission: T) -> Self {
        Self { permission, allowed: false }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn merge_set_algebra() {
        // merge(O, R) == (R ∪ allows) \ denies
        let role = keys(&["read", "write", "delete"]);
        let overrides = vec![
            UserPermission::allow("create".to_string()),
            UserPermission::deny("delete".to_string()),
        ];
        let result = EffectivePermissionSet::merge(&overrides, &role);
        assert!(result.contains(&"read".to_string()));
        assert!(result.contains(&"write".to_string()));
        assert!(result.contains(&"create".to_string()));
        assert!(!result.contains(&"delete".to_string()));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn merge_override_precedence() {
        let role = keys(&["read"]);
        let overrides = vec![
            UserPermission::deny("read".to_string()),
            UserPermission::allow("write".to_string()),
        ];
        let result = EffectivePermissionSet::merge(&overrides, &role);
        assert_eq!(
            result,
            ["write".to_string()].into_iter().collect(),
        );
    }

    #[test]
    fn set_equality() {
        // insertion order does not matter, membership does
        let a: EffectivePermissionSet<String> =
            keys(&["read", "write"]).into_iter().collect();
        let b: EffectivePermissionSet<String> =
            keys(&["write", "read"]).into_iter().collect();
        let c: EffectivePermissionSet<String> =
            keys(&["read"]).into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn merge_deterministic() {
        let role = keys(&["read", "write"]);
        let overrides = vec![
            UserPermission::deny("write".to_string()),
            UserPermission::allow("admin".to_string()),
        ];
        assert_eq!(
            EffectivePermissionSet::merge(&overrides, &role),
            EffectivePermissionSet::merge(&overrides, &role),
        );
    }

    #[test]
    fn merge_allow_is_idempotent_on_role_grant() {
        // an allow override for something the role already grants must
        // not duplicate nor otherwise disturb the set
        let role = keys(&["read"]);
        let overrides = vec![UserPermission::allow("read".to_string())];
        let result = EffectivePermissionSet::merge(&overrides, &role);
        assert_eq!(result.len(), 1);
        assert!(result.contains(&"read".to_string()));
    }

    #[test]
    fn merge_empty_inputs() {
        let empty: Vec<String> = Vec::new();
        let no_overrides: Vec<UserPermission<String>> = Vec::new();
        assert!(EffectivePermissionSet::merge(&no_overrides, &empty).is_empty());

        let role = keys(&["read"]);
        let result = EffectivePermissionSet::merge(&no_overrides, &role);
        assert_eq!(result.len(), 1);

        let overrides = vec![UserPermission::deny("read".to_string())];
        assert!(EffectivePermissionSet::merge(&overrides, &empty).is_empty());
    }

    #[test]
    fn intersects() {
        let role = keys(&["write"]);
        let no_overrides: Vec<UserPermission<String>> = Vec::new();
        let result = EffectivePermissionSet::merge(&no_overrides, &role);
        assert!(result.intersects(&keys(&["read", "write"])));
        assert!(!result.intersects(&keys(&["admin"])));
        assert!(!result.intersects(&[]));
    }
}
