use super::AuthorizationConfig;

impl AuthorizationConfig {
    pub fn new(allow_always_paths: Vec<String>) -> Self {
        Self { allow_always_paths }
    }

    /// Whether the path is exempted from authorization entirely.
    pub fn exempts(&self, path: &str) -> bool {
        self.allow_always_paths
            .iter()
            .any(|entry| match entry.strip_suffix('*') {
                Some(prefix) => path.starts_with(prefix),
                None => entry == path,
            })
    }
}
