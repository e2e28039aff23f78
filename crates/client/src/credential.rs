//! API key resolution

use std::fmt;

/// Bearer credential, resolved once when a client is built.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Resolve from the explicit value, then the named environment variable,
    /// then the fallback. Empty strings count as absent.
    pub fn resolve(explicit: Option<&str>, env_var: &str, fallback: Option<&str>) -> Self {
        Self::resolve_with(explicit, env_var, fallback, |name| std::env::var(name).ok())
    }

    /// Same as [`Credential::resolve`] with an injectable environment lookup
    pub fn resolve_with<F>(
        explicit: Option<&str>,
        env_var: &str,
        fallback: Option<&str>,
        lookup: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = non_empty(explicit.map(str::to_string))
            .or_else(|| non_empty(lookup(env_var)))
            .or_else(|| non_empty(fallback.map(str::to_string)))
            .unwrap_or_default();
        Self(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("Credential(<empty>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}
