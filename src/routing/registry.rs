use serde::Serialize;

pub const DEFAULT_FALLBACK_VIEW: &str = "views/template/Common.vue";

pub const BUILTIN_VIEWS: &[&str] = &[
    "views/template/system/Users.vue",
    "views/template/system/Roles.vue",
    "views/template/system/Permissions.vue",
    "views/template/jobs/JobList.vue",
    "views/template/jobs/Categories.vue",
    "views/template/resume/Library.vue",
    "views/template/resume/Parse.vue",
    "views/template/company/CompanyList.vue",
    "views/template/company/Auth.vue",
    "views/template/statistics/UserStats.vue",
    "views/template/statistics/BusinessStats.vue",
];

/// Reference to a loadable view module in a [`ViewRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ViewHandle {
    pub key: String,
    pub fallback: bool,
}

impl ViewHandle {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// Ordered catalogue of view module keys with exactly one designated fallback entry.
///
/// Enumeration order is registration order; fuzzy lookups return the first hit in that
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRegistry {
    keys: Vec<String>,
    fallback: String,
}

impl ViewRegistry {
    pub fn new<I, K>(keys: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut registry = Self {
            keys: Vec::new(),
            fallback: fallback.into(),
        };
        for key in keys {
            registry.register(key);
        }
        let fallback = registry.fallback.clone();
        registry.register(fallback);
        registry
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_VIEWS.iter().copied(), DEFAULT_FALLBACK_VIEW)
    }

    /// Adds a module key; re-registering an existing key keeps its first position.
    pub fn register(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if key.trim().is_empty() || self.keys.iter().any(|existing| *existing == key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|existing| existing == key)
    }

    pub fn fallback(&self) -> ViewHandle {
        ViewHandle {
            key: self.fallback.clone(),
            fallback: true,
        }
    }

    pub fn handle(&self, key: &str) -> Option<ViewHandle> {
        self.contains(key).then(|| ViewHandle {
            key: key.to_string(),
            fallback: key == self.fallback,
        })
    }
}

/// `views/system/Users.vue` -> `views/system/Users`. Only the final segment's extension
/// is removed.
pub fn key_stem(key: &str) -> &str {
    let name_start = key.rfind('/').map(|i| i + 1).unwrap_or(0);
    match key[name_start..].rfind('.') {
        Some(dot) if dot > 0 => &key[..name_start + dot],
        _ => key,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Key equals the candidate.
    Exact,
    /// Key, with or without its extension, is the candidate or ends with `/<candidate>`.
    /// A leading `/` on the candidate is ignored.
    Suffix,
    /// Key contains the candidate anywhere, or ends with `/<candidate>.<ext>`.
    Fuzzy,
}

impl MatchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Suffix => "suffix",
            Self::Fuzzy => "fuzzy",
        }
    }

    fn matches(self, key: &str, candidate: &str) -> bool {
        if self == Self::Exact {
            return key == candidate;
        }
        let candidate = candidate.trim_start_matches('/');
        if candidate.is_empty() {
            return false;
        }
        let ends_with_segment = |target: &str| {
            target == candidate
                || target
                    .strip_suffix(candidate)
                    .is_some_and(|head| head.ends_with('/'))
        };
        let suffix = ends_with_segment(key) || ends_with_segment(key_stem(key));
        match self {
            Self::Suffix => suffix,
            _ => suffix || key.contains(candidate),
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lookup policy over a [`ViewRegistry`].
pub trait ViewLookup {
    fn lookup(&self, registry: &ViewRegistry, candidate: &str) -> Option<ViewHandle>;
}

impl ViewLookup for MatchStrategy {
    fn lookup(&self, registry: &ViewRegistry, candidate: &str) -> Option<ViewHandle> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return None;
        }
        registry
            .keys()
            .find(|key| self.matches(key, candidate))
            .and_then(|key| registry.handle(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_stem_strips_only_final_extension() {
        assert_eq!(key_stem("views/a.b/Users.vue"), "views/a.b/Users");
        assert_eq!(key_stem("views/a.b/Users"), "views/a.b/Users");
        assert_eq!(key_stem(".hidden"), ".hidden");
    }

    #[test]
    fn suffix_requires_a_segment_boundary() {
        assert!(MatchStrategy::Suffix.matches("views/system/Users.vue", "system/Users"));
        assert!(!MatchStrategy::Suffix.matches("views/system/PowerUsers.vue", "Users"));
        assert!(MatchStrategy::Fuzzy.matches("views/system/PowerUsers.vue", "Users"));
    }

    #[test]
    fn suffix_accepts_extension_and_leading_slash() {
        let key = "views/template/system/Users.vue";
        assert!(MatchStrategy::Suffix.matches(key, "system/Users.vue"));
        assert!(MatchStrategy::Suffix.matches(key, "template/system/Users.vue"));
        assert!(MatchStrategy::Suffix.matches(key, "/system/Users"));
        assert!(MatchStrategy::Suffix.matches(key, key));
        assert!(!MatchStrategy::Suffix.matches(key, "stem/Users.vue"));
        assert!(!MatchStrategy::Suffix.matches(key, "/"));
        assert!(!MatchStrategy::Exact.matches(key, "/views/template/system/Users.vue"));
    }

    #[test]
    fn fallback_is_registered_once() {
        let registry = ViewRegistry::new(
            ["views/Common.vue", "views/a/B.vue", "views/Common.vue"],
            "views/Common.vue",
        );
        assert_eq!(registry.len(), 2);
        assert!(registry.handle("views/Common.vue").is_some_and(|h| h.fallback));
    }

    #[test]
    fn empty_candidate_never_matches() {
        let registry = ViewRegistry::builtin();
        assert_eq!(MatchStrategy::Fuzzy.lookup(&registry, "  "), None);
    }
}
