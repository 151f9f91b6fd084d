//! Failure taxonomy for scoped text lookup.
//!
//! One enum covers the whole seam: backing services raise
//! [`LookupError::KeyNotFound`] for absent keys, the resolver adds the
//! combined [`LookupError::NeitherKeyFound`] report, and every other
//! failure kind passes through it untouched. Variants are cheap to clone
//! and compare so tests can assert on whole values.

use thiserror::Error;

/// Error raised when a text lookup cannot satisfy a caller request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The active catalogue has no mapping for the requested key. This is
    /// the only condition that triggers the bare-key fallback.
    #[error("key '{key}' could not be found")]
    KeyNotFound {
        /// Key that had no mapping.
        key: String,
    },
    /// Neither the scope-prefixed key nor the bare key resolved. The
    /// rendered message format is stable; downstream tooling parses it.
    #[error("Neither key '{scoped}' nor '{bare}' could be found")]
    NeitherKeyFound {
        /// Scope-prefixed key attempted first.
        scoped: String,
        /// Bare key attempted second.
        bare: String,
    },
    /// The backing service failed for a reason other than a missing key,
    /// such as malformed catalogue data. Never treated as a miss.
    #[error("lookup backend failed: {detail}")]
    Backend {
        /// Service-provided description of the failure.
        detail: String,
    },
    /// A lookup was attempted on a resolver with no service bound.
    #[error("no lookup service bound for scope '{scope}'")]
    ServiceUnbound {
        /// Scope of the detached resolver.
        scope: String,
    },
    /// A lookup was attempted with an empty key.
    #[error("cannot look up an empty key")]
    EmptyKey,
    /// A lookup was attempted through an empty scope name.
    #[error("cannot scope key '{key}' with an empty scope name")]
    EmptyScope {
        /// Key whose scoped form would have been malformed.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::LookupError;

    #[test]
    fn combined_failure_renders_both_keys() {
        let error = LookupError::NeitherKeyFound {
            scoped: String::from("Pane.fake.key3"),
            bare: String::from("fake.key3"),
        };
        assert_eq!(
            error.to_string(),
            "Neither key 'Pane.fake.key3' nor 'fake.key3' could be found",
        );
    }

    #[test]
    fn missing_key_names_the_key() {
        let error = LookupError::KeyNotFound {
            key: String::from("exit"),
        };
        assert_eq!(error.to_string(), "key 'exit' could not be found");
    }
}
