//! The scoped resolver decorating a text lookup service.
//!
//! [`ScopedLocalizer`] prefixes every requested key with its scope name
//! before querying the backing service, falling back to the bare key when
//! the scoped form has no mapping. A hit on the scoped key never queries
//! the bare key; a miss on both yields [`LookupError::NeitherKeyFound`]
//! naming the exact keys attempted. Failures other than a missing key
//! pass through untouched.

use std::fmt;

use log::debug;

use crate::error::LookupError;
use crate::lookup::Localizer;
use crate::scope::ScopeName;

const LOG_TARGET: &str = "textscope::scoped";

/// Text lookup bound to the identity of its owning component.
///
/// Immutable after construction: the scope and the service binding never
/// change, so a shared reference can serve lookups from any thread, the
/// backing service's own read-safety permitting. The service is borrowed,
/// not owned; its lifetime is the caller's responsibility.
#[derive(Clone)]
pub struct ScopedLocalizer<'a> {
    scope: ScopeName,
    service: Option<&'a dyn Localizer>,
}

impl<'a> ScopedLocalizer<'a> {
    /// Binds a resolver for `scope` to `service`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textscope::testing::RecordingLocalizer;
    /// use textscope::{ScopeName, ScopedLocalizer};
    ///
    /// struct SettingsPane;
    ///
    /// let catalogue = RecordingLocalizer::new()
    ///     .with_message("SettingsPane.title", "Settings")
    ///     .with_message("cancel", "Cancel");
    /// let resolver = ScopedLocalizer::new(&catalogue, ScopeName::of::<SettingsPane>());
    ///
    /// assert_eq!(resolver.message("title").as_deref(), Ok("Settings"));
    /// assert_eq!(resolver.message("cancel").as_deref(), Ok("Cancel"));
    /// ```
    #[must_use]
    pub fn new(service: &'a dyn Localizer, scope: impl Into<ScopeName>) -> Self {
        Self {
            scope: scope.into(),
            service: Some(service),
        }
    }

    /// Creates a resolver with no service bound.
    ///
    /// Only the scope-name accessor is usable; [`Self::message`] reports
    /// [`LookupError::ServiceUnbound`].
    #[must_use]
    pub fn detached(scope: impl Into<ScopeName>) -> Self {
        Self {
            scope: scope.into(),
            service: None,
        }
    }

    /// Returns the scope this resolver prefixes keys with.
    #[must_use]
    pub fn scope_name(&self) -> &str {
        self.scope.as_str()
    }

    /// Resolves `key`, preferring its scope-prefixed form.
    ///
    /// The composite `scope.key` is queried first; when, and only when,
    /// the service reports it missing, the bare `key` is tried. A miss on
    /// both yields [`LookupError::NeitherKeyFound`] carrying both key
    /// strings. Any other service failure propagates unchanged at
    /// whichever step it occurs.
    ///
    /// Empty keys and empty scopes are refused outright rather than
    /// composed into a malformed lookup, and a detached resolver refuses
    /// every lookup.
    pub fn message(&self, key: &str) -> Result<String, LookupError> {
        let Some(service) = self.service else {
            return Err(LookupError::ServiceUnbound {
                scope: self.scope.as_str().to_owned(),
            });
        };
        if key.is_empty() {
            return Err(LookupError::EmptyKey);
        }
        if self.scope.is_empty() {
            return Err(LookupError::EmptyScope {
                key: key.to_owned(),
            });
        }

        let scoped = self.scope.qualify(key);
        match service.message(&scoped) {
            Err(LookupError::KeyNotFound { .. }) => {}
            resolved => return resolved,
        }

        debug!(
            target: LOG_TARGET,
            "key `{scoped}` has no mapping; retrying bare key `{key}`",
        );

        match service.message(key) {
            Err(LookupError::KeyNotFound { .. }) => {
                debug!(target: LOG_TARGET, "bare key `{key}` has no mapping either");
                Err(LookupError::NeitherKeyFound {
                    scoped,
                    bare: key.to_owned(),
                })
            }
            resolved => resolved,
        }
    }
}

impl Localizer for ScopedLocalizer<'_> {
    fn message(&self, key: &str) -> Result<String, LookupError> {
        ScopedLocalizer::message(self, key)
    }
}

impl fmt::Debug for ScopedLocalizer<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ScopedLocalizer")
            .field("scope", &self.scope)
            .field("bound", &self.service.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ScopedLocalizer;
    use crate::error::LookupError;
    use crate::scope::ScopeName;
    use crate::testing::RecordingLocalizer;

    struct Pane;

    #[test]
    fn reports_an_explicit_scope_verbatim() {
        let resolver = ScopedLocalizer::detached("foobar");
        assert_eq!(resolver.scope_name(), "foobar");
    }

    #[test]
    fn reports_a_derived_scope_by_short_name() {
        let resolver = ScopedLocalizer::detached(ScopeName::of::<Pane>());
        assert_eq!(resolver.scope_name(), "Pane");
    }

    #[test]
    fn refuses_lookups_when_detached() {
        let resolver = ScopedLocalizer::detached("Pane");
        assert_eq!(
            resolver.message("k1"),
            Err(LookupError::ServiceUnbound {
                scope: String::from("Pane"),
            }),
        );
    }

    #[test]
    fn refuses_an_empty_key_before_querying() {
        let catalogue = RecordingLocalizer::new();
        let resolver = ScopedLocalizer::new(&catalogue, "Pane");
        assert_eq!(resolver.message(""), Err(LookupError::EmptyKey));
        assert_eq!(catalogue.request_count(), 0);
    }

    #[test]
    fn refuses_an_empty_scope_before_querying() {
        let catalogue = RecordingLocalizer::new();
        let resolver = ScopedLocalizer::new(&catalogue, "");
        assert_eq!(
            resolver.message("k1"),
            Err(LookupError::EmptyScope {
                key: String::from("k1"),
            }),
        );
        assert_eq!(catalogue.request_count(), 0);
    }

    #[test]
    fn debug_output_names_the_scope_without_the_service() {
        let resolver = ScopedLocalizer::detached("Pane");
        let rendered = format!("{resolver:?}");
        assert!(rendered.contains("Pane"));
        assert!(rendered.contains("bound: false"));
    }
}
