//! Scope identities used to prefix lookup keys.
//!
//! A scope names the component a resolver answers for. Explicit names are
//! stored verbatim; [`ScopeName::of`] derives the short type name at the
//! call site so a component can identify itself without repeating its own
//! name as a string literal.

use std::any::type_name;
use std::fmt;

/// Immutable identity used to prefix lookup keys.
///
/// Fixed at construction and never recomputed afterwards.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ScopeName(String);

impl ScopeName {
    /// Creates a scope carrying `name` verbatim, without validation.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derives the scope from the short, unqualified name of `T`.
    ///
    /// Module paths and generic arguments are stripped, so a
    /// `config::Pane<u8>` yields `"Pane"`. A component typically names
    /// itself with `ScopeName::of::<Self>()` while constructing its
    /// resolver. Derived names are never empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use textscope::ScopeName;
    ///
    /// struct SettingsPane;
    ///
    /// assert_eq!(ScopeName::of::<SettingsPane>().as_str(), "SettingsPane");
    /// assert_eq!(ScopeName::of::<Vec<String>>().as_str(), "Vec");
    /// ```
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self(short_type_name(type_name::<T>()).to_owned())
    }

    /// Returns the scope as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the scope is empty. Only explicit names can be.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the composite form of `key`: `scope + "." + key`.
    #[must_use]
    pub fn qualify(&self, key: &str) -> String {
        format!("{}.{key}", self.0)
    }
}

impl fmt::Display for ScopeName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for ScopeName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for ScopeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Strips generic arguments, then module paths, from a fully qualified
/// type name.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
