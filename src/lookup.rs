//! Contract for the text lookup services a resolver decorates.

use crate::error::LookupError;

/// Resolves string keys to localised text.
///
/// Implementations may read embedded catalogues, files, or any other
/// source; the scoped resolver relies only on the error contract: an
/// absent key must surface as [`LookupError::KeyNotFound`], and any other
/// failure must use a different variant so it is never mistaken for a
/// miss. The trait is object-safe and bounds `Send + Sync`, so services
/// can be shared behind `&dyn Localizer` across threads.
pub trait Localizer: Send + Sync {
    /// Returns the text mapped to `key` in the active locale.
    fn message(&self, key: &str) -> Result<String, LookupError>;
}
