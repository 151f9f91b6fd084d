//! Scripted lookup doubles for exercising resolver behaviour.
//!
//! Shared across this crate's tests and available to downstream users so
//! lookup flows can be exercised without a real catalogue. The double
//! records every requested key, allowing call-order and call-count
//! assertions such as "a scoped hit never queries the bare key".

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::LookupError;
use crate::lookup::Localizer;

/// In-memory lookup service with scripted responses and a request log.
///
/// Keys without a scripted response report [`LookupError::KeyNotFound`],
/// so an unscripted double doubles as an always-missing catalogue.
#[derive(Debug, Default)]
pub struct RecordingLocalizer {
    responses: HashMap<String, Result<String, LookupError>>,
    requests: Mutex<Vec<String>>,
}

impl RecordingLocalizer {
    /// Creates a double with no scripted responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful response for `key`.
    #[must_use]
    pub fn with_message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.responses.insert(key.into(), Ok(text.into()));
        self
    }

    /// Scripts a failure for `key`.
    #[must_use]
    pub fn with_failure(mut self, key: impl Into<String>, error: LookupError) -> Self {
        self.responses.insert(key.into(), Err(error));
        self
    }

    /// Returns every key requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.request_log().clone()
    }

    /// Returns how many requests the double has served.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.request_log().len()
    }

    fn request_log(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Localizer for RecordingLocalizer {
    fn message(&self, key: &str) -> Result<String, LookupError> {
        self.request_log().push(key.to_owned());
        self.responses.get(key).cloned().unwrap_or_else(|| {
            Err(LookupError::KeyNotFound {
                key: key.to_owned(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RecordingLocalizer;
    use crate::error::LookupError;
    use crate::lookup::Localizer;

    #[test]
    fn unscripted_keys_report_key_not_found() {
        let double = RecordingLocalizer::new();
        assert_eq!(
            double.message("absent"),
            Err(LookupError::KeyNotFound {
                key: String::from("absent"),
            }),
        );
    }

    #[test]
    fn scripted_responses_are_replayed_and_recorded() {
        let double = RecordingLocalizer::new()
            .with_message("greeting", "hello")
            .with_failure(
                "broken",
                LookupError::Backend {
                    detail: String::from("catalogue truncated"),
                },
            );

        assert_eq!(double.message("greeting"), Ok(String::from("hello")));
        assert_eq!(
            double.message("broken"),
            Err(LookupError::Backend {
                detail: String::from("catalogue truncated"),
            }),
        );
        assert_eq!(double.requests(), vec!["greeting", "broken"]);
        assert_eq!(double.request_count(), 2);
    }
}
