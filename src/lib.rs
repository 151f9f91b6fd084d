//! Scope-prefixed text lookup with bare-key fallback.
//!
//! Components owning user-facing text resolve their strings through a
//! [`ScopedLocalizer`] bound to the component's own name. Every key is
//! prefixed with that name before reaching the backing [`Localizer`], so
//! `"title"` asked for by a settings pane queries `"SettingsPane.title"`
//! first and falls back to the bare `"title"` only when the scoped key has
//! no mapping. When both forms are missing, the failure names both keys so
//! the gap in the catalogue is unambiguous.
//!
//! The backing lookup service stays abstract: anything implementing
//! [`Localizer`] works, and the [`testing`] module ships a scripted
//! in-memory double for exercising lookup flows without a real catalogue.
//!
//! # Examples
//!
//! ```
//! use textscope::testing::RecordingLocalizer;
//! use textscope::{ScopeName, ScopedLocalizer};
//!
//! struct SettingsPane;
//!
//! let catalogue = RecordingLocalizer::new().with_message("SettingsPane.title", "Settings");
//! let resolver = ScopedLocalizer::new(&catalogue, ScopeName::of::<SettingsPane>());
//!
//! assert_eq!(resolver.scope_name(), "SettingsPane");
//! assert_eq!(resolver.message("title").as_deref(), Ok("Settings"));
//! ```

pub mod error;
pub mod lookup;
pub mod scope;
pub mod scoped;
pub mod testing;

pub use error::LookupError;
pub use lookup::Localizer;
pub use scope::ScopeName;
pub use scoped::ScopedLocalizer;
