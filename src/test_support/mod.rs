//! Test utilities shared across crate-level unit tests.

pub mod firebase;
pub mod messaging;

pub use firebase::{test_app, unique_settings};
pub use messaging::RecordingMessaging;
