use std::sync::atomic::{AtomicUsize, Ordering};

use crate::app::{FirebaseApp, FirebaseAppConfig, FirebaseAppSettings, FirebaseOptions};

/// Build a standalone Firebase app for use in tests.
///
/// The app is not registered globally, so tests stay isolated from each other.
pub fn test_app(name: &str) -> FirebaseApp {
    let options = FirebaseOptions {
        api_key: Some("test-key".into()),
        project_id: Some("test-project".into()),
        messaging_sender_id: Some("1234567890".into()),
        ..Default::default()
    };
    FirebaseApp::new(options, FirebaseAppConfig::new(name, false))
}

/// Settings with a name unique to this test process.
pub fn unique_settings(prefix: &str) -> FirebaseAppSettings {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    FirebaseAppSettings {
        name: Some(format!("{}-{}", prefix, COUNTER.fetch_add(1, Ordering::SeqCst))),
        ..Default::default()
    }
}
