use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard};

use crate::app::types::FirebaseApp;

static APPS: LazyLock<Mutex<HashMap<String, FirebaseApp>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub(crate) fn apps_guard() -> MutexGuard<'static, HashMap<String, FirebaseApp>> {
    APPS.lock().unwrap_or_else(|poison| poison.into_inner())
}
