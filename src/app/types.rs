use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Deserialize;

use crate::app::errors::{AppError, AppResult};

/// Type-erased service instance cached on an app.
pub type DynService = Arc<dyn Any + Send + Sync>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirebaseOptions {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    #[serde(rename = "databaseURL")]
    pub database_url: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub measurement_id: Option<String>,
}

impl FirebaseOptions {
    /// Returns `true` when at least one option has been provided.
    pub fn is_defined(&self) -> bool {
        self.api_key.is_some()
            || self.project_id.is_some()
            || self.app_id.is_some()
            || self.auth_domain.is_some()
            || self.database_url.is_some()
            || self.storage_bucket.is_some()
            || self.messaging_sender_id.is_some()
            || self.measurement_id.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FirebaseAppSettings {
    pub name: Option<String>,
    pub automatic_data_collection_enabled: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirebaseAppConfig {
    pub name: Arc<str>,
    pub automatic_data_collection_enabled: bool,
}

impl FirebaseAppConfig {
    pub fn new(name: impl Into<String>, automatic: bool) -> Self {
        Self {
            name: Arc::from(name.into().into_boxed_str()),
            automatic_data_collection_enabled: automatic,
        }
    }
}

/// Handle to an initialized Firebase application.
///
/// Cloning is cheap; every clone refers to the same app state, so services
/// holding a clone keep that state alive for as long as they exist.
#[derive(Clone)]
pub struct FirebaseApp {
    inner: Arc<FirebaseAppInner>,
}

struct FirebaseAppInner {
    options: FirebaseOptions,
    config: FirebaseAppConfig,
    automatic_data_collection_enabled: Mutex<bool>,
    is_deleted: AtomicBool,
    services: Mutex<HashMap<Arc<str>, DynService>>,
}

impl FirebaseApp {
    pub fn new(options: FirebaseOptions, config: FirebaseAppConfig) -> Self {
        let automatic = config.automatic_data_collection_enabled;
        Self {
            inner: Arc::new(FirebaseAppInner {
                options,
                config,
                automatic_data_collection_enabled: Mutex::new(automatic),
                is_deleted: AtomicBool::new(false),
                services: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.config.name
    }

    pub fn options(&self) -> FirebaseOptions {
        self.inner.options.clone()
    }

    pub fn config(&self) -> FirebaseAppConfig {
        self.inner.config.clone()
    }

    pub fn automatic_data_collection_enabled(&self) -> bool {
        *lock(&self.inner.automatic_data_collection_enabled)
    }

    pub fn set_automatic_data_collection_enabled(&self, value: bool) {
        *lock(&self.inner.automatic_data_collection_enabled) = value;
    }

    pub fn is_deleted(&self) -> bool {
        self.inner.is_deleted.load(Ordering::SeqCst)
    }

    pub(crate) fn set_is_deleted(&self, value: bool) {
        self.inner.is_deleted.store(value, Ordering::SeqCst);
    }

    pub fn check_destroyed(&self) -> AppResult<()> {
        if self.is_deleted() {
            return Err(AppError::AppDeleted {
                app_name: self.name().to_owned(),
            });
        }
        Ok(())
    }

    /// Returns the service cached under `name` when it exists and has type `T`.
    pub fn service<T>(&self, name: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let service = lock(&self.inner.services).get(name).cloned()?;
        service.downcast::<T>().ok()
    }

    /// Returns the service cached under `name`, building and caching it with
    /// `factory` on first access.
    ///
    /// Fails when the app was deleted, or when `name` already holds an entry
    /// of a different type. That entry stays cached.
    pub fn get_or_init_service<T, F>(&self, name: &str, factory: F) -> AppResult<Arc<T>>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        self.check_destroyed()?;
        let mut services = lock(&self.inner.services);
        if let Some(existing) = services.get(name).cloned() {
            return existing
                .downcast::<T>()
                .map_err(|_| AppError::ServiceTypeMismatch {
                    app_name: self.name().to_owned(),
                    service: name.to_owned(),
                });
        }
        let instance = Arc::new(factory());
        services.insert(Arc::from(name), instance.clone() as DynService);
        Ok(instance)
    }

    pub(crate) fn clear_services(&self) {
        lock(&self.inner.services).clear();
    }
}

impl std::fmt::Debug for FirebaseApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseApp")
            .field("name", &self.name())
            .field(
                "automatic_data_collection_enabled",
                &self.automatic_data_collection_enabled(),
            )
            .field("is_deleted", &self.is_deleted())
            .finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poison| poison.into_inner())
}
