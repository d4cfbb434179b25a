//! Application handle shared by every service.
//!
//! A [`FirebaseApp`] carries the project options and caches service instances
//! (such as the messaging compat adapter) for its lifetime.
pub mod api;
mod constants;
mod errors;
mod registry;
mod types;

#[doc(inline)]
pub use api::{delete_app, get_app, get_apps, initialize_app, SDK_VERSION};

#[doc(inline)]
pub use constants::DEFAULT_ENTRY_NAME;

#[doc(inline)]
pub use errors::{AppError, AppResult};

#[doc(inline)]
pub use types::{DynService, FirebaseApp, FirebaseAppConfig, FirebaseAppSettings, FirebaseOptions};
