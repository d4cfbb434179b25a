//! Namespaced (compat) messaging API.
//!
//! [`MessagingCompatImpl`] wraps a modular [`MessagingDelegate`](crate::messaging::MessagingDelegate)
//! together with its [`FirebaseApp`](crate::app::FirebaseApp) and exposes the
//! legacy instance methods. Each method is a direct forward to the matching
//! function in [`crate::messaging`]; no state, retries or error mapping are
//! added.
//!
//! ```
//! use std::sync::Arc;
//! use firebase_messaging_compat::app::{FirebaseApp, FirebaseAppConfig, FirebaseOptions};
//! use firebase_messaging_compat::messaging::error::MessagingResult;
//! use firebase_messaging_compat::messaging::{GetTokenOptions, MessageHandler, MessagingDelegate};
//! use firebase_messaging_compat::messaging_compat::{MessagingCompat, MessagingCompatImpl};
//! use firebase_messaging_compat::util::Unsubscribe;
//!
//! struct FixedToken;
//!
//! #[async_trait::async_trait]
//! impl MessagingDelegate for FixedToken {
//!     async fn get_token(&self, _options: Option<GetTokenOptions>) -> MessagingResult<String> {
//!         Ok("token".into())
//!     }
//!     async fn delete_token(&self) -> MessagingResult<bool> {
//!         Ok(true)
//!     }
//!     fn on_message(&self, _handler: MessageHandler) -> MessagingResult<Unsubscribe> {
//!         Ok(Unsubscribe::noop())
//!     }
//!     fn on_background_message(&self, _handler: MessageHandler) -> MessagingResult<Unsubscribe> {
//!         Ok(Unsubscribe::noop())
//!     }
//!     fn set_skip_foreground_notifications(&self, _skip: bool) {}
//! }
//!
//! let app = FirebaseApp::new(
//!     FirebaseOptions { project_id: Some("demo".into()), ..Default::default() },
//!     FirebaseAppConfig::new("docs", true),
//! );
//! let messaging = MessagingCompatImpl::new(app, Arc::new(FixedToken));
//! let token = futures::executor::block_on(messaging.get_token(None)).unwrap();
//! assert_eq!(token, "token");
//! ```
mod api;
mod constants;
mod registry;

pub use crate::messaging::support::{is_supported, is_sw_supported, is_window_supported};
pub use api::{MessagingCompat, MessagingCompatImpl};
pub use constants::MESSAGING_COMPAT_COMPONENT_NAME;
pub use registry::{
    get_messaging_compat, is_messaging_compat_registered, register_messaging_compat,
    register_messaging_compat_default,
};
