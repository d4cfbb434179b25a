//! Modular Firebase Messaging surface.
//!
//! [`MessagingDelegate`] is the seam to the messaging instance; the free
//! functions in this module are the modular calling convention over it.
mod api;
mod delegate;
pub mod error;
mod registration;
pub mod support;
mod types;

pub use api::{
    delete_token, get_token, on_background_message, on_message, set_skip_foreground_notifications,
};
pub use delegate::MessagingDelegate;
pub use registration::ServiceWorkerRegistrationHandle;
pub use support::{
    is_supported, is_supported_with, is_sw_supported, is_window_supported, ExecutionContext,
    PlatformCapabilities, SupportProbe,
};
pub use types::{FcmOptions, GetTokenOptions, MessageHandler, MessagePayload, NotificationPayload};
