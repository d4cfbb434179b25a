use async_trait::async_trait;

use crate::messaging::error::MessagingResult;
use crate::messaging::types::{GetTokenOptions, MessageHandler};
use crate::util::Unsubscribe;

/// The modular messaging instance.
///
/// Implementors own token lifecycle, push subscriptions, service worker
/// messaging and registration storage. Everything in this crate reaches that
/// behaviour through this trait.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait MessagingDelegate: Send + Sync {
    /// Resolves to the FCM registration token for this app instance.
    async fn get_token(&self, options: Option<GetTokenOptions>) -> MessagingResult<String>;

    /// Deletes the current registration token; resolves to `true` on success.
    async fn delete_token(&self) -> MessagingResult<bool>;

    /// Registers a foreground message handler.
    fn on_message(&self, handler: MessageHandler) -> MessagingResult<Unsubscribe>;

    /// Registers a handler for messages received while the app runs in the
    /// background (service worker context).
    fn on_background_message(&self, handler: MessageHandler) -> MessagingResult<Unsubscribe>;

    fn set_skip_foreground_notifications(&self, skip: bool);
}
