use std::sync::Arc;

use async_trait::async_trait;

use crate::app::FirebaseApp;
use crate::messaging::error::MessagingResult;
use crate::messaging::{self, GetTokenOptions, MessageHandler, MessagingDelegate};
use crate::util::{Compat, Unsubscribe};

/// Instance-style messaging API kept for code written against the namespaced SDK.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait MessagingCompat: Send + Sync {
    fn app(&self) -> &FirebaseApp;

    async fn get_token(&self, options: Option<GetTokenOptions>) -> MessagingResult<String>;

    async fn delete_token(&self) -> MessagingResult<bool>;

    fn on_message(&self, handler: MessageHandler) -> MessagingResult<Unsubscribe>;

    fn on_background_message(&self, handler: MessageHandler) -> MessagingResult<Unsubscribe>;

    fn set_skip_foreground_notifications(&self, skip: bool);
}

/// Forwards every [`MessagingCompat`] call to the modular messaging instance.
///
/// Arguments, results and errors pass through untouched.
pub struct MessagingCompatImpl<M: ?Sized> {
    app: FirebaseApp,
    delegate: Arc<M>,
}

impl<M> MessagingCompatImpl<M>
where
    M: MessagingDelegate + ?Sized,
{
    pub fn new(app: FirebaseApp, delegate: Arc<M>) -> Self {
        log::debug!("creating messaging compat instance for app '{}'", app.name());
        Self { app, delegate }
    }

    pub fn delegate_handle(&self) -> Arc<M> {
        self.delegate.clone()
    }
}

impl<M> Compat<M> for MessagingCompatImpl<M>
where
    M: MessagingDelegate + ?Sized,
{
    fn delegate(&self) -> &M {
        &self.delegate
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<M> MessagingCompat for MessagingCompatImpl<M>
where
    M: MessagingDelegate + ?Sized,
{
    fn app(&self) -> &FirebaseApp {
        &self.app
    }

    async fn get_token(&self, options: Option<GetTokenOptions>) -> MessagingResult<String> {
        messaging::get_token(self.delegate.as_ref(), options).await
    }

    async fn delete_token(&self) -> MessagingResult<bool> {
        messaging::delete_token(self.delegate.as_ref()).await
    }

    fn on_message(&self, handler: MessageHandler) -> MessagingResult<Unsubscribe> {
        messaging::on_message(self.delegate.as_ref(), handler)
    }

    fn on_background_message(&self, handler: MessageHandler) -> MessagingResult<Unsubscribe> {
        messaging::on_background_message(self.delegate.as_ref(), handler)
    }

    fn set_skip_foreground_notifications(&self, skip: bool) {
        messaging::set_skip_foreground_notifications(self.delegate.as_ref(), skip)
    }
}

impl<M: ?Sized> std::fmt::Debug for MessagingCompatImpl<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessagingCompatImpl")
            .field("app", &self.app.name())
            .finish()
    }
}
