//! Modular entry points: free functions taking the messaging instance first.

use crate::messaging::delegate::MessagingDelegate;
use crate::messaging::error::MessagingResult;
use crate::messaging::types::{GetTokenOptions, MessageHandler};
use crate::util::Unsubscribe;

/// Subscribes the app instance to FCM and returns its registration token.
///
/// Failures (blocked permission, missing registration, network errors) come
/// from the messaging instance as-is.
pub async fn get_token<M>(messaging: &M, options: Option<GetTokenOptions>) -> MessagingResult<String>
where
    M: MessagingDelegate + ?Sized,
{
    messaging.get_token(options).await
}

pub async fn delete_token<M>(messaging: &M) -> MessagingResult<bool>
where
    M: MessagingDelegate + ?Sized,
{
    messaging.delete_token().await
}

/// Registers `handler` for foreground messages. The returned handle detaches it.
pub fn on_message<M>(messaging: &M, handler: impl Into<MessageHandler>) -> MessagingResult<Unsubscribe>
where
    M: MessagingDelegate + ?Sized,
{
    messaging.on_message(handler.into())
}

pub fn on_background_message<M>(
    messaging: &M,
    handler: impl Into<MessageHandler>,
) -> MessagingResult<Unsubscribe>
where
    M: MessagingDelegate + ?Sized,
{
    messaging.on_background_message(handler.into())
}

pub fn set_skip_foreground_notifications<M>(messaging: &M, skip: bool)
where
    M: MessagingDelegate + ?Sized,
{
    messaging.set_skip_foreground_notifications(skip)
}
