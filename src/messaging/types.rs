use std::collections::HashMap;

use crate::messaging::registration::ServiceWorkerRegistrationHandle;
use crate::util::NextOrObserver;

/// Payload displayed to the user when a notification is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
}

/// Additional FCM options for a payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FcmOptions {
    pub link: Option<String>,
    pub analytics_label: Option<String>,
}

/// Message data delivered by Firebase Cloud Messaging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessagePayload {
    pub notification: Option<NotificationPayload>,
    pub data: Option<HashMap<String, String>>,
    pub fcm_options: Option<FcmOptions>,
    pub from: Option<String>,
    pub collapse_key: Option<String>,
    pub message_id: Option<String>,
}

/// Options accepted by `get_token`.
#[derive(Clone, Debug, Default)]
pub struct GetTokenOptions {
    /// Public VAPID key used to subscribe to push.
    pub vapid_key: Option<String>,
    /// Registration to subscribe with instead of the default messaging worker.
    pub service_worker_registration: Option<ServiceWorkerRegistrationHandle>,
}

impl GetTokenOptions {
    pub fn with_vapid_key(vapid_key: impl Into<String>) -> Self {
        Self {
            vapid_key: Some(vapid_key.into()),
            service_worker_registration: None,
        }
    }
}

pub type MessageHandler = NextOrObserver<MessagePayload>;
