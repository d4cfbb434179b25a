use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::messaging::error::{MessagingError, MessagingResult};
use crate::messaging::{GetTokenOptions, MessageHandler, MessagePayload, MessagingDelegate};
use crate::util::Unsubscribe;

type Handlers = Arc<Mutex<HashMap<usize, MessageHandler>>>;

/// Messaging instance that returns scripted results and records every call.
pub struct RecordingMessaging {
    token_result: Mutex<MessagingResult<String>>,
    delete_result: Mutex<MessagingResult<bool>>,
    registration_error: Mutex<Option<MessagingError>>,
    get_token_options: Mutex<Vec<Option<GetTokenOptions>>>,
    delete_token_calls: AtomicUsize,
    on_message_calls: AtomicUsize,
    on_background_message_calls: AtomicUsize,
    removals: Arc<AtomicUsize>,
    next_id: AtomicUsize,
    foreground: Handlers,
    background: Handlers,
    skip_foreground: Mutex<Option<bool>>,
}

impl RecordingMessaging {
    pub fn new() -> Self {
        Self {
            token_result: Mutex::new(Ok("test-token".into())),
            delete_result: Mutex::new(Ok(true)),
            registration_error: Mutex::new(None),
            get_token_options: Mutex::new(Vec::new()),
            delete_token_calls: AtomicUsize::new(0),
            on_message_calls: AtomicUsize::new(0),
            on_background_message_calls: AtomicUsize::new(0),
            removals: Arc::new(AtomicUsize::new(0)),
            next_id: AtomicUsize::new(1),
            foreground: Arc::new(Mutex::new(HashMap::new())),
            background: Arc::new(Mutex::new(HashMap::new())),
            skip_foreground: Mutex::new(None),
        }
    }

    pub fn set_token_result(&self, result: MessagingResult<String>) {
        *self.token_result.lock().unwrap() = result;
    }

    pub fn set_delete_result(&self, result: MessagingResult<bool>) {
        *self.delete_result.lock().unwrap() = result;
    }

    pub fn fail_registrations_with(&self, error: MessagingError) {
        *self.registration_error.lock().unwrap() = Some(error);
    }

    /// Options passed to the most recent `get_token` call; `None` if never called.
    pub fn last_get_token_options(&self) -> Option<Option<GetTokenOptions>> {
        self.get_token_options.lock().unwrap().last().cloned()
    }

    pub fn get_token_calls(&self) -> usize {
        self.get_token_options.lock().unwrap().len()
    }

    pub fn delete_token_calls(&self) -> usize {
        self.delete_token_calls.load(Ordering::SeqCst)
    }

    pub fn on_message_calls(&self) -> usize {
        self.on_message_calls.load(Ordering::SeqCst)
    }

    pub fn on_background_message_calls(&self) -> usize {
        self.on_background_message_calls.load(Ordering::SeqCst)
    }

    /// Number of handlers removed through their unsubscribe handles.
    pub fn removals(&self) -> usize {
        self.removals.load(Ordering::SeqCst)
    }

    pub fn skip_foreground_notifications(&self) -> Option<bool> {
        *self.skip_foreground.lock().unwrap()
    }

    pub fn dispatch_message(&self, payload: &MessagePayload) {
        dispatch(&self.foreground, payload);
    }

    pub fn dispatch_background_message(&self, payload: &MessagePayload) {
        dispatch(&self.background, payload);
    }

    fn register(&self, handlers: &Handlers, handler: MessageHandler) -> MessagingResult<Unsubscribe> {
        if let Some(error) = self.registration_error.lock().unwrap().clone() {
            return Err(error);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        handlers.lock().unwrap().insert(id, handler);

        let handlers = handlers.clone();
        let removals = self.removals.clone();
        Ok(Unsubscribe::new(move || {
            if handlers.lock().unwrap().remove(&id).is_some() {
                removals.fetch_add(1, Ordering::SeqCst);
            }
        }))
    }
}

fn dispatch(handlers: &Handlers, payload: &MessagePayload) {
    let snapshot: Vec<MessageHandler> = handlers.lock().unwrap().values().cloned().collect();
    for handler in snapshot {
        handler.next(payload);
    }
}

impl Default for RecordingMessaging {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl MessagingDelegate for RecordingMessaging {
    async fn get_token(&self, options: Option<GetTokenOptions>) -> MessagingResult<String> {
        self.get_token_options.lock().unwrap().push(options);
        self.token_result.lock().unwrap().clone()
    }

    async fn delete_token(&self) -> MessagingResult<bool> {
        self.delete_token_calls.fetch_add(1, Ordering::SeqCst);
        self.delete_result.lock().unwrap().clone()
    }

    fn on_message(&self, handler: MessageHandler) -> MessagingResult<Unsubscribe> {
        self.on_message_calls.fetch_add(1, Ordering::SeqCst);
        self.register(&self.foreground, handler)
    }

    fn on_background_message(&self, handler: MessageHandler) -> MessagingResult<Unsubscribe> {
        self.on_background_message_calls.fetch_add(1, Ordering::SeqCst);
        self.register(&self.background, handler)
    }

    fn set_skip_foreground_notifications(&self, skip: bool) {
        *self.skip_foreground.lock().unwrap() = Some(skip);
    }
}
