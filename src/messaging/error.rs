use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessagingErrorCode {
    TokenDeletionFailed,
    InvalidArgument,
    Internal,
    PermissionBlocked,
    PermissionDefault,
    AvailableInWindow,
    AvailableInServiceWorker,
    UnsupportedBrowser,
    FailedDefaultRegistration,
    InvalidServiceWorkerRegistration,
    TokenSubscribeFailed,
    TokenUnsubscribeFailed,
}

impl MessagingErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessagingErrorCode::TokenDeletionFailed => "messaging/token-deletion-failed",
            MessagingErrorCode::InvalidArgument => "messaging/invalid-argument",
            MessagingErrorCode::Internal => "messaging/internal",
            MessagingErrorCode::PermissionBlocked => "messaging/permission-blocked",
            MessagingErrorCode::PermissionDefault => "messaging/permission-default",
            MessagingErrorCode::AvailableInWindow => "messaging/only-available-in-window",
            MessagingErrorCode::AvailableInServiceWorker => "messaging/only-available-in-sw",
            MessagingErrorCode::UnsupportedBrowser => "messaging/unsupported-browser",
            MessagingErrorCode::FailedDefaultRegistration => {
                "messaging/failed-service-worker-registration"
            }
            MessagingErrorCode::InvalidServiceWorkerRegistration => {
                "messaging/invalid-sw-registration"
            }
            MessagingErrorCode::TokenSubscribeFailed => "messaging/token-subscribe-failed",
            MessagingErrorCode::TokenUnsubscribeFailed => "messaging/token-unsubscribe-failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessagingError {
    pub code: MessagingErrorCode,
    message: String,
}

impl MessagingError {
    pub fn new(code: MessagingErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for MessagingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for MessagingError {}

pub type MessagingResult<T> = Result<T, MessagingError>;

// Constructors for every code. `MessagingDelegate` implementors build their
// failures with these; the adapter passes them through unchanged.

pub fn invalid_argument(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::InvalidArgument, message)
}

pub fn internal_error(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::Internal, message)
}

pub fn token_deletion_failed(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::TokenDeletionFailed, message)
}

pub fn permission_blocked(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::PermissionBlocked, message)
}

pub fn permission_default(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::PermissionDefault, message)
}

pub fn available_in_window(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::AvailableInWindow, message)
}

pub fn available_in_service_worker(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::AvailableInServiceWorker, message)
}

pub fn unsupported_browser(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::UnsupportedBrowser, message)
}

pub fn failed_default_registration(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::FailedDefaultRegistration, message)
}

pub fn invalid_service_worker_registration(message: impl Into<String>) -> MessagingError {
    MessagingError::new(
        MessagingErrorCode::InvalidServiceWorkerRegistration,
        message,
    )
}

pub fn token_subscribe_failed(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::TokenSubscribeFailed, message)
}

pub fn token_unsubscribe_failed(message: impl Into<String>) -> MessagingError {
    MessagingError::new(MessagingErrorCode::TokenUnsubscribeFailed, message)
}
