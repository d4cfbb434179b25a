use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::app::{AppError, FirebaseApp};
use crate::messaging::error::{internal_error, unsupported_browser, MessagingResult};
use crate::messaging::support::{
    is_supported_with, ExecutionContext, PlatformCapabilities, SupportProbe,
};
use crate::messaging::MessagingDelegate;
use crate::messaging_compat::api::MessagingCompatImpl;
use crate::messaging_compat::constants::MESSAGING_COMPAT_COMPONENT_NAME;

static MESSAGING_COMPAT_REGISTERED: AtomicBool = AtomicBool::new(false);

/// Registers the `messaging-compat` component when `probe` reports support
/// for `context`.
///
/// Returns whether the component is registered afterwards. An unsupported
/// environment registers nothing but leaves an earlier registration in place.
/// Registration is permanent; repeated calls in a supported environment are
/// no-ops returning `true`.
pub fn register_messaging_compat<P>(context: ExecutionContext, probe: &P) -> bool
where
    P: SupportProbe + ?Sized,
{
    if !is_supported_with(context, probe) {
        log::debug!(
            "{MESSAGING_COMPAT_COMPONENT_NAME} not registered: messaging is unsupported in the {context:?} context"
        );
        return is_messaging_compat_registered();
    }

    if !MESSAGING_COMPAT_REGISTERED.swap(true, Ordering::SeqCst) {
        log::debug!("registered {MESSAGING_COMPAT_COMPONENT_NAME} component");
    }
    true
}

/// Registers against the current global scope and its capabilities.
pub fn register_messaging_compat_default() -> bool {
    register_messaging_compat(ExecutionContext::current(), &PlatformCapabilities::detect())
}

pub fn is_messaging_compat_registered() -> bool {
    MESSAGING_COMPAT_REGISTERED.load(Ordering::SeqCst)
}

/// Returns the compat instance for `app` (or the default app), creating it
/// around `delegate` on first access.
///
/// The instance lives in the app's service cache, so later calls for the same
/// app return it and ignore their `delegate` argument. A later call with a
/// different delegate type fails with `messaging/internal` and the cached
/// instance is kept. Deleting the app drops it.
pub async fn get_messaging_compat<M>(
    app: Option<FirebaseApp>,
    delegate: Arc<M>,
) -> MessagingResult<Arc<MessagingCompatImpl<M>>>
where
    M: MessagingDelegate + 'static,
{
    if !is_messaging_compat_registered() {
        return Err(unsupported_browser(
            "This browser doesn't support the API's required to use the Firebase SDK.",
        ));
    }

    let app = match app {
        Some(app) => app,
        None => crate::app::get_app(None)
            .await
            .map_err(|err| internal_error(err.to_string()))?,
    };

    app.get_or_init_service(MESSAGING_COMPAT_COMPONENT_NAME, || {
        MessagingCompatImpl::new(app.clone(), delegate)
    })
    .map_err(|err| match err {
        AppError::ServiceTypeMismatch { .. } => {
            internal_error("messaging-compat already initialised with a different delegate")
        }
        other => internal_error(other.to_string()),
    })
}
