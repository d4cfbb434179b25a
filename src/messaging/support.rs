//! Environment capability checks for Firebase Messaging.
//!
//! Messaging works only where the Notification and Push APIs exist. The checks
//! run against a [`PlatformCapabilities`] snapshot and an explicit
//! [`ExecutionContext`], so they stay pure; [`is_supported`] builds both from
//! the host. IndexedDB is checked for presence only and never opened, which
//! keeps every probe synchronous. Storage that exists but is blocked (private
//! browsing, for instance) still reports as supported.
//!
//! Outside a `wasm-web` build the host snapshot is empty and every probe
//! reports `false`.

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
use js_sys::Reflect;
#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
use wasm_bindgen::{JsCast, JsValue};

/// The kind of global scope the code runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionContext {
    Window,
    ServiceWorker,
}

impl ExecutionContext {
    /// Resolves the context of the current global scope.
    ///
    /// Anything that is not a `ServiceWorkerGlobalScope` counts as a window.
    pub fn current() -> Self {
        #[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
        {
            let global = JsValue::from(js_sys::global());
            if property_in(&global, "ServiceWorkerGlobalScope") {
                return ExecutionContext::ServiceWorker;
            }
        }
        ExecutionContext::Window
    }
}

/// Presence of the host features messaging depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlatformCapabilities {
    /// A `window` global exists.
    pub window: bool,
    /// `indexedDB` is exposed on the global scope.
    pub indexed_db: bool,
    /// `navigator.cookieEnabled` is true.
    pub cookies_enabled: bool,
    /// `navigator.serviceWorker` exists.
    pub service_worker: bool,
    pub push_manager: bool,
    pub notification: bool,
    pub fetch: bool,
    /// `ServiceWorkerRegistration.prototype.showNotification` exists.
    pub show_notification: bool,
    /// `PushSubscription.prototype.getKey` exists.
    pub push_subscription_get_key: bool,
}

impl PlatformCapabilities {
    /// Reads the capabilities of the current global scope.
    #[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
    pub fn detect() -> Self {
        let global = JsValue::from(js_sys::global());
        let navigator = Reflect::get(&global, &JsValue::from_str("navigator"))
            .ok()
            .filter(|value| value.is_object());

        let cookies_enabled = navigator
            .as_ref()
            .and_then(|nav| Reflect::get(nav, &JsValue::from_str("cookieEnabled")).ok())
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        let service_worker = navigator
            .as_ref()
            .map(|nav| property_in(nav, "serviceWorker"))
            .unwrap_or(false);
        let indexed_db = Reflect::get(&global, &JsValue::from_str("indexedDB"))
            .map(|value| value.is_object())
            .unwrap_or(false);

        Self {
            window: web_sys::window().is_some(),
            indexed_db,
            cookies_enabled,
            service_worker,
            push_manager: property_in(&global, "PushManager"),
            notification: property_in(&global, "Notification"),
            fetch: property_in(&global, "fetch"),
            show_notification: prototype_has_property(
                &global,
                "ServiceWorkerRegistration",
                "showNotification",
            ),
            push_subscription_get_key: prototype_has_property(&global, "PushSubscription", "getKey"),
        }
    }

    /// Reports every capability as absent.
    #[cfg(not(all(feature = "wasm-web", target_arch = "wasm32")))]
    pub fn detect() -> Self {
        Self::default()
    }
}

/// A pair of environment probes, one per execution context.
pub trait SupportProbe {
    fn window_supported(&self) -> bool;
    fn sw_supported(&self) -> bool;
}

impl SupportProbe for PlatformCapabilities {
    fn window_supported(&self) -> bool {
        is_window_supported(self)
    }

    fn sw_supported(&self) -> bool {
        is_sw_supported(self)
    }
}

/// Returns `true` when a window context exposes everything messaging needs.
pub fn is_window_supported(capabilities: &PlatformCapabilities) -> bool {
    capabilities.window
        && capabilities.indexed_db
        && capabilities.cookies_enabled
        && capabilities.service_worker
        && capabilities.push_manager
        && capabilities.notification
        && capabilities.fetch
        && capabilities.show_notification
        && capabilities.push_subscription_get_key
}

/// Returns `true` when a service worker context exposes everything messaging needs.
pub fn is_sw_supported(capabilities: &PlatformCapabilities) -> bool {
    capabilities.indexed_db
        && capabilities.push_manager
        && capabilities.notification
        && capabilities.show_notification
        && capabilities.push_subscription_get_key
}

/// Runs the probe matching `context`, and only that one.
pub fn is_supported_with<P>(context: ExecutionContext, probe: &P) -> bool
where
    P: SupportProbe + ?Sized,
{
    match context {
        ExecutionContext::ServiceWorker => probe.sw_supported(),
        ExecutionContext::Window => probe.window_supported(),
    }
}

/// Returns `true` when the current environment exposes the browser APIs that
/// Firebase Cloud Messaging requires.
///
/// # Examples
///
/// ```
/// use firebase_messaging_compat::messaging;
///
/// if messaging::is_supported() {
///     // Safe to call messaging APIs that rely on browser push features.
/// }
/// ```
pub fn is_supported() -> bool {
    is_supported_with(ExecutionContext::current(), &PlatformCapabilities::detect())
}

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
fn property_in(target: &JsValue, property: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(property)).unwrap_or(false)
}

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
fn prototype_has_property(target: &JsValue, constructor: &str, property: &str) -> bool {
    let ctor = match Reflect::get(target, &JsValue::from_str(constructor)) {
        Ok(value) if value.is_object() || value.is_function() => value,
        _ => return false,
    };

    let prototype = match Reflect::get(&ctor, &JsValue::from_str("prototype")) {
        Ok(value) => value,
        Err(_) => return false,
    };

    prototype
        .dyn_ref::<js_sys::Object>()
        .map(|obj| obj.has_own_property(&JsValue::from_str(property)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn all_present() -> PlatformCapabilities {
        PlatformCapabilities {
            window: true,
            indexed_db: true,
            cookies_enabled: true,
            service_worker: true,
            push_manager: true,
            notification: true,
            fetch: true,
            show_notification: true,
            push_subscription_get_key: true,
        }
    }

    #[test]
    fn window_probe_requires_every_capability() {
        assert!(is_window_supported(&all_present()));

        let toggles: [(&str, fn(&mut PlatformCapabilities)); 9] = [
            ("window", |c| c.window = false),
            ("indexedDB", |c| c.indexed_db = false),
            ("cookies", |c| c.cookies_enabled = false),
            ("serviceWorker", |c| c.service_worker = false),
            ("PushManager", |c| c.push_manager = false),
            ("Notification", |c| c.notification = false),
            ("fetch", |c| c.fetch = false),
            ("showNotification", |c| c.show_notification = false),
            ("getKey", |c| c.push_subscription_get_key = false),
        ];
        for (name, toggle) in toggles {
            let mut capabilities = all_present();
            toggle(&mut capabilities);
            assert!(
                !is_window_supported(&capabilities),
                "window probe should fail without {name}"
            );
        }
    }

    #[test]
    fn sw_probe_requires_its_capabilities_only() {
        let worker = PlatformCapabilities {
            window: false,
            cookies_enabled: false,
            service_worker: false,
            fetch: false,
            ..all_present()
        };
        assert!(is_sw_supported(&worker));

        let toggles: [(&str, fn(&mut PlatformCapabilities)); 5] = [
            ("indexedDB", |c| c.indexed_db = false),
            ("PushManager", |c| c.push_manager = false),
            ("Notification", |c| c.notification = false),
            ("showNotification", |c| c.show_notification = false),
            ("getKey", |c| c.push_subscription_get_key = false),
        ];
        for (name, toggle) in toggles {
            let mut capabilities = worker;
            toggle(&mut capabilities);
            assert!(
                !is_sw_supported(&capabilities),
                "service worker probe should fail without {name}"
            );
        }
    }

    #[derive(Default)]
    struct CountingProbe {
        window_calls: Cell<usize>,
        sw_calls: Cell<usize>,
    }

    impl SupportProbe for CountingProbe {
        fn window_supported(&self) -> bool {
            self.window_calls.set(self.window_calls.get() + 1);
            true
        }

        fn sw_supported(&self) -> bool {
            self.sw_calls.set(self.sw_calls.get() + 1);
            false
        }
    }

    #[test]
    fn service_worker_context_runs_only_sw_probe() {
        let probe = CountingProbe::default();
        assert!(!is_supported_with(ExecutionContext::ServiceWorker, &probe));
        assert_eq!(probe.sw_calls.get(), 1);
        assert_eq!(probe.window_calls.get(), 0);
    }

    #[test]
    fn window_context_runs_only_window_probe() {
        let probe = CountingProbe::default();
        assert!(is_supported_with(ExecutionContext::Window, &probe));
        assert_eq!(probe.window_calls.get(), 1);
        assert_eq!(probe.sw_calls.get(), 0);
    }

    #[test]
    fn worker_snapshot_depends_on_context() {
        let worker = PlatformCapabilities {
            window: false,
            cookies_enabled: false,
            ..all_present()
        };
        assert!(is_supported_with(ExecutionContext::ServiceWorker, &worker));
        assert!(!is_supported_with(ExecutionContext::Window, &worker));
    }

    #[cfg(not(all(feature = "wasm-web", target_arch = "wasm32")))]
    #[test]
    fn non_wasm_targets_are_not_supported() {
        assert_eq!(PlatformCapabilities::detect(), PlatformCapabilities::default());
        assert_eq!(ExecutionContext::current(), ExecutionContext::Window);
        assert!(!is_supported());
    }
}
