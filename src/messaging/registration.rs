#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
mod wasm {
    /// Thin wrapper around a `ServiceWorkerRegistration` reference.
    #[derive(Clone, Debug)]
    pub struct ServiceWorkerRegistrationHandle {
        inner: web_sys::ServiceWorkerRegistration,
    }

    impl ServiceWorkerRegistrationHandle {
        pub fn from_web_sys(inner: web_sys::ServiceWorkerRegistration) -> Self {
            Self { inner }
        }

        /// Returns the underlying `ServiceWorkerRegistration` handle.
        pub fn as_web_sys(&self) -> &web_sys::ServiceWorkerRegistration {
            &self.inner
        }

        pub fn scope(&self) -> String {
            self.inner.scope()
        }
    }
}

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
pub use wasm::ServiceWorkerRegistrationHandle;

/// Stand-in for a service worker registration on targets without one; only the
/// scope is carried.
#[cfg(not(all(feature = "wasm-web", target_arch = "wasm32")))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceWorkerRegistrationHandle {
    scope: String,
}

#[cfg(not(all(feature = "wasm-web", target_arch = "wasm32")))]
impl ServiceWorkerRegistrationHandle {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    pub fn scope(&self) -> String {
        self.scope.clone()
    }
}
