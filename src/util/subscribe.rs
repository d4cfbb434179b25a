use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex};

pub type NextFn<T> = Arc<dyn Fn(&T) + Send + Sync + 'static>;
pub type ErrorFn = Arc<dyn Fn(&dyn Error) + Send + Sync + 'static>;
pub type CompleteFn = Arc<dyn Fn() + Send + Sync + 'static>;

#[derive(Clone)]
pub struct PartialObserver<T> {
    pub next: Option<NextFn<T>>,
    pub error: Option<ErrorFn>,
    pub complete: Option<CompleteFn>,
}

impl<T> PartialObserver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_next<F>(mut self, callback: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.next = Some(Arc::new(callback));
        self
    }

    pub fn with_error<F>(mut self, callback: F) -> Self
    where
        F: Fn(&dyn Error) + Send + Sync + 'static,
    {
        self.error = Some(Arc::new(callback));
        self
    }

    pub fn with_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.complete = Some(Arc::new(callback));
        self
    }
}

impl<T> Default for PartialObserver<T> {
    fn default() -> Self {
        Self {
            next: None,
            error: None,
            complete: None,
        }
    }
}

/// A plain callback or an observer whose `next` receives each value.
#[derive(Clone)]
pub enum NextOrObserver<T> {
    Next(NextFn<T>),
    Observer(PartialObserver<T>),
}

impl<T> NextOrObserver<T> {
    pub fn from_fn<F>(callback: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        NextOrObserver::Next(Arc::new(callback))
    }

    /// Delivers `value` to the callback, or to the observer's `next` if it has one.
    pub fn next(&self, value: &T) {
        match self {
            NextOrObserver::Next(callback) => callback(value),
            NextOrObserver::Observer(observer) => {
                if let Some(next) = &observer.next {
                    next(value);
                }
            }
        }
    }

    pub fn error(&self, error: &dyn Error) {
        if let NextOrObserver::Observer(PartialObserver {
            error: Some(callback),
            ..
        }) = self
        {
            callback(error);
        }
    }

    pub fn complete(&self) {
        if let NextOrObserver::Observer(PartialObserver {
            complete: Some(callback),
            ..
        }) = self
        {
            callback();
        }
    }
}

impl<T> From<NextFn<T>> for NextOrObserver<T> {
    fn from(callback: NextFn<T>) -> Self {
        NextOrObserver::Next(callback)
    }
}

impl<T> From<PartialObserver<T>> for NextOrObserver<T> {
    fn from(observer: PartialObserver<T>) -> Self {
        NextOrObserver::Observer(observer)
    }
}

impl<T> fmt::Debug for NextOrObserver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextOrObserver::Next(_) => f.write_str("NextOrObserver::Next"),
            NextOrObserver::Observer(_) => f.write_str("NextOrObserver::Observer"),
        }
    }
}

type DetachFn = Box<dyn FnOnce() + Send + 'static>;

/// Detaches a listener. The detach closure runs on the first call only; later
/// calls, including calls through clones, do nothing.
#[derive(Clone)]
pub struct Unsubscribe {
    detach: Arc<Mutex<Option<DetachFn>>>,
}

impl Unsubscribe {
    pub fn new<F>(detach: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            detach: Arc::new(Mutex::new(Some(Box::new(detach)))),
        }
    }

    /// A handle with nothing to detach.
    pub fn noop() -> Self {
        Self {
            detach: Arc::new(Mutex::new(None)),
        }
    }

    pub fn unsubscribe(&self) {
        let detach = self
            .detach
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .take();
        if let Some(detach) = detach {
            detach();
        }
    }

    pub fn is_detached(&self) -> bool {
        self.detach
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .is_none()
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("detached", &self.is_detached())
            .finish()
    }
}
