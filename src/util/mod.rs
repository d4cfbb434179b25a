pub mod compat;
pub mod subscribe;

pub use compat::{get_compat_delegate, Compat};
pub use subscribe::{
    CompleteFn, ErrorFn, NextFn, NextOrObserver, PartialObserver, Unsubscribe,
};
