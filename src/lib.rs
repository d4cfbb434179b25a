#![doc = include_str!("../README.md")]

pub mod app;
pub mod messaging;
pub mod messaging_compat;
pub mod platform;
pub mod util;

#[cfg(test)]
pub mod test_support;
