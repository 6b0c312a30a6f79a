//! Storage layer for the copilot dashboard
//!
//! This crate provides the device-local key-value store used to persist
//! user settings such as the theme seed colors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;

pub use kv::{DeviceStore, KvConfig, KvError, KvStore};
