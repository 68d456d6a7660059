//! localstore Library
//!
//! Reactive values mirrored to durable key-value storage, plus the desktop
//! shell that keeps the media viewer's preferences in them.

pub mod app;
pub mod reactive;
pub mod storage;
pub mod store;
pub mod stores;
pub mod types;
pub mod ui;
