#![deny(missing_docs)]
//! Telegram relay that mirrors deal posts into a channel.
//!
//! Incoming messages have their text links resolved to plain URLs and
//! promotional boilerplate stripped before being forwarded.

/// Telegram-facing relay handling
pub mod bot;
/// Relay configuration
pub mod config;
/// Telegram runtime entrypoint
pub mod runner;
/// Text normalization
pub mod text;
