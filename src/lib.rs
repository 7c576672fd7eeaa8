//! Keyboard trainer: random practice text, live per-character diff, speed and
//! accuracy, in a terminal UI.
//!
//! The session engine (`generator`, `session`, `lifecycle`) has no terminal
//! dependencies; `app`, `event` and `ui` form the shell around it.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod generator;
pub mod i18n;
pub mod lifecycle;
pub mod session;
pub mod telemetry;
pub mod ui;
