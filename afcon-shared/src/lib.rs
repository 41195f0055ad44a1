#![cfg_attr(not(test), forbid(unsafe_code))]
//! Target-independent core of the AFCON Tickets front-end.
//!
//! Everything in this crate compiles for both `wasm32` (the browser app) and
//! the host (tests), so the session contract can be exercised without a
//! browser.

pub mod api;
pub mod chat;
pub mod config;
pub mod forms;
pub mod models;
pub mod navigation;
pub mod preferences;
pub mod session;
