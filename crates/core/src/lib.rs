//! LitPath core — everything behind the research-search view that does not
//! need a renderer.
//!
//! # Modules
//!
//! - [`types`] — Filters, backend status, wire shapes, formatted results
//! - [`format`] — Source defaults, abstract previews, subject normalization
//! - [`citations`] — `[n]` markers in the overview as display fragments
//! - [`state`] — The view state machine (actions in, effects out)
//! - [`events`] — Scoped document-level pointer subscriptions
//! - [`client`] — HTTP client for `/health` and `/search`
//! - [`config`] — Backend base URL and `.litpath.toml` loading
//! - [`error`] — Client, config, and user-visible error types

pub mod citations;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod state;
pub mod types;

pub use client::BackendClient;
pub use config::ClientConfig;
pub use state::{Action, Effect, Phase, ViewState};
