//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `search.rs` — one-shot search with page count / `--all`.
//! - `browse.rs` — interactive controller driven by stdin events.
//! - `config.rs` — effective configuration display.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate pagination and rendering to `services/*`.
//! - Keep behavior and output schema stable.

pub mod browse;
pub mod config;
pub mod search;

pub use browse::handle_browse;
pub use config::handle_config_commands;
pub use search::handle_search;
