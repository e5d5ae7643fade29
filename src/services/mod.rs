//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `session.rs` — pagination controller (new search / load more / exhaustion).
//! - `source.rs` — image sources: Pixabay HTTP client and local JSON catalog.
//! - `render.rs` — photo-card markup and the accumulated HTML gallery.
//! - `config.rs` — config file loading and flag/env precedence.
//! - `output.rs` — JSON/text output helpers and user notices.
//! - `logging.rs` — tracing subscriber setup.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod logging;
pub mod output;
pub mod render;
pub mod session;
pub mod source;
