//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — API records, pages, report/output structs.
//! - `constants.rs` — endpoint defaults, page size, user-facing notices.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` output. Keep schema-impacting
//! changes explicit.

pub mod constants;
pub mod models;
