//! # cy-core
//!
//! Shared types for the cyoda client tools.
//!
//! - Model references and lock states
//! - Snapshot search identifiers and statuses
//! - Page requests for paged endpoints
//! - Cross-cutting error types
//! - Local-time rendering of server timestamps

pub mod errors;
pub mod model;
pub mod page;
pub mod search;
pub mod time;

pub use errors::CoreError;
pub use model::{ModelRef, ModelState};
pub use page::PageRequest;
pub use search::{SnapshotId, SnapshotStatus};
