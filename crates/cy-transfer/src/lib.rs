//! # cy-transfer
//!
//! Export and import of platform configuration, one JSON file per section.
//!
//! Six sections are handled in a fixed order (see [`Section::ALL`]). Each is
//! gated by its own flag in [`SectionToggles`]. An export GETs every enabled
//! section and writes `<folder>/<section>.json`; an import reads the same files
//! and POSTs their raw bytes back. The first failing section aborts the run.

pub mod error;
pub mod report;
pub mod section;
pub mod toggles;

mod context;

pub use context::TransferContext;
pub use error::TransferError;
pub use report::{SectionOutcome, TransferReport};
pub use section::{Direction, Section};
pub use toggles::SectionToggles;
