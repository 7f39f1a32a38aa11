//! Visual helpers: cached geometry mirroring derived light and camera state.
//!
//! Helpers cache the geometry they render from. The cache is only valid after
//! an explicit refresh, and refresh order matters: a helper refreshed before
//! its source recomputes will mirror stale state for a frame. The update
//! scheduler owns that ordering.
//!
//! # Invariants
//! - Refresh is the only operation that mutates a helper.
//! - Degenerate source state (non-finite matrices or positions) fails the
//!   refresh; there is no partial update and no recovery here.

mod helper;

pub use helper::{CameraHelper, HelperError, LightHelper};

pub fn crate_info() -> &'static str {
    "lightstage-view v0.1.0"
}
