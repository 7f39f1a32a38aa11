//! Update propagation: control-triggered recomputation, the per-frame clock,
//! and time-driven animation.
//!
//! Two triggers drive recomputation. A control write runs a [`Propagation`]
//! synchronously on the same call stack, in fixed stage order. The frame
//! clock advances every [`AnimatedEntity`] as a pure function of elapsed
//! time before each frame is submitted.
//!
//! # Invariants
//! - Stage order is Transform, then Frustum, then Helper; each registered
//!   callback runs exactly once per propagation.
//! - Animation state is a function of elapsed time and entity index only;
//!   the time origin is fixed once when the frame driver is built.
//! - A failed recomputation aborts the frame and surfaces to the caller.
//!   No retry, no partial-frame suppression.

mod animate;
mod frame;
mod propagate;
mod rig;

pub use animate::{AnimatedEntity, ShadowProxy, advance};
pub use frame::FrameDriver;
pub use propagate::{Propagation, Stage, UpdateError};
pub use rig::ShadowRig;

pub fn crate_info() -> &'static str {
    "lightstage-update v0.1.0"
}
