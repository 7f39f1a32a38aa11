//! Property adapters: the translation layer between a control panel's logical
//! properties and a scene object's raw fields.
//!
//! Each adapter wraps one or more lens field accessors and exposes a
//! uniform get/set contract over them, performing unit conversion, derived
//! field computation, or paired invariant maintenance. Adapters are stateless
//! beyond their lenses: reads are computed on demand from current owner state
//! and writes are fully determined by input plus current owner state.
//!
//! # Invariants
//! - Reads have no side effects and never cache.
//! - Writes restore the adapter type's field invariant before returning.
//! - Adapters never enforce numeric ranges; range limits are a control
//!   concern, carried as [`ControlSpec`] hints only.
//! - Adapters emit no events; propagation is the caller's responsibility.

mod adapters;
mod lens;
mod pair;
mod panel;

pub use adapters::{ColorBinding, DegreeBinding, ParsedScalarBinding};
pub use lens::{ColorLens, ScalarLens, VectorLens};
pub use pair::{MinMaxBinding, SymmetricExtentBinding};
pub use panel::{Axis, ControlSpec, VectorGroup};

pub fn crate_info() -> &'static str {
    "lightstage-bind v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("bind"));
    }
}
