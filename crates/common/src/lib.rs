//! Shared value types: colors, transforms, scalar interpolation.
//!
//! # Invariants
//! - `Color` components are plain f32 channels; hex round-trips quantize to 8 bits.
//! - `Transform` defaults to identity.

mod color;
mod types;

pub use color::{Color, ColorParseError};
pub use types::{Transform, lerp};
