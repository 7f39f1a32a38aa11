//! Scene owner objects: lights and shadow cameras.
//!
//! These are the objects control bindings mutate. Fields are public and
//! primitive; cached derived state (target matrices, projection matrices) is
//! refreshed explicitly by the update scheduler, never implicitly on write.
//!
//! # Invariants
//! - Construction performs no field validation; out-of-invariant starting
//!   state is accepted silently and restored on the next binding write.
//! - Cached matrices are stale until the owning refresh operation runs.

mod camera;
mod light;

pub use camera::{OrthographicCamera, PerspectiveCamera};
pub use light::{AmbientLight, DirectionalLight, HemisphereLight, PointLight, SpotLight};

pub fn crate_info() -> &'static str {
    "lightstage-scene v0.1.0"
}
