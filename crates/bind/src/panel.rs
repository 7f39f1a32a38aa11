use crate::lens::VectorLens;
use glam::Vec3;

/// Range and step hints for one labeled numeric control.
///
/// Adapters never enforce these; the panel widget clamps input, the binding
/// accepts whatever arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSpec {
    pub label: String,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ControlSpec {
    pub fn new(label: impl Into<String>, min: f32, max: f32, step: f32) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            step,
        }
    }
}

/// One component of a vector field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Binds the x/y/z components of one `Vec3` field under a named control
/// group.
///
/// Every axis write must be followed by the same propagation run; the group
/// itself only translates component writes, it does not schedule anything.
pub struct VectorGroup<O> {
    name: String,
    lens: VectorLens<O>,
}

impl<O> VectorGroup<O> {
    pub fn new(name: impl Into<String>, lens: VectorLens<O>) -> Self {
        Self {
            name: name.into(),
            lens,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value of one component.
    pub fn get(&self, owner: &O, axis: Axis) -> f32 {
        let v = self.lens.get(owner);
        match axis {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Write one component, leaving the others untouched.
    pub fn set(&self, owner: &mut O, axis: Axis, value: f32) {
        let mut v = self.lens.get(owner);
        match axis {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
        self.lens.set(owner, v);
    }

    /// Write all three components at once.
    pub fn set_all(&self, owner: &mut O, value: Vec3) {
        self.lens.set(owner, value);
    }

    /// The three per-axis control descriptors: x and z range over ±10,
    /// y stays above the ground plane.
    pub fn controls(&self) -> [ControlSpec; 3] {
        [
            ControlSpec::new(format!("{} x", self.name), -10.0, 10.0, 0.1),
            ControlSpec::new(format!("{} y", self.name), 0.0, 10.0, 0.1),
            ControlSpec::new(format!("{} z", self.name), -10.0, 10.0, 0.1),
        ]
    }
}
