use glam::Vec3;
use lightstage_common::Color;

/// Read/write access to one scalar field of an owner type.
///
/// A lens is a pair of plain function pointers, implemented once per
/// (owner type, field). Bindings built on lenses stay `Copy` and never hold a
/// borrow of the owner between calls; the owner is passed in at each access.
pub struct ScalarLens<O> {
    get: fn(&O) -> f32,
    set: fn(&mut O, f32),
}

impl<O> ScalarLens<O> {
    pub const fn new(get: fn(&O) -> f32, set: fn(&mut O, f32)) -> Self {
        Self { get, set }
    }

    pub fn get(&self, owner: &O) -> f32 {
        (self.get)(owner)
    }

    pub fn set(&self, owner: &mut O, value: f32) {
        (self.set)(owner, value);
    }
}

/// Read/write access to one color field of an owner type.
pub struct ColorLens<O> {
    get: fn(&O) -> Color,
    set: fn(&mut O, Color),
}

impl<O> ColorLens<O> {
    pub const fn new(get: fn(&O) -> Color, set: fn(&mut O, Color)) -> Self {
        Self { get, set }
    }

    pub fn get(&self, owner: &O) -> Color {
        (self.get)(owner)
    }

    pub fn set(&self, owner: &mut O, value: Color) {
        (self.set)(owner, value);
    }
}

/// Read/write access to one vector field of an owner type.
pub struct VectorLens<O> {
    get: fn(&O) -> Vec3,
    set: fn(&mut O, Vec3),
}

impl<O> VectorLens<O> {
    pub const fn new(get: fn(&O) -> Vec3, set: fn(&mut O, Vec3)) -> Self {
        Self { get, set }
    }

    pub fn get(&self, owner: &O) -> Vec3 {
        (self.get)(owner)
    }

    pub fn set(&self, owner: &mut O, value: Vec3) {
        (self.set)(owner, value);
    }
}

// Manual Clone/Copy: function pointers are always Copy, independent of O.
macro_rules! impl_lens_copy {
    ($($name:ident),*) => {$(
        impl<O> Clone for $name<O> {
            fn clone(&self) -> Self {
                *self
            }
        }
        impl<O> Copy for $name<O> {}
    )*};
}
impl_lens_copy!(ScalarLens, ColorLens, VectorLens);
