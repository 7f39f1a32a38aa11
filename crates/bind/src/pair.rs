use crate::lens::ScalarLens;

/// Binds a symmetric (min, max) field pair to one logical size control.
///
/// Writing size `s` sets `min = -s/2` and `max = s/2`, so `min == -max` holds
/// after every write. The presented value is derived from the max field alone
/// (`2 * max`), so a pair that starts out asymmetric reads from max and snaps
/// symmetric on the first write.
pub struct SymmetricExtentBinding<O> {
    min: ScalarLens<O>,
    max: ScalarLens<O>,
}

impl<O> SymmetricExtentBinding<O> {
    pub const fn new(min: ScalarLens<O>, max: ScalarLens<O>) -> Self {
        Self { min, max }
    }

    /// The logical size: twice the max field.
    pub fn value(&self, owner: &O) -> f32 {
        self.max.get(owner) * 2.0
    }

    /// Write a size, splitting it symmetrically across the pair.
    pub fn set_value(&self, owner: &mut O, size: f32) {
        self.min.set(owner, -size / 2.0);
        self.max.set(owner, size / 2.0);
    }
}

/// Binds a (min, max) field pair as two independent logical properties while
/// keeping `max >= min + min_gap` after every write.
///
/// Writing `min` raises `max` if the gap would be violated. Writing `max`
/// stores the value and then re-applies the min rule with the current min:
/// a max write never lowers min, and a too-small max snaps back to
/// `min + min_gap`.
pub struct MinMaxBinding<O> {
    min: ScalarLens<O>,
    max: ScalarLens<O>,
    min_gap: f32,
}

impl<O> MinMaxBinding<O> {
    pub const fn new(min: ScalarLens<O>, max: ScalarLens<O>, min_gap: f32) -> Self {
        Self { min, max, min_gap }
    }

    pub fn min(&self, owner: &O) -> f32 {
        self.min.get(owner)
    }

    pub fn max(&self, owner: &O) -> f32 {
        self.max.get(owner)
    }

    /// Write min; max follows upward if closer than `min_gap`.
    pub fn set_min(&self, owner: &mut O, value: f32) {
        self.min.set(owner, value);
        let floor = value + self.min_gap;
        if self.max.get(owner) < floor {
            self.max.set(owner, floor);
        }
    }

    /// Write max, then re-apply the min rule at the current min.
    pub fn set_max(&self, owner: &mut O, value: f32) {
        self.max.set(owner, value);
        self.set_min(owner, self.min.get(owner));
    }
}
