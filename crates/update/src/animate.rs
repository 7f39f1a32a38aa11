use glam::Vec3;
use lightstage_common::{Transform, lerp};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Orbit speed scale applied to elapsed time.
const ORBIT_SPEED: f32 = 0.2;
/// Maximum orbit radius of an anchor.
const ORBIT_RADIUS: f32 = 10.0;
/// Vertical bob amplitude of the primary object.
const BOB_RANGE: (f32, f32) = (-2.0, 2.0);
/// Shadow proxy opacity at the bottom and top of the bob.
const OPACITY_RANGE: (f32, f32) = (1.0, 0.25);
/// Proxy hovers just above the ground plane to avoid z-fighting.
const PROXY_LIFT: f32 = 0.001;

/// Ground-level stand-in that darkens under its primary object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowProxy {
    pub transform: Transform,
    pub opacity: f32,
}

/// A movable anchor, its primary visible object, and the shadow proxy that
/// follows both.
///
/// Built once at scene construction and mutated every frame. All three
/// transforms are recomputed from elapsed time and `index`; nothing carries
/// over between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimatedEntity {
    /// Ordinal position among siblings; phase-offsets the orbit and bob.
    pub index: usize,
    /// Resting height of the primary object above its anchor.
    pub rest_height: f32,
    pub anchor: Transform,
    pub primary: Transform,
    pub shadow: ShadowProxy,
}

impl AnimatedEntity {
    pub fn new(index: usize, rest_height: f32) -> Self {
        Self {
            index,
            rest_height,
            anchor: Transform::default(),
            primary: Transform::default(),
            shadow: ShadowProxy {
                transform: Transform::default(),
                opacity: OPACITY_RANGE.0,
            },
        }
    }
}

/// Advance every entity to its pose at `elapsed` seconds.
///
/// Pure in elapsed time and sibling index: calling twice with the same
/// elapsed value produces identical poses, so a run is replayable from the
/// clock alone. Odd-indexed entities orbit the opposite way.
pub fn advance(entities: &mut [AnimatedEntity], elapsed: f32) {
    let count = entities.len();
    for entity in entities.iter_mut() {
        let i = entity.index as f32;
        let u = i / count as f32;
        let speed = elapsed * ORBIT_SPEED;
        let direction = if entity.index % 2 == 1 { 1.0 } else { -1.0 };
        let angle = speed + u * TAU * direction;
        let radius = (speed - i).sin() * ORBIT_RADIUS;
        entity.anchor.position = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);

        let y_off = (elapsed * 2.0 + i).sin().abs();
        entity.primary.position = entity.anchor.position
            + Vec3::new(
                0.0,
                entity.rest_height + lerp(BOB_RANGE.0, BOB_RANGE.1, y_off),
                0.0,
            );

        entity.shadow.transform.position = Vec3::new(
            entity.anchor.position.x,
            PROXY_LIFT,
            entity.anchor.position.z,
        );
        entity.shadow.opacity = lerp(OPACITY_RANGE.0, OPACITY_RANGE.1, y_off);
    }
}
