use crate::propagate::UpdateError;
use std::time::Instant;

/// Drives per-frame updates with explicit elapsed time.
///
/// The driver owns the time origin, fixed once at construction, and hands
/// each frame's update function the elapsed seconds as a parameter; there is
/// no hidden global clock. Updates run to completion on the calling thread
/// before the frame is considered submitted. An update error kills the frame
/// and surfaces to the caller untouched.
pub struct FrameDriver {
    origin: Instant,
    frame: u64,
}

impl FrameDriver {
    /// Build a driver whose clock starts now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            frame: 0,
        }
    }

    /// Number of frames completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Seconds since the driver was built.
    pub fn elapsed(&self) -> f32 {
        self.origin.elapsed().as_secs_f32()
    }

    /// Run one frame against the wall clock. Returns the elapsed time the
    /// update saw.
    pub fn tick<S>(
        &mut self,
        scene: &mut S,
        update: impl FnOnce(&mut S, f32) -> Result<(), UpdateError>,
    ) -> Result<f32, UpdateError> {
        let elapsed = self.elapsed();
        self.advance_to(scene, elapsed, update)
    }

    /// Run one frame at an explicit elapsed time. Tests and offline replay
    /// drive frames through here with a synthetic clock.
    pub fn advance_to<S>(
        &mut self,
        scene: &mut S,
        elapsed: f32,
        update: impl FnOnce(&mut S, f32) -> Result<(), UpdateError>,
    ) -> Result<f32, UpdateError> {
        let _span = tracing::trace_span!("frame", frame = self.frame, elapsed).entered();
        update(scene, elapsed)?;
        self.frame += 1;
        Ok(elapsed)
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
