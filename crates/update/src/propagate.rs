use lightstage_view::HelperError;

/// Errors from a propagation run. Fatal to the frame; the caller decides
/// what to do with a dead frame.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("helper refresh failed: {0}")]
    Helper(#[from] HelperError),
    #[error("recompute failed: {0}")]
    Recompute(String),
}

/// The fixed recomputation order for control-triggered updates.
///
/// Frustum recomputation reads transforms, helper refresh reads the frustum;
/// running a stage early leaves its consumers a frame stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Anchor and target world transforms.
    Transform,
    /// Projection and frustum matrices derived from those transforms.
    Frustum,
    /// Cached helper geometry mirroring the frustum.
    Helper,
}

type Callback<S> = Box<dyn FnMut(&mut S) -> Result<(), UpdateError>>;

/// An ordered chain of recomputation callbacks, run synchronously after any
/// control write that can invalidate derived state.
///
/// Callbacks receive their inputs through the scene parameter rather than
/// captured ambient state, so registration order within a stage is the only
/// ordering that matters and each callback is testable in isolation.
pub struct Propagation<S> {
    transform: Vec<Callback<S>>,
    frustum: Vec<Callback<S>>,
    helper: Vec<Callback<S>>,
}

impl<S> Propagation<S> {
    pub fn new() -> Self {
        Self {
            transform: Vec::new(),
            frustum: Vec::new(),
            helper: Vec::new(),
        }
    }

    /// Register a callback in the given stage.
    pub fn register(
        &mut self,
        stage: Stage,
        callback: impl FnMut(&mut S) -> Result<(), UpdateError> + 'static,
    ) {
        let slot = match stage {
            Stage::Transform => &mut self.transform,
            Stage::Frustum => &mut self.frustum,
            Stage::Helper => &mut self.helper,
        };
        slot.push(Box::new(callback));
    }

    /// Number of registered callbacks across all stages.
    pub fn len(&self) -> usize {
        self.transform.len() + self.frustum.len() + self.helper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every callback once, transform stage first, helpers last.
    ///
    /// Short-circuits on the first error: the frame is dead, later stages
    /// would only mirror inconsistent state.
    pub fn run(&mut self, scene: &mut S) -> Result<(), UpdateError> {
        let _span = tracing::debug_span!("propagate").entered();
        for callback in self
            .transform
            .iter_mut()
            .chain(self.frustum.iter_mut())
            .chain(self.helper.iter_mut())
        {
            callback(scene)?;
        }
        tracing::trace!(callbacks = self.len(), "propagation complete");
        Ok(())
    }
}

impl<S> Default for Propagation<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_run_in_fixed_order_exactly_once() {
        let mut propagation: Propagation<Vec<Stage>> = Propagation::new();
        // Registered out of order on purpose; stage decides execution order
        propagation.register(Stage::Helper, |log| {
            log.push(Stage::Helper);
            Ok(())
        });
        propagation.register(Stage::Transform, |log| {
            log.push(Stage::Transform);
            Ok(())
        });
        propagation.register(Stage::Frustum, |log| {
            log.push(Stage::Frustum);
            Ok(())
        });

        let mut log = Vec::new();
        propagation.run(&mut log).unwrap();
        assert_eq!(log, vec![Stage::Transform, Stage::Frustum, Stage::Helper]);
    }

    #[test]
    fn each_run_invokes_every_callback_once() {
        let mut propagation: Propagation<Vec<Stage>> = Propagation::new();
        propagation.register(Stage::Transform, |log| {
            log.push(Stage::Transform);
            Ok(())
        });
        propagation.register(Stage::Transform, |log| {
            log.push(Stage::Transform);
            Ok(())
        });

        let mut log = Vec::new();
        propagation.run(&mut log).unwrap();
        propagation.run(&mut log).unwrap();
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn registration_order_preserved_within_stage() {
        let mut propagation: Propagation<Vec<u8>> = Propagation::new();
        propagation.register(Stage::Frustum, |log| {
            log.push(1);
            Ok(())
        });
        propagation.register(Stage::Frustum, |log| {
            log.push(2);
            Ok(())
        });

        let mut log = Vec::new();
        propagation.run(&mut log).unwrap();
        assert_eq!(log, vec![1, 2]);
    }

    #[test]
    fn error_short_circuits_later_stages() {
        let mut propagation: Propagation<Vec<Stage>> = Propagation::new();
        propagation.register(Stage::Transform, |log| {
            log.push(Stage::Transform);
            Ok(())
        });
        propagation.register(Stage::Frustum, |_| {
            Err(UpdateError::Recompute("frustum blew up".into()))
        });
        propagation.register(Stage::Helper, |log| {
            log.push(Stage::Helper);
            Ok(())
        });

        let mut log = Vec::new();
        let err = propagation.run(&mut log).unwrap_err();
        assert!(matches!(err, UpdateError::Recompute(_)));
        // Helper stage never ran
        assert_eq!(log, vec![Stage::Transform]);
    }

    #[test]
    fn empty_propagation_runs_clean() {
        let mut propagation: Propagation<()> = Propagation::new();
        assert!(propagation.is_empty());
        propagation.run(&mut ()).unwrap();
    }
}
