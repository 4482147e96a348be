//! Shared handle serializing concurrent submitters.

use crate::engine::machine::{Coordinator, WorkflowResult};
use crate::core::Workflow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to one coordinator.
///
/// The transition table assumes a single linear history, so concurrent
/// callers are funneled through one lock: each submission sees the
/// snapshot left by whichever submission took the lock before it.
pub struct SharedCoordinator<W: Workflow> {
    inner: Arc<Mutex<Coordinator<W>>>,
}

impl<W: Workflow> Clone for SharedCoordinator<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: Workflow> SharedCoordinator<W> {
    pub fn new(coordinator: Coordinator<W>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(coordinator)),
        }
    }

    /// Submit one action under the lock.
    pub fn submit(&self, action: W::Action) -> WorkflowResult<W> {
        self.lock().submit(action)
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> W::State {
        self.lock().snapshot()
    }

    pub fn is_final(&self) -> bool {
        self.lock().is_final()
    }

    /// Run a read-only closure against the coordinator under the lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&Coordinator<W>) -> R) -> R {
        f(&self.lock())
    }

    // Submissions never panic while holding the lock, so a poisoned lock
    // still guards a consistent snapshot.
    fn lock(&self) -> MutexGuard<'_, Coordinator<W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Workflow> From<Coordinator<W>> for SharedCoordinator<W> {
    fn from(coordinator: Coordinator<W>) -> Self {
        Self::new(coordinator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heist::{Heist, HeistAction, Stage};
    use std::thread;

    #[test]
    fn clones_share_one_snapshot() {
        let shared = SharedCoordinator::new(Coordinator::new(Heist));
        let other = shared.clone();

        assert!(shared.submit(HeistAction::PositionActor).is_accepted());
        assert_eq!(other.snapshot().stage(), Stage::Positioning);
    }

    #[test]
    fn converts_from_a_configured_coordinator() {
        let mut coordinator = Coordinator::new(Heist);
        coordinator.submit(HeistAction::PositionActor);

        let shared: SharedCoordinator<Heist> = coordinator.into();

        assert_eq!(shared.snapshot().stage(), Stage::Positioning);
        shared.inspect(|coordinator| assert_eq!(coordinator.submitted(), 1));
    }

    #[test]
    fn concurrent_submitters_see_linear_history() {
        let shared = SharedCoordinator::new(Coordinator::new(Heist));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let handle = shared.clone();
                thread::spawn(move || handle.submit(HeistAction::PositionActor).is_accepted())
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|accepted| *accepted)
            .count();

        // Only the first PositionActor finds the actor at Start.
        assert_eq!(accepted, 1);
        shared.inspect(|coordinator| {
            assert_eq!(coordinator.submitted(), 8);
            assert_eq!(coordinator.log().accepted_count(), 1);
            assert_eq!(coordinator.log().rejected_count(), 7);
        });
    }
}
