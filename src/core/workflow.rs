//! The seam between the generic engine and a concrete workflow.

use super::action::Action;
use super::guard::{Condition, Guard};
use super::state::State;

/// A guarded finite-state workflow.
///
/// A workflow declares, for each action, the guard that must pass and the
/// effect applied when it does. After every effect the engine calls
/// [`settle`](Workflow::settle) so derived fields are recomputed from the
/// fields they summarize instead of being stored independently.
///
/// All methods must be pure. The engine relies on this to guarantee that
/// the same `(state, action)` pair always yields the same result.
pub trait Workflow {
    type State: State;
    type Action: Action;
    type Condition: Condition<Self::State>;

    /// The "nothing has happened yet" snapshot.
    fn initial_state(&self) -> Self::State;

    /// Preconditions for an action, in the order they are reported.
    fn guard(&self, action: &Self::Action) -> Guard<Self::Condition>;

    /// Field updates for an action whose guard passed.
    fn effect(&self, state: Self::State, action: &Self::Action) -> Self::State;

    /// Recompute derived fields. Defaults to the identity.
    fn settle(&self, state: Self::State) -> Self::State {
        state
    }
}
