//! Pure guarded transitions.

use crate::core::{Action, Workflow};
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;

/// An action whose preconditions were not met.
///
/// This is the engine's only error kind. It is returned as data from
/// [`apply`] and is always recoverable: the state it was evaluated against
/// is unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rejection<A, C> {
    /// The action that was refused
    pub action: A,
    /// Every unmet condition in guard declaration order; never empty
    pub unmet: Vec<C>,
}

impl<A, C> Rejection<A, C> {
    /// The first unmet condition.
    pub fn reason(&self) -> Option<&C> {
        self.unmet.first()
    }
}

impl<A: Action, C: fmt::Display> fmt::Display for Rejection<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{} rejected: {}", self.action.name(), reason),
            None => write!(f, "{} rejected", self.action.name()),
        }
    }
}

impl<A: Action, C: fmt::Debug + fmt::Display> std::error::Error for Rejection<A, C> {}

/// Result of submitting one action against one snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TransitionResult<S, A, C> {
    /// The guard passed; the new snapshot with derived fields settled
    Accepted(S),

    /// The guard failed; the snapshot passed in, untouched
    Rejected { state: S, rejection: Rejection<A, C> },
}

impl<S, A, C> TransitionResult<S, A, C> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The resulting snapshot: new on acceptance, unchanged on rejection.
    pub fn state(&self) -> &S {
        match self {
            Self::Accepted(state) | Self::Rejected { state, .. } => state,
        }
    }

    pub fn into_state(self) -> S {
        match self {
            Self::Accepted(state) | Self::Rejected { state, .. } => state,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection<A, C>> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected { rejection, .. } => Some(rejection),
        }
    }

    /// The first failing condition, if the action was rejected.
    pub fn rejection_reason(&self) -> Option<&C> {
        self.rejection().and_then(Rejection::reason)
    }

    /// Convert into a `Result`, dropping the unchanged snapshot on rejection.
    pub fn into_result(self) -> Result<S, Rejection<A, C>> {
        match self {
            Self::Accepted(state) => Ok(state),
            Self::Rejected { rejection, .. } => Err(rejection),
        }
    }
}

/// Evaluate one action against one snapshot.
///
/// Runs the action's guard. If every condition holds, applies the effect
/// and settles derived fields. Otherwise hands the original snapshot back
/// together with all unmet conditions. No partial effect is ever applied.
///
/// Pure: the same `(state, action)` pair always yields the same result.
///
/// # Example
///
/// ```rust
/// use heist_coordinator::engine::apply;
/// use heist_coordinator::heist::{Heist, HeistAction, Stage};
/// use heist_coordinator::core::Workflow;
///
/// let start = Heist.initial_state();
///
/// let rejected = apply(&Heist, start.clone(), &HeistAction::CutPower);
/// assert!(!rejected.is_accepted());
/// assert_eq!(rejected.state(), &start);
///
/// let accepted = apply(&Heist, start, &HeistAction::PositionActor);
/// assert_eq!(accepted.state().stage(), Stage::Positioning);
/// ```
pub fn apply<W: Workflow>(
    workflow: &W,
    state: W::State,
    action: &W::Action,
) -> TransitionResult<W::State, W::Action, W::Condition> {
    match workflow.guard(action).check(&state) {
        Validation::Success(_) => {
            let next = workflow.settle(workflow.effect(state, action));
            TransitionResult::Accepted(next)
        }
        Validation::Failure(unmet) => TransitionResult::Rejected {
            state,
            rejection: Rejection {
                action: action.clone(),
                unmet: unmet.iter().cloned().collect(),
            },
        },
    }
}

/// Whether an action would be accepted from this snapshot.
pub fn can_apply<W: Workflow>(workflow: &W, state: &W::State, action: &W::Action) -> bool {
    workflow.guard(action).allows(state)
}

/// Fold a sequence of actions over a snapshot, in submission order.
///
/// Each action is evaluated against the snapshot produced by the one
/// before it. Returns the final snapshot and every intermediate result.
pub fn replay<'a, W, I>(
    workflow: &W,
    state: W::State,
    actions: I,
) -> (W::State, Vec<TransitionResult<W::State, W::Action, W::Condition>>)
where
    W: Workflow,
    W::Action: 'a,
    I: IntoIterator<Item = &'a W::Action>,
{
    let mut current = state;
    let mut results = Vec::new();
    for action in actions {
        let result = apply(workflow, current, action);
        current = result.state().clone();
        results.push(result);
    }
    (current, results)
}
