//! Guard predicates for controlling transitions.
//!
//! A guard is the ordered list of conditions an action requires. Guards
//! are evaluated before any effect runs, so a failing guard leaves the
//! state untouched.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A named precondition over a state.
///
/// `holds` must be pure: the same state always gives the same answer.
/// The `Display` rendering is the user-facing reason shown when the
/// condition is not met.
pub trait Condition<S>:
    Clone + PartialEq + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Check whether the condition holds for this state.
    fn holds(&self, state: &S) -> bool;
}

/// Ordered set of conditions gating a single action.
///
/// # Example
///
/// ```rust
/// use heist_coordinator::core::{Condition, Guard};
/// use serde::{Deserialize, Serialize};
/// use std::fmt;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Needs {
///     Positive,
///     Even,
/// }
///
/// impl fmt::Display for Needs {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         match self {
///             Self::Positive => f.write_str("value must be positive"),
///             Self::Even => f.write_str("value must be even"),
///         }
///     }
/// }
///
/// impl Condition<i32> for Needs {
///     fn holds(&self, state: &i32) -> bool {
///         match self {
///             Self::Positive => *state > 0,
///             Self::Even => *state % 2 == 0,
///         }
///     }
/// }
///
/// let guard = Guard::new(vec![Needs::Positive, Needs::Even]);
///
/// assert!(guard.allows(&4));
/// assert!(!guard.allows(&3));
/// assert!(!guard.allows(&-3));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guard<C> {
    conditions: Vec<C>,
}

impl<C> Guard<C> {
    /// Create a guard requiring every condition, in order.
    pub fn new(conditions: Vec<C>) -> Self {
        Guard { conditions }
    }

    /// A guard with no requirements; always passes.
    pub fn none() -> Self {
        Guard {
            conditions: Vec::new(),
        }
    }

    /// Append a further requirement.
    pub fn and(mut self, condition: C) -> Self {
        self.conditions.push(condition);
        self
    }

    /// The conditions in declaration order.
    pub fn conditions(&self) -> &[C] {
        &self.conditions
    }

    pub fn is_unconditional(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate every condition against the state.
    ///
    /// Does not stop at the first failure: the failure carries ALL unmet
    /// conditions, in declaration order.
    pub fn check<S>(&self, state: &S) -> Validation<(), NonEmptyVec<C>>
    where
        C: Condition<S>,
    {
        let checks: Vec<Validation<(), NonEmptyVec<C>>> = self
            .conditions
            .iter()
            .map(|condition| {
                if condition.holds(state) {
                    Validation::success(())
                } else {
                    Validation::fail(condition.clone())
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Check if the guard allows the action from this state.
    pub fn allows<S>(&self, state: &S) -> bool
    where
        C: Condition<S>,
    {
        self.conditions.iter().all(|condition| condition.holds(state))
    }
}
