//! Journal of submitted actions.
//!
//! Records whether each submitted action was accepted or rejected so that
//! callers can render an activity feed. The public API is immutable:
//! `record` returns a new journal with the entry appended. Only the owning
//! coordinator appends in place. It is a display log, not an undo history;
//! nothing replays it.

use super::action::Action;
use super::guard::Condition;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the engine answered a submitted action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome<C> {
    Accepted,
    /// Every unmet condition, in guard declaration order.
    Rejected { unmet: Vec<C> },
}

impl<C> Outcome<C> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Record of a single submitted action.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ActionRecord<S: State, A: Action, C: Condition<S>> {
    /// Position of the submission within its run, starting at 1
    pub sequence: u64,
    /// The action as submitted
    pub action: A,
    /// Accepted, or rejected with the conditions that failed
    pub outcome: Outcome<C>,
    /// Snapshot the action was evaluated against
    pub from: S,
    /// Snapshot after evaluation; equal to `from` on rejection
    pub to: S,
    /// When the shell recorded the submission
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of submitted actions.
///
/// # Example
///
/// ```rust
/// use heist_coordinator::core::{ActionLog, ActionRecord, Outcome};
/// use heist_coordinator::heist::{self, HeistAction, HeistState, Condition};
/// use chrono::Utc;
///
/// let log: ActionLog<HeistState, HeistAction, Condition> = ActionLog::new();
/// let start = heist::initial_state();
/// let next = heist::apply(start.clone(), HeistAction::PositionActor).into_state();
///
/// let log = log.record(ActionRecord {
///     sequence: 1,
///     action: HeistAction::PositionActor,
///     outcome: Outcome::Accepted,
///     from: start,
///     to: next,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.accepted_count(), 1);
/// assert_eq!(log.get_path().len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ActionLog<S: State, A: Action, C: Condition<S>> {
    entries: Vec<ActionRecord<S, A, C>>,
}

impl<S: State, A: Action, C: Condition<S>> Default for ActionLog<S, A, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action, C: Condition<S>> ActionLog<S, A, C> {
    /// Create a new empty journal.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a submission, returning a new journal.
    ///
    /// The existing journal is left as it was.
    pub fn record(&self, record: ActionRecord<S, A, C>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(record);
        Self { entries }
    }

    // In-place variants for the owning shell, which holds the only copy.
    pub(crate) fn push(&mut self, record: ActionRecord<S, A, C>) {
        self.entries.push(record);
    }

    pub(crate) fn truncate_front(&mut self, limit: usize) {
        let excess = self.entries.len().saturating_sub(limit);
        self.entries.drain(..excess);
    }

    /// Keep only the newest `limit` entries, returning a new journal.
    pub fn retain_last(&self, limit: usize) -> Self {
        let skip = self.entries.len().saturating_sub(limit);
        Self {
            entries: self.entries[skip..].to_vec(),
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[ActionRecord<S, A, C>] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ActionRecord<S, A, C>> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn accepted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.is_accepted())
            .count()
    }

    pub fn rejected_count(&self) -> usize {
        self.entries.len() - self.accepted_count()
    }

    /// Get the snapshots traversed through accepted actions.
    ///
    /// Starts at the snapshot the oldest retained entry was evaluated
    /// against, followed by the result of each accepted action.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.entries.first() {
            path.push(&first.from);
        }
        for entry in &self.entries {
            if entry.outcome.is_accepted() {
                path.push(&entry.to);
            }
        }
        path
    }

    /// Time between the oldest and newest retained entries.
    ///
    /// Returns `None` for an empty journal.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }
}
