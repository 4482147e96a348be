//! Coordinator that owns the live snapshot of a workflow.

use crate::builder::CoordinatorConfig;
use crate::core::{Action, ActionLog, ActionRecord, Outcome, State, Workflow};
use crate::engine::transition::{apply, TransitionResult};
use chrono::Utc;
use uuid::Uuid;

/// Journal type kept by a coordinator for workflow `W`.
pub type WorkflowLog<W> =
    ActionLog<<W as Workflow>::State, <W as Workflow>::Action, <W as Workflow>::Condition>;

/// Result type returned by a coordinator for workflow `W`.
pub type WorkflowResult<W> =
    TransitionResult<<W as Workflow>::State, <W as Workflow>::Action, <W as Workflow>::Condition>;

/// Owner of the only live snapshot of a workflow.
///
/// Every change goes through [`submit`](Coordinator::submit), which routes
/// the action through the pure [`apply`] and replaces the snapshot on
/// acceptance. Readers get references or clones; there are no setters.
pub struct Coordinator<W: Workflow> {
    workflow: W,
    current: W::State,
    log: WorkflowLog<W>,
    config: CoordinatorConfig,
    run_id: Uuid,
    submitted: u64,
}

impl<W: Workflow> Coordinator<W> {
    /// Create a coordinator at the workflow's initial snapshot.
    pub fn new(workflow: W) -> Self {
        Self::with_config(workflow, CoordinatorConfig::default())
    }

    pub(crate) fn with_config(workflow: W, config: CoordinatorConfig) -> Self {
        let current = workflow.initial_state();
        let run_id = Uuid::new_v4();
        tracing::debug!(
            run_id = %run_id,
            state = %current.name(),
            "coordinator started"
        );
        Self {
            workflow,
            current,
            log: ActionLog::new(),
            config,
            run_id,
            submitted: 0,
        }
    }

    /// Get current snapshot (pure)
    pub fn current_state(&self) -> &W::State {
        &self.current
    }

    /// Owned copy of the current snapshot, for handing to renderers.
    pub fn snapshot(&self) -> W::State {
        self.current.clone()
    }

    /// Check if the workflow sits in a terminal stage (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get the submission journal (pure)
    pub fn log(&self) -> &WorkflowLog<W> {
        &self.log
    }

    pub fn workflow(&self) -> &W {
        &self.workflow
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Identifier attached to every log event of this coordinator.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Number of actions submitted so far, accepted or not.
    pub fn submitted(&self) -> u64 {
        self.submitted
    }

    /// Submit one action.
    ///
    /// Accepted actions replace the live snapshot; rejected ones leave it
    /// exactly as it was. Either way the outcome is journaled (rejections
    /// only when configured to) and returned to the caller.
    pub fn submit(&mut self, action: W::Action) -> WorkflowResult<W> {
        self.submitted += 1;
        let from = self.current.clone();
        let result = apply(&self.workflow, from.clone(), &action);

        let outcome = match result.rejection() {
            None => {
                tracing::info!(
                    run_id = %self.run_id,
                    sequence = self.submitted,
                    action = %action.name(),
                    from = %from.name(),
                    to = %result.state().name(),
                    "action accepted"
                );
                Outcome::Accepted
            }
            Some(rejection) => {
                tracing::warn!(
                    run_id = %self.run_id,
                    sequence = self.submitted,
                    action = %action.name(),
                    state = %from.name(),
                    reason = %rejection,
                    unmet = rejection.unmet.len(),
                    "action rejected"
                );
                Outcome::Rejected {
                    unmet: rejection.unmet.clone(),
                }
            }
        };

        if result.is_accepted() {
            self.current = result.state().clone();
            tracing::debug!(
                run_id = %self.run_id,
                snapshot = ?self.current,
                "snapshot replaced"
            );
        }

        if outcome.is_accepted() || self.config.record_rejections {
            self.journal(action, outcome, from);
        }

        result
    }

    /// Submit actions one after another, stopping at nothing.
    ///
    /// Each action sees the snapshot left by the previous one.
    pub fn submit_all<I>(&mut self, actions: I) -> Vec<WorkflowResult<W>>
    where
        I: IntoIterator<Item = W::Action>,
    {
        actions.into_iter().map(|action| self.submit(action)).collect()
    }

    fn journal(&mut self, action: W::Action, outcome: Outcome<W::Condition>, from: W::State) {
        let record = ActionRecord {
            sequence: self.submitted,
            action,
            outcome,
            from,
            to: self.current.clone(),
            timestamp: Utc::now(),
        };
        self.log.push(record);
        if let Some(limit) = self.config.max_log_entries {
            self.log.truncate_front(limit);
        }
    }
}
