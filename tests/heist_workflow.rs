//! End-to-end scenarios for the heist workflow.

use heist_coordinator::heist::{
    self, BriefcaseHolder, Condition, Distraction, HeistAction, HeistState, Position, Power,
    Security, Stage, Vault,
};
use heist_coordinator::{CoordinatorBuilder, SharedCoordinator, State};
use serde_json::json;
use std::collections::{HashSet, VecDeque};

#[test]
fn step_by_step_scenario() {
    let start = heist::initial_state();
    assert_eq!(start.vault(), Vault::Locked);
    assert_eq!(start.security(), Security::Active);
    assert_eq!(start.position(), Position::Start);
    assert_eq!(start.power(), Power::Normal);
    assert_eq!(start.distraction(), Distraction::Alert);
    assert_eq!(start.briefcase_holder(), BriefcaseHolder::HolderA);
    assert_eq!(start.stage(), Stage::Preparation);

    let refused = heist::apply(start, HeistAction::DisableSecurity);
    assert!(!refused.is_accepted());
    assert_eq!(refused.state(), &start);
    assert_eq!(
        refused.rejection_reason().map(ToString::to_string),
        Some("position must be Staging".to_string())
    );

    let staged = heist::apply(start, HeistAction::PositionActor);
    assert!(staged.is_accepted());
    let staged = staged.into_state();
    assert_eq!(staged.position(), Position::Staging);
    assert_eq!(staged.stage(), Stage::Positioning);

    let dark = heist::apply(staged, HeistAction::DisableSecurity);
    assert!(dark.is_accepted());
    let dark = dark.into_state();
    assert_eq!(dark.security(), Security::Disabled);
    assert_eq!(dark.stage(), Stage::Infiltration);
}

#[test]
fn canonical_sequence_completes() {
    let mut state = heist::initial_state();
    for action in HeistAction::CANONICAL {
        let result = heist::apply(state, action);
        assert!(result.is_accepted(), "{action} was rejected");
        state = result.into_state();
    }

    assert_eq!(state.stage(), Stage::Complete);
    assert_eq!(state.briefcase_holder(), BriefcaseHolder::HolderB);
    assert!(state.is_final());
}

#[test]
fn cutting_power_before_security_is_rejected() {
    let result = heist::apply(heist::initial_state(), HeistAction::CutPower);

    assert!(!result.is_accepted());
    assert_eq!(
        result.rejection_reason(),
        Some(&Condition::Security(Security::Disabled))
    );
    assert_eq!(result.state().power(), Power::Normal);
}

#[test]
fn completed_heist_rejects_everything_but_reset() {
    let mut coordinator = heist::coordinator();
    coordinator.submit_all(HeistAction::CANONICAL);
    let done = coordinator.snapshot();

    for action in HeistAction::ALL {
        let result = coordinator.submit(action);
        if action == HeistAction::Reset {
            assert!(result.is_accepted());
            assert_eq!(coordinator.current_state(), &heist::initial_state());
        } else {
            assert!(!result.is_accepted(), "{action} accepted after completion");
            assert_eq!(coordinator.current_state(), &done);
        }
    }
}

fn reachable_states() -> HashSet<HeistState> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([heist::initial_state()]);
    while let Some(state) = queue.pop_front() {
        if !seen.insert(state) {
            continue;
        }
        for action in HeistAction::ALL {
            let next = heist::apply(state, action).into_state();
            if !seen.contains(&next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn every_field_combination() -> Vec<HeistState> {
    let mut states = Vec::new();
    for vault in Vault::ALL {
        for security in Security::ALL {
            for holder in BriefcaseHolder::ALL {
                for position in Position::ALL {
                    for power in Power::ALL {
                        for distraction in Distraction::ALL {
                            for stage in Stage::ALL {
                                let state: HeistState = serde_json::from_value(json!({
                                    "vault": vault,
                                    "security": security,
                                    "briefcaseHolder": holder,
                                    "position": position,
                                    "power": power,
                                    "distraction": distraction,
                                    "stage": stage,
                                }))
                                .unwrap();
                                states.push(state);
                            }
                        }
                    }
                }
            }
        }
    }
    states
}

#[test]
fn reachable_states_are_a_strict_subset_of_the_product() {
    let reachable = reachable_states();
    let product = every_field_combination();
    let consistent: HashSet<HeistState> = product
        .iter()
        .copied()
        .filter(HeistState::is_consistent)
        .collect();

    assert_eq!(product.len(), 2 * 2 * 2 * 3 * 2 * 2 * 6);
    // Five milestones times two distraction states, plus Complete.
    assert_eq!(reachable.len(), 11);
    assert!(reachable.is_subset(&consistent));
    assert!(consistent.len() < product.len());
    assert!(product
        .iter()
        .any(|state| state.vault() == Vault::Unlocked && state.security() == Security::Active));
    assert!(!reachable
        .iter()
        .any(|state| state.vault() == Vault::Unlocked && state.security() == Security::Active));
}

#[test]
fn shared_coordinator_runs_the_heist() {
    let shared = SharedCoordinator::new(
        CoordinatorBuilder::new()
            .workflow(heist::Heist)
            .max_log_entries(4)
            .build()
            .unwrap(),
    );

    for action in HeistAction::CANONICAL {
        assert!(shared.submit(action).is_accepted());
    }

    assert!(shared.is_final());
    shared.inspect(|coordinator| {
        assert_eq!(coordinator.log().len(), 4);
        assert_eq!(coordinator.submitted(), 6);
    });
}
