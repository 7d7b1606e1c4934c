use std::thread;

use tracing::{info, warn};

use super::errors::SessionError;
use super::types::{HintSurface, KeySource, SessionSettings};
use crate::actuate::Actuator;
use crate::matcher::{KeystrokeMatcher, MatchOutcome, MatchState};
use crate::target::Target;

/// Drive one interactive selection to completion.
///
/// Hints are rendered, then key events are fed through the matcher until it
/// reaches a terminal state. A key source that runs dry counts as a cancel.
/// The surface is always torn down. On a selection the click follows the
/// teardown after `settings.settle_delay`, and happens exactly once.
pub fn run_session(
    targets: &[Target],
    surface: &mut dyn HintSurface,
    keys: &mut dyn KeySource,
    actuator: &mut dyn Actuator,
    settings: &SessionSettings,
) -> Result<MatchOutcome, SessionError> {
    if targets.is_empty() {
        return Err(SessionError::NoTargets);
    }

    info!(event = "core.session.run_started", targets = targets.len());

    let matcher = KeystrokeMatcher::new(targets, settings.max_typed);
    let mut state = MatchState::default();
    surface.render(&matcher.hints(state.typed()));

    let mut keystrokes = 0;
    while !state.is_terminal() {
        let Some(key) = keys.next_key() else {
            warn!(event = "core.session.keys_exhausted", keystrokes = keystrokes);
            state = MatchState::Cancelled;
            break;
        };
        keystrokes += 1;

        state = matcher.step(&state, &key);
        if !state.is_terminal() {
            surface.update(&matcher.hints(state.typed()));
        }
    }

    surface.teardown();

    let outcome = state.outcome().unwrap_or(MatchOutcome::Cancelled);
    match &outcome {
        MatchOutcome::Selected(selection) => {
            thread::sleep(settings.settle_delay);
            actuator.click(selection.click_point(), selection.button())?;
            info!(
                event = "core.session.run_completed",
                label = selection.label(),
                x = selection.click_point().x,
                y = selection.click_point().y,
                button = selection.button().as_str(),
                keystrokes = keystrokes
            );
        }
        MatchOutcome::Cancelled => {
            info!(
                event = "core.session.run_cancelled",
                keystrokes = keystrokes
            );
        }
    }

    Ok(outcome)
}
