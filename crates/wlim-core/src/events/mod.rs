//! Application-level lifecycle and outcome events shared by the CLI.

use tracing::{error, info};

use crate::matcher::MatchOutcome;
use crate::target::Target;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// Summary of one discovery run as the user will see it
pub fn log_targets_discovered(tree: &str, targets: &[Target]) {
    let label_width = targets.first().map_or(0, |t| t.label().len());
    info!(
        event = "core.app.targets_discovered",
        tree = tree,
        count = targets.len(),
        label_width = label_width,
        first_label = targets.first().map(Target::label),
        last_label = targets.last().map(Target::label)
    );
}

pub fn log_hint_outcome(outcome: &MatchOutcome, dry_run: bool) {
    match outcome {
        MatchOutcome::Selected(selection) => info!(
            event = "core.app.hint_selected",
            label = selection.label(),
            x = selection.click_point().x,
            y = selection.click_point().y,
            button = selection.button().as_str(),
            dry_run = dry_run
        ),
        MatchOutcome::Cancelled => info!(event = "core.app.hint_cancelled", dry_run = dry_run),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};
    use crate::matcher::{MouseButton, Selection};
    use crate::target::PlacedTarget;

    #[test]
    fn test_app_events() {
        // Event helpers must not panic without a subscriber installed
        log_app_startup();
        log_app_shutdown();

        let test_error = std::io::Error::other("test");
        log_app_error(&test_error);
    }

    #[test]
    fn test_outcome_events() {
        let target = PlacedTarget::new(Rect::new(0, 0, 10, 10), Point::new(5, 5), Point::new(16, 8))
            .with_label("a".to_string());

        log_targets_discovered("tree.json", std::slice::from_ref(&target));
        log_targets_discovered("empty.json", &[]);
        log_hint_outcome(
            &MatchOutcome::Selected(Selection::new(0, &target, MouseButton::Middle)),
            true,
        );
        log_hint_outcome(&MatchOutcome::Cancelled, false);
    }
}
