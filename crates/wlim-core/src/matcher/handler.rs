use tracing::debug;

use super::types::{HintView, KeyEvent, MatchState, MouseButton, Selection};
use crate::target::Target;

/// Incremental label matcher over a fixed, labeled target list.
///
/// The matcher holds no session state of its own. Each call to [`step`]
/// maps the previous [`MatchState`] and one [`KeyEvent`] to the next state.
///
/// [`step`]: KeystrokeMatcher::step
#[derive(Debug, Clone, Copy)]
pub struct KeystrokeMatcher<'a> {
    targets: &'a [Target],
    max_typed: usize,
}

impl<'a> KeystrokeMatcher<'a> {
    pub fn new(targets: &'a [Target], max_typed: usize) -> Self {
        Self { targets, max_typed }
    }

    pub fn targets(&self) -> &'a [Target] {
        self.targets
    }

    pub fn max_typed(&self) -> usize {
        self.max_typed
    }

    /// Compute the state that follows `state` after `event`.
    ///
    /// Terminal states are absorbing.
    pub fn step(&self, state: &MatchState, event: &KeyEvent) -> MatchState {
        let MatchState::Typing { prefix } = state else {
            return state.clone();
        };

        match *event {
            KeyEvent::Cancel => MatchState::Cancelled,
            KeyEvent::Backspace => {
                let mut prefix = prefix.clone();
                prefix.pop();
                MatchState::Typing { prefix }
            }
            KeyEvent::Character { ch, modifiers } => {
                if !ch.is_ascii_lowercase() || prefix.len() >= self.max_typed {
                    return state.clone();
                }

                let mut candidate = prefix.clone();
                candidate.push(ch);

                let mut exact = self
                    .targets
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.label() == candidate);
                if let (Some((index, target)), None) = (exact.next(), exact.next()) {
                    let button = MouseButton::from_modifiers(modifiers);
                    debug!(
                        event = "core.matcher.selection_completed",
                        label = target.label(),
                        button = button.as_str()
                    );
                    return MatchState::Selected(Selection::new(index, target, button));
                }

                if self.has_prefix_match(&candidate) {
                    MatchState::Typing { prefix: candidate }
                } else {
                    debug!(event = "core.matcher.prefix_reset", typed = %candidate);
                    MatchState::default()
                }
            }
        }
    }

    fn has_prefix_match(&self, prefix: &str) -> bool {
        self.targets.iter().any(|t| t.label().starts_with(prefix))
    }

    /// Project every target against `prefix` for rendering.
    pub fn hints(&self, prefix: &str) -> Vec<HintView<'a>> {
        self.targets
            .iter()
            .map(|target| {
                let visible = target.label().starts_with(prefix);
                let typed_len = if visible { prefix.len() } else { 0 };
                HintView::new(target, visible, typed_len)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};
    use crate::labels::label_targets;
    use crate::matcher::types::{MatchOutcome, Modifiers};
    use crate::target::PlacedTarget;

    fn targets(count: usize) -> Vec<Target> {
        let placed = (0..count)
            .map(|i| {
                let x = i as i32 * 20;
                PlacedTarget::new(
                    Rect::new(x, 0, 10, 10),
                    Point::new(x + 5, 5),
                    Point::new(x + 16, 8),
                )
            })
            .collect();
        label_targets(placed)
    }

    fn feed(matcher: &KeystrokeMatcher, events: &[KeyEvent]) -> MatchState {
        events
            .iter()
            .fold(MatchState::default(), |state, event| matcher.step(&state, event))
    }

    #[test]
    fn test_unknown_letter_resets_then_selects() {
        let targets = targets(3);
        let matcher = KeystrokeMatcher::new(&targets, 8);

        let state = matcher.step(&MatchState::default(), &KeyEvent::character('d'));
        assert_eq!(state, MatchState::default());

        let state = matcher.step(&state, &KeyEvent::character('a'));
        let MatchState::Selected(selection) = state else {
            panic!("expected selection, got {state:?}");
        };
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.label(), "a");
        assert_eq!(selection.click_point(), Point::new(5, 5));
        assert_eq!(selection.button(), MouseButton::Primary);
    }

    #[test]
    fn test_two_letter_labels() {
        let targets = targets(30);
        let matcher = KeystrokeMatcher::new(&targets, 8);

        let state = matcher.step(&MatchState::default(), &KeyEvent::character('b'));
        assert_eq!(state.typed(), "b");
        assert!(!state.is_terminal());

        let state = matcher.step(&state, &KeyEvent::character('c'));
        let Some(MatchOutcome::Selected(selection)) = state.outcome() else {
            panic!("expected selection");
        };
        assert_eq!(selection.label(), "bc");
        assert_eq!(selection.index(), 28);
    }

    #[test]
    fn test_dead_end_second_letter_resets() {
        // Labels run aa..bd; "bz" has no continuation
        let targets = targets(30);
        let matcher = KeystrokeMatcher::new(&targets, 8);
        let state = feed(
            &matcher,
            &[KeyEvent::character('b'), KeyEvent::character('z')],
        );
        assert_eq!(state.typed(), "");
    }

    #[test]
    fn test_backspace() {
        let targets = targets(30);
        let matcher = KeystrokeMatcher::new(&targets, 8);

        let state = matcher.step(&MatchState::default(), &KeyEvent::Backspace);
        assert_eq!(state, MatchState::default());

        let state = feed(&matcher, &[KeyEvent::character('a'), KeyEvent::Backspace]);
        assert_eq!(state.typed(), "");
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_cancel_is_terminal() {
        let targets = targets(30);
        let matcher = KeystrokeMatcher::new(&targets, 8);
        let state = feed(&matcher, &[KeyEvent::character('a'), KeyEvent::Cancel]);
        assert_eq!(state, MatchState::Cancelled);

        // Absorbing
        let after = matcher.step(&state, &KeyEvent::character('a'));
        assert_eq!(after, MatchState::Cancelled);
    }

    #[test]
    fn test_non_lowercase_ignored() {
        let targets = targets(3);
        let matcher = KeystrokeMatcher::new(&targets, 8);
        for ch in ['A', '1', ' ', 'é'] {
            let state = matcher.step(&MatchState::default(), &KeyEvent::character(ch));
            assert_eq!(state, MatchState::default());
        }
    }

    #[test]
    fn test_typed_cap_is_noop() {
        let targets = targets(30);
        let matcher = KeystrokeMatcher::new(&targets, 1);
        let state = feed(
            &matcher,
            &[KeyEvent::character('a'), KeyEvent::character('a')],
        );
        assert_eq!(state.typed(), "a");
    }

    #[test]
    fn test_modifiers_pick_button() {
        let targets = targets(3);
        let matcher = KeystrokeMatcher::new(&targets, 8);

        let shift = KeyEvent::with_modifiers(
            'b',
            Modifiers {
                shift: true,
                control: false,
            },
        );
        let MatchState::Selected(selection) = matcher.step(&MatchState::default(), &shift) else {
            panic!("expected selection");
        };
        assert_eq!(selection.button(), MouseButton::Secondary);

        let control = KeyEvent::with_modifiers(
            'c',
            Modifiers {
                shift: false,
                control: true,
            },
        );
        let MatchState::Selected(selection) = matcher.step(&MatchState::default(), &control)
        else {
            panic!("expected selection");
        };
        assert_eq!(selection.button(), MouseButton::Middle);
    }

    #[test]
    fn test_hints_projection() {
        let targets = targets(30);
        let matcher = KeystrokeMatcher::new(&targets, 8);

        let hints = matcher.hints("");
        assert!(hints.iter().all(|h| h.is_visible() && h.typed_len() == 0));

        let hints = matcher.hints("b");
        let visible: Vec<&str> = hints
            .iter()
            .filter(|h| h.is_visible())
            .map(|h| h.label())
            .collect();
        assert_eq!(visible, vec!["ba", "bb", "bc", "bd"]);

        let ba = &hints[26];
        assert_eq!(ba.typed_part(), "b");
        assert_eq!(ba.remaining_part(), "a");
        assert_eq!(ba.anchor_point(), Point::new(26 * 20 + 16, 8));
        assert!(!hints[0].is_visible());
    }
}
