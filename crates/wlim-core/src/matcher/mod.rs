//! Keystroke matching: a pure state machine from typed keys to a selection.

pub mod handler;
pub mod types;

pub use handler::KeystrokeMatcher;
pub use types::{
    DEFAULT_MAX_TYPED, HintView, KeyEvent, MatchOutcome, MatchState, Modifiers, MouseButton,
    Selection,
};
