use std::collections::VecDeque;
use std::time::Duration;

use tracing::info;

use crate::actuate::DEFAULT_SETTLE_DELAY_MS;
use crate::matcher::{DEFAULT_MAX_TYPED, HintView, KeyEvent};

/// Where hints are drawn. Implemented by the overlay.
pub trait HintSurface {
    /// Show every hint for the first time.
    fn render(&mut self, hints: &[HintView<'_>]);

    /// Redraw after the typed prefix changed.
    fn update(&mut self, hints: &[HintView<'_>]);

    /// Remove the surface. Called exactly once, before any click.
    fn teardown(&mut self);
}

/// Blocking source of key events. `None` means no more input will arrive.
pub trait KeySource {
    fn next_key(&mut self) -> Option<KeyEvent>;
}

/// Keys replayed from a fixed list
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Option<KeyEvent> {
        self.keys.pop_front()
    }
}

/// A surface that draws nothing and logs what it would show
#[derive(Debug, Default)]
pub struct LogSurface {
    redraws: usize,
    torn_down: bool,
}

impl LogSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redraws(&self) -> usize {
        self.redraws
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl HintSurface for LogSurface {
    fn render(&mut self, hints: &[HintView<'_>]) {
        info!(event = "core.session.render_completed", hints = hints.len());
    }

    fn update(&mut self, hints: &[HintView<'_>]) {
        self.redraws += 1;
        let visible = hints.iter().filter(|h| h.is_visible()).count();
        info!(
            event = "core.session.update_completed",
            visible = visible,
            typed_len = hints.iter().map(|h| h.typed_len()).max().unwrap_or(0)
        );
    }

    fn teardown(&mut self) {
        self.torn_down = true;
        info!(event = "core.session.teardown_completed");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub max_typed: usize,
    /// Pause between teardown and the click
    pub settle_delay: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_typed: DEFAULT_MAX_TYPED,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}
