use serde::Serialize;

use crate::geometry::Point;
use crate::target::Target;

/// Default cap on the number of typed characters
pub const DEFAULT_MAX_TYPED: usize = 8;

/// Modifier keys held while a character was typed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
    };
}

/// Input delivered by the hint surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Character { ch: char, modifiers: Modifiers },
    Backspace,
    Cancel,
}

impl KeyEvent {
    pub fn character(ch: char) -> Self {
        KeyEvent::Character {
            ch,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(ch: char, modifiers: Modifiers) -> Self {
        KeyEvent::Character { ch, modifiers }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

impl MouseButton {
    /// Shift wins over Control when both are held.
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.shift {
            MouseButton::Secondary
        } else if modifiers.control {
            MouseButton::Middle
        } else {
            MouseButton::Primary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MouseButton::Primary => "primary",
            MouseButton::Secondary => "secondary",
            MouseButton::Middle => "middle",
        }
    }
}

impl std::fmt::Display for MouseButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The chosen target and how to click it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    index: usize,
    label: String,
    click_point: Point,
    button: MouseButton,
}

impl Selection {
    pub fn new(index: usize, target: &Target, button: MouseButton) -> Self {
        Self {
            index,
            label: target.label().to_string(),
            click_point: target.click_point(),
            button,
        }
    }

    /// Position of the selected target in the labeled list
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn click_point(&self) -> Point {
        self.click_point
    }
    pub fn button(&self) -> MouseButton {
        self.button
    }
}

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum MatchOutcome {
    Selected(Selection),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchState {
    Typing { prefix: String },
    Selected(Selection),
    Cancelled,
}

impl Default for MatchState {
    fn default() -> Self {
        MatchState::Typing {
            prefix: String::new(),
        }
    }
}

impl MatchState {
    /// Characters typed so far; empty once the session has ended
    pub fn typed(&self) -> &str {
        match self {
            MatchState::Typing { prefix } => prefix,
            _ => "",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchState::Typing { .. })
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self {
            MatchState::Typing { .. } => None,
            MatchState::Selected(selection) => Some(MatchOutcome::Selected(selection.clone())),
            MatchState::Cancelled => Some(MatchOutcome::Cancelled),
        }
    }
}

/// Render-time projection of one target against the typed prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintView<'a> {
    target: &'a Target,
    visible: bool,
    typed_len: usize,
}

impl<'a> HintView<'a> {
    pub fn new(target: &'a Target, visible: bool, typed_len: usize) -> Self {
        Self {
            target,
            visible,
            typed_len,
        }
    }

    pub fn target(&self) -> &'a Target {
        self.target
    }
    pub fn label(&self) -> &'a str {
        self.target.label()
    }
    pub fn anchor_point(&self) -> Point {
        self.target.anchor_point()
    }
    /// Whether the label still starts with the typed prefix
    pub fn is_visible(&self) -> bool {
        self.visible
    }
    /// Split point between the typed and remaining part of the label
    pub fn typed_len(&self) -> usize {
        self.typed_len
    }
    pub fn typed_part(&self) -> &'a str {
        &self.target.label()[..self.typed_len]
    }
    pub fn remaining_part(&self) -> &'a str {
        &self.target.label()[self.typed_len..]
    }
}
