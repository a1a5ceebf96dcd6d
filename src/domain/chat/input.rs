//! Input events handled by the conversation controller.

/// A key press in the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    /// Shift held; Shift+Enter asks for a newline instead of a submit.
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(char),
}

impl KeyPress {
    pub fn enter() -> Self {
        Self {
            key: Key::Enter,
            shift: false,
        }
    }

    pub fn shift_enter() -> Self {
        Self {
            key: Key::Enter,
            shift: true,
        }
    }

    pub fn char(c: char) -> Self {
        Self {
            key: Key::Other(c),
            shift: false,
        }
    }

    /// Returns true if this press submits the current draft.
    pub fn is_submit(&self) -> bool {
        self.key == Key::Enter && !self.shift
    }
}

/// Canned prompts offered beneath the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickAction {
    CalculateConcrete,
    SafetyGuidelines,
    WeatherTips,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::CalculateConcrete,
        QuickAction::SafetyGuidelines,
        QuickAction::WeatherTips,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::CalculateConcrete => "Calculate concrete",
            QuickAction::SafetyGuidelines => "Safety guidelines",
            QuickAction::WeatherTips => "Weather tips",
        }
    }

    /// Text placed into the input draft.
    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::CalculateConcrete => {
                "How much concrete do I need for a 10x10 foundation?"
            }
            QuickAction::SafetyGuidelines => {
                "What safety equipment is required for roofing work?"
            }
            QuickAction::WeatherTips => "Best practices for concrete curing in cold weather",
        }
    }
}
