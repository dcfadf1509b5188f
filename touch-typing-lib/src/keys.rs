use strum::{Display, EnumIter, IntoEnumIterator};

/// Platform independent identity of a physical key, for the keys that don't simply produce a
/// character.
#[derive(Debug, Default, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SymbolicCode {
    Backspace,
    Tab,
    CapsLock,
    Enter,
    Shift,
    Up,
    Down,
    Left,
    Right,
    /// any key without a binding of its own
    #[default]
    Other,
}

impl SymbolicCode {
    /// Label of the virtual key bound to this code.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Backspace => Some("Backspace"),
            Self::Tab => Some("Tab"),
            Self::CapsLock => Some("Caps"),
            Self::Enter => Some("Enter"),
            Self::Shift => Some("Shift"),
            Self::Up => Some("↑"),
            Self::Down => Some("↓"),
            Self::Left => Some("←"),
            Self::Right => Some("→"),
            Self::Other => None,
        }
    }

    /// Keys that only change how the keyboard looks and never edit text.
    pub fn is_appearance_only(self) -> bool {
        matches!(self, Self::CapsLock | Self::Shift)
    }

    /// Every code that has a virtual key bound to it.
    pub fn bound() -> impl Iterator<Item = Self> {
        Self::iter().filter(|code| code.label().is_some())
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowDirection {
    pub fn from_code(code: SymbolicCode) -> Option<Self> {
        match code {
            SymbolicCode::Up => Some(Self::Up),
            SymbolicCode::Down => Some(Self::Down),
            SymbolicCode::Left => Some(Self::Left),
            SymbolicCode::Right => Some(Self::Right),
            _ => None,
        }
    }
}

/// A key event as delivered by a front end, stripped of toolkit types.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub character: Option<char>,
    pub code: SymbolicCode,
}

impl KeyInput {
    pub fn new(character: Option<char>, code: SymbolicCode) -> Self {
        Self { character, code }
    }

    /// A printable key, e.g. `a` or `;`.
    pub fn char(character: char) -> Self {
        Self::new(Some(character), SymbolicCode::Other)
    }

    /// A bound key with the character the platform usually attaches to it.
    pub fn code(code: SymbolicCode) -> Self {
        let character = match code {
            SymbolicCode::Backspace => Some('\u{8}'),
            SymbolicCode::Tab => Some('\t'),
            SymbolicCode::Enter => Some('\n'),
            _ => None,
        };
        Self::new(character, code)
    }
}
