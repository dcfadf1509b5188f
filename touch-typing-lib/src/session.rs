use tracing::debug;

use crate::{
    keys::{ArrowDirection, KeyInput, SymbolicCode},
    navigator,
    text_buffer::{TextArea, TextBuffer},
    virtual_keyboard::VirtualKeyboard,
};

/// What releasing a key did to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// appearance-only key, or a key producing nothing
    Ignored,
    Deleted,
    Moved(ArrowDirection),
    Inserted(char),
}

impl ArrowDirection {
    /// The navigation action bound to this direction.
    pub fn action<T: TextArea + ?Sized>(self) -> fn(&mut T) {
        match self {
            Self::Up => navigator::move_up::<T>,
            Self::Down => navigator::move_down::<T>,
            Self::Left => navigator::move_left::<T>,
            Self::Right => navigator::move_right::<T>,
        }
    }
}

/// One typing window's state: the virtual keyboard and the text being typed.
///
/// Key presses only light up virtual keys. Key releases restore them and then edit the text.
#[derive(Debug, Default, Clone)]
pub struct TypingSession {
    keyboard: VirtualKeyboard,
    buffer: TextBuffer,
}

impl TypingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            ..Default::default()
        }
    }

    pub fn keyboard(&self) -> &VirtualKeyboard {
        &self.keyboard
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn caret(&self) -> usize {
        self.buffer.caret()
    }

    pub fn set_caret(&mut self, offset: usize) {
        self.buffer.set_caret(offset);
    }

    /// Highlights the virtual key for `input`. Returns the highlighted label.
    pub fn on_press(&mut self, input: &KeyInput) -> Option<&'static str> {
        self.keyboard.press(input)
    }

    /// Restores the virtual key for `input`, then applies the key to the text.
    pub fn on_release(&mut self, input: &KeyInput) -> EditOutcome {
        self.keyboard.release(input);

        let outcome = self.apply(input);
        debug!(?input, ?outcome, caret = self.buffer.caret(), "key released");
        outcome
    }

    fn apply(&mut self, input: &KeyInput) -> EditOutcome {
        if input.code.is_appearance_only() {
            return EditOutcome::Ignored;
        }

        if input.code == SymbolicCode::Backspace {
            navigator::delete_before_caret(&mut self.buffer);
            return EditOutcome::Deleted;
        }

        if let Some(direction) = ArrowDirection::from_code(input.code) {
            direction.action::<TextBuffer>()(&mut self.buffer);
            return EditOutcome::Moved(direction);
        }

        match input.character {
            Some(c) => {
                navigator::insert_at_caret(&mut self.buffer, c);
                EditOutcome::Inserted(c)
            }
            None => EditOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn release_inserts_the_character() {
        let mut session = TypingSession::new();
        assert_eq!(session.on_release(&KeyInput::char('a')), EditOutcome::Inserted('a'));
        assert_eq!(session.text(), "a");
        assert_eq!(session.caret(), 1);
    }

    #[test]
    fn press_never_edits() {
        let mut session = TypingSession::with_text("AB");
        session.on_press(&KeyInput::char('c'));
        session.on_press(&KeyInput::code(SymbolicCode::Backspace));
        assert_eq!(session.text(), "AB");
        assert_eq!(session.caret(), 2);
    }

    #[test]
    fn enter_and_tab_insert_their_characters() {
        let mut session = TypingSession::new();
        session.on_release(&KeyInput::code(SymbolicCode::Tab));
        session.on_release(&KeyInput::code(SymbolicCode::Enter));
        assert_eq!(session.text(), "\t\n");
    }

    #[test]
    fn keys_without_a_character_insert_nothing() {
        let mut session = TypingSession::with_text("AB");
        assert_eq!(session.on_release(&KeyInput::default()), EditOutcome::Ignored);
        assert_eq!(session.text(), "AB");
    }

    #[test]
    fn arrow_actions_cover_every_direction() {
        let mut buffer = TextBuffer::from_text("AB\nCD");
        buffer.set_caret(4);
        ArrowDirection::Up.action::<TextBuffer>()(&mut buffer);
        assert_eq!(buffer.caret(), 1);
        ArrowDirection::Right.action::<TextBuffer>()(&mut buffer);
        assert_eq!(buffer.caret(), 2);
        ArrowDirection::Down.action::<TextBuffer>()(&mut buffer);
        assert_eq!(buffer.caret(), 4);
        ArrowDirection::Left.action::<TextBuffer>()(&mut buffer);
        assert_eq!(buffer.caret(), 3);
    }
}
