use dioxus::prelude::{Key, Modifiers};
use touch_typing_lib::{KeyInput, SymbolicCode};

/// Translates a webview key event into the toolkit independent [`KeyInput`].
///
/// Characters typed while Ctrl, Alt or Meta is held are shortcuts, not text, and are dropped.
pub fn key_input(key: &Key, modifiers: Modifiers) -> KeyInput {
    let code = match key {
        Key::Backspace => SymbolicCode::Backspace,
        Key::Tab => SymbolicCode::Tab,
        Key::CapsLock => SymbolicCode::CapsLock,
        Key::Enter => SymbolicCode::Enter,
        Key::Shift => SymbolicCode::Shift,
        Key::ArrowUp => SymbolicCode::Up,
        Key::ArrowDown => SymbolicCode::Down,
        Key::ArrowLeft => SymbolicCode::Left,
        Key::ArrowRight => SymbolicCode::Right,
        Key::Character(text) if !is_shortcut(modifiers) => {
            let mut chars = text.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => KeyInput::char(c),
                _ => KeyInput::default(),
            };
        }
        _ => SymbolicCode::Other,
    };
    KeyInput::code(code)
}

fn is_shortcut(modifiers: Modifiers) -> bool {
    modifiers.intersects(Modifiers::CONTROL | Modifiers::ALT | Modifiers::META)
}
