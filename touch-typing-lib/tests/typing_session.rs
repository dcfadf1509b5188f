use pretty_assertions::assert_eq;
use touch_typing_lib::{
    EditOutcome, Highlight, KeyInput, SymbolicCode, TypingSession,
};

fn session(text: &str, caret: usize) -> TypingSession {
    let mut session = TypingSession::with_text(text);
    session.set_caret(caret);
    session
}

fn type_key(session: &mut TypingSession, input: KeyInput) -> EditOutcome {
    session.on_press(&input);
    session.on_release(&input)
}

#[test]
fn printable_ascii_inserts_at_the_caret() {
    for c in (0x20u8..0x7f).map(char::from) {
        let mut session = session("xy", 1);
        assert_eq!(type_key(&mut session, KeyInput::char(c)), EditOutcome::Inserted(c));
        assert_eq!(session.text(), format!("x{c}y"));
        assert_eq!(session.caret(), 2);
        assert_eq!(session.keyboard().highlighted().count(), 0, "{c:?} stayed lit");
    }
}

#[test]
fn typing_into_an_empty_buffer() {
    let mut session = session("", 0);
    session.on_release(&KeyInput::char('a'));
    assert_eq!(session.text(), "a");
    assert_eq!(session.caret(), 1);
}

#[test]
fn backspace_removes_the_previous_character() {
    let mut session = session("ABC", 3);
    session.on_release(&KeyInput::code(SymbolicCode::Backspace));
    assert_eq!(session.text(), "AB");
    assert_eq!(session.caret(), 2);
}

#[test]
fn backspace_in_the_middle() {
    let mut session = session("ABC", 2);
    session.on_release(&KeyInput::code(SymbolicCode::Backspace));
    assert_eq!(session.text(), "AC");
    assert_eq!(session.caret(), 1);
}

#[test]
fn backspace_at_the_start_does_nothing() {
    let mut session = session("ABC", 0);
    session.on_release(&KeyInput::code(SymbolicCode::Backspace));
    assert_eq!(session.text(), "ABC");
    assert_eq!(session.caret(), 0);
}

#[test]
fn right_arrow() {
    let mut session = session("AB", 0);
    let outcome = session.on_release(&KeyInput::code(SymbolicCode::Right));
    assert_eq!(outcome, EditOutcome::Moved(touch_typing_lib::ArrowDirection::Right));
    assert_eq!(session.caret(), 1);

    let mut session = self::session("AB", 2);
    session.on_release(&KeyInput::code(SymbolicCode::Right));
    assert_eq!(session.caret(), 2);
}

#[test]
fn left_arrow() {
    let mut session = session("AB", 0);
    session.on_release(&KeyInput::code(SymbolicCode::Left));
    assert_eq!(session.caret(), 0);

    let mut session = self::session("AB", 2);
    session.on_release(&KeyInput::code(SymbolicCode::Left));
    assert_eq!(session.caret(), 1);
}

#[test]
fn vertical_arrows_keep_the_column() {
    let mut session = session("AB\nCD", 4);
    session.on_release(&KeyInput::code(SymbolicCode::Up));
    assert_eq!(session.caret(), 1);
    session.on_release(&KeyInput::code(SymbolicCode::Down));
    assert_eq!(session.caret(), 4);
    assert_eq!(session.text(), "AB\nCD");
}

#[test]
fn caps_lock_and_shift_never_edit() {
    for caret in 0..=3 {
        for code in [SymbolicCode::CapsLock, SymbolicCode::Shift] {
            let mut session = session("ABC", caret);
            assert_eq!(type_key(&mut session, KeyInput::code(code)), EditOutcome::Ignored);
            assert_eq!(session.text(), "ABC");
            assert_eq!(session.caret(), caret);
        }
    }
}

#[test]
fn backspace_lights_exactly_its_own_key() {
    let mut session = TypingSession::new();
    let input = KeyInput::code(SymbolicCode::Backspace);

    assert_eq!(session.on_press(&input), Some("Backspace"));
    let lit: Vec<_> = session.keyboard().highlighted().map(|key| key.label()).collect();
    assert_eq!(lit, vec!["Backspace"]);

    session.on_release(&input);
    assert_eq!(
        session.keyboard().key("Backspace").map(|key| key.highlight()),
        Some(Highlight::Normal)
    );
    assert_eq!(session.keyboard().highlighted().count(), 0);
}

#[test]
fn held_keys_stay_lit_until_released() {
    let mut session = TypingSession::new();
    session.on_press(&KeyInput::code(SymbolicCode::Shift));
    session.on_press(&KeyInput::char('A'));
    let lit: Vec<_> = session.keyboard().highlighted().map(|key| key.label()).collect();
    assert_eq!(lit, vec!["A", "Shift"]);

    session.on_release(&KeyInput::char('A'));
    let lit: Vec<_> = session.keyboard().highlighted().map(|key| key.label()).collect();
    assert_eq!(lit, vec!["Shift"]);
    assert_eq!(session.text(), "A");
}
