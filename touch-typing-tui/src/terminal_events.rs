use std::{thread, time::Duration};

use color_eyre::Result;
use ratatui::crossterm::event::{
    self, Event as CE, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode,
};
use tokio::sync::mpsc::Sender;
use touch_typing_lib::{KeyInput, SymbolicCode};
use tracing::{debug, warn};

use crate::events::Event;

/// How key releases reach the app.
#[derive(Debug, Clone, Copy)]
pub enum ReleaseMode {
    /// the terminal reports press, repeat and release separately
    Reported,
    /// the terminal only reports presses, each one is released after the delay
    Synthetic(Duration),
}

/// Reads terminal events until the app stops listening.
pub fn handle_terminal_events(tx: Sender<Event>, mode: ReleaseMode) -> Result<()> {
    loop {
        let sent = match event::read()? {
            CE::Key(key_event) => handle_key(&tx, key_event, mode),
            CE::Resize(_, _) => tx.blocking_send(Event::Redraw).is_ok(),
            CE::FocusGained | CE::FocusLost | CE::Mouse(_) | CE::Paste(_) => true,
        };
        if !sent {
            break Ok(());
        }
    }
}

/// Called once the reader thread is done. A failed read would leave the app waiting for keys
/// that never come, so it asks the app to quit.
pub fn stop_reading(result: Result<()>, tx: &Sender<Event>) {
    if let Err(e) = result {
        warn!("couldn't read terminal events: {e:?}");
        let _ = tx.blocking_send(Event::Quit);
    }
}

fn handle_key(tx: &Sender<Event>, key_event: KeyEvent, mode: ReleaseMode) -> bool {
    if is_quit(&key_event) {
        return tx.blocking_send(Event::Quit).is_ok();
    }

    let input = key_input(&key_event);
    match (key_event.kind, mode) {
        (KeyEventKind::Press | KeyEventKind::Repeat, ReleaseMode::Reported) => {
            tx.blocking_send(Event::KeyPressed(input)).is_ok()
        }
        (KeyEventKind::Release, ReleaseMode::Reported) => {
            tx.blocking_send(Event::KeyReleased(input)).is_ok()
        }
        (KeyEventKind::Press | KeyEventKind::Repeat, ReleaseMode::Synthetic(delay)) => {
            if tx.blocking_send(Event::KeyPressed(input)).is_err() {
                return false;
            }
            // keys typed meanwhile wait in the terminal's input queue
            thread::sleep(delay);
            tx.blocking_send(Event::KeyReleased(input)).is_ok()
        }
        (KeyEventKind::Release, ReleaseMode::Synthetic(_)) => {
            debug!("unexpected release from a terminal without release reports");
            true
        }
    }
}

fn is_quit(key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }
    match key_event.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key_event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

pub fn key_input(key_event: &KeyEvent) -> KeyInput {
    let code = match key_event.code {
        KeyCode::Backspace => SymbolicCode::Backspace,
        KeyCode::Tab | KeyCode::BackTab => SymbolicCode::Tab,
        KeyCode::CapsLock => SymbolicCode::CapsLock,
        KeyCode::Enter => SymbolicCode::Enter,
        KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
            SymbolicCode::Shift
        }
        KeyCode::Up => SymbolicCode::Up,
        KeyCode::Down => SymbolicCode::Down,
        KeyCode::Left => SymbolicCode::Left,
        KeyCode::Right => SymbolicCode::Right,
        KeyCode::Char(c) => {
            let mods = key_event.modifiers;
            if mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) {
                return KeyInput::default();
            }
            return KeyInput::char(c);
        }
        _ => SymbolicCode::Other,
    };
    KeyInput::code(code)
}
