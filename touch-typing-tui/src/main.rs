mod events;
mod keyboard_view;
mod terminal_events;

use std::{env, fs::File, io, sync::Mutex, thread, time::Duration};

use color_eyre::Result;
use events::Event;
use keyboard_view::{KeyboardView, color, keyboard_height};
use ratatui::{
    DefaultTerminal, Frame,
    crossterm::{
        event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
        execute,
        terminal::supports_keyboard_enhancement,
    },
    layout::{Constraint, Layout, Position},
    style::{Color, Stylize},
    text::Span,
    widgets::{Block, BorderType, Paragraph},
};
use terminal_events::{ReleaseMode, handle_terminal_events, stop_reading};
use tokio::sync::mpsc::{Receiver, Sender, channel};
use touch_typing_lib::{Config, TypingSession};
use tracing::{debug, info, warn};

const TAB_WIDTH: usize = 4;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    color_eyre::install()?;

    let mut state = AppState::new(Config::load_or_default());

    let terminal = ratatui::init();
    let enhanced = matches!(supports_keyboard_enhancement(), Ok(true))
        && execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
            )
        )
        .is_ok();
    let mode = if enhanced {
        ReleaseMode::Reported
    } else {
        warn!("terminal doesn't report key releases, releasing keys after a delay");
        ReleaseMode::Synthetic(Duration::from_millis(
            state.config.terminal.release_delay_ms,
        ))
    };

    let result = run(terminal, &mut state, mode).await;

    if enhanced {
        pop_keyboard_flags(&mut io::stdout());
    }
    ratatui::restore();
    result
}

fn pop_keyboard_flags(out: &mut impl io::Write) {
    if let Err(e) = execute!(out, PopKeyboardEnhancementFlags) {
        warn!("couldn't restore keyboard flags: {e}");
    }
}

/// Logs go to a file, the terminal belongs to the UI.
fn init_logging() {
    let path = env::temp_dir().join("touch-typing-tui.log");
    if let Ok(file) = File::create(&path) {
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
        info!("logging to {}", path.display());
    }
}

async fn run(mut terminal: DefaultTerminal, state: &mut AppState, mode: ReleaseMode) -> Result<()> {
    let tx = state.event_tx.clone();
    thread::spawn(move || {
        let result = handle_terminal_events(tx.clone(), mode);
        stop_reading(result, &tx);
    });

    loop {
        terminal.draw(|f| render(f, state))?;
        let Some(event) = state.event_rx.recv().await else {
            break Ok(());
        };
        debug!("{event}");
        match event {
            Event::KeyPressed(input) => {
                state.session.on_press(&input);
            }
            Event::KeyReleased(input) => {
                state.session.on_release(&input);
            }
            Event::Redraw => (),
            Event::Quit => break Ok(()),
        }
    }
}

fn render(frame: &mut Frame, state: &AppState) {
    let layout = Layout::vertical([Constraint::Fill(1), Constraint::Length(keyboard_height())]);
    let [text_area, keys_area] = layout.areas(frame.area());
    let theme = &state.config.theme;

    let block = Block::bordered()
        .title(format!(" {} ", state.config.window.title))
        .border_type(BorderType::Rounded);
    let inner = block.inner(text_area);

    let (before, _) = state.session.buffer().split_at_caret();
    let (line, column) = caret_cell(&before);
    let scroll = line.saturating_sub(inner.height.saturating_sub(1));

    let text = expand_tabs(&state.session.text());
    let paragraph = Paragraph::new(text)
        .block(block)
        .scroll((scroll, 0))
        .fg(Color::Black)
        .bg(color(theme.background));
    frame.render_widget(paragraph, text_area);
    frame.set_cursor_position(Position::new(
        inner.x + column.min(inner.width.saturating_sub(1)),
        inner.y + line - scroll,
    ));

    frame.render_widget(KeyboardView::new(state.session.keyboard(), theme), keys_area);
}

fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Row and column the caret occupies, given the text in front of it.
fn caret_cell(before: &str) -> (u16, u16) {
    let line = before.matches('\n').count();
    let current = before.rsplit('\n').next().unwrap_or_default();
    let column = Span::raw(expand_tabs(current)).width();
    (
        u16::try_from(line).unwrap_or(u16::MAX),
        u16::try_from(column).unwrap_or(u16::MAX),
    )
}

pub struct AppState {
    pub session: TypingSession,
    pub config: Config,

    event_rx: Receiver<Event>,
    event_tx: Sender<Event>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = channel(16);
        Self {
            session: TypingSession::new(),
            config,
            event_rx,
            event_tx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedTerminal;

    impl io::Write for ClosedTerminal {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn keyboard_flags_are_popped() {
        let mut out = Vec::new();
        pop_keyboard_flags(&mut out);
        assert_eq!(out, b"\x1B[<1u");
    }

    #[test]
    fn popping_flags_on_a_closed_terminal_is_not_fatal() {
        pop_keyboard_flags(&mut ClosedTerminal);
    }

    #[test]
    fn caret_cell_counts_lines_and_columns() {
        assert_eq!(caret_cell(""), (0, 0));
        assert_eq!(caret_cell("ab"), (0, 2));
        assert_eq!(caret_cell("ab\nc"), (1, 1));
        assert_eq!(caret_cell("ab\n"), (1, 0));
        assert_eq!(caret_cell("\tx"), (0, 5));
    }
}
