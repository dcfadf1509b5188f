use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    widgets::{Block, Paragraph, Widget},
};
use touch_typing_lib::{
    VirtualKey, VirtualKeyboard,
    config::{Rgb, Theme},
    layout,
};

/// Rows a virtual key takes up, borders included.
pub const KEY_HEIGHT: u16 = 3;

pub fn keyboard_height() -> u16 {
    layout::KEYBOARD_ROWS as u16 * KEY_HEIGHT
}

pub fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// The on-screen keyboard, one bordered cell per virtual key.
pub struct KeyboardView<'a> {
    keyboard: &'a VirtualKeyboard,
    theme: &'a Theme,
}

impl<'a> KeyboardView<'a> {
    pub fn new(keyboard: &'a VirtualKeyboard, theme: &'a Theme) -> Self {
        Self { keyboard, theme }
    }

    fn render_key(&self, key: &VirtualKey, area: Rect, buf: &mut Buffer) {
        let fill = if key.is_pressed() {
            self.theme.key_pressed
        } else {
            self.theme.key_normal
        };
        let block = Block::bordered()
            .fg(color(self.theme.key_border))
            .bg(color(fill));
        let label = fit_label(key.label(), block.inner(area).width);
        Paragraph::new(label)
            .centered()
            .fg(Color::Black)
            .block(block)
            .render(area, buf);
    }
}

impl Widget for KeyboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let per_row = layout::keys_per_row();
        let row_areas = Layout::vertical(
            (0..layout::KEYBOARD_ROWS).map(|_| Constraint::Length(KEY_HEIGHT)),
        )
        .split(area);

        let mut keys = self.keyboard.keys().iter();
        for (row, row_area) in layout::rows().zip(row_areas.iter()) {
            let cells = Layout::horizontal((0..per_row).map(|_| Constraint::Ratio(1, per_row as u32)))
                .split(*row_area);
            for cell in cells.iter().take(row.len()) {
                if let Some(key) = keys.next() {
                    self.render_key(key, *cell, buf);
                }
            }
        }
    }
}

/// Shortens long labels when the cell is too narrow for them.
fn fit_label(label: &str, width: u16) -> &str {
    if label.chars().count() <= usize::from(width) {
        return label;
    }
    match label {
        "Backspace" => "⌫",
        "Enter" => "⏎",
        "Shift" => "⇧",
        "Caps" => "⇪",
        "Tab" => "⇥",
        _ => label,
    }
}
