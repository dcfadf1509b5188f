//! The fixed on-screen keyboard layout.

/// Labels of every virtual key, in the order they are laid out on screen.
pub const KEYS: [&str; 56] = [
    "~", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", "Backspace", //
    "Tab", "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "[", "]", "\\", //
    "Caps", "A", "S", "D", "F", "G", "H", "J", "K", "L", ";", "'", "↑", "Enter", //
    "Shift", "Z", "X", "C", "V", "B", "N", "M", ",", ".", "?", "←", "↓", "→",
];

pub const KEYBOARD_ROWS: usize = 4;
pub const KEYBOARD_COLS: usize = 15;

/// Number of keys placed on each row.
///
/// The row count takes precedence over [`KEYBOARD_COLS`]: keys flow row-major and every row
/// but the last holds `ceil(len / rows)` keys, so the grid never grows a fifth row.
pub const fn keys_per_row() -> usize {
    KEYS.len().div_ceil(KEYBOARD_ROWS)
}

/// Labels grouped by visual row, top to bottom.
pub fn rows() -> impl Iterator<Item = &'static [&'static str]> {
    KEYS.chunks(keys_per_row())
}

/// Labels that are only reachable through a symbolic key code, never through the character a
/// key produces.
pub const CODE_ONLY_LABELS: [&str; 3] = ["Backspace", "Tab", "Caps"];
