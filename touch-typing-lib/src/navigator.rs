//! Caret movement and single character edits on top of any [`TextArea`].
//!
//! Nothing here fails. Moves and deletes at the edges of the buffer do nothing, and a line query
//! the text area rejects is logged and abandons the operation, so the user can keep typing.

use tracing::warn;

use crate::text_buffer::{TextArea, TextError};

pub fn move_left<T: TextArea + ?Sized>(text: &mut T) {
    let caret = text.caret();
    if caret > 0 {
        text.set_caret(caret - 1);
    }
}

pub fn move_right<T: TextArea + ?Sized>(text: &mut T) {
    let caret = text.caret();
    if caret < text.len() {
        text.set_caret(caret + 1);
    }
}

/// Moves to the previous line, keeping the column when that line is long enough.
pub fn move_up<T: TextArea + ?Sized>(text: &mut T) {
    if let Err(e) = move_vertically(text, Vertical::Up) {
        warn!("couldn't move caret up: {e}");
    }
}

/// Moves to the next line, keeping the column when that line is long enough.
pub fn move_down<T: TextArea + ?Sized>(text: &mut T) {
    if let Err(e) = move_vertically(text, Vertical::Down) {
        warn!("couldn't move caret down: {e}");
    }
}

pub fn insert_at_caret<T: TextArea + ?Sized>(text: &mut T, c: char) {
    let caret = text.caret();
    if let Err(e) = text.insert(caret, c) {
        warn!("couldn't insert {c:?}: {e}");
    }
}

/// Removes the character in front of the caret.
pub fn delete_before_caret<T: TextArea + ?Sized>(text: &mut T) {
    let caret = text.caret();
    if caret == 0 || caret > text.len() {
        return;
    }
    if let Err(e) = text.remove(caret - 1) {
        warn!("couldn't delete before {caret}: {e}");
    }
}

#[derive(Clone, Copy)]
enum Vertical {
    Up,
    Down,
}

fn move_vertically<T: TextArea + ?Sized>(text: &mut T, direction: Vertical) -> Result<(), TextError> {
    let caret = text.caret();
    let line = text.line_of_offset(caret)?;
    let column = caret
        .checked_sub(text.line_start(line)?)
        .ok_or(TextError::BadLocation {
            offset: caret,
            len: text.len(),
        })?;

    let target = match direction {
        Vertical::Up if line > 0 => line - 1,
        Vertical::Down if line + 1 < text.line_count() => line + 1,
        _ => return Ok(()),
    };

    let start = text.line_start(target)?;
    let end = text.line_end(target)?;
    // stay in front of the target line's terminator, but never leave the line
    let offset = (start + column).min(end.saturating_sub(1)).max(start);
    text.set_caret(offset);
    Ok(())
}
