use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("offset {offset} is outside of a buffer of length {len}")]
    BadLocation { offset: usize, len: usize },
    #[error("line {line} doesn't exist, the buffer has {count} lines")]
    NoSuchLine { line: usize, count: usize },
}

/// What a multi-line text widget has to offer for key handling to work on top of it.
///
/// Offsets count characters. A line's end offset sits just past its terminator, except for the
/// last line which ends at the buffer's length.
pub trait TextArea {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn caret(&self) -> usize;

    /// Moves the caret, clamping it to `0..=len`.
    fn set_caret(&mut self, offset: usize);

    fn line_count(&self) -> usize;

    fn line_of_offset(&self, offset: usize) -> Result<usize, TextError>;

    fn line_start(&self, line: usize) -> Result<usize, TextError>;

    fn line_end(&self, line: usize) -> Result<usize, TextError>;

    /// Inserts `c` at `offset`. A caret at or past `offset` moves along with the text.
    fn insert(&mut self, offset: usize, c: char) -> Result<(), TextError>;

    /// Removes the character at `offset`. A caret past `offset` moves back by one.
    fn remove(&mut self, offset: usize) -> Result<(), TextError>;
}

/// Multi-line text with a single caret.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    chars: Vec<char>,
    caret: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding `text` with the caret at its end.
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let caret = chars.len();
        Self { chars, caret }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.caret = self.chars.len();
    }

    /// Text before and after the caret.
    pub fn split_at_caret(&self) -> (String, String) {
        let (before, after) = self.chars.split_at(self.caret);
        (before.iter().collect(), after.iter().collect())
    }

    /// Offsets of every line terminator, in order.
    fn terminators(&self) -> impl Iterator<Item = usize> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == '\n')
            .map(|(i, _)| i)
    }

    fn check_line(&self, line: usize) -> Result<(), TextError> {
        let count = self.line_count();
        if line >= count {
            return Err(TextError::NoSuchLine { line, count });
        }
        Ok(())
    }
}

impl TextArea for TextBuffer {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.chars.len());
    }

    fn line_count(&self) -> usize {
        self.terminators().count() + 1
    }

    fn line_of_offset(&self, offset: usize) -> Result<usize, TextError> {
        if offset > self.chars.len() {
            return Err(TextError::BadLocation {
                offset,
                len: self.chars.len(),
            });
        }
        Ok(self.terminators().take_while(|&t| t < offset).count())
    }

    fn line_start(&self, line: usize) -> Result<usize, TextError> {
        self.check_line(line)?;
        if line == 0 {
            return Ok(0);
        }
        Ok(self.terminators().nth(line - 1).map_or(0, |t| t + 1))
    }

    fn line_end(&self, line: usize) -> Result<usize, TextError> {
        self.check_line(line)?;
        Ok(self
            .terminators()
            .nth(line)
            .map_or(self.chars.len(), |t| t + 1))
    }

    fn insert(&mut self, offset: usize, c: char) -> Result<(), TextError> {
        if offset > self.chars.len() {
            return Err(TextError::BadLocation {
                offset,
                len: self.chars.len(),
            });
        }
        self.chars.insert(offset, c);
        if self.caret >= offset {
            self.caret += 1;
        }
        Ok(())
    }

    fn remove(&mut self, offset: usize) -> Result<(), TextError> {
        if offset >= self.chars.len() {
            return Err(TextError::BadLocation {
                offset,
                len: self.chars.len(),
            });
        }
        self.chars.remove(offset);
        if self.caret > offset {
            self.caret -= 1;
        }
        Ok(())
    }
}
