pub mod config;
pub mod keys;
pub mod layout;
pub mod navigator;
pub mod session;
pub mod text_buffer;
pub mod virtual_keyboard;

pub use config::Config;
pub use keys::{ArrowDirection, KeyInput, SymbolicCode};
pub use session::{EditOutcome, TypingSession};
pub use text_buffer::{TextArea, TextBuffer, TextError};
pub use virtual_keyboard::{Highlight, VirtualKey, VirtualKeyboard};
