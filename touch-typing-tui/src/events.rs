use strum::Display;
use touch_typing_lib::KeyInput;

#[derive(Debug, Display)]
pub enum Event {
    KeyPressed(KeyInput),
    KeyReleased(KeyInput),
    Redraw,
    Quit,
}
