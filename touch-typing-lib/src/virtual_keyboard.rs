use std::collections::HashMap;

use tracing::debug;

use crate::{
    keys::KeyInput,
    layout::{CODE_ONLY_LABELS, KEYS},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    Normal,
    Pressed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualKey {
    label: &'static str,
    highlight: Highlight,
}

impl VirtualKey {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn is_pressed(&self) -> bool {
        self.highlight == Highlight::Pressed
    }
}

/// The on-screen keys and their highlight state.
#[derive(Debug, Clone)]
pub struct VirtualKeyboard {
    keys: Vec<VirtualKey>,
    by_label: HashMap<&'static str, usize>,
}

impl Default for VirtualKeyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualKeyboard {
    pub fn new() -> Self {
        let keys: Vec<VirtualKey> = KEYS
            .iter()
            .map(|&label| VirtualKey {
                label,
                highlight: Highlight::Normal,
            })
            .collect();
        let by_label = keys
            .iter()
            .enumerate()
            .map(|(i, key)| (key.label, i))
            .collect();
        Self { keys, by_label }
    }

    pub fn keys(&self) -> &[VirtualKey] {
        &self.keys
    }

    pub fn key(&self, label: &str) -> Option<&VirtualKey> {
        self.by_label.get(label).map(|&i| &self.keys[i])
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &VirtualKey> {
        self.keys.iter().filter(|key| key.is_pressed())
    }

    /// Finds the virtual key for a physical key event.
    ///
    /// A bound symbolic code always wins. Otherwise the event's character is uppercased and
    /// compared with the first character of each label, in layout order, skipping the labels in
    /// [`CODE_ONLY_LABELS`]. Multi-character labels such as "Enter" or "Shift" stay eligible, so
    /// an `e` finds "E" only because "E" comes first in the layout.
    pub fn find(&self, input: &KeyInput) -> Option<usize> {
        if let Some(label) = input.code.label() {
            return self.by_label.get(label).copied();
        }

        let character = input.character?;
        let mut upper = character.to_uppercase();
        let key = match (upper.next(), upper.next()) {
            (Some(c), None) => c,
            _ => character,
        };

        self.keys
            .iter()
            .position(|k| !CODE_ONLY_LABELS.contains(&k.label) && k.label.starts_with(key))
    }

    /// Highlights the key matching `input`, returning its label.
    pub fn press(&mut self, input: &KeyInput) -> Option<&'static str> {
        self.set_highlight(input, Highlight::Pressed)
    }

    /// Restores the key matching `input` to its normal look, returning its label.
    pub fn release(&mut self, input: &KeyInput) -> Option<&'static str> {
        self.set_highlight(input, Highlight::Normal)
    }

    fn set_highlight(&mut self, input: &KeyInput, highlight: Highlight) -> Option<&'static str> {
        let Some(i) = self.find(input) else {
            debug!(?input, "no virtual key for input");
            return None;
        };
        let key = &mut self.keys[i];
        key.highlight = highlight;
        Some(key.label)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::keys::SymbolicCode;

    #[test]
    fn symbolic_codes_find_their_labels() {
        let keyboard = VirtualKeyboard::new();
        for code in SymbolicCode::bound() {
            let i = keyboard.find(&KeyInput::code(code));
            assert_eq!(i.map(|i| keyboard.keys()[i].label()), code.label());
        }
    }

    #[test]
    fn characters_match_case_insensitively() {
        let keyboard = VirtualKeyboard::new();
        let lower = keyboard.find(&KeyInput::char('q'));
        let upper = keyboard.find(&KeyInput::char('Q'));
        assert_eq!(lower, upper);
        assert_eq!(lower.map(|i| keyboard.keys()[i].label()), Some("Q"));
    }

    #[test]
    fn code_only_labels_are_skipped_by_character() {
        let keyboard = VirtualKeyboard::new();
        // "Tab" would otherwise be the first label starting with 'T'
        let t = keyboard.find(&KeyInput::char('t'));
        assert_eq!(t.map(|i| keyboard.keys()[i].label()), Some("T"));
        // "Caps" comes after "C" anyway, 'B' after "Backspace"
        let b = keyboard.find(&KeyInput::char('b'));
        assert_eq!(b.map(|i| keyboard.keys()[i].label()), Some("B"));
    }

    #[test]
    fn multi_character_labels_stay_in_the_character_path() {
        let keyboard = VirtualKeyboard::new();
        let s = keyboard.find(&KeyInput::char('s'));
        assert_eq!(s.map(|i| keyboard.keys()[i].label()), Some("S"));
        let arrow = keyboard.find(&KeyInput::char('↑'));
        assert_eq!(arrow.map(|i| keyboard.keys()[i].label()), Some("↑"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut keyboard = VirtualKeyboard::new();
        assert_eq!(keyboard.press(&KeyInput::char('€')), None);
        assert_eq!(keyboard.press(&KeyInput::default()), None);
        assert_eq!(keyboard.highlighted().count(), 0);
    }

    #[test]
    fn press_then_release_restores_the_key() {
        let mut keyboard = VirtualKeyboard::new();
        assert_eq!(keyboard.press(&KeyInput::char('a')), Some("A"));
        assert_eq!(keyboard.key("A").map(VirtualKey::highlight), Some(Highlight::Pressed));
        assert_eq!(keyboard.release(&KeyInput::char('a')), Some("A"));
        assert_eq!(keyboard.key("A").map(VirtualKey::highlight), Some(Highlight::Normal));
    }
}
