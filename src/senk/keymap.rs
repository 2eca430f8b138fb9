//! Platform-independent key events and their mapping onto editing commands.
//!
//! | Key            | Command                                   |
//! |----------------|-------------------------------------------|
//! | Up / Down      | navigate (ctrl: move the line)            |
//! | Left / Right   | navigate across line boundaries           |
//! | Enter          | split (ctrl: open an empty line)          |
//! | Backspace      | merge with previous (ctrl: drop indent)   |
//! | Space          | indent, only with the caret at column 0   |
//! | Tab            | indent (shift: outdent)                   |
//! | Ctrl+] / Ctrl+[| indent / outdent                          |
//!
//! Shift with an arrow key is left to native selection. Anything that maps to
//! `None` should fall through to the host's default text editing.

use crate::commands::{Command, CommandContext, Modifiers};
use crate::error::SenkError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Space,
    Tab,
    BracketLeft,
    BracketRight,
    Char(char),
    /// Any named key with no binding (escape, home, f1...).
    Other,
}

impl FromStr for Key {
    type Err = SenkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().as_str() {
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "enter" | "return" => Key::Enter,
            "backspace" | "bs" => Key::Backspace,
            "space" | " " => Key::Space,
            "tab" => Key::Tab,
            "[" => Key::BracketLeft,
            "]" => Key::BracketRight,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => return Err(SenkError::UnknownKey(s.to_string())),
                    (Some(c), None) => Key::Char(c),
                    (Some(_), Some(_)) => Key::Other,
                }
            }
        };
        Ok(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// Parses chords such as `enter`, `ctrl+up`, `shift+tab` or `ctrl+]`.
impl FromStr for KeyEvent {
    type Err = SenkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Modifiers::NONE;
        let mut rest = s.trim();
        loop {
            let lower = rest.to_ascii_lowercase();
            if let Some(tail) = lower.strip_prefix("ctrl+") {
                modifiers.ctrl = true;
                rest = &rest[rest.len() - tail.len()..];
            } else if let Some(tail) = lower.strip_prefix("shift+") {
                modifiers.shift = true;
                rest = &rest[rest.len() - tail.len()..];
            } else {
                break;
            }
        }
        if rest.is_empty() {
            return Err(SenkError::UnknownKey(s.to_string()));
        }
        Ok(KeyEvent::new(rest.parse()?, modifiers))
    }
}

/// Resolves a key event to the command it triggers, if any.
///
/// `ctx` is only consulted for keys whose meaning depends on the caret
/// (a space only indents at column 0).
pub fn map_key(event: &KeyEvent, ctx: &CommandContext) -> Option<Command> {
    let KeyEvent { key, modifiers } = *event;
    match key {
        Key::Up | Key::Down | Key::Left | Key::Right if modifiers.shift => None,
        Key::Up if modifiers.ctrl => Some(Command::MoveUp),
        Key::Up => Some(Command::NavigateUp),
        Key::Down if modifiers.ctrl => Some(Command::MoveDown),
        Key::Down => Some(Command::NavigateDown),
        Key::Left => Some(Command::NavigateLeft),
        Key::Right => Some(Command::NavigateRight),
        Key::Enter => Some(Command::Split),
        Key::Backspace => Some(Command::MergeWithPrevious),
        Key::Space if ctx.selection_end == 0 => Some(Command::Indent),
        Key::Space => None,
        Key::Tab if modifiers.shift => Some(Command::Outdent),
        Key::Tab => Some(Command::Indent),
        Key::BracketLeft if modifiers.ctrl => Some(Command::Outdent),
        Key::BracketRight if modifiers.ctrl => Some(Command::Indent),
        Key::BracketLeft | Key::BracketRight | Key::Char(_) | Key::Other => None,
    }
}
