use std::fmt::{self, Display, Formatter};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents a key.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum Key {
    Alt(char),
    Backspace,
    Char(char),
    Ctrl(char),
    Down,
    End,
    Enter,
    Esc,
    Home,
    Left,
    Right,
    ShiftTab,
    Tab,
    Unknown,
    Up,
}

impl Key {
    /// Digit value of a character key, if any.
    pub fn digit(&self) -> Option<u32> {
        match self {
            Key::Char(c) => c.to_digit(10),
            _ => None,
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Key::Alt(' ') => write!(f, "<Alt+Space>"),
            Key::Alt(c) => write!(f, "<Alt+{}>", c),
            Key::Char(' ') => write!(f, "<Space>"),
            Key::Char(c) => write!(f, "<{}>", c),
            Key::Ctrl(' ') => write!(f, "<Ctrl+Space>"),
            Key::Ctrl(c) => write!(f, "<Ctrl+{}>", c),
            Key::ShiftTab => write!(f, "<Shift+Tab>"),
            Key::Left => write!(f, "<←>"),
            Key::Right => write!(f, "<→>"),
            _ => write!(f, "<{:?}>", self),
        }
    }
}

// convert backend KeyEvent to this crate's Key
impl From<KeyEvent> for Key {
    fn from(key_event: KeyEvent) -> Self {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Esc, _) => Key::Esc,
            (KeyCode::Backspace, _) => Key::Backspace,
            (KeyCode::Left, _) => Key::Left,
            (KeyCode::Right, _) => Key::Right,
            (KeyCode::Up, _) => Key::Up,
            (KeyCode::Down, _) => Key::Down,
            (KeyCode::Home, _) => Key::Home,
            (KeyCode::End, _) => Key::End,
            (KeyCode::Enter, _) => Key::Enter,
            (KeyCode::BackTab, _) => Key::ShiftTab,
            (KeyCode::Tab, _) => Key::Tab,
            (KeyCode::Char(c), KeyModifiers::ALT) => Key::Alt(c),
            (KeyCode::Char(c), KeyModifiers::CONTROL) => Key::Ctrl(c),
            (KeyCode::Char(c), _) => Key::Char(c),
            _ => Key::Unknown,
        }
    }
}
