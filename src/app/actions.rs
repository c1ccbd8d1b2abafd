// app/actions.rs

//! Actions the user can trigger on the demo `App`.

use enum_iterator::{all, Sequence};
use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::inputs::key::Key;

/// All possible user actions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Sequence)]
pub enum Action {
    NextStep,
    PreviousStep,
    GoToStep,
    ToggleDark,
    ToggleVertical,
    ToggleNumbered,
    ToggleHelp,
    ToggleLogs,
    Quit,
}

const DIGIT_KEYS: [Key; 9] = [
    Key::Char('1'),
    Key::Char('2'),
    Key::Char('3'),
    Key::Char('4'),
    Key::Char('5'),
    Key::Char('6'),
    Key::Char('7'),
    Key::Char('8'),
    Key::Char('9'),
];

impl Action {
    /// Return a slice with the key(s) associated to the action.
    pub fn keys(&self) -> &[Key] {
        match self {
            Action::NextStep => &[Key::Right, Key::Char('l')],
            Action::PreviousStep => &[Key::Left, Key::Char('h')],
            Action::GoToStep => &DIGIT_KEYS,
            Action::ToggleDark => &[Key::Char('d')],
            Action::ToggleVertical => &[Key::Char('v')],
            Action::ToggleNumbered => &[Key::Char('n')],
            Action::ToggleHelp => &[Key::Char('?')],
            Action::ToggleLogs => &[Key::Char('L')],
            Action::Quit => &[Key::Ctrl('c'), Key::Char('q')],
        }
    }

    /// Keys as shown in the help panel.
    pub fn keys_hint(&self) -> String {
        match self {
            Action::GoToStep => "<1>..<9>".to_string(),
            _ => self
                .keys()
                .iter()
                .map(Key::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// User friendly short description of the action
impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Action::NextStep => "Next step",
            Action::PreviousStep => "Previous step",
            Action::GoToStep => "Go to step",
            Action::ToggleDark => "Toggle dark",
            Action::ToggleVertical => "Toggle vertical",
            Action::ToggleNumbered => "Toggle numbers",
            Action::ToggleHelp => "Toggle help",
            Action::ToggleLogs => "Toggle logs",
            Action::Quit => "Quit",
        };
        write!(f, "{}", str)
    }
}

/// Vec of actions.
/// Can be used to enumerate the actions available in a
/// given context.
/// In a context, a key must map to at most one action.
#[derive(Default, Debug, Clone)]
pub struct Actions(Vec<Action>);

impl Actions {
    /// Every action
    pub fn all() -> Self {
        all::<Action>().collect::<Vec<_>>().into()
    }

    /// Given a key, find the corresponding action
    pub fn find(&self, key: Key) -> Option<Action> {
        all::<Action>()
            .filter(|action| self.0.contains(action))
            .find(|action| action.keys().contains(&key))
    }

    pub fn actions(&self) -> &[Action] {
        self.0.as_slice()
    }
}

impl From<Vec<Action>> for Actions {
    /// Builds contextual actions
    ///
    /// # Panics
    ///
    /// If two actions have same key
    fn from(actions: Vec<Action>) -> Self {
        let mut map: HashMap<Key, Vec<Action>> = HashMap::new();
        for action in actions.iter() {
            for key in action.keys().iter() {
                map.entry(*key).or_default().push(*action);
            }
        }
        let errors = map
            .iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(key, actions)| {
                let actions = actions
                    .iter()
                    .map(Action::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Conflict key {} with actions {}", key, actions)
            })
            .collect::<Vec<_>>();
        if !errors.is_empty() {
            panic!("{}", errors.join("; "))
        }

        Self(actions)
    }
}
