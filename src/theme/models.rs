//! Theme data models

use enum_iterator::Sequence;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use super::parser::SerializableColor;

/// Progress status of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not reached yet
    Pending,
    /// Currently active
    Progress,
    /// Already passed
    Completed,
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Status::Pending => "pending",
            Status::Progress => "progress",
            Status::Completed => "completed",
        };
        write!(f, "{}", str)
    }
}

/// Background and foreground colors, with an optional accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: SerializableColor,
    pub color: SerializableColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<SerializableColor>,
}

impl ThemeColors {
    pub const fn new(background: u32, color: u32) -> Self {
        Self {
            background: SerializableColor::rgb(background),
            color: SerializableColor::rgb(color),
            fill: None,
        }
    }

    pub fn background(&self) -> Color { self.background.0 }
    pub fn color(&self) -> Color { self.color.0 }
    pub fn fill(&self) -> Option<Color> { self.fill.map(|c| c.0) }
}

/// Colors of the connector drawn after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressBarTheme {
    pub background: SerializableColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<SerializableColor>,
}

impl ProgressBarTheme {
    const fn new(background: u32, fill: Option<u32>) -> Self {
        Self {
            background: SerializableColor::rgb(background),
            fill: match fill {
                Some(fill) => Some(SerializableColor::rgb(fill)),
                None => None,
            },
        }
    }

    pub fn background(&self) -> Color { self.background.0 }
    pub fn fill(&self) -> Option<Color> { self.fill.map(|c| c.0) }
}

/// Foreground color of a text-only content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTheme {
    pub color: SerializableColor,
}

impl TextTheme {
    const fn new(color: u32) -> Self {
        Self { color: SerializableColor::rgb(color) }
    }

    pub fn color(&self) -> Color { self.color.0 }
}

/// Colors of the content elements shown next to a step, for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTheme {
    pub step_number: TextTheme,
    pub title: TextTheme,
    pub status: ThemeColors,
    pub description: TextTheme,
}

impl ContentTheme {
    /// Content colors where number, title and description share one color.
    const fn new(text: u32, status_background: u32, status_color: u32) -> Self {
        Self {
            step_number: TextTheme::new(text),
            title: TextTheme::new(text),
            status: ThemeColors::new(status_background, status_color),
            description: TextTheme::new(text),
        }
    }
}

/// One value per [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusThemeSet<T> {
    pub pending: T,
    pub progress: T,
    pub completed: T,
}

impl<T> Index<Status> for StatusThemeSet<T> {
    type Output = T;

    fn index(&self, status: Status) -> &T {
        match status {
            Status::Pending => &self.pending,
            Status::Progress => &self.progress,
            Status::Completed => &self.completed,
        }
    }
}

impl<T> IndexMut<Status> for StatusThemeSet<T> {
    fn index_mut(&mut self, status: Status) -> &mut T {
        match status {
            Status::Pending => &mut self.pending,
            Status::Progress => &mut self.progress,
            Status::Completed => &mut self.completed,
        }
    }
}

/// Theme of a stepper for one variant (light or dark).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTheme {
    /// Colors of the step node
    pub step: StatusThemeSet<ThemeColors>,
    /// Colors of the content elements
    pub content: StatusThemeSet<ContentTheme>,
    /// Colors of the connector following the step
    pub progress_bar: StatusThemeSet<ProgressBarTheme>,
}

/// Complete theme with both variants fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTheme {
    pub light: StepTheme,
    pub dark: StepTheme,
}

impl FullTheme {
    /// The dark variant if `dark`, the light one otherwise.
    pub fn variant(&self, dark: bool) -> &StepTheme {
        if dark {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Default for FullTheme {
    fn default() -> Self {
        Self {
            light: StepTheme::light(),
            dark: StepTheme::dark(),
        }
    }
}

impl StepTheme {
    /// Built-in light palette
    pub fn light() -> Self {
        Self {
            step: StatusThemeSet {
                pending: ThemeColors::new(0xededed, 0xa1a3a7),
                progress: ThemeColors::new(0x3c3fed, 0xffffff),
                completed: ThemeColors::new(0x23c275, 0xffffff),
            },
            content: StatusThemeSet {
                pending: ContentTheme::new(0xa1a3a7, 0xf2f2f2, 0xa1a3a7),
                progress: ContentTheme::new(0x131b26, 0xe7e9fd, 0x3c3fed),
                completed: ContentTheme::new(0x131b26, 0xe9faf2, 0x23c275),
            },
            progress_bar: StatusThemeSet {
                pending: ProgressBarTheme::new(0xededed, None),
                progress: ProgressBarTheme::new(0xe7e9fd, Some(0x3c3fed)),
                completed: ProgressBarTheme::new(0xe9faf2, Some(0x23c275)),
            },
        }
    }

    /// Built-in dark palette
    pub fn dark() -> Self {
        Self {
            step: StatusThemeSet {
                pending: ThemeColors::new(0x1a1a1a, 0x767676),
                progress: ThemeColors::new(0x19b6fe, 0xffffff),
                completed: ThemeColors::new(0x23c275, 0xffffff),
            },
            content: StatusThemeSet {
                pending: ContentTheme::new(0x767676, 0x1a1a1a, 0x767676),
                progress: ContentTheme::new(0xece4d9, 0x08374c, 0x19b6fe),
                completed: ContentTheme::new(0xece4d9, 0x0b3a23, 0x23c275),
            },
            progress_bar: StatusThemeSet {
                pending: ProgressBarTheme::new(0x1a1a1a, None),
                progress: ProgressBarTheme::new(0x08374c, Some(0x19b6fe)),
                completed: ProgressBarTheme::new(0x0b3a23, Some(0x23c275)),
            },
        }
    }
}
