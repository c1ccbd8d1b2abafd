//! Content elements displayed next to a step node.
//!
//! Each element turns the [`ContentContext`] of its step and the content
//! theme of the step's status into a single [`Line`]. Without a theme an
//! element renders nothing.

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use super::status::ContentContext;
use crate::theme::ContentTheme;

const DEFAULT_NUMBER_TEXT: &str = "STEP";
const DEFAULT_TEXT_PROGRESS: &str = "In progress";
const DEFAULT_TEXT_COMPLETED: &str = "Completed";
const DEFAULT_TEXT_PENDING: &str = "Pending";

/// "STEP n" label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepNumber {
    text: Option<String>,
}

impl StepNumber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the "STEP" prefix.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn line(&self, ctx: &ContentContext, theme: Option<&ContentTheme>) -> Option<Line<'static>> {
        let theme = theme?;
        let text = self.text.as_deref().unwrap_or(DEFAULT_NUMBER_TEXT);
        Some(Line::styled(
            format!("{} {}", text, ctx.current_step),
            Style::default().fg(theme.step_number.color()),
        ))
    }
}

/// Bold step title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTitle(pub String);

impl StepTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn line(&self, theme: Option<&ContentTheme>) -> Option<Line<'static>> {
        let theme = theme?;
        Some(Line::styled(
            self.0.clone(),
            Style::default()
                .fg(theme.title.color())
                .add_modifier(Modifier::BOLD),
        ))
    }
}

/// Status badge, e.g. "In progress".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepStatus {
    text_progress: Option<String>,
    text_completed: Option<String>,
    text_pending: Option<String>,
}

impl StepStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_progress(mut self, text: impl Into<String>) -> Self {
        self.text_progress = Some(text.into());
        self
    }

    pub fn text_completed(mut self, text: impl Into<String>) -> Self {
        self.text_completed = Some(text.into());
        self
    }

    pub fn text_pending(mut self, text: impl Into<String>) -> Self {
        self.text_pending = Some(text.into());
        self
    }

    /// Label for the status flagged in `ctx`, if any.
    pub fn text(&self, ctx: &ContentContext) -> Option<&str> {
        if ctx.is_step_in_progress {
            Some(self.text_progress.as_deref().unwrap_or(DEFAULT_TEXT_PROGRESS))
        } else if ctx.is_step_completed {
            Some(self.text_completed.as_deref().unwrap_or(DEFAULT_TEXT_COMPLETED))
        } else if ctx.is_step_pending {
            Some(self.text_pending.as_deref().unwrap_or(DEFAULT_TEXT_PENDING))
        } else {
            None
        }
    }

    pub fn line(&self, ctx: &ContentContext, theme: Option<&ContentTheme>) -> Option<Line<'static>> {
        let theme = theme?;
        // padded so the background reads as a badge
        let text = self.text(ctx).map(|t| format!(" {t} ")).unwrap_or_default();
        Some(Line::styled(
            text,
            Style::default()
                .bg(theme.status.background())
                .fg(theme.status.color()),
        ))
    }
}

/// Step description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDescription(pub String);

impl StepDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn line(&self, theme: Option<&ContentTheme>) -> Option<Line<'static>> {
        let theme = theme?;
        Some(Line::styled(
            self.0.clone(),
            Style::default().fg(theme.description.color()),
        ))
    }
}

/// Any element that can be shown under (or beside) a step node.
#[derive(Debug, Clone, PartialEq)]
pub enum StepContent {
    Number(StepNumber),
    Title(StepTitle),
    Status(StepStatus),
    Description(StepDescription),
    /// Arbitrary content, shown as is.
    Line(Line<'static>),
}

impl StepContent {
    pub fn line(&self, ctx: &ContentContext, theme: Option<&ContentTheme>) -> Option<Line<'static>> {
        match self {
            StepContent::Number(number) => number.line(ctx, theme),
            StepContent::Title(title) => title.line(theme),
            StepContent::Status(status) => status.line(ctx, theme),
            StepContent::Description(description) => description.line(theme),
            StepContent::Line(line) => Some(line.clone()),
        }
    }
}

impl From<StepNumber> for StepContent {
    fn from(number: StepNumber) -> Self {
        StepContent::Number(number)
    }
}

impl From<StepTitle> for StepContent {
    fn from(title: StepTitle) -> Self {
        StepContent::Title(title)
    }
}

impl From<StepStatus> for StepContent {
    fn from(status: StepStatus) -> Self {
        StepContent::Status(status)
    }
}

impl From<StepDescription> for StepContent {
    fn from(description: StepDescription) -> Self {
        StepContent::Description(description)
    }
}

impl From<Line<'static>> for StepContent {
    fn from(line: Line<'static>) -> Self {
        StepContent::Line(line)
    }
}
