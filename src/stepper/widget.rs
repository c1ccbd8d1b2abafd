//! The stepper container widget.

use log::*;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use super::status::{derive_steps, StepContext};
use super::step::{Step, CONTENT_MARGIN};
use crate::theme::{FullTheme, StepTheme, ThemePatch};

/// Horizontal or vertical sequence of steps.
///
/// On every render the theme overlay is merged over the built-in theme, the
/// light or dark variant is picked, and each step receives its own
/// [`StepContext`] along with that variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Stepper {
    step: usize,
    vertical: bool,
    dark: bool,
    numbered: bool,
    theme: ThemePatch,
    steps: Vec<Step>,
}

impl Default for Stepper {
    fn default() -> Self {
        Self {
            step: 0,
            vertical: false,
            dark: false,
            numbered: true,
            theme: ThemePatch::default(),
            steps: vec![],
        }
    }
}

impl Stepper {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    /// Index of the step in progress.
    pub fn step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    /// Show step numbers in the nodes of steps not completed yet.
    pub fn numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    /// Overlay merged over the built-in theme.
    pub fn theme(mut self, theme: ThemePatch) -> Self {
        self.theme = theme;
        self
    }

    pub fn steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Context of every step for the current index.
    pub fn contexts(&self) -> Vec<StepContext> {
        derive_steps(self.steps.len(), self.step, self.vertical, self.numbered)
    }

    /// The theme variant steps are rendered with.
    pub fn resolved_theme(&self) -> StepTheme {
        FullTheme::resolve(&self.theme).variant(self.dark).clone()
    }

    fn render_horizontal(
        &self,
        contexts: &[StepContext],
        theme: &StepTheme,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let count = u16::try_from(self.steps.len()).unwrap_or(u16::MAX);
        let (Some(last_step), Some(last_ctx)) = (self.steps.last(), contexts.last()) else {
            return;
        };
        let last_width = last_step.node_width(last_ctx).min(area.width);
        // nodes sit at the start of equal columns, the last one at the right edge
        let column_width = match count {
            1 => 0,
            _ => (area.width - last_width) / (count - 1),
        };
        let content_width = (area.width / count).max(last_width);
        let content_y = area.y.saturating_add(1 + CONTENT_MARGIN);
        let content_height = area.bottom().saturating_sub(content_y);

        for (i, (step, ctx)) in self.steps.iter().zip(contexts).enumerate() {
            let node_width = step.node_width(ctx).min(area.width);
            let column = if count == 1 {
                let x = area.x + (area.width - node_width) / 2;
                Rect::new(x, area.y, node_width, area.height)
            } else if ctx.is_last_step {
                Rect::new(area.right() - last_width, area.y, last_width, area.height)
            } else {
                let offset = u16::try_from(i).unwrap_or(u16::MAX).saturating_mul(column_width);
                Rect::new(area.x + offset, area.y, column_width, area.height)
            };

            let content_x = if ctx.is_first_step && !ctx.is_last_step {
                area.x
            } else if ctx.is_last_step && !ctx.is_first_step {
                area.right() - content_width
            } else {
                let center = column.x + node_width / 2;
                center
                    .saturating_sub(content_width / 2)
                    .max(area.x)
                    .min(area.right() - content_width)
            };
            let content_area = Rect::new(content_x, content_y, content_width, content_height);

            step.render_in(ctx, Some(theme), column, content_area, buf);
        }
    }

    fn render_vertical(
        &self,
        contexts: &[StepContext],
        theme: &StepTheme,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let heights = self.vertical_heights(contexts, theme, area.height);
        let mut y = area.y;

        for ((step, ctx), height) in self.steps.iter().zip(contexts).zip(heights) {
            let height = height.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let block = Rect::new(area.x, y, area.width, height);
            let indent = step.node_width(ctx).saturating_add(CONTENT_MARGIN);
            let content_area = if indent < area.width {
                Rect::new(area.x + indent, y, area.width - indent, height)
            } else {
                Rect::default()
            };

            step.render_in(ctx, Some(theme), block, content_area, buf);
            y += height;
        }
    }

    /// Rows given to each step in vertical mode.
    ///
    /// A step needs a row per content line, and one more row for the
    /// connector unless it is the last step. Spare rows are shared between
    /// the connectors, the first ones getting the remainder.
    fn vertical_heights(&self, contexts: &[StepContext], theme: &StepTheme, available: u16) -> Vec<u16> {
        let mut heights: Vec<u16> = self
            .steps
            .iter()
            .zip(contexts)
            .map(|(step, ctx)| {
                let lines = u16::try_from(step.content_lines(ctx, theme).len()).unwrap_or(u16::MAX);
                if ctx.is_last_step {
                    lines.max(1)
                } else {
                    lines.max(2)
                }
            })
            .collect();

        let gaps = u16::try_from(heights.len().saturating_sub(1)).unwrap_or(u16::MAX);
        if gaps > 0 {
            let used = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));
            let spare = available.saturating_sub(used);
            let (share, remainder) = (spare / gaps, spare % gaps);
            for (i, height) in heights.iter_mut().take(gaps as usize).enumerate() {
                let extra = if (i as u16) < remainder { share + 1 } else { share };
                *height = height.saturating_add(extra);
            }
        }
        heights
    }
}

impl Widget for &Stepper {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() || self.steps.is_empty() {
            return;
        }

        let full_theme = FullTheme::resolve(&self.theme);
        let theme = full_theme.variant(self.dark);
        let contexts = self.contexts();
        trace!(
            "Rendering {} steps at step {} (vertical: {}, dark: {})",
            contexts.len(),
            self.step,
            self.vertical,
            self.dark
        );

        if self.vertical {
            self.render_vertical(&contexts, theme, area, buf);
        } else {
            self.render_horizontal(&contexts, theme, area, buf);
        }
    }
}

impl Widget for Stepper {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}
