//! A single step: its node, the connector that follows it and its content.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::content::StepContent;
use super::status::StepContext;
use crate::theme::{Status, StepTheme};

/// Blank cells between a node and its connector.
pub(crate) const CONNECTOR_MARGIN: u16 = 1;
/// Blank cells between a node and its content.
pub(crate) const CONTENT_MARGIN: u16 = 1;

const CHECK_MARK: &str = "✓";
const HORIZONTAL_BAR: &str = "━";
const VERTICAL_BAR: &str = "┃";

/// Number of connector cells showing the fill color.
///
/// Half of the connector for the step in progress, all of it for a completed
/// step, none for a pending one.
pub fn fill_len(status: Status, len: u16) -> u16 {
    match status {
        Status::Completed => len,
        Status::Progress => len / 2,
        Status::Pending => 0,
    }
}

/// Alignment of the content of a step.
///
/// Horizontally the first step is left aligned and the last one right
/// aligned, so the content stays inside the stepper.
pub fn content_alignment(ctx: &StepContext) -> Alignment {
    match (ctx.vertical, ctx.is_first_step, ctx.is_last_step) {
        (true, _, _) => Alignment::Left,
        (false, true, true) => Alignment::Center,
        (false, true, false) => Alignment::Left,
        (false, false, true) => Alignment::Right,
        (false, false, false) => Alignment::Center,
    }
}

/// A step of a [`Stepper`](super::Stepper).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    content: Vec<StepContent>,
    custom_content: Option<String>,
}

impl Step {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a content element.
    pub fn content(mut self, content: impl Into<StepContent>) -> Self {
        self.content.push(content.into());
        self
    }

    /// Show `symbol` in the node instead of the number or check mark.
    pub fn custom_content(mut self, symbol: impl Into<String>) -> Self {
        self.custom_content = Some(symbol.into());
        self
    }

    /// Text shown inside the node.
    pub fn node_label(&self, ctx: &StepContext) -> String {
        match &self.custom_content {
            Some(custom) => custom.clone(),
            None if ctx.is_step_completed => CHECK_MARK.to_string(),
            None if ctx.numbered => ctx.current_step.to_string(),
            None => String::new(),
        }
    }

    fn node_text(&self, ctx: &StepContext) -> String {
        format!(" {:^3} ", self.node_label(ctx))
    }

    pub fn node_width(&self, ctx: &StepContext) -> u16 {
        let width = Span::raw(self.node_text(ctx)).width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    /// The node, colored for the step's status.
    pub fn node(&self, ctx: &StepContext, theme: &StepTheme) -> Span<'static> {
        let colors = theme.step[ctx.status()];
        let mut style = Style::default().bg(colors.background()).fg(colors.color());
        if !ctx.is_step_pending {
            style = style.add_modifier(Modifier::BOLD);
        }
        Span::styled(self.node_text(ctx), style)
    }

    /// Content lines, each element narrowed to the content theme of the
    /// step's status.
    pub fn content_lines(&self, ctx: &StepContext, theme: &StepTheme) -> Vec<Line<'static>> {
        let content_theme = &theme.content[ctx.status()];
        let content_ctx = ctx.content_context();
        self.content
            .iter()
            .filter_map(|content| content.line(&content_ctx, Some(content_theme)))
            .collect()
    }

    /// Number of content elements.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Render the step with its node at the top left of `area`.
    ///
    /// The connector runs to the right end of `area` (horizontal) or to its
    /// bottom (vertical). Content goes into `content_area`. Without a theme
    /// nothing is drawn.
    pub fn render_in(
        &self,
        ctx: &StepContext,
        theme: Option<&StepTheme>,
        area: Rect,
        content_area: Rect,
        buf: &mut Buffer,
    ) {
        let Some(theme) = theme else {
            return;
        };
        if area.is_empty() {
            return;
        }

        let node = self.node(ctx, theme);
        buf.set_span(area.x, area.y, &node, area.width);

        if !ctx.is_last_step {
            self.render_connector(ctx, theme, area, buf);
        }

        let lines = self.content_lines(ctx, theme);
        if !lines.is_empty() && !content_area.is_empty() {
            Paragraph::new(lines)
                .alignment(content_alignment(ctx))
                .render(content_area, buf);
        }
    }

    fn render_connector(&self, ctx: &StepContext, theme: &StepTheme, area: Rect, buf: &mut Buffer) {
        let status = ctx.status();
        let bar = theme.progress_bar[status];
        let background = Style::default().fg(bar.background());
        let filled = Style::default().fg(bar.fill().unwrap_or(bar.background()));
        let node_width = self.node_width(ctx);

        if ctx.vertical {
            let x = area.x.saturating_add(node_width / 2);
            if x >= area.right() {
                return;
            }
            let top = area.y + 1;
            let len = area.bottom().saturating_sub(top);
            let fill = fill_len(status, len);
            for i in 0..len {
                let style = if i < fill { filled } else { background };
                buf.set_string(x, top + i, VERTICAL_BAR, style);
            }
        } else {
            let start = area.x.saturating_add(node_width + CONNECTOR_MARGIN);
            let len = area
                .right()
                .saturating_sub(CONNECTOR_MARGIN)
                .saturating_sub(start);
            let fill = fill_len(status, len);
            for i in 0..len {
                let style = if i < fill { filled } else { background };
                buf.set_string(start + i, area.y, HORIZONTAL_BAR, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::content::{StepDescription, StepNumber, StepTitle};
    use crate::stepper::status::derive_steps;
    use crate::theme::FullTheme;
    use ratatui::style::Color;
    use rstest::rstest;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[rstest]
    #[case(Status::Pending, 8, 0)]
    #[case(Status::Progress, 8, 4)]
    #[case(Status::Progress, 7, 3)]
    #[case(Status::Completed, 8, 8)]
    #[case(Status::Completed, 0, 0)]
    fn fill_lengths(#[case] status: Status, #[case] len: u16, #[case] expected: u16) {
        assert_eq!(fill_len(status, len), expected);
    }

    #[test]
    fn node_labels() {
        let contexts = derive_steps(3, 1, false, true);
        let step = Step::new();
        assert_eq!(step.node_label(&contexts[0]), "✓");
        assert_eq!(step.node_label(&contexts[1]), "2");
        assert_eq!(step.node_label(&contexts[2]), "3");
        assert_eq!(step.node_width(&contexts[1]), 5);

        let plain = derive_steps(3, 1, false, false);
        assert_eq!(step.node_label(&plain[0]), "✓");
        assert_eq!(step.node_label(&plain[1]), "");
    }

    #[test]
    fn custom_content_replaces_number_and_check_mark() {
        let contexts = derive_steps(2, 1, false, true);
        let step = Step::new().custom_content("★");
        assert_eq!(step.node_label(&contexts[0]), "★");
        assert_eq!(step.node_label(&contexts[1]), "★");
    }

    #[test]
    fn node_uses_status_colors() {
        let theme = FullTheme::default().light;
        let contexts = derive_steps(3, 1, false, true);
        let step = Step::new();

        let completed = step.node(&contexts[0], &theme);
        assert_eq!(completed.style.bg, Some(Color::Rgb(0x23, 0xc2, 0x75)));
        assert!(completed.style.add_modifier.contains(Modifier::BOLD));

        let pending = step.node(&contexts[2], &theme);
        assert_eq!(pending.style.bg, Some(Color::Rgb(0xed, 0xed, 0xed)));
        assert_eq!(pending.style.fg, Some(Color::Rgb(0xa1, 0xa3, 0xa7)));
        assert!(!pending.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn content_is_narrowed_to_status() {
        let theme = FullTheme::default().dark;
        let ctx = derive_steps(2, 0, false, true)[1];
        let step = Step::new()
            .content(StepNumber::new())
            .content(StepTitle::new("Pay"))
            .content(StepDescription::new("Card or cash"));
        let lines = step.content_lines(&ctx, &theme);
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(line.style.fg, Some(Color::Rgb(0x76, 0x76, 0x76)));
        }
        assert_eq!(step.content_len(), 3);
    }

    #[rstest]
    #[case(false, true, false, Alignment::Left)]
    #[case(false, false, false, Alignment::Center)]
    #[case(false, false, true, Alignment::Right)]
    #[case(false, true, true, Alignment::Center)]
    #[case(true, false, true, Alignment::Left)]
    fn alignments(
        #[case] vertical: bool,
        #[case] first: bool,
        #[case] last: bool,
        #[case] expected: Alignment,
    ) {
        let mut ctx = derive_steps(1, 0, vertical, true)[0];
        ctx.is_first_step = first;
        ctx.is_last_step = last;
        assert_eq!(content_alignment(&ctx), expected);
    }

    #[test]
    fn nothing_rendered_without_theme() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        let ctx = derive_steps(2, 0, false, true)[0];
        Step::new()
            .content(StepTitle::new("Hidden"))
            .render_in(&ctx, None, area, area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn horizontal_connector_fill() {
        let theme = FullTheme::default().light;
        let area = Rect::new(0, 0, 15, 1);
        let mut buf = Buffer::empty(area);
        let ctx = derive_steps(2, 0, false, true)[0];
        Step::new().render_in(&ctx, Some(&theme), area, Rect::default(), &mut buf);

        assert_eq!(row(&buf, 0), "  1   ━━━━━━━━ ");
        let fill = Color::Rgb(0x3c, 0x3f, 0xed);
        let background = Color::Rgb(0xe7, 0xe9, 0xfd);
        for x in 6..10 {
            assert_eq!(buf[(x, 0)].fg, fill);
        }
        for x in 10..14 {
            assert_eq!(buf[(x, 0)].fg, background);
        }
    }

    #[test]
    fn vertical_connector_fill() {
        let theme = FullTheme::default().light;
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        let ctx = derive_steps(2, 1, true, true)[0];
        Step::new().render_in(&ctx, Some(&theme), area, Rect::default(), &mut buf);

        let fill = Color::Rgb(0x23, 0xc2, 0x75);
        for y in 1..4 {
            assert_eq!(buf[(2, y)].symbol(), "┃");
            assert_eq!(buf[(2, y)].fg, fill);
        }
    }

    #[test]
    fn pending_connector_has_no_fill() {
        let theme = FullTheme::default().light;
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        let ctx = derive_steps(3, 0, false, true)[1];
        Step::new().render_in(&ctx, Some(&theme), area, Rect::default(), &mut buf);
        for x in 6..11 {
            assert_eq!(buf[(x, 0)].fg, Color::Rgb(0xed, 0xed, 0xed));
        }
    }

    #[test]
    fn last_step_has_no_connector() {
        let theme = FullTheme::default().light;
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        let ctx = derive_steps(2, 0, false, true)[1];
        Step::new().render_in(&ctx, Some(&theme), area, Rect::default(), &mut buf);
        assert_eq!(row(&buf, 0), "  2         ");
    }
}
