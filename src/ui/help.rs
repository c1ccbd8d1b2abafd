// ui/help.rs

//! Panel with the key bindings

use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Cell, Row, Table};

use crate::app::actions::Actions;

const HELP_KEY_WIDTH: u16 = 14;
const HELP_ACTION_WIDTH: u16 = 16;
pub const HELP_WIDTH: u16 = HELP_KEY_WIDTH + HELP_ACTION_WIDTH + 3;

/// Draw the help panel as a `Table` containing available keys and
/// their associated `Action`
pub fn draw_help(actions: &Actions) -> Table<'static> {
    let key_style = Style::default().fg(Color::LightCyan);
    let help_style = Style::default().fg(Color::Gray);

    let rows = actions.actions().iter().map(|action| {
        Row::new(vec![
            Cell::from(Span::styled(action.keys_hint(), key_style)),
            Cell::from(Span::styled(action.to_string(), help_style)),
        ])
    });

    Table::new(
        rows,
        [
            Constraint::Length(HELP_KEY_WIDTH),
            Constraint::Min(HELP_ACTION_WIDTH),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Help"),
    )
    .column_spacing(1)
}
