// ui/mod.rs

//! ratatui user interface of the demo

use log::*;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::block::{Block, BorderType, Padding};
use ratatui::widgets::Borders;
use ratatui::Frame;

mod help;
mod logs;
mod title;

use crate::app::state::AppState;
use help::{draw_help, HELP_WIDTH};
use logs::{draw_logs, LOG_BLOCK_PERCENTAGE};
use title::{draw_title, TITLE_BLOCK_HEIGHT};

const STEPPER_MIN_WIDTH: u16 = 40;
const STEPPER_MIN_HEIGHT: u16 = 8;
// Page colors the built-in light and dark palettes are designed against.
const LIGHT_PAGE: Color = Color::Rgb(0xff, 0xff, 0xff);
const DARK_PAGE: Color = Color::Rgb(0x00, 0x00, 0x00);

/// Render all blocks.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let size = frame.area();
    if state.update_size(size) {
        check_size(&size, state);
    }

    let mut app_constraints = vec![
        Constraint::Length(TITLE_BLOCK_HEIGHT),
        Constraint::Min(STEPPER_MIN_HEIGHT),
    ];
    if state.show_logs {
        app_constraints.push(Constraint::Percentage(LOG_BLOCK_PERCENTAGE));
    }
    let app_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(app_constraints)
        .split(size);

    frame.render_widget(draw_title(state), app_rows[0]);

    // Body: stepper, help
    let mut body_constraints = vec![Constraint::Min(STEPPER_MIN_WIDTH)];
    if state.show_help {
        body_constraints.push(Constraint::Length(HELP_WIDTH));
    }
    let body_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(body_constraints)
        .split(app_rows[1]);

    let page = if state.dark { DARK_PAGE } else { LIGHT_PAGE };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .padding(Padding::symmetric(2, 1))
        .style(Style::default().bg(page));
    let stepper_area = block.inner(body_columns[0]);
    frame.render_widget(block, body_columns[0]);
    frame.render_widget(&state.stepper_widget(), stepper_area);

    if state.show_help {
        frame.render_widget(draw_help(&state.actions), body_columns[1]);
    }

    if state.show_logs {
        frame.render_widget(draw_logs(state), app_rows[2]);
    }
}

/// Logs warnings when terminal size constraints are not respected.
fn check_size(rect: &Rect, state: &AppState) {
    let mut min_width = STEPPER_MIN_WIDTH;
    if state.show_help {
        min_width += HELP_WIDTH;
    }
    if rect.width < min_width {
        warn!("Require width >= {}, (got {})", min_width, rect.width);
    }

    let min_height = TITLE_BLOCK_HEIGHT + STEPPER_MIN_HEIGHT;
    if rect.height < min_height {
        warn!("Require height >= {}, (got {})", min_height, rect.height);
    }
}
