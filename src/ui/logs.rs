//! Panel showing log messages

use ratatui::{
    style::{Color, Style},
    widgets::BorderType,
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget};

use crate::app::state::AppState;

pub(crate) const LOG_BLOCK_PERCENTAGE: u16 = 40;

// Draw the logs panel
pub(crate) fn draw_logs<'a>(state: &'a AppState) -> TuiLoggerSmartWidget<'a> {
    TuiLoggerSmartWidget::default()
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Blue))
        .style_debug(Style::default().fg(Color::Green))
        .style_trace(Style::default().fg(Color::Gray))
        .output_separator(' ')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Long))
        .output_target(true)
        .output_file(false)
        .output_line(false)
        .state(&state.log_state)
        .border_type(BorderType::Rounded)
}
