use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Paragraph};

use crate::app::state::AppState;

pub const TITLE_BLOCK_HEIGHT: u16 = 3;

/// Title line with the current step and display options.
pub fn title_text(state: &AppState) -> String {
    let mut title = format!(
        "progress-stepper - step {}/{}",
        state.stepper.step(),
        state.number_of_steps()
    );
    if let Some(theme) = &state.theme_name {
        title.push_str(&format!(" - theme {theme}"));
    }
    if state.dark {
        title.push_str(" - dark");
    }
    title
}

pub fn draw_title<'a>(state: &AppState) -> Paragraph<'a> {
    Paragraph::new(title_text(state))
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::White))
                .border_type(BorderType::Plain),
        )
}
