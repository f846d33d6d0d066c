pub mod dashboard;
pub mod decor;
pub mod loader;
pub mod markup;
pub mod particles;
pub mod search;
pub mod theme;
pub mod waves;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;

pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 12;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = state.theme;

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new("Terminal too small. Resize to at least 30x12.")
            .block(Block::default().borders(Borders::ALL).title("weather-pulse"));
        frame.render_widget(warning, area);
        return;
    }

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );
    state
        .decorations
        .render_backdrop(frame.buffer_mut(), area, theme);

    let panel = centered_rect(70, 60, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(3)])
        .split(panel);

    dashboard::render(
        frame,
        chunks[0],
        state.inputs.resolve(),
        state.frame_tick,
        theme,
    );
    search::render(frame, chunks[1], state, theme);

    if let Some(loader) = state.decorations.loader() {
        loader::render(frame, area, loader, theme);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
