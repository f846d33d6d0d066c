use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{app::state::AppState, ui::theme::Theme};

pub const SEARCH_PLACEHOLDER: &str = "Type a city and press Enter";
pub const LOOKUP_BUSY_HINT: &str = "Lookup running, Enter waits for it";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let query = if state.query.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(theme.muted_text))
    } else {
        Span::styled(
            format!("{}▏", state.query),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(theme.muted_text)),
            query,
        ]),
        Line::from(Span::styled(
            hint_text(state),
            Style::default().fg(theme.muted_text),
        )),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(panel, area);
}

fn hint_text(state: &AppState) -> String {
    if state.fetch_in_flight {
        return LOOKUP_BUSY_HINT.to_string();
    }
    format!(
        "Enter search · ^R retry · ^L clear · Tab motion ({}) · Esc quit",
        state.settings.motion.label()
    )
}
