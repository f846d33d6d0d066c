use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    domain::view::{DashboardView, EMPTY_PROMPT, LOADING_TEXT},
    ui::theme::Theme,
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: DashboardView<'_>,
    frame_tick: u64,
    theme: Theme,
) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface))
        .title(Span::styled(
            " Weather Pulse ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = branch_lines(view, frame_tick, theme);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    // top-pad to center; wrapped overflow spills downward
    let [_, content] = Layout::vertical([
        Constraint::Length(inner.height.saturating_sub(height) / 2),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        content,
    );
}

pub(crate) fn branch_lines(
    view: DashboardView<'_>,
    frame_tick: u64,
    theme: Theme,
) -> Vec<Line<'static>> {
    match view {
        DashboardView::Loading => vec![
            Line::from(Span::styled(
                indeterminate_bar(frame_tick, 18),
                Style::default().fg(theme.info),
            )),
            Line::from(""),
            Line::from(Span::styled(LOADING_TEXT, Style::default().fg(theme.text))),
        ],
        DashboardView::Error(message) => vec![
            Line::from(Span::styled(
                "⚠",
                Style::default().fg(theme.danger).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(theme.danger).add_modifier(Modifier::BOLD),
            )),
        ],
        DashboardView::Weather(snapshot) => vec![
            Line::from(Span::styled(
                snapshot.location_label(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                snapshot.temperature_label(),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                snapshot.condition.clone(),
                Style::default().fg(theme.muted_text),
            )),
        ],
        DashboardView::Empty => vec![Line::from(Span::styled(
            EMPTY_PROMPT,
            Style::default().fg(theme.muted_text),
        ))],
    }
}

fn indeterminate_bar(frame_tick: u64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut chars = vec!['·'; width];
    let head = (frame_tick as usize) % width;
    chars[head] = '█';
    if head > 0 {
        chars[head - 1] = '▓';
    }
    if head + 1 < width {
        chars[head + 1] = '▓';
    }
    format!("[{}]", chars.into_iter().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::WeatherSnapshot;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn loading_lines_carry_spinner_and_fixed_text() {
        let lines = text(&branch_lines(DashboardView::Loading, 0, Theme::default()));
        assert!(lines[0].starts_with("[█▓"));
        assert_eq!(lines[2], LOADING_TEXT);
    }

    #[test]
    fn error_lines_show_message_verbatim() {
        let lines = text(&branch_lines(
            DashboardView::Error("<Network> error & retry"),
            0,
            Theme::default(),
        ));
        assert_eq!(lines.last().map(String::as_str), Some("<Network> error & retry"));
    }

    #[test]
    fn weather_lines_interpolate_snapshot() {
        let snapshot = WeatherSnapshot::new("Tokyo", "Japan", 22.0, "Sunny");
        let lines = text(&branch_lines(
            DashboardView::Weather(&snapshot),
            0,
            Theme::default(),
        ));
        assert_eq!(lines, ["Tokyo, Japan", "", "22°C", "Sunny"]);
    }

    #[test]
    fn indeterminate_bar_moves_with_tick() {
        assert_eq!(indeterminate_bar(0, 4), "[█▓··]");
        assert_eq!(indeterminate_bar(2, 4), "[·▓█▓]");
        assert_eq!(indeterminate_bar(5, 4), "[▓█▓·]");
        assert_eq!(indeterminate_bar(1, 0), "");
    }
}
