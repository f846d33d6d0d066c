use std::{f32::consts::TAU, time::Duration};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Paragraph},
};

use crate::ui::theme::Theme;

pub const LOADER_CAPTION: &str = "LOADING WEATHER PULSE";
pub const FADE_OUT: Duration = Duration::from_millis(500);

const RAY_COUNT: usize = 8;
const ROTATION_PERIOD_SECS: f32 = 3.0;
const PULSE_PERIOD_SECS: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Visible,
    FadingOut,
    Removed,
}

/// Full-screen start-up loader: shown for `show_for`, then fades out.
#[derive(Debug, Clone)]
pub struct PageLoader {
    show_for: Duration,
    elapsed: Duration,
}

impl PageLoader {
    #[must_use]
    pub fn new(show_for: Duration) -> Self {
        Self {
            show_for,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    #[must_use]
    pub fn phase(&self) -> LoaderPhase {
        if self.elapsed < self.show_for {
            LoaderPhase::Visible
        } else if self.elapsed < self.show_for + FADE_OUT {
            LoaderPhase::FadingOut
        } else {
            LoaderPhase::Removed
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        match self.phase() {
            LoaderPhase::Visible => 1.0,
            LoaderPhase::FadingOut => {
                let faded = self.elapsed.saturating_sub(self.show_for);
                1.0 - faded.as_secs_f32() / FADE_OUT.as_secs_f32()
            }
            LoaderPhase::Removed => 0.0,
        }
    }

    /// Rotation of the ray ring, in degrees.
    #[must_use]
    pub fn ray_angle(&self) -> f32 {
        let t = self.elapsed.as_secs_f32() % ROTATION_PERIOD_SECS;
        t / ROTATION_PERIOD_SECS * 360.0
    }

    /// Sun core pulse between 1.0 and 1.1.
    #[must_use]
    pub fn pulse_scale(&self) -> f32 {
        let t = self.elapsed.as_secs_f32() % PULSE_PERIOD_SECS / PULSE_PERIOD_SECS;
        1.0 + 0.05 * (1.0 - (t * TAU).cos())
    }
}

pub fn render(frame: &mut Frame, area: Rect, loader: &PageLoader, theme: Theme) {
    if loader.phase() == LoaderPhase::Removed {
        return;
    }

    let dim = if loader.opacity() < 0.5 {
        Modifier::DIM
    } else {
        Modifier::empty()
    };

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    let center_x = area.x + area.width / 2;
    let center_y = area.y + area.height / 2;
    let radius = 3.0 * loader.pulse_scale();

    let buf = frame.buffer_mut();
    for idx in 0..RAY_COUNT {
        let degrees = loader.ray_angle() + idx as f32 * (360.0 / RAY_COUNT as f32);
        let radians = degrees.to_radians();
        // terminal cells are roughly twice as tall as wide
        let dx = (radians.cos() * radius * 2.0).round() as i32;
        let dy = (radians.sin() * radius).round() as i32;
        let x = i32::from(center_x) + dx;
        let y = i32::from(center_y) + dy;
        if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y))
            && area.contains((x, y).into())
            && let Some(cell) = buf.cell_mut((x, y))
        {
            cell.set_char(ray_glyph(degrees))
                .set_style(Style::default().fg(theme.loader_ray).add_modifier(dim));
        }
    }
    if let Some(cell) = buf.cell_mut((center_x, center_y)) {
        cell.set_char('◉').set_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | dim),
        );
    }

    let caption_y = center_y.saturating_add(5);
    if caption_y < area.bottom() {
        let caption = Paragraph::new(Line::from(LOADER_CAPTION))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text).add_modifier(dim));
        frame.render_widget(caption, Rect::new(area.x, caption_y, area.width, 1));
    }
}

fn ray_glyph(degrees: f32) -> char {
    match (degrees.rem_euclid(180.0) / 22.5) as u8 {
        0 | 7 => '─',
        1 | 2 => '╲',
        3 | 4 => '│',
        _ => '╱',
    }
}
