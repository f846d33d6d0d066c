use std::f32::consts::TAU;

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::ui::{
    particles::{PX_PER_COL, PX_PER_ROW},
    theme::Theme,
};

/// One stop of the wave motion: offsets in pixels, rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveKeyframe {
    pub at: f32,
    pub dx: f32,
    pub dy: f32,
    pub rotation: f32,
}

pub const WAVE_MOVE: [WaveKeyframe; 4] = [
    WaveKeyframe {
        at: 0.0,
        dx: 0.0,
        dy: 0.0,
        rotation: 0.0,
    },
    WaveKeyframe {
        at: 0.33,
        dx: 30.0,
        dy: -50.0,
        rotation: 120.0,
    },
    WaveKeyframe {
        at: 0.66,
        dx: -20.0,
        dy: 20.0,
        rotation: 240.0,
    },
    WaveKeyframe {
        at: 1.0,
        dx: 0.0,
        dy: 0.0,
        rotation: 360.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WaveTransform {
    pub dx: f32,
    pub dy: f32,
    pub rotation: f32,
}

/// Linear interpolation over [`WAVE_MOVE`]; `progress` wraps into `[0, 1)`.
#[must_use]
pub fn wave_transform(progress: f32) -> WaveTransform {
    let progress = progress.rem_euclid(1.0);
    let upper = WAVE_MOVE
        .iter()
        .position(|frame| frame.at > progress)
        .unwrap_or(WAVE_MOVE.len() - 1);
    let from = WAVE_MOVE[upper.saturating_sub(1)];
    let to = WAVE_MOVE[upper];
    let span = (to.at - from.at).max(f32::EPSILON);
    let t = ((progress - from.at) / span).clamp(0.0, 1.0);
    WaveTransform {
        dx: lerp(from.dx, to.dx, t),
        dy: lerp(from.dy, to.dy, t),
        rotation: lerp(from.rotation, to.rotation, t),
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub period: f32,
    pub phase: f32,
    /// Resting row as a fraction of the height, from the top.
    pub baseline: f32,
    pub amplitude: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaveField {
    waves: [Wave; 3],
    frozen: bool,
}

impl WaveField {
    #[must_use]
    pub fn new(frozen: bool) -> Self {
        Self {
            waves: [
                Wave {
                    period: 20.0,
                    phase: 0.0,
                    baseline: 0.62,
                    amplitude: 1.0,
                },
                Wave {
                    period: 25.0,
                    phase: 5.0,
                    baseline: 0.74,
                    amplitude: 1.5,
                },
                Wave {
                    period: 30.0,
                    phase: 10.0,
                    baseline: 0.86,
                    amplitude: 1.0,
                },
            ],
            frozen,
        }
    }

    #[must_use]
    pub fn frozen(&self) -> bool {
        self.frozen
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    pub fn transforms(&self, elapsed: f32) -> impl Iterator<Item = (Wave, WaveTransform)> + '_ {
        let frozen = self.frozen;
        self.waves.iter().map(move |wave| {
            let transform = if frozen {
                WaveTransform::default()
            } else {
                wave_transform((elapsed + wave.phase) / wave.period)
            };
            (*wave, transform)
        })
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, elapsed: f32, theme: Theme) {
        if area.is_empty() {
            return;
        }
        let width = f32::from(area.width);
        let height = f32::from(area.height);
        let style = Style::default().fg(theme.wave);

        for (wave, transform) in self.transforms(elapsed) {
            let base_row = wave.baseline * height + transform.dy / PX_PER_ROW;
            let shift = transform.dx / PX_PER_COL;
            for col in 0..area.width {
                let angle = (f32::from(col) + shift) / width * TAU * 1.5
                    + transform.rotation.to_radians();
                let row = (base_row + wave.amplitude * angle.sin()).round();
                if !(0.0..height).contains(&row) {
                    continue;
                }
                let position = (area.x + col, area.y + row as u16);
                if let Some(cell) = buf.cell_mut(position) {
                    cell.set_char('~').set_style(style);
                }
            }
        }
    }
}
