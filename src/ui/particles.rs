use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::ui::theme::Theme;

/// Rough pixel size of one terminal cell, used to map CSS-style offsets.
pub const PX_PER_COL: f32 = 8.0;
pub const PX_PER_ROW: f32 = 16.0;

/// A single floating particle. Sizes and offsets are in pixels, times in
/// seconds, `left` in percent of the width.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size: f32,
    pub left: f32,
    pub bottom: f32,
    pub drift: f32,
    pub duration: f32,
    pub delay: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: rng.random_range(2.0..6.0),
            left: rng.random_range(0.0..100.0),
            bottom: rng.random_range(0.0..20.0),
            drift: rng.random_range(-100.0..100.0),
            duration: rng.random_range(15.0..30.0),
            delay: rng.random_range(0.0..10.0),
        }
    }

    /// Position along the float animation at `elapsed` seconds since install.
    /// `None` until the particle's delay has passed.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> Option<ParticleSample> {
        if elapsed < self.delay || self.duration <= 0.0 {
            return None;
        }
        let progress = ((elapsed - self.delay) % self.duration) / self.duration;
        Some(ParticleSample {
            progress,
            left: self.left / 100.0,
            shift_px: self.drift * progress,
            // one viewport below the start to one viewport above it
            rise: 2.0 * progress - 1.0,
            bottom_px: self.bottom,
            scale: progress,
            opacity: float_opacity(progress),
            size: self.size,
        })
    }
}

fn float_opacity(progress: f32) -> f32 {
    if progress < 0.1 {
        progress / 0.1
    } else if progress > 0.9 {
        (1.0 - progress) / 0.1
    } else {
        1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSample {
    pub progress: f32,
    pub left: f32,
    pub shift_px: f32,
    pub rise: f32,
    pub bottom_px: f32,
    pub scale: f32,
    pub opacity: f32,
    pub size: f32,
}

impl ParticleSample {
    /// Terminal cell for this sample inside `area`, if on screen.
    #[must_use]
    pub fn cell(&self, area: Rect) -> Option<(u16, u16)> {
        if area.is_empty() || self.opacity <= 0.0 || !(0.0..=1.0).contains(&self.rise) {
            return None;
        }
        let width = f32::from(area.width - 1);
        let height = f32::from(area.height - 1);
        let col = self.left * width + self.shift_px / PX_PER_COL;
        let row_from_bottom = self.rise * height - self.bottom_px / PX_PER_ROW;
        if !(0.0..=width).contains(&col) || !(0.0..=height).contains(&row_from_bottom) {
            return None;
        }
        let x = area.x + col.round() as u16;
        let y = area.bottom() - 1 - row_from_bottom.round() as u16;
        Some((x, y))
    }

    #[must_use]
    pub fn glyph(&self) -> char {
        let apparent = self.size * self.scale;
        if apparent < 1.5 {
            '·'
        } else if apparent < 3.0 {
            '•'
        } else {
            '●'
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::random(rng)).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn samples(&self, elapsed: f32) -> impl Iterator<Item = ParticleSample> + '_ {
        self.particles
            .iter()
            .filter_map(move |particle| particle.sample(elapsed))
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, elapsed: f32, theme: Theme) {
        for sample in self.samples(elapsed) {
            let Some(position) = sample.cell(area) else {
                continue;
            };
            let mut style = Style::default().fg(theme.particle);
            if sample.opacity < 0.5 {
                style = style.add_modifier(Modifier::DIM);
            }
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(sample.glyph()).set_style(style);
            }
        }
    }
}
