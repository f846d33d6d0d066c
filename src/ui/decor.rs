use std::time::Duration;

use log::debug;
use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::{
    app::settings::{MotionSetting, RuntimeSettings},
    ui::{
        loader::{LoaderPhase, PageLoader},
        particles::ParticleField,
        theme::Theme,
        waves::WaveField,
    },
};

/// Purely cosmetic page dressing. Installed once at start-up and advanced by
/// frame ticks; nothing outside the renderer reads it.
#[derive(Debug, Clone)]
pub struct Decorations {
    motion: MotionSetting,
    particle_count: u16,
    elapsed: Duration,
    loader: Option<PageLoader>,
    particles: ParticleField,
    waves: WaveField,
}

impl Decorations {
    pub fn install(settings: &RuntimeSettings) -> Self {
        Self::install_with_rng(settings, &mut rand::rng())
    }

    pub fn install_with_rng<R: Rng + ?Sized>(settings: &RuntimeSettings, rng: &mut R) -> Self {
        let loader = (settings.motion != MotionSetting::Off)
            .then(|| PageLoader::new(Duration::from_millis(settings.loader_ms)));
        let particles = ParticleField::generate(
            particle_budget(settings.motion, settings.particle_count),
            rng,
        );
        debug!(
            "decorations installed: motion={}, particles={}, loader={}",
            settings.motion.label(),
            particles.len(),
            loader.is_some()
        );
        Self {
            motion: settings.motion,
            particle_count: settings.particle_count,
            elapsed: Duration::ZERO,
            loader,
            particles,
            waves: WaveField::new(settings.motion == MotionSetting::Reduced),
        }
    }

    pub fn update(&mut self, dt: Duration) {
        if self.motion == MotionSetting::Off {
            return;
        }
        let dt = dt.min(Duration::from_millis(250));
        self.elapsed = self.elapsed.saturating_add(dt);
        if let Some(loader) = &mut self.loader {
            loader.advance(dt);
            if loader.phase() == LoaderPhase::Removed {
                debug!("page loader removed");
                self.loader = None;
            }
        }
    }

    pub fn set_motion<R: Rng + ?Sized>(&mut self, motion: MotionSetting, rng: &mut R) {
        if motion == self.motion {
            return;
        }
        self.motion = motion;
        self.particles = ParticleField::generate(particle_budget(motion, self.particle_count), rng);
        self.waves.set_frozen(motion == MotionSetting::Reduced);
        if motion == MotionSetting::Off {
            self.loader = None;
        }
    }

    #[must_use]
    pub fn motion(&self) -> MotionSetting {
        self.motion
    }

    #[must_use]
    pub fn loader(&self) -> Option<&PageLoader> {
        self.loader.as_ref()
    }

    #[must_use]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    #[must_use]
    pub fn waves(&self) -> &WaveField {
        &self.waves
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Waves then particles, straight into the frame buffer.
    pub fn render_backdrop(&self, buf: &mut Buffer, area: Rect, theme: Theme) {
        if self.motion == MotionSetting::Off {
            return;
        }
        let elapsed = self.elapsed.as_secs_f32();
        self.waves.render(buf, area, elapsed, theme);
        self.particles.render(buf, area, elapsed, theme);
    }
}

fn particle_budget(motion: MotionSetting, count: u16) -> usize {
    match motion {
        MotionSetting::Full => usize::from(count),
        MotionSetting::Reduced => usize::from(count / 2),
        MotionSetting::Off => 0,
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn settings(motion: MotionSetting) -> RuntimeSettings {
        RuntimeSettings {
            motion,
            ..RuntimeSettings::default()
        }
    }

    #[test]
    fn full_motion_installs_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let decor = Decorations::install_with_rng(&settings(MotionSetting::Full), &mut rng);
        assert_eq!(decor.particles().len(), 30);
        assert!(decor.loader().is_some());
        assert!(!decor.waves().frozen());
    }

    #[test]
    fn reduced_motion_halves_particles_and_freezes_waves() {
        let mut rng = StdRng::seed_from_u64(1);
        let decor = Decorations::install_with_rng(&settings(MotionSetting::Reduced), &mut rng);
        assert_eq!(decor.particles().len(), 15);
        assert!(decor.waves().frozen());
    }

    #[test]
    fn motion_off_skips_loader_and_particles() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut decor = Decorations::install_with_rng(&settings(MotionSetting::Off), &mut rng);
        assert!(decor.loader().is_none());
        assert!(decor.particles().is_empty());
        decor.update(Duration::from_secs(1));
        assert_eq!(decor.elapsed(), Duration::ZERO);
    }

    #[test]
    fn loader_is_removed_after_show_and_fade() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut decor = Decorations::install_with_rng(&settings(MotionSetting::Full), &mut rng);
        for _ in 0..10 {
            decor.update(Duration::from_millis(200));
        }
        assert!(decor.loader().is_some(), "still fading at 2.0s");
        for _ in 0..3 {
            decor.update(Duration::from_millis(200));
        }
        assert!(decor.loader().is_none());
    }

    #[test]
    fn large_frame_gaps_are_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut decor = Decorations::install_with_rng(&settings(MotionSetting::Full), &mut rng);
        decor.update(Duration::from_secs(30));
        assert_eq!(decor.elapsed(), Duration::from_millis(250));
    }

    #[test]
    fn switching_motion_regenerates_field() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut decor = Decorations::install_with_rng(&settings(MotionSetting::Full), &mut rng);
        decor.set_motion(MotionSetting::Reduced, &mut rng);
        assert_eq!(decor.particles().len(), 15);
        decor.set_motion(MotionSetting::Off, &mut rng);
        assert!(decor.particles().is_empty());
        assert!(decor.loader().is_none());
        assert_eq!(decor.motion(), MotionSetting::Off);
    }
}
