// app.rs - App state driven by the animation tick

use std::time::{Duration, Instant};

use conway::{Life, Rgb, patterns, rainbow_color};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::settings::Settings;

/// Everything the controls change. The engine never sees these fields.
#[derive(Debug, Clone)]
pub struct UiState {
    pub paused: bool,
    pub hue: f64,
    pub intensity: f64,
    pub selected_pattern: usize,
    pub last_tick: Instant,
}

impl UiState {
    pub fn new(settings: &Settings, now: Instant) -> Self {
        Self {
            paused: false,
            hue: settings.hue,
            intensity: settings.intensity,
            selected_pattern: 0,
            last_tick: now,
        }
    }

    pub fn tick_due(&self, now: Instant, interval: Duration) -> bool {
        now.saturating_duration_since(self.last_tick) >= interval
    }

    /// Current live-cell color.
    pub fn live_color(&self) -> Rgb {
        rainbow_color(self.hue, self.intensity)
    }
}

pub struct GameOfLifeApp {
    pub(crate) life: Life,
    pub(crate) state: UiState,
    pub(crate) interval: Duration,
    rng: StdRng,
}

impl GameOfLifeApp {
    pub fn new(settings: &Settings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (height, width) = (settings.size.height, settings.size.width);
        let life = match settings.pattern {
            Some(pattern) => Life::from_grid(pattern.centered(height, width)),
            None => Life::new(height, width, &mut rng),
        };
        info!(
            "starting {}x{} grid, population {}",
            height,
            width,
            life.population()
        );

        Self {
            life,
            state: UiState::new(settings, Instant::now()),
            interval: settings.interval,
            rng,
        }
    }

    /// Runs one tick if the interval has elapsed. Returns whether it fired.
    ///
    /// A paused app still ticks so slider changes keep re-rendering, but the
    /// grid is not advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.state.tick_due(now, self.interval) {
            return false;
        }
        self.state.last_tick = now;
        if !self.state.paused {
            self.life.step();
        }
        true
    }

    pub fn play(&mut self) {
        if self.state.paused {
            info!("play at generation {}", self.life.generation());
        }
        self.state.paused = false;
    }

    pub fn pause(&mut self) {
        if !self.state.paused {
            info!("pause at generation {}", self.life.generation());
        }
        self.state.paused = true;
    }

    /// Replaces the state with a fresh random grid of the same size.
    pub fn reset(&mut self) {
        self.life = self.life.reset(&mut self.rng);
        info!("reset, population {}", self.life.population());
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.state.selected_pattern) {
            self.life = Life::from_grid(pattern.centered(self.life.height(), self.life.width()));
            info!("applied pattern {}", pattern.name);
        }
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::GridSize;

    fn settings() -> Settings {
        Settings {
            size: GridSize { height: 20, width: 30 },
            seed: Some(5),
            ..Settings::default()
        }
    }

    #[test]
    fn test_new_app() {
        let app = GameOfLifeApp::new(&settings());
        assert_eq!(app.life().height(), 20);
        assert_eq!(app.life().width(), 30);
        assert_eq!(app.life().generation(), 0);
        assert!(!app.state().paused);
        assert_eq!(app.state().intensity, 0.0);
    }

    #[test]
    fn test_seeded_apps_match() {
        let a = GameOfLifeApp::new(&settings());
        let b = GameOfLifeApp::new(&settings());
        assert_eq!(a.life().grid(), b.life().grid());
    }

    #[test]
    fn test_tick_steps_only_when_due() {
        let mut app = GameOfLifeApp::new(&settings());
        let start = app.state.last_tick;

        assert!(!app.tick(start + Duration::from_millis(50)));
        assert_eq!(app.life().generation(), 0);

        assert!(app.tick(start + Duration::from_millis(100)));
        assert_eq!(app.life().generation(), 1);

        assert!(!app.tick(start + Duration::from_millis(150)));
        assert!(app.tick(start + Duration::from_millis(200)));
        assert_eq!(app.life().generation(), 2);
    }

    #[test]
    fn test_paused_tick_does_not_step() {
        let mut app = GameOfLifeApp::new(&settings());
        let start = app.state.last_tick;
        let before = app.life().grid().clone();

        app.pause();
        assert!(app.tick(start + Duration::from_millis(100)));
        assert_eq!(app.life().generation(), 0);
        assert_eq!(app.life().grid(), &before);

        app.play();
        assert!(app.tick(start + Duration::from_millis(200)));
        assert_eq!(app.life().generation(), 1);
    }

    #[test]
    fn test_reset_keeps_size_and_pause_flag() {
        let mut app = GameOfLifeApp::new(&settings());
        let start = app.state.last_tick;
        app.tick(start + Duration::from_millis(100));
        app.pause();

        app.reset();
        assert_eq!(app.life().generation(), 0);
        assert_eq!(app.life().height(), 20);
        assert_eq!(app.life().width(), 30);
        assert!(app.state().paused);
    }

    #[test]
    fn test_apply_pattern() {
        let mut app = GameOfLifeApp::new(&settings());
        app.state.selected_pattern = 1;
        app.apply_selected_pattern();
        assert_eq!(app.life().population(), patterns::PATTERNS[1].cells.len());
        assert_eq!(app.life().generation(), 0);
    }

    #[test]
    fn test_start_from_pattern() {
        let app = GameOfLifeApp::new(&Settings {
            pattern: Some(patterns::find("glider").unwrap()),
            ..settings()
        });
        assert_eq!(app.life().population(), 5);
    }

    #[test]
    fn test_live_color_follows_sliders() {
        let mut app = GameOfLifeApp::new(&settings());
        assert_eq!(app.state().live_color(), Rgb::BLACK);
        app.state.intensity = 1.0;
        assert_eq!(app.state().live_color(), rainbow_color(app.state().hue, 1.0));
    }
}
