//! Tunable parameters.
//!
//! `Settings` is the raw, serialisable option set (defaults, TOML file, CLI
//! overrides).  `Settings::build` validates it into a `Config`, which splits
//! the immutable base values from the wave-scaled dynamic subset.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::Rect;
use crate::fleet;

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("`{field}` must be strictly positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("`fleet_direction` must be -1 or +1, got {0}")]
    BadDirection(i8),

    #[error("`{field}` must be greater than 1.0, got {value}")]
    ScaleTooSmall { field: &'static str, value: f32 },

    #[error("ship ({ship_width}x{ship_height}) does not fit a {screen_width}x{screen_height} screen")]
    ShipTooLarge {
        ship_width: u32,
        ship_height: u32,
        screen_width: u32,
        screen_height: u32,
    },

    #[error("screen {screen_width}x{screen_height} leaves no room for a single enemy")]
    EmptyFleet { screen_width: u32, screen_height: u32 },
}

// ── Raw settings ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: u32,
    pub screen_height: u32,

    pub ship_width: u32,
    pub ship_height: u32,
    pub ship_speed: f32,

    pub projectile_width: u32,
    pub projectile_height: u32,
    pub projectile_speed: f32,
    /// Maximum number of player projectiles alive at once.
    pub projectile_cap: usize,

    pub enemy_width: u32,
    pub enemy_height: u32,
    pub fleet_speed: f32,
    /// Pixels the whole fleet moves down when it touches a side wall.
    pub fleet_drop: u32,
    /// Initial horizontal direction of every new fleet: +1 right, -1 left.
    pub fleet_direction: i8,

    pub score_per_hit: u32,
    /// Multiplier applied to all speeds each time a wave is cleared.
    pub speedup_scale: f32,
    /// Multiplier applied to the points per hit each time a wave is cleared.
    pub score_scale: f32,

    pub starting_lives: u32,
    pub tick_rate: u32,
    pub respawn_pause_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 800,
            ship_width: 60,
            ship_height: 48,
            ship_speed: 1.5,
            projectile_width: 3,
            projectile_height: 15,
            projectile_speed: 2.5,
            projectile_cap: 3,
            enemy_width: 60,
            enemy_height: 58,
            fleet_speed: 1.0,
            fleet_drop: 10,
            fleet_direction: 1,
            score_per_hit: 50,
            speedup_scale: 1.1,
            score_scale: 1.5,
            starting_lives: 3,
            tick_rate: 60,
            respawn_pause_ms: 500,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.  Missing keys fall back to defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validate and freeze these settings into a `Config`.
    pub fn build(self) -> Result<Config, ConfigError> {
        self.validate()?;
        let dynamic = DynamicSettings::from_base(&self);
        Ok(Config {
            base: self,
            dynamic,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, f64); 17] = [
            ("screen_width", self.screen_width as f64),
            ("screen_height", self.screen_height as f64),
            ("ship_width", self.ship_width as f64),
            ("ship_height", self.ship_height as f64),
            ("ship_speed", self.ship_speed as f64),
            ("projectile_width", self.projectile_width as f64),
            ("projectile_height", self.projectile_height as f64),
            ("projectile_speed", self.projectile_speed as f64),
            ("projectile_cap", self.projectile_cap as f64),
            ("enemy_width", self.enemy_width as f64),
            ("enemy_height", self.enemy_height as f64),
            ("fleet_speed", self.fleet_speed as f64),
            ("fleet_drop", self.fleet_drop as f64),
            ("score_per_hit", self.score_per_hit as f64),
            ("starting_lives", self.starting_lives as f64),
            ("tick_rate", self.tick_rate as f64),
            ("respawn_pause_ms", self.respawn_pause_ms as f64),
        ];
        // `!(v > 0.0)` also rejects NaN.
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(ConfigError::NotPositive { field, value });
        }

        if self.fleet_direction != 1 && self.fleet_direction != -1 {
            return Err(ConfigError::BadDirection(self.fleet_direction));
        }

        for (field, value) in [
            ("speedup_scale", self.speedup_scale),
            ("score_scale", self.score_scale),
        ] {
            if !(value > 1.0) {
                return Err(ConfigError::ScaleTooSmall { field, value });
            }
        }

        if self.ship_width > self.screen_width || self.ship_height > self.screen_height {
            return Err(ConfigError::ShipTooLarge {
                ship_width: self.ship_width,
                ship_height: self.ship_height,
                screen_width: self.screen_width,
                screen_height: self.screen_height,
            });
        }

        if fleet::grid_dimensions(self) == (0, 0) {
            return Err(ConfigError::EmptyFleet {
                screen_width: self.screen_width,
                screen_height: self.screen_height,
            });
        }

        Ok(())
    }
}

// ── Validated config ──────────────────────────────────────────────────────────

/// The wave-scaled subset of the settings.  Reset by every new game.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicSettings {
    pub ship_speed: f32,
    pub projectile_speed: f32,
    pub fleet_speed: f32,
    pub score_multiplier: f32,
}

impl DynamicSettings {
    fn from_base(base: &Settings) -> Self {
        Self {
            ship_speed: base.ship_speed,
            projectile_speed: base.projectile_speed,
            fleet_speed: base.fleet_speed,
            score_multiplier: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    base: Settings,
    pub dynamic: DynamicSettings,
}

impl Config {
    pub fn base(&self) -> &Settings {
        &self.base
    }

    pub fn screen(&self) -> Rect {
        Rect::new(0, 0, self.base.screen_width, self.base.screen_height)
    }

    /// Restore the wave-scaled values to the base settings.
    pub fn reset_dynamic(&mut self) {
        self.dynamic = DynamicSettings::from_base(&self.base);
    }

    /// Apply one wave's worth of scaling.  Compounds with earlier waves.
    pub fn level_up(&mut self) {
        let speedup = self.base.speedup_scale;
        self.dynamic.ship_speed *= speedup;
        self.dynamic.projectile_speed *= speedup;
        self.dynamic.fleet_speed *= speedup;
        self.dynamic.score_multiplier *= self.base.score_scale;
    }

    /// Points awarded for one destroyed enemy at the current wave.
    pub fn points_per_hit(&self) -> u32 {
        (self.base.score_per_hit as f32 * self.dynamic.score_multiplier) as u32
    }

    /// Length of the post-hit freeze expressed in ticks, at least one and
    /// saturating at `u32::MAX`.
    pub fn respawn_ticks(&self) -> u32 {
        let ticks = self
            .base
            .respawn_pause_ms
            .saturating_mul(self.base.tick_rate as u64)
            / 1000;
        u32::try_from(ticks.max(1)).unwrap_or(u32::MAX)
    }
}

impl Default for Config {
    fn default() -> Self {
        let base = Settings::default();
        let dynamic = DynamicSettings::from_base(&base);
        Self { base, dynamic }
    }
}
