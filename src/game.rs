//! Game state machine.
//!
//! `Game` owns every piece of mutable simulation state and advances it one
//! tick at a time:
//!
//! ```text
//! input → ship → projectiles → fleet (edges, drop, advance)
//!       → projectile hits → ship collision → snapshot
//! ```
//!
//! Only `Playing` runs the simulation.  `Idle` and `GameOver` freeze all
//! entities and wait for a start command.

use crate::collision::{resolve_projectile_hits, resolve_ship_collision};
use crate::config::Config;
use crate::entities::{Body, GameStats, GameStatus, Rect, Ship, Snapshot};
use crate::fleet::Fleet;
use crate::input::{Command, Flow};
use crate::projectiles::{FireOutcome, ProjectileSet};

const PLAY_BUTTON_WIDTH: u32 = 200;
const PLAY_BUTTON_HEIGHT: u32 = 50;

#[derive(Clone, Debug)]
pub struct Game {
    config: Config,
    status: GameStatus,
    stats: GameStats,
    ship: Ship,
    projectiles: ProjectileSet,
    fleet: Fleet,
    moving_left: bool,
    moving_right: bool,
    /// Ticks left in the post-hit freeze.  Zero when running normally.
    freeze_ticks: u32,
    play_button: Rect,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let screen = config.screen();
        let play_button = Rect::new(
            screen.center_x() - PLAY_BUTTON_WIDTH as i32 / 2,
            screen.bottom() / 2 - PLAY_BUTTON_HEIGHT as i32 / 2,
            PLAY_BUTTON_WIDTH,
            PLAY_BUTTON_HEIGHT,
        );
        Self {
            stats: GameStats::new(config.base().starting_lives),
            ship: Ship::new(&config),
            projectiles: ProjectileSet::new(),
            fleet: Fleet::new(&config),
            status: GameStatus::Idle,
            moving_left: false,
            moving_right: false,
            freeze_ticks: 0,
            play_button,
            config,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn projectiles(&self) -> &ProjectileSet {
        &self.projectiles
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Direct access to the fleet between ticks, for staging scenarios.
    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    pub fn play_button(&self) -> Rect {
        self.play_button
    }

    pub fn is_respawning(&self) -> bool {
        self.freeze_ticks > 0
    }

    /// Seed the high score, e.g. from an external score store.
    pub fn set_high_score(&mut self, high_score: u32) {
        self.stats.high_score = self.stats.high_score.max(high_score);
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,
            Command::MoveLeft(pressed) => self.moving_left = pressed,
            Command::MoveRight(pressed) => self.moving_right = pressed,
            Command::Fire => {
                if self.status == GameStatus::Playing && !self.is_respawning() {
                    if self.projectiles.fire(&self.ship, &self.config) == FireOutcome::Fired {
                        log::trace!("fired, {} in flight", self.projectiles.len());
                    }
                }
            }
            Command::Start => {
                if self.status != GameStatus::Playing {
                    self.start();
                }
            }
            Command::ActivateAt { x, y } => {
                if self.status != GameStatus::Playing && self.play_button.contains(x, y) {
                    self.start();
                }
            }
        }
        Flow::Continue
    }

    /// Reset everything for a brand-new game and begin playing.
    fn start(&mut self) {
        let base = self.config.base();
        self.stats.reset(base.starting_lives);
        self.config.reset_dynamic();
        self.projectiles.clear();
        self.fleet.regenerate(&self.config);
        self.ship.center(&self.config);
        self.freeze_ticks = 0;
        self.status = GameStatus::Playing;
        log::info!(
            "game started: {} ships, {} enemies",
            self.stats.ships_left,
            self.fleet.len()
        );
    }

    // ── Simulation ───────────────────────────────────────────────────────────

    /// Advance the simulation by one tick.  A no-op unless playing.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        if self.freeze_ticks > 0 {
            self.freeze_ticks -= 1;
            if self.freeze_ticks == 0 {
                log::debug!("respawn pause over");
            }
            return;
        }

        self.ship
            .update(self.moving_left, self.moving_right, &self.config);
        self.projectiles.advance();
        self.fleet.step(&self.config);

        let wave_cleared = resolve_projectile_hits(
            &mut self.projectiles,
            &mut self.fleet,
            &mut self.stats,
            &self.config,
        );
        if wave_cleared {
            self.next_wave();
        }

        if resolve_ship_collision(&self.ship, &self.fleet, &self.config) {
            self.ship_hit();
        }
    }

    fn next_wave(&mut self) {
        self.projectiles.clear();
        self.config.level_up();
        self.fleet.regenerate(&self.config);
        self.stats.level += 1;
        log::info!(
            "wave cleared, level {} (fleet speed {:.3}, {} points per hit)",
            self.stats.level,
            self.config.dynamic.fleet_speed,
            self.config.points_per_hit()
        );
    }

    fn ship_hit(&mut self) {
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        if self.stats.ships_left > 0 {
            self.projectiles.clear();
            self.fleet.regenerate(&self.config);
            self.ship.center(&self.config);
            self.freeze_ticks = self.config.respawn_ticks();
            log::info!("ship hit, {} left", self.stats.ships_left);
        } else {
            self.status = GameStatus::GameOver;
            log::info!(
                "game over: score {}, level {}, best {}",
                self.stats.score,
                self.stats.level,
                self.stats.high_score
            );
        }
    }

    // ── Render handoff ───────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.config.screen(),
            ship: self.ship.rect(),
            projectiles: self.projectiles.iter().map(|p| p.rect()).collect(),
            enemies: self.fleet.enemies().iter().map(|e| e.rect()).collect(),
            play_button: self.play_button,
            score: self.stats.score,
            high_score: self.stats.high_score,
            level: self.stats.level,
            ships_left: self.stats.ships_left,
            status: self.status,
            respawning: self.is_respawning(),
        }
    }
}
