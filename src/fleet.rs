//! The enemy fleet: grid layout, shared sideways motion and edge handling.

use crate::config::{Config, Settings};
use crate::entities::{Body, Enemy};

/// Columns and rows of the grid `layout` produces for these settings.
///
/// The first enemy sits one enemy-size in from the top-left corner.  Columns
/// are two enemy-widths apart and stop before `screen_width - 2 * width`;
/// rows are two enemy-heights apart and stop before
/// `screen_height - 3 * height`, leaving room for the ship below.
pub fn grid_dimensions(settings: &Settings) -> (usize, usize) {
    let w = settings.enemy_width as i64;
    let h = settings.enemy_height as i64;
    if w == 0 || h == 0 {
        return (0, 0);
    }
    let x_limit = settings.screen_width as i64 - 2 * w;
    let y_limit = settings.screen_height as i64 - 3 * h;

    let count = |start: i64, step: i64, limit: i64| -> usize {
        if start >= limit {
            0
        } else {
            ((limit - start - 1) / step + 1) as usize
        }
    };
    let cols = count(w, 2 * w, x_limit);
    let rows = count(h, 2 * h, y_limit);
    if cols == 0 || rows == 0 {
        (0, 0)
    } else {
        (cols, rows)
    }
}

/// Place a fresh grid of enemies, row-major from the top-left.  The same
/// settings always produce the same grid.
pub fn layout(config: &Config) -> Vec<Enemy> {
    let base = config.base();
    let (cols, rows) = grid_dimensions(base);
    let (w, h) = (base.enemy_width, base.enemy_height);

    let mut enemies = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        let y = h as i32 + (2 * h as i32) * row as i32;
        for col in 0..cols {
            let x = w as f32 + (2 * w) as f32 * col as f32;
            enemies.push(Enemy {
                x,
                y,
                width: w,
                height: h,
            });
        }
    }
    enemies
}

/// Every live enemy of the current wave plus the direction they all share.
#[derive(Clone, Debug, PartialEq)]
pub struct Fleet {
    enemies: Vec<Enemy>,
    /// +1 moving right, -1 moving left.
    direction: i8,
}

impl Fleet {
    pub fn new(config: &Config) -> Self {
        Self {
            enemies: layout(config),
            direction: config.base().fleet_direction,
        }
    }

    /// Replace the whole fleet with a freshly laid out wave.
    pub fn regenerate(&mut self, config: &Config) {
        *self = Fleet::new(config);
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    /// Shift every member sideways by one tick of fleet speed.
    pub fn advance(&mut self, config: &Config) {
        let dx = self.direction as f32 * config.dynamic.fleet_speed;
        for e in &mut self.enemies {
            e.x += dx;
        }
    }

    /// True if any member touches either side wall.
    ///
    /// Tested on the truncated rect, so a member that just turned at the
    /// right wall (x back below `screen - width`) does not trigger again.
    pub fn check_edges(&self, config: &Config) -> bool {
        let screen = config.screen();
        self.enemies.iter().any(|e| {
            let r = e.rect();
            r.right() >= screen.right() || r.left() <= screen.left()
        })
    }

    /// Drop the whole fleet and flip its direction.
    pub fn drop_and_reverse(&mut self, config: &Config) {
        let drop = config.base().fleet_drop as i32;
        for e in &mut self.enemies {
            e.y += drop;
        }
        self.direction = -self.direction;
    }

    /// One tick of fleet motion: turn at the walls, then move sideways.
    pub fn step(&mut self, config: &Config) {
        if self.check_edges(config) {
            self.drop_and_reverse(config);
        }
        self.advance(config);
    }

    /// Drop the enemies at the given indices.  Indices that are out of range
    /// are ignored.
    pub fn remove_indices(&mut self, indices: &[usize]) {
        let mut i = 0;
        self.enemies.retain(|_| {
            let keep = !indices.contains(&i);
            i += 1;
            keep
        });
    }

    /// Build a fleet from explicit members.  Used to stage specific layouts.
    pub fn from_enemies(enemies: Vec<Enemy>, direction: i8) -> Self {
        Self { enemies, direction }
    }
}
