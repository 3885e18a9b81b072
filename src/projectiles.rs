//! The bounded set of player projectiles.

use crate::config::Config;
use crate::entities::{Body, Projectile, Ship};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireOutcome {
    Fired,
    /// Already at the projectile cap; nothing changed.
    Rejected,
}

/// Live projectiles in firing order (index 0 is the oldest).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectileSet {
    items: Vec<Projectile>,
}

impl ProjectileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Spawn a projectile at the ship's top centre unless the cap is reached.
    pub fn fire(&mut self, ship: &Ship, config: &Config) -> FireOutcome {
        let base = config.base();
        if self.items.len() >= base.projectile_cap {
            log::debug!("fire rejected: {} projectiles in flight", self.items.len());
            return FireOutcome::Rejected;
        }
        let ship_rect = ship.rect();
        self.items.push(Projectile {
            x: ship_rect.center_x() - base.projectile_width as i32 / 2,
            y: ship_rect.top() as f32,
            width: base.projectile_width,
            height: base.projectile_height,
            speed: config.dynamic.projectile_speed,
        });
        FireOutcome::Fired
    }

    /// Move every projectile up and drop those whose bottom edge has left the
    /// top of the viewport.
    pub fn advance(&mut self) {
        for p in &mut self.items {
            p.y -= p.speed;
        }
        self.items.retain(|p| p.rect().bottom() > 0);
    }

    /// Drop the projectiles at the given indices.  Indices that are out of
    /// range are ignored.
    pub fn remove_indices(&mut self, indices: &[usize]) {
        let mut i = 0;
        self.items.retain(|_| {
            let keep = !indices.contains(&i);
            i += 1;
            keep
        });
    }
}
