//! Player ship movement.

use crate::config::Config;
use crate::entities::Ship;

impl Ship {
    /// A ship parked at the bottom centre of the viewport.
    pub fn new(config: &Config) -> Self {
        let base = config.base();
        let mut ship = Ship {
            x: 0.0,
            y: 0,
            width: base.ship_width,
            height: base.ship_height,
        };
        ship.center(config);
        ship
    }

    /// Move back to the bottom centre of the viewport.
    pub fn center(&mut self, config: &Config) {
        let base = config.base();
        self.x = ((base.screen_width - self.width) / 2) as f32;
        self.y = (base.screen_height - self.height) as i32;
    }

    fn max_x(&self, config: &Config) -> f32 {
        (config.base().screen_width - self.width) as f32
    }

    /// Apply one tick of held-key movement, clamped to `[0, screen - width]`.
    /// Left wins while both are held, unless the ship is already at the left
    /// wall.
    pub fn update(&mut self, moving_left: bool, moving_right: bool, config: &Config) {
        let speed = config.dynamic.ship_speed;
        let max_x = self.max_x(config);
        if moving_left && self.x > 0.0 {
            self.x = (self.x - speed).max(0.0);
        } else if moving_right && self.x < max_x {
            self.x = (self.x + speed).min(max_x);
        }
    }
}
