use alien_invasion::config::*;
use alien_invasion::entities::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn new_ship_sits_bottom_centre() {
    let config = Config::default();
    let ship = Ship::new(&config);
    assert_eq!(ship.rect(), Rect::new(570, 752, 60, 48));
    assert_eq!(ship.rect().bottom(), 800);
}

#[test]
fn moves_by_dynamic_speed() {
    let config = Config::default();
    let mut ship = Ship::new(&config);
    ship.update(true, false, &config);
    assert_eq!(ship.x, 568.5);
    ship.update(false, true, &config);
    ship.update(false, true, &config);
    assert_eq!(ship.x, 571.5);
}

#[test]
fn fractional_speed_does_not_drift() {
    let config = Config::default();
    let mut ship = Ship::new(&config);
    for _ in 0..3 {
        ship.update(false, true, &config);
    }
    // 570 + 4.5 = 574.5 → drawn at 574, not 570 + 3 × trunc(1.5) = 573
    assert_eq!(ship.rect().x, 574);
    for _ in 0..3 {
        ship.update(true, false, &config);
    }
    assert_eq!(ship.rect().x, 570);
}

#[test]
fn left_wins_when_both_held() {
    let config = Config::default();
    let mut ship = Ship::new(&config);
    ship.update(true, true, &config);
    assert_eq!(ship.x, 568.5);

    // Pinned at the left wall, the right key takes over.
    ship.x = 0.0;
    ship.update(true, true, &config);
    assert_eq!(ship.x, 1.5);
}

#[test]
fn clamped_at_left_wall() {
    let config = Config::default();
    let mut ship = Ship::new(&config);
    ship.x = 1.0;
    ship.update(true, false, &config);
    assert_eq!(ship.x, 0.0);
    ship.update(true, false, &config);
    assert_eq!(ship.x, 0.0);
}

#[test]
fn clamped_at_right_wall() {
    let config = Config::default();
    let mut ship = Ship::new(&config);
    ship.x = 1139.0;
    ship.update(false, true, &config);
    assert_eq!(ship.x, 1140.0);
    assert_eq!(ship.rect().right(), 1200);
}

#[test]
fn stays_in_bounds_under_random_input() {
    let mut config = Config::default();
    config.dynamic.ship_speed = 7.3;
    let mut ship = Ship::new(&config);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10_000 {
        ship.update(rng.gen_bool(0.5), rng.gen_bool(0.5), &config);
        assert!(ship.x >= 0.0);
        assert!(ship.rect().right() <= 1200);
        assert_eq!(ship.y, 752);
    }
}

#[test]
fn center_resets_position() {
    let config = Config::default();
    let mut ship = Ship::new(&config);
    ship.x = 12.0;
    ship.center(&config);
    assert_eq!(ship, Ship::new(&config));
}
