use alien_invasion::config::*;
use alien_invasion::entities::*;
use alien_invasion::projectiles::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn setup() -> (Config, Ship) {
    let config = Config::default();
    let ship = Ship::new(&config);
    (config, ship)
}

// ── fire ──────────────────────────────────────────────────────────────────────

#[test]
fn fire_spawns_at_ship_top_centre() {
    let (config, ship) = setup(); // ship at x=570, y=752, 60 wide
    let mut set = ProjectileSet::new();
    assert_eq!(set.fire(&ship, &config), FireOutcome::Fired);
    let p = set.iter().next().unwrap();
    assert_eq!(p.rect(), Rect::new(599, 752, 3, 15));
    assert_eq!(p.speed, 2.5);
}

#[test]
fn fire_at_cap_is_a_no_op() {
    let (config, ship) = setup();
    let mut set = ProjectileSet::new();
    for _ in 0..3 {
        assert_eq!(set.fire(&ship, &config), FireOutcome::Fired);
    }
    let before = set.clone();
    assert_eq!(set.fire(&ship, &config), FireOutcome::Rejected);
    assert_eq!(set, before);
    assert_eq!(set.len(), 3);
}

#[test]
fn fire_uses_current_projectile_speed() {
    let (mut config, ship) = setup();
    config.level_up();
    let mut set = ProjectileSet::new();
    set.fire(&ship, &config);
    assert_eq!(set.iter().next().unwrap().speed, config.dynamic.projectile_speed);
}

#[test]
fn count_never_exceeds_cap_under_random_fire_and_advance() {
    let (config, ship) = setup();
    let mut set = ProjectileSet::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5000 {
        if rng.gen_bool(0.3) {
            set.fire(&ship, &config);
        } else {
            set.advance();
        }
        assert!(set.len() <= config.base().projectile_cap);
    }
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn advance_moves_up() {
    let (config, ship) = setup();
    let mut set = ProjectileSet::new();
    set.fire(&ship, &config);
    set.advance();
    set.advance();
    assert_eq!(set.iter().next().unwrap().y, 747.0);
}

#[test]
fn projectile_removed_once_bottom_edge_leaves_the_top() {
    let (config, mut ship) = setup();
    // Fire from high up so the projectile starts near the top.
    ship.y = 14;
    let mut set = ProjectileSet::new();
    set.fire(&ship, &config); // bottom edge at 29
    for _ in 0..11 {
        set.advance();
    }
    // y = 14 - 27.5 = -13.5 → rect y -13, bottom 2: still visible
    assert_eq!(set.len(), 1);
    set.advance();
    // y = -16 → bottom -1: gone
    assert!(set.is_empty());
}

#[test]
fn pruning_keeps_firing_order() {
    let (config, mut ship) = setup();
    let mut set = ProjectileSet::new();
    ship.y = 0;
    set.fire(&ship, &config);
    ship.y = 400;
    set.fire(&ship, &config);
    for _ in 0..7 {
        set.advance();
    }
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().unwrap().y, 400.0 - 17.5);
}

#[test]
fn remove_indices_and_clear() {
    let (config, ship) = setup();
    let mut set = ProjectileSet::new();
    for _ in 0..3 {
        set.fire(&ship, &config);
        set.advance();
    }
    set.remove_indices(&[1]);
    let ys: Vec<f32> = set.iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![744.5, 749.5]);
    set.clear();
    assert!(set.is_empty());
}
