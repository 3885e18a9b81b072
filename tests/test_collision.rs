use alien_invasion::collision::*;
use alien_invasion::config::*;
use alien_invasion::entities::*;
use alien_invasion::fleet::Fleet;
use alien_invasion::projectiles::ProjectileSet;

fn enemy_at(x: f32, y: i32) -> Enemy {
    Enemy {
        x,
        y,
        width: 60,
        height: 58,
    }
}

/// Fire one projectile from a ship whose top-centre is at (`cx`, `top`).
/// Projectiles are 3 wide, so the projectile spans `cx - 1 .. cx + 2`.
fn fire_from(set: &mut ProjectileSet, config: &Config, cx: i32, top: i32) {
    let ship = Ship {
        x: (cx - 30) as f32,
        y: top,
        width: 60,
        height: 48,
    };
    set.fire(&ship, config);
}

// ── projectile ↔ enemy ───────────────────────────────────────────────────────

#[test]
fn hit_removes_both_and_scores() {
    let config = Config::default();
    let mut stats = GameStats::new(3);
    let mut fleet = Fleet::from_enemies(vec![enemy_at(100.0, 100), enemy_at(300.0, 100)], 1);
    let mut set = ProjectileSet::new();
    fire_from(&mut set, &config, 130, 150);

    let cleared = resolve_projectile_hits(&mut set, &mut fleet, &mut stats, &config);
    assert!(!cleared);
    assert!(set.is_empty());
    assert_eq!(fleet.len(), 1);
    assert_eq!(fleet.enemies()[0].x, 300.0);
    assert_eq!(stats.score, 50);
    assert_eq!(stats.high_score, 50);
}

#[test]
fn miss_changes_nothing() {
    let config = Config::default();
    let mut stats = GameStats::new(3);
    let mut fleet = Fleet::from_enemies(vec![enemy_at(100.0, 100)], 1);
    let mut set = ProjectileSet::new();
    fire_from(&mut set, &config, 162, 150); // spans 161..164, enemy ends at 160

    assert!(!resolve_projectile_hits(&mut set, &mut fleet, &mut stats, &config));
    assert_eq!(set.len(), 1);
    assert_eq!(fleet.len(), 1);
    assert_eq!(stats.score, 0);
}

#[test]
fn touching_edges_do_not_collide() {
    let config = Config::default();
    let mut stats = GameStats::new(3);
    let mut fleet = Fleet::from_enemies(vec![enemy_at(100.0, 100)], 1);
    let mut set = ProjectileSet::new();
    fire_from(&mut set, &config, 130, 158); // top edge exactly on enemy bottom

    assert!(!resolve_projectile_hits(&mut set, &mut fleet, &mut stats, &config));
    assert_eq!(fleet.len(), 1);
}

#[test]
fn one_projectile_destroys_at_most_one_enemy() {
    let config = Config::default();
    let mut stats = GameStats::new(3);
    // Two enemies overlapping the same spot; the lower index goes.
    let mut fleet = Fleet::from_enemies(vec![enemy_at(100.0, 100), enemy_at(110.0, 120)], 1);
    let mut set = ProjectileSet::new();
    fire_from(&mut set, &config, 130, 150);

    resolve_projectile_hits(&mut set, &mut fleet, &mut stats, &config);
    assert_eq!(fleet.len(), 1);
    assert_eq!(fleet.enemies()[0].x, 110.0);
    assert_eq!(stats.score, 50);
}

#[test]
fn stacked_projectiles_claim_distinct_enemies() {
    let config = Config::default();
    let mut stats = GameStats::new(3);
    let mut fleet = Fleet::from_enemies(
        vec![enemy_at(100.0, 100), enemy_at(100.0, 100), enemy_at(100.0, 100)],
        1,
    );
    let mut set = ProjectileSet::new();
    for _ in 0..2 {
        fire_from(&mut set, &config, 130, 150);
    }

    let cleared = resolve_projectile_hits(&mut set, &mut fleet, &mut stats, &config);
    assert!(!cleared);
    assert!(set.is_empty());
    assert_eq!(fleet.len(), 1);
    assert_eq!(stats.score, 100);
}

#[test]
fn later_projectile_survives_when_its_only_target_is_claimed() {
    let config = Config::default();
    let mut stats = GameStats::new(3);
    let mut fleet = Fleet::from_enemies(vec![enemy_at(100.0, 100)], 1);
    let mut set = ProjectileSet::new();
    fire_from(&mut set, &config, 130, 150);
    fire_from(&mut set, &config, 140, 120);

    let cleared = resolve_projectile_hits(&mut set, &mut fleet, &mut stats, &config);
    assert!(cleared);
    assert_eq!(set.len(), 1);
    // The oldest projectile took the hit; the second one remains.
    assert_eq!(set.iter().next().unwrap().y, 120.0);
    assert_eq!(stats.score, 50);
}

#[test]
fn clearing_the_last_enemy_reports_wave_cleared() {
    let config = Config::default();
    let mut stats = GameStats::new(3);
    let mut fleet = Fleet::from_enemies(vec![enemy_at(100.0, 100)], 1);
    let mut set = ProjectileSet::new();
    fire_from(&mut set, &config, 130, 150);
    assert!(resolve_projectile_hits(&mut set, &mut fleet, &mut stats, &config));
    assert!(fleet.is_empty());
}

#[test]
fn empty_fleet_is_not_a_fresh_clear() {
    let config = Config::default();
    let mut stats = GameStats::new(3);
    let mut fleet = Fleet::from_enemies(Vec::new(), 1);
    let mut set = ProjectileSet::new();
    assert!(!resolve_projectile_hits(&mut set, &mut fleet, &mut stats, &config));
}

#[test]
fn points_follow_score_multiplier() {
    let mut config = Config::default();
    config.level_up(); // 75 points per hit
    let mut stats = GameStats::new(3);
    stats.high_score = 1000;
    let mut fleet = Fleet::from_enemies(vec![enemy_at(100.0, 100), enemy_at(300.0, 100)], 1);
    let mut set = ProjectileSet::new();
    fire_from(&mut set, &config, 130, 150);
    fire_from(&mut set, &config, 330, 150);

    resolve_projectile_hits(&mut set, &mut fleet, &mut stats, &config);
    assert_eq!(stats.score, 150);
    assert_eq!(stats.high_score, 1000);
}

// ── ship ↔ fleet ─────────────────────────────────────────────────────────────

#[test]
fn ship_overlap_is_a_hit() {
    let config = Config::default();
    let ship = Ship::new(&config); // 570..630 × 752..800
    let fleet = Fleet::from_enemies(vec![enemy_at(600.0, 700)], 1);
    assert!(resolve_ship_collision(&ship, &fleet, &config));
}

#[test]
fn enemy_reaching_the_bottom_is_a_hit() {
    let config = Config::default();
    let ship = Ship::new(&config);
    let fleet = Fleet::from_enemies(vec![enemy_at(100.0, 742)], 1); // bottom = 800
    assert!(resolve_ship_collision(&ship, &fleet, &config));
}

#[test]
fn enemy_just_above_the_bottom_is_safe() {
    let config = Config::default();
    let ship = Ship::new(&config);
    let fleet = Fleet::from_enemies(vec![enemy_at(100.0, 741)], 1); // bottom = 799
    assert!(!resolve_ship_collision(&ship, &fleet, &config));
    assert!(!resolve_ship_collision(&ship, &Fleet::new(&config), &config));
}
