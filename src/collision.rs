//! Collision resolution between projectiles, the fleet and the ship.
//!
//! Both passes scan an immutable view first, collecting the indices of the
//! members that must go, and only then mutate the owning collections.

use crate::config::Config;
use crate::entities::{Body, GameStats, Ship};
use crate::fleet::Fleet;
use crate::projectiles::ProjectileSet;

/// Pair every projectile with at most one enemy it overlaps and remove both.
///
/// Projectiles are visited oldest first.  Each one claims the overlapping
/// enemy with the lowest index that no earlier projectile has claimed; a
/// projectile whose only overlaps are already claimed survives the tick.
/// Every destroyed enemy scores `config.points_per_hit()`.
///
/// Returns true when this pass emptied the fleet.
pub fn resolve_projectile_hits(
    projectiles: &mut ProjectileSet,
    fleet: &mut Fleet,
    stats: &mut GameStats,
    config: &Config,
) -> bool {
    if fleet.is_empty() {
        return false;
    }

    let mut killed_enemies: Vec<usize> = Vec::new();
    let mut used_projectiles: Vec<usize> = Vec::new();

    for (pi, projectile) in projectiles.iter().enumerate() {
        let hit = fleet
            .enemies()
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !killed_enemies.contains(ei) && projectile.overlaps(*enemy));
        if let Some((ei, _)) = hit {
            killed_enemies.push(ei);
            used_projectiles.push(pi);
        }
    }

    if killed_enemies.is_empty() {
        return false;
    }

    let points = config.points_per_hit();
    for _ in &killed_enemies {
        stats.add_score(points);
    }
    fleet.remove_indices(&killed_enemies);
    projectiles.remove_indices(&used_projectiles);

    log::trace!(
        "{} enemies destroyed, {} remain, score {}",
        killed_enemies.len(),
        fleet.len(),
        stats.score
    );

    fleet.is_empty()
}

/// True if any enemy overlaps the ship or has reached the bottom of the
/// viewport.
pub fn resolve_ship_collision(ship: &Ship, fleet: &Fleet, config: &Config) -> bool {
    let floor = config.screen().bottom();
    fleet
        .enemies()
        .iter()
        .any(|enemy| ship.overlaps(enemy) || enemy.rect().bottom() >= floor)
}
