//! Collision detection between the player and the obstacle collection.

use crate::entity::obstacle::Obstacle;
use crate::entity::Entity;

/// Tests the player hitbox against every active obstacle.
///
/// Any overlap ends the run: the whole collection is cleared at once, not
/// just the obstacle that was touched. Returns whether the session is still
/// active.
pub fn check_collisions<E: Entity>(player: &E, obstacles: &mut Vec<Obstacle>) -> bool {
    let hit = obstacles
        .iter()
        .any(|obstacle| player.hitbox().has_intersection(obstacle.hitbox()));

    if hit {
        obstacles.clear();
    }
    !hit
}
