//! Timer-driven obstacle production.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::constants::SPAWN_INTERVAL_MS;
use crate::entity::obstacle::ObstacleKind;

/// Kinds are drawn uniformly from this set: a 1-in-4 chance of a fly.
const SPAWN_CHOICES: [ObstacleKind; 4] = [
    ObstacleKind::Fly,
    ObstacleKind::Snail,
    ObstacleKind::Snail,
    ObstacleKind::Snail,
];

/// Periodic obstacle factory.
///
/// An explicit interval counter checked against elapsed time. The clock
/// always advances; whether a fire actually spawns an obstacle is decided at
/// the consumption site, so fires during the intro or game-over screens are
/// simply dropped.
pub struct ObstacleSpawner {
    interval_ms: u64,
    last_fire_ms: u64,
}

impl ObstacleSpawner {
    pub fn new(now_ms: u64) -> Self {
        Self {
            interval_ms: SPAWN_INTERVAL_MS,
            last_fire_ms: now_ms,
        }
    }

    /// Checks the interval; on a fire, picks the kind to spawn.
    pub fn tick(&mut self, now_ms: u64, rng: &mut impl Rng) -> Option<ObstacleKind> {
        if now_ms.saturating_sub(self.last_fire_ms) >= self.interval_ms {
            self.last_fire_ms = now_ms;
            return SPAWN_CHOICES.choose(rng).copied();
        }
        None
    }
}
