//! Obstacles that drift leftward across the playfield.

use glam::UVec2;
use rand::Rng;
use sdl2::rect::Rect;

use crate::constants::{
    FLY_ANIMATION_RATE, FLY_FRAME_SIZE, FLY_Y, GROUND_Y, OBSTACLE_DESPAWN_X, OBSTACLE_SPAWN_X, OBSTACLE_SPEED,
    SNAIL_ANIMATION_RATE, SNAIL_FRAME_SIZE,
};
use crate::entity::{rect_from_midbottom, Entity};
use crate::texture::animated::AnimatedFrames;
use crate::texture::sprites::SpriteId;

/// The two obstacle variants: flies cross at jump height, snails crawl on
/// the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Fly,
    Snail,
}

impl ObstacleKind {
    /// Bottom anchor of this kind.
    fn bottom(self) -> i32 {
        match self {
            ObstacleKind::Fly => FLY_Y,
            ObstacleKind::Snail => GROUND_Y,
        }
    }

    fn frame_size(self) -> UVec2 {
        match self {
            ObstacleKind::Fly => FLY_FRAME_SIZE,
            ObstacleKind::Snail => SNAIL_FRAME_SIZE,
        }
    }

    fn animation(self) -> AnimatedFrames {
        match self {
            ObstacleKind::Fly => AnimatedFrames::new([SpriteId::Fly1, SpriteId::Fly2], FLY_ANIMATION_RATE),
            ObstacleKind::Snail => AnimatedFrames::new([SpriteId::Snail1, SpriteId::Snail2], SNAIL_ANIMATION_RATE),
        }
    }
}

/// One obstacle on the playfield.
pub struct Obstacle {
    kind: ObstacleKind,
    hitbox: Rect,
    animation: AnimatedFrames,
}

impl Obstacle {
    /// Spawns an obstacle with a randomized horizontal anchor.
    pub fn spawn(kind: ObstacleKind, rng: &mut impl Rng) -> Self {
        Self::spawn_at(kind, rng.random_range(OBSTACLE_SPAWN_X))
    }

    /// Spawns an obstacle with its midbottom anchor at `center_x`.
    pub fn spawn_at(kind: ObstacleKind, center_x: i32) -> Self {
        Self {
            kind,
            hitbox: rect_from_midbottom(center_x, kind.bottom(), kind.frame_size()),
            animation: kind.animation(),
        }
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    /// Whether the obstacle has left the screen and should be removed.
    pub fn expired(&self) -> bool {
        self.hitbox.x() <= OBSTACLE_DESPAWN_X
    }
}

impl Entity for Obstacle {
    fn tick(&mut self) {
        self.animation.advance();
        self.hitbox.offset(-OBSTACLE_SPEED, 0);
    }

    fn hitbox(&self) -> Rect {
        self.hitbox
    }

    fn current_frame(&self) -> SpriteId {
        self.animation.current()
    }
}
