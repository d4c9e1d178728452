//! The player entity.
//!
//! A runner pinned to a fixed horizontal anchor that can jump over
//! obstacles. Owns its hitbox, the gravity accumulator, and the walk cycle.

use sdl2::rect::Rect;
use tracing::debug;

use crate::constants::{GRAVITY_PER_TICK, GROUND_Y, JUMP_VELOCITY, PLAYER_FRAME_SIZE, PLAYER_WALK_RATE, PLAYER_X};
use crate::entity::{rect_from_midbottom, Entity};
use crate::input::InputState;
use crate::texture::animated::AnimatedFrames;
use crate::texture::sprites::SpriteId;

/// The player character.
///
/// One frame runs input, gravity, animation in that order: input is consumed
/// through [`Player::handle_input`] immediately before the trait `tick`, and
/// the animation reads the gravity-updated position of the same tick.
pub struct Player {
    hitbox: Rect,
    /// Gravity accumulator. Never reset on landing: only the position is
    /// clamped to the ground, and a jump overwrites whatever accumulated.
    velocity: i32,
    walk: AnimatedFrames,
    frame: SpriteId,
}

impl Player {
    pub fn new() -> Self {
        Self {
            hitbox: rect_from_midbottom(PLAYER_X, GROUND_Y, PLAYER_FRAME_SIZE),
            velocity: 0,
            walk: AnimatedFrames::new([SpriteId::PlayerWalk1, SpriteId::PlayerWalk2], PLAYER_WALK_RATE),
            frame: SpriteId::PlayerWalk1,
        }
    }

    /// Triggers a jump if the jump key is held while grounded.
    ///
    /// Mid-air presses are a no-op, which is what rules out double jumps.
    /// Returns whether a jump started, so the caller can play the sound.
    pub fn handle_input(&mut self, input: &InputState) -> bool {
        if input.jump && self.hitbox.bottom() >= GROUND_Y {
            self.velocity = JUMP_VELOCITY;
            debug!("Jump triggered");
            return true;
        }
        false
    }

    /// Integrates gravity and clamps the hitbox to the ground line.
    pub fn apply_gravity(&mut self) {
        self.velocity += GRAVITY_PER_TICK;
        self.hitbox.offset(0, self.velocity);
        if self.hitbox.bottom() >= GROUND_Y {
            self.hitbox.set_bottom(GROUND_Y);
        }
    }

    /// Selects the jump frame while airborne, otherwise advances the walk
    /// cycle.
    pub fn advance_animation(&mut self) {
        if self.airborne() {
            self.frame = SpriteId::PlayerJump;
        } else {
            self.walk.advance();
            self.frame = self.walk.current();
        }
    }

    /// Whether the player is above the ground line.
    pub fn airborne(&self) -> bool {
        self.hitbox.bottom() < GROUND_Y
    }

    /// Current vertical velocity (positive is downward).
    pub fn velocity(&self) -> i32 {
        self.velocity
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Player {
    fn tick(&mut self) {
        self.apply_gravity();
        self.advance_animation();
    }

    fn hitbox(&self) -> Rect {
        self.hitbox
    }

    fn current_frame(&self) -> SpriteId {
        self.frame
    }
}
