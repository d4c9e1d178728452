//! This module contains all the constants used in the game.

use std::ops::RangeInclusive;
use std::time::Duration;

use glam::{IVec2, UVec2};
use sdl2::pixels::Color;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the visible canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(800, 400);

/// The y-coordinate of the walkable surface; sprite bottoms clamp to this.
pub const GROUND_Y: i32 = 300;

/// The player's fixed horizontal anchor (midbottom x).
pub const PLAYER_X: i32 = 200;
/// Vertical velocity applied when a jump triggers (negative is upward).
pub const JUMP_VELOCITY: i32 = -20;
/// Downward acceleration added to the velocity every tick.
pub const GRAVITY_PER_TICK: i32 = 1;
/// Walk-cycle animation advance per tick.
pub const PLAYER_WALK_RATE: f32 = 0.1;

/// Leftward obstacle movement per tick, in pixels.
pub const OBSTACLE_SPEED: i32 = 6;
/// Obstacles whose left edge reaches this x are removed.
pub const OBSTACLE_DESPAWN_X: i32 = -100;
/// Horizontal spawn range for an obstacle's midbottom anchor.
pub const OBSTACLE_SPAWN_X: RangeInclusive<i32> = 900..=1100;
/// Interval between spawner fires, in milliseconds.
pub const SPAWN_INTERVAL_MS: u64 = 1500;
/// Bottom anchor of a fly obstacle.
pub const FLY_Y: i32 = 210;
/// Fly animation advance per tick (wings beat faster than a crawl).
pub const FLY_ANIMATION_RATE: f32 = 0.3;
/// Snail animation advance per tick.
pub const SNAIL_ANIMATION_RATE: f32 = 0.1;

/// The size of a player walk/jump frame, in pixels.
pub const PLAYER_FRAME_SIZE: UVec2 = UVec2::new(80, 94);
/// The size of the standing pose shown on the intro screen.
pub const PLAYER_STAND_SIZE: UVec2 = UVec2::new(64, 84);
/// The size of a fly frame.
pub const FLY_FRAME_SIZE: UVec2 = UVec2::new(68, 40);
/// The size of a snail frame.
pub const SNAIL_FRAME_SIZE: UVec2 = UVec2::new(72, 45);
/// The size of the sky backdrop layer.
pub const SKY_SIZE: UVec2 = UVec2::new(800, 300);
/// The size of the ground strip below the walkable line.
pub const GROUND_SIZE: UVec2 = UVec2::new(800, 100);

/// Center of the in-game score readout.
pub const SCORE_CENTER: IVec2 = IVec2::new(400, 50);
/// Center of the title on the intro screen.
pub const TITLE_CENTER: IVec2 = IVec2::new(415, 50);
/// Center of the "press enter" prompt.
pub const PROMPT_CENTER: IVec2 = IVec2::new(415, 350);
/// Center of the final-score line on the game-over screen.
pub const FINAL_SCORE_CENTER: IVec2 = IVec2::new(405, 350);
/// Center of the standing player sprite on the intro screen.
pub const STAND_CENTER: IVec2 = IVec2::new(400, 200);
/// Intro standing sprite zoom factor.
pub const STAND_SCALE: u32 = 2;

/// Fill color of the intro/game-over screen.
pub const INTRO_FILL: Color = Color::RGB(94, 129, 162);
/// Color of the score digits.
pub const SCORE_TEXT_COLOR: Color = Color::RGB(64, 64, 64);
/// Color of the backdrop box behind the score.
pub const SCORE_BOX_COLOR: Color = Color::RGB(192, 232, 236);
/// Color of the title and the continue prompt.
pub const TITLE_COLOR: Color = Color::RGB(111, 196, 169);
/// Color of the final-score line.
pub const FINAL_SCORE_COLOR: Color = Color::WHITE;
/// Padding of the score backdrop box around the rendered digits.
pub const SCORE_BOX_PADDING: u32 = 10;

/// HUD font point size.
pub const FONT_SIZE: u16 = 50;
/// Title font point size.
pub const TITLE_FONT_SIZE: u16 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_canvas_size() {
        assert_eq!(CANVAS_SIZE.x, 800);
        assert_eq!(CANVAS_SIZE.y, 400);
    }

    #[test]
    fn test_background_covers_canvas() {
        // Sky above the ground line, ground strip below, together filling
        // the canvas exactly.
        assert_eq!(SKY_SIZE.y as i32, GROUND_Y);
        assert_eq!(SKY_SIZE.y + GROUND_SIZE.y, CANVAS_SIZE.y);
        assert_eq!(SKY_SIZE.x, CANVAS_SIZE.x);
        assert_eq!(GROUND_SIZE.x, CANVAS_SIZE.x);
    }

    #[test]
    fn test_spawn_range_is_offscreen() {
        assert!(*OBSTACLE_SPAWN_X.start() >= CANVAS_SIZE.x as i32);
        assert!(OBSTACLE_SPAWN_X.start() <= OBSTACLE_SPAWN_X.end());
    }

    #[test]
    fn test_fly_passes_over_grounded_player() {
        // A fly's body must clear the ground line so ducking is never needed;
        // only a grounded player's upper body can intersect it.
        assert!(FLY_Y < GROUND_Y);
        assert!(FLY_Y > GROUND_Y - PLAYER_FRAME_SIZE.y as i32);
    }

    #[test]
    fn test_jump_returns_to_ground() {
        // With v0 = -20 and +1/tick, the apex is reached after 20 ticks and
        // the ramp is symmetric, so the player lands again.
        let mut y = 0i32;
        let mut velocity = JUMP_VELOCITY;
        let mut ticks = 0;
        loop {
            velocity += GRAVITY_PER_TICK;
            y += velocity;
            ticks += 1;
            if y >= 0 {
                break;
            }
        }
        assert!(ticks > 20, "jump should outlast the ascent, took {ticks}");
        assert!(ticks < 60, "jump should land within a second, took {ticks}");
    }
}
