//! Game entities and the capability interface they share.

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod spawner;

use glam::UVec2;
use sdl2::rect::Rect;

use crate::texture::sprites::SpriteId;

/// Capability interface shared by everything living on the playfield.
pub trait Entity {
    /// Advances one tick of simulation (movement and animation).
    fn tick(&mut self);

    /// Axis-aligned collision rectangle; also the draw destination.
    fn hitbox(&self) -> Rect;

    /// The frame to display this tick.
    fn current_frame(&self) -> SpriteId;
}

/// Builds a rect of `size` whose bottom-center sits at (`center_x`, `bottom`).
pub(crate) fn rect_from_midbottom(center_x: i32, bottom: i32, size: UVec2) -> Rect {
    Rect::new(center_x - size.x as i32 / 2, bottom - size.y as i32, size.x, size.y)
}
