//! Sprite identifiers and the texture store behind them.

use std::collections::HashMap;

use glam::UVec2;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::debug;

use crate::asset::{get_asset_bytes, Asset};
use crate::constants::{
    FLY_FRAME_SIZE, GROUND_SIZE, PLAYER_FRAME_SIZE, PLAYER_STAND_SIZE, SKY_SIZE, SNAIL_FRAME_SIZE,
};
use crate::error::{GameError, GameResult, TextureError};

/// Every drawable frame in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SpriteId {
    PlayerWalk1,
    PlayerWalk2,
    PlayerJump,
    PlayerStand,
    Fly1,
    Fly2,
    Snail1,
    Snail2,
    Sky,
    Ground,
}

impl SpriteId {
    /// The asset file backing this frame.
    pub fn asset(self) -> Asset {
        match self {
            SpriteId::PlayerWalk1 => Asset::PlayerWalk1,
            SpriteId::PlayerWalk2 => Asset::PlayerWalk2,
            SpriteId::PlayerJump => Asset::PlayerJump,
            SpriteId::PlayerStand => Asset::PlayerStand,
            SpriteId::Fly1 => Asset::Fly1,
            SpriteId::Fly2 => Asset::Fly2,
            SpriteId::Snail1 => Asset::Snail1,
            SpriteId::Snail2 => Asset::Snail2,
            SpriteId::Sky => Asset::Sky,
            SpriteId::Ground => Asset::Ground,
        }
    }

    /// Nominal pixel size of this frame.
    ///
    /// Draw destinations and hitboxes both use this, so the simulation can
    /// run headless without querying a live texture.
    pub fn size(self) -> UVec2 {
        match self {
            SpriteId::PlayerWalk1 | SpriteId::PlayerWalk2 | SpriteId::PlayerJump => PLAYER_FRAME_SIZE,
            SpriteId::PlayerStand => PLAYER_STAND_SIZE,
            SpriteId::Fly1 | SpriteId::Fly2 => FLY_FRAME_SIZE,
            SpriteId::Snail1 | SpriteId::Snail2 => SNAIL_FRAME_SIZE,
            SpriteId::Sky => SKY_SIZE,
            SpriteId::Ground => GROUND_SIZE,
        }
    }
}

/// Preloaded textures for every [`SpriteId`].
pub struct SpriteStore {
    textures: HashMap<SpriteId, Texture>,
}

impl SpriteStore {
    /// Loads every sprite texture up front; any failure is fatal.
    pub fn load_all(texture_creator: &TextureCreator<WindowContext>) -> GameResult<Self> {
        let mut textures = HashMap::new();
        for id in SpriteId::iter() {
            let bytes = get_asset_bytes(id.asset())?;
            let texture = texture_creator.load_texture_bytes(&bytes).map_err(|e| {
                if e.contains("format") || e.contains("unsupported") {
                    GameError::Texture(TextureError::InvalidFormat(format!("Unsupported texture format: {e}")))
                } else {
                    GameError::Texture(TextureError::LoadFailed(e))
                }
            })?;
            textures.insert(id, texture);
        }

        debug!(count = textures.len(), "Loaded sprite textures");
        Ok(Self { textures })
    }

    /// The texture behind a sprite id. All ids are preloaded, so lookup
    /// cannot fail.
    pub fn get(&self, id: SpriteId) -> &Texture {
        &self.textures[&id]
    }
}
