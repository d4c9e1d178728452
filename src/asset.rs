//! Asset loading.
//!
//! Assets live in an `assets/` directory beside the binary and are read once
//! during startup; a missing or unreadable file is fatal before the game
//! loop is entered.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use strum_macros::EnumIter;

use crate::error::AssetError;

/// Every file the game reads at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Asset {
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
    FontPixeltype,
    JumpSound,
    Music,
}

impl Asset {
    /// Path of this asset relative to the `assets/` directory.
    pub fn path(self) -> &'static str {
        match self {
            Asset::PlayerWalk1 => "graphics/Player/player_walk_1.png",
            Asset::PlayerWalk2 => "graphics/Player/player_walk_2.png",
            Asset::PlayerJump => "graphics/Player/jump.png",
            Asset::PlayerStand => "graphics/Player/player_stand.png",
            Asset::Fly1 => "graphics/Fly/Fly1.png",
            Asset::Fly2 => "graphics/Fly/Fly2.png",
            Asset::Snail1 => "graphics/snail/snail1.png",
            Asset::Snail2 => "graphics/snail/snail2.png",
            Asset::Sky => "graphics/sky.png",
            Asset::Ground => "graphics/ground.png",
            Asset::FontPixeltype => "font/Pixeltype.ttf",
            Asset::JumpSound => "audio/jump.wav",
            Asset::Music => "audio/music.wav",
        }
    }
}

/// Reads an asset's bytes from disk.
pub fn get_asset_bytes(asset: Asset) -> Result<Cow<'static, [u8]>, AssetError> {
    let path = Path::new("assets").join(asset.path());
    let bytes = fs::read(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AssetError::NotFound(path.display().to_string()),
        _ => AssetError::Io(e),
    })?;
    Ok(Cow::Owned(bytes))
}
