//! This module handles the audio playback for the game.

use sdl2::mixer::{self, Chunk, InitFlag, LoaderRWops, Music, DEFAULT_FORMAT};
use sdl2::rwops::RWops;
use tracing::{trace, warn};

use crate::asset::{get_asset_bytes, Asset};
use crate::error::{GameError, GameResult};

/// Number of mixing channels allocated for sound effects.
const CHANNEL_COUNT: i32 = 2;
/// Mixer volumes run 0..=128; the jump effect plays at half volume.
const JUMP_VOLUME: i32 = 64;
/// The music loop plays quietly under the effects.
const MUSIC_VOLUME: i32 = 26;

/// The audio system for the game.
///
/// Responsible for opening the audio device, loading the jump effect and
/// the background music loop, and playing them.
pub struct Audio {
    _mixer_context: mixer::Sdl2MixerContext,
    jump: Chunk,
    music: Music<'static>,
    muted: bool,
}

impl Audio {
    /// Opens the audio device and loads both sounds; failures are fatal at
    /// startup.
    pub fn new() -> GameResult<Self> {
        let frequency = 44_100;
        let chunk_size = 1_024;

        mixer::open_audio(frequency, DEFAULT_FORMAT, CHANNEL_COUNT, chunk_size).map_err(GameError::Audio)?;
        let mixer_context = mixer::init(InitFlag::OGG).map_err(GameError::Audio)?;
        mixer::allocate_channels(CHANNEL_COUNT);

        let jump_bytes = get_asset_bytes(Asset::JumpSound)?;
        let rwops = RWops::from_bytes(&jump_bytes).map_err(GameError::Audio)?;
        let mut jump = rwops.load_wav().map_err(GameError::Audio)?;
        jump.set_volume(JUMP_VOLUME);

        // Music keeps a reference to its bytes for the whole run, so the
        // buffer is leaked to 'static.
        let music_bytes: &'static [u8] = Box::leak(get_asset_bytes(Asset::Music)?.into_owned().into_boxed_slice());
        let music = Music::from_static_bytes(music_bytes).map_err(GameError::Audio)?;
        Music::set_volume(MUSIC_VOLUME);

        Ok(Audio {
            _mixer_context: mixer_context,
            jump,
            music,
            muted: false,
        })
    }

    /// Starts the background music loop; it plays until process exit.
    pub fn play_music(&self) -> GameResult<()> {
        self.music.play(-1).map_err(GameError::Audio)
    }

    /// Plays the jump sound effect on the first free channel.
    pub fn jump(&self) {
        match mixer::Channel(-1).play(&self.jump, 0) {
            Ok(channel) => trace!("Playing jump sound on channel {:?}", channel),
            Err(e) => warn!("Could not play jump sound: {}", e),
        }
    }

    /// Instantly mute or unmute all channels and the music.
    pub fn set_mute(&mut self, mute: bool) {
        let volume = if mute { 0 } else { JUMP_VOLUME };
        for i in 0..CHANNEL_COUNT {
            mixer::Channel(i).set_volume(volume);
        }
        Music::set_volume(if mute { 0 } else { MUSIC_VOLUME });
        self.muted = mute;
    }

    /// Returns `true` if the audio is muted.
    pub fn is_muted(&self) -> bool {
        self.muted
    }
}
