//! This module contains the main game logic and state.

pub mod session;
pub mod state;

use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::info;

use crate::audio::Audio;
use crate::constants::{
    FINAL_SCORE_CENTER, GROUND_Y, INTRO_FILL, PROMPT_CENTER, SCORE_BOX_COLOR, SCORE_BOX_PADDING, SCORE_CENTER,
    STAND_CENTER, STAND_SCALE, TITLE_CENTER,
};
use crate::entity::Entity;
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::game::state::GameState;
use crate::input::InputState;
use crate::texture::sprites::{SpriteId, SpriteStore};
use crate::texture::text::{TextRenderer, TextStyle};

/// The playing game: the simulation plus the resources that present it.
///
/// [`GameState`] runs the per-tick state machine and reports events;
/// `Game` owns the textures, fonts, and audio, applies those events, and
/// draws whichever screen the session is in.
pub struct Game {
    pub state: GameState,
    sprites: SpriteStore,
    text: TextRenderer,
    audio: Audio,
    texture_creator: &'static TextureCreator<WindowContext>,
}

impl Game {
    /// Loads every render/audio resource and starts the music loop.
    pub fn new(texture_creator: &'static TextureCreator<WindowContext>, text: TextRenderer) -> GameResult<Self> {
        let sprites = SpriteStore::load_all(texture_creator)?;
        let audio = Audio::new()?;
        audio.play_music()?;

        Ok(Self {
            state: GameState::new(SmallRng::from_os_rng()),
            sprites,
            text,
            audio,
            texture_creator,
        })
    }

    /// Runs one simulation tick and applies its events.
    pub fn tick(&mut self, now_ms: u64, input: &InputState) {
        for event in self.state.tick(now_ms, input) {
            match event {
                GameEvent::Started => info!("Session started"),
                GameEvent::Jumped => self.audio.jump(),
                GameEvent::GameOver { score } => info!(score, "Game over"),
            }
        }
    }

    pub fn audio_mut(&mut self) -> &mut Audio {
        &mut self.audio
    }

    /// Draws the frame for the current state.
    pub fn draw(&mut self, canvas: &mut Canvas<Window>) -> GameResult<()> {
        if self.state.session.active() {
            self.draw_active(canvas)
        } else {
            self.draw_inactive(canvas)
        }
    }

    /// The active frame: background, score, player, obstacles.
    fn draw_active(&mut self, canvas: &mut Canvas<Window>) -> GameResult<()> {
        self.blit(canvas, SpriteId::Sky, IVec2::new(0, 0))?;
        self.blit(canvas, SpriteId::Ground, IVec2::new(0, GROUND_Y))?;
        self.draw_score(canvas)?;

        self.draw_entity(canvas, &self.state.player)?;
        for obstacle in &self.state.obstacles {
            self.draw_entity(canvas, obstacle)?;
        }

        Ok(())
    }

    /// The intro/game-over composition: fill, standing sprite, title, and
    /// either the continue prompt or the final score.
    fn draw_inactive(&mut self, canvas: &mut Canvas<Window>) -> GameResult<()> {
        canvas.set_draw_color(INTRO_FILL);
        canvas.clear();

        let size = SpriteId::PlayerStand.size() * STAND_SCALE;
        let dest = Rect::new(
            STAND_CENTER.x - (size.x / 2) as i32,
            STAND_CENTER.y - (size.y / 2) as i32,
            size.x,
            size.y,
        );
        canvas
            .copy(self.sprites.get(SpriteId::PlayerStand), None, Some(dest))
            .map_err(GameError::Sdl)?;

        let texture_creator = self.texture_creator;
        self.text
            .render_centered(canvas, texture_creator, TextStyle::Title, "Pixel Runner", TITLE_CENTER)?;

        if self.state.session.score() == 0 {
            self.text.render_centered(
                canvas,
                texture_creator,
                TextStyle::Prompt,
                "Press Enter to Continue:",
                PROMPT_CENTER,
            )?;
        } else {
            let final_score = format!("Final Score: {}", self.state.session.score());
            self.text.render_centered(
                canvas,
                texture_creator,
                TextStyle::FinalScore,
                &final_score,
                FINAL_SCORE_CENTER,
            )?;
        }

        Ok(())
    }

    /// Draws the score digits over their backdrop box.
    fn draw_score(&mut self, canvas: &mut Canvas<Window>) -> GameResult<()> {
        let text = self.state.session.score().to_string();
        let size = self.text.measure(TextStyle::Score, &text)?;

        let padding = SCORE_BOX_PADDING;
        let backdrop = Rect::new(
            SCORE_CENTER.x - (size.x / 2 + padding) as i32,
            SCORE_CENTER.y - (size.y / 2 + padding) as i32,
            size.x + padding * 2,
            size.y + padding * 2,
        );
        canvas.set_draw_color(SCORE_BOX_COLOR);
        canvas.fill_rect(backdrop).map_err(GameError::Sdl)?;

        self.text
            .render_centered(canvas, self.texture_creator, TextStyle::Score, &text, SCORE_CENTER)
    }

    /// Draws any entity at its hitbox with its current frame.
    fn draw_entity(&self, canvas: &mut Canvas<Window>, entity: &impl Entity) -> GameResult<()> {
        canvas
            .copy(self.sprites.get(entity.current_frame()), None, Some(entity.hitbox()))
            .map_err(GameError::Sdl)
    }

    /// Draws a static layer at its natural size.
    fn blit(&self, canvas: &mut Canvas<Window>, id: SpriteId, pos: IVec2) -> GameResult<()> {
        let size = id.size();
        canvas
            .copy(self.sprites.get(id), None, Some(Rect::new(pos.x, pos.y, size.x, size.y)))
            .map_err(GameError::Sdl)
    }
}
