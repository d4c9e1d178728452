//! TTF text rendering.
//!
//! Strings are rasterized once and cached as textures keyed by text and
//! style; the HUD score changes once per second and the intro strings are
//! static, so the cache stays tiny while avoiding a surface-to-texture
//! conversion every frame.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use glam::{IVec2, UVec2};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

use crate::constants::{FINAL_SCORE_COLOR, SCORE_TEXT_COLOR, TITLE_COLOR};
use crate::error::{GameError, GameResult, TextureError};

/// Text styles the game renders; each pairs a font with a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// HUD digits in dark grey.
    Score,
    /// The game title in the large font.
    Title,
    /// The "press enter" prompt.
    Prompt,
    /// The final-score line in white.
    FinalScore,
}

/// Renders and caches text textures for the two game fonts.
pub struct TextRenderer {
    hud_font: Font<'static, 'static>,
    title_font: Font<'static, 'static>,
    cache: HashMap<(TextStyle, String), Texture>,
}

impl TextRenderer {
    pub fn new(hud_font: Font<'static, 'static>, title_font: Font<'static, 'static>) -> Self {
        Self {
            hud_font,
            title_font,
            cache: HashMap::new(),
        }
    }

    fn color(style: TextStyle) -> Color {
        match style {
            TextStyle::Score => SCORE_TEXT_COLOR,
            TextStyle::Title | TextStyle::Prompt => TITLE_COLOR,
            TextStyle::FinalScore => FINAL_SCORE_COLOR,
        }
    }

    /// Pixel size `text` would occupy in `style`.
    pub fn measure(&self, style: TextStyle, text: &str) -> GameResult<UVec2> {
        let font = match style {
            TextStyle::Title => &self.title_font,
            _ => &self.hud_font,
        };
        let (width, height) = font
            .size_of(text)
            .map_err(|e| GameError::Texture(TextureError::RenderFailed(e.to_string())))?;
        Ok(UVec2::new(width, height))
    }

    /// Renders `text` centered at `center`, rasterizing on first use.
    pub fn render_centered(
        &mut self,
        canvas: &mut Canvas<Window>,
        texture_creator: &TextureCreator<WindowContext>,
        style: TextStyle,
        text: &str,
        center: IVec2,
    ) -> GameResult<()> {
        let texture = match self.cache.entry((style, text.to_string())) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let font = match style {
                    TextStyle::Title => &self.title_font,
                    _ => &self.hud_font,
                };
                let surface = font
                    .render(text)
                    .blended(Self::color(style))
                    .map_err(|e| GameError::Texture(TextureError::RenderFailed(e.to_string())))?;
                let texture = surface
                    .as_texture(texture_creator)
                    .map_err(|e| GameError::Texture(TextureError::RenderFailed(e.to_string())))?;
                entry.insert(texture)
            }
        };

        let query = texture.query();
        let dest = Rect::new(
            center.x - (query.width / 2) as i32,
            center.y - (query.height / 2) as i32,
            query.width,
            query.height,
        );
        canvas.copy(texture, None, Some(dest)).map_err(GameError::Sdl)
    }
}
