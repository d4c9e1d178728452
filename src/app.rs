//! SDL bootstrap and the fixed-rate frame loop.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::rwops::RWops;
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{error, event};

use crate::asset::{get_asset_bytes, Asset};
use crate::constants::{CANVAS_SIZE, FONT_SIZE, LOOP_TIME, TITLE_FONT_SIZE};
use crate::game::Game;
use crate::input::InputState;
use crate::texture::text::TextRenderer;

fn sleep(value: Duration) {
    spin_sleep::sleep(value);
}

/// The windowed application: SDL context, the game, and the frame pacer.
pub struct App {
    game: Game,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    /// Keeps the SDL audio subsystem alive for the mixer.
    _audio_subsystem: sdl2::AudioSubsystem,
    /// Source of elapsed milliseconds since startup.
    started: Instant,
    paused: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let audio_subsystem = sdl_context.audio().map_err(|e| anyhow!(e))?;

        let window = video_subsystem
            .window("Pixel Runner", CANVAS_SIZE.x, CANVAS_SIZE.y)
            .position_centered()
            .build()?;

        let mut canvas = window.into_canvas().build()?;
        canvas.set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)?;

        let texture_creator: &'static TextureCreator<WindowContext> = Box::leak(Box::new(canvas.texture_creator()));

        // The ttf context and font bytes outlive the whole program; leaking
        // them sidesteps self-referential lifetimes in the text renderer.
        let ttf_context: &'static sdl2::ttf::Sdl2TtfContext =
            Box::leak(Box::new(sdl2::ttf::init().map_err(|e| anyhow!(e.to_string()))?));
        let font_bytes: &'static [u8] = Box::leak(get_asset_bytes(Asset::FontPixeltype)?.into_owned().into_boxed_slice());

        let hud_font = ttf_context
            .load_font_from_rwops(RWops::from_bytes(font_bytes).map_err(|e| anyhow!(e))?, FONT_SIZE)
            .map_err(|e| anyhow!(e))?;
        let title_font = ttf_context
            .load_font_from_rwops(RWops::from_bytes(font_bytes).map_err(|e| anyhow!(e))?, TITLE_FONT_SIZE)
            .map_err(|e| anyhow!(e))?;
        let text = TextRenderer::new(hud_font, title_font);

        let game = Game::new(texture_creator, text)?;

        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        Ok(Self {
            game,
            canvas,
            event_pump,
            _audio_subsystem: audio_subsystem,
            started: Instant::now(),
            paused: false,
        })
    }

    /// Runs one frame; returns false once the app should exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        for event in self.event_pump.poll_iter() {
            match event {
                // Handle quitting keys or window close
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape) | Some(Keycode::Q),
                    ..
                } => {
                    event!(tracing::Level::INFO, "Exit requested. Exiting...");
                    return false;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    ..
                } => {
                    self.paused = !self.paused;
                    event!(tracing::Level::INFO, "{}", if self.paused { "Paused" } else { "Unpaused" });
                }
                Event::KeyDown {
                    keycode: Some(Keycode::M),
                    ..
                } => {
                    let muted = self.game.audio_mut().is_muted();
                    self.game.audio_mut().set_mute(!muted);
                }
                _ => {}
            }
        }

        if !self.paused {
            let now_ms = self.started.elapsed().as_millis() as u64;
            let input = InputState::sample(&self.event_pump.keyboard_state());

            self.game.tick(now_ms, &input);
            if let Err(e) = self.game.draw(&mut self.canvas) {
                error!("Failed to draw game: {e}");
            }
            self.canvas.present();
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                sleep(time);
            }
        } else {
            event!(
                tracing::Level::WARN,
                "Game loop behind schedule by: {:?}",
                start.elapsed() - LOOP_TIME
            );
        }

        true
    }
}
