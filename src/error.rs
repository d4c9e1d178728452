//! Centralized error types for the game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use std::io;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur during game operation.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while reading asset files at startup.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Asset not found: {0}")]
    NotFound(String),
}

/// Errors related to texture operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadFailed(String),

    #[error("Invalid texture format: {0}")]
    InvalidFormat(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
