use smallvec::SmallVec;

use crate::texture::sprites::SpriteId;

/// A fixed frame sequence advanced by a fractional step each tick.
///
/// The index grows by `rate` per tick and resets to zero once it reaches the
/// frame count; the displayed frame is the floor of the index.
#[derive(Clone, Debug)]
pub struct AnimatedFrames {
    frames: SmallVec<[SpriteId; 2]>,
    rate: f32,
    index: f32,
}

impl AnimatedFrames {
    pub fn new(frames: impl IntoIterator<Item = SpriteId>, rate: f32) -> Self {
        let frames: SmallVec<[SpriteId; 2]> = frames.into_iter().collect();
        debug_assert!(!frames.is_empty());
        Self {
            frames,
            rate,
            index: 0.0,
        }
    }

    /// Advances the cycle by one tick.
    pub fn advance(&mut self) {
        self.index += self.rate;
        if self.index >= self.frames.len() as f32 {
            self.index = 0.0;
        }
    }

    /// The frame to display this tick.
    pub fn current(&self) -> SpriteId {
        self.frames[self.index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_advances_at_rate() {
        let mut frames = AnimatedFrames::new([SpriteId::PlayerWalk1, SpriteId::PlayerWalk2], 0.1);
        assert_eq!(frames.current(), SpriteId::PlayerWalk1);

        // 0.1/tick: the second frame appears on the tick that reaches 1.0.
        for _ in 0..9 {
            frames.advance();
        }
        assert_eq!(frames.current(), SpriteId::PlayerWalk1);
        frames.advance();
        assert_eq!(frames.current(), SpriteId::PlayerWalk2);
    }

    #[test]
    fn test_index_resets_at_frame_count() {
        let mut frames = AnimatedFrames::new([SpriteId::Fly1, SpriteId::Fly2], 0.3);

        // 0.3/tick reaches 2.1 on the seventh advance and snaps back to the
        // first frame rather than wrapping the remainder.
        for _ in 0..7 {
            frames.advance();
        }
        assert_eq!(frames.current(), SpriteId::Fly1);
    }
}
