//! Events a simulation tick reports to the presentation layer.

/// Something that happened during one tick and needs a side effect
/// (a sound, a log line) applied by the layer that owns those resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A new session started (Enter pressed on the intro screen).
    Started,
    /// The player left the ground this tick.
    Jumped,
    /// A collision ended the session; carries the frozen score.
    GameOver { score: u32 },
}
