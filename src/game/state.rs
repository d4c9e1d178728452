//! The renderer-free simulation: entities, spawner, session, and the
//! active/inactive state machine.

use rand::rngs::SmallRng;
use smallvec::SmallVec;

use crate::entity::collision::check_collisions;
use crate::entity::obstacle::Obstacle;
use crate::entity::player::Player;
use crate::entity::spawner::ObstacleSpawner;
use crate::entity::Entity;
use crate::events::GameEvent;
use crate::game::session::GameSession;
use crate::input::InputState;

/// Everything the simulation owns; rendering and audio live a layer above.
pub struct GameState {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub session: GameSession,
    spawner: ObstacleSpawner,
    rng: SmallRng,
}

impl GameState {
    /// Creates the simulation. The RNG is injected so tests can seed it.
    pub fn new(rng: SmallRng) -> Self {
        Self {
            player: Player::new(),
            obstacles: Vec::new(),
            session: GameSession::new(),
            spawner: ObstacleSpawner::new(0),
            rng,
        }
    }

    /// Runs one tick of the state machine and reports what happened.
    ///
    /// While active, the frame order is spawn, score, player (input then
    /// gravity then animation), obstacles, collision check. While inactive,
    /// the spawner clock still runs — its fires are dropped right here, the
    /// consumption site — and a held Enter starts a session.
    pub fn tick(&mut self, now_ms: u64, input: &InputState) -> SmallVec<[GameEvent; 2]> {
        let mut events = SmallVec::new();
        let fired = self.spawner.tick(now_ms, &mut self.rng);

        if self.session.active() {
            if let Some(kind) = fired {
                self.obstacles.push(Obstacle::spawn(kind, &mut self.rng));
            }

            self.session.update_score(now_ms);

            if self.player.handle_input(input) {
                events.push(GameEvent::Jumped);
            }
            self.player.tick();

            for obstacle in &mut self.obstacles {
                obstacle.tick();
            }
            self.obstacles.retain(|obstacle| !obstacle.expired());

            if !check_collisions(&self.player, &mut self.obstacles) {
                self.session.end();
                events.push(GameEvent::GameOver {
                    score: self.session.score(),
                });
            }
        } else if input.start {
            self.session.begin(now_ms);
            events.push(GameEvent::Started);
        }

        events
    }
}
