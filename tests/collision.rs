use pixel_runner::entity::collision::check_collisions;
use pixel_runner::entity::obstacle::{Obstacle, ObstacleKind};
use pixel_runner::entity::player::Player;
use pixel_runner::entity::Entity;
use pixel_runner::texture::sprites::SpriteId;
use sdl2::rect::Rect;

struct MockEntity {
    hitbox: Rect,
}

impl Entity for MockEntity {
    fn tick(&mut self) {}

    fn hitbox(&self) -> Rect {
        self.hitbox
    }

    fn current_frame(&self) -> SpriteId {
        SpriteId::PlayerWalk1
    }
}

#[test]
fn test_no_overlap_keeps_session_active() {
    let player = Player::new();
    let mut obstacles = vec![
        Obstacle::spawn_at(ObstacleKind::Snail, 600),
        Obstacle::spawn_at(ObstacleKind::Fly, 900),
    ];

    assert!(check_collisions(&player, &mut obstacles));
    assert_eq!(obstacles.len(), 2);
}

#[test]
fn test_overlap_clears_all_obstacles() {
    // Three obstacles, only one of which touches the player: the whole
    // collection goes, not just the touched one.
    let player = Player::new();
    let mut obstacles = vec![
        Obstacle::spawn_at(ObstacleKind::Snail, 200),
        Obstacle::spawn_at(ObstacleKind::Snail, 700),
        Obstacle::spawn_at(ObstacleKind::Fly, 1000),
    ];

    assert!(!check_collisions(&player, &mut obstacles));
    assert_eq!(obstacles.len(), 0);
}

#[test]
fn test_empty_collection_is_no_hit() {
    let player = Player::new();
    let mut obstacles = Vec::new();

    assert!(check_collisions(&player, &mut obstacles));
}

#[test]
fn test_low_hitbox_passes_under_fly() {
    // A fly's body sits above a mock hitbox that ends below it.
    let low_profile = MockEntity {
        hitbox: Rect::new(160, 280, 80, 20),
    };
    let mut obstacles = vec![Obstacle::spawn_at(ObstacleKind::Fly, 200)];

    assert!(check_collisions(&low_profile, &mut obstacles));
    assert_eq!(obstacles.len(), 1);
}

#[test]
fn test_partial_overlap_counts_as_hit() {
    // A sliver of shared area is enough; the detector has no grace margin.
    let mock = MockEntity {
        hitbox: Rect::new(0, 200, 10, 10),
    };
    // Fly body spans 68px centered on 39, so its left edge lands at x=5,
    // overlapping the mock's last five columns.
    let mut obstacles = vec![Obstacle::spawn_at(ObstacleKind::Fly, 39)];

    assert!(!check_collisions(&mock, &mut obstacles));
    assert!(obstacles.is_empty());
}
