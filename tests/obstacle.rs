use pixel_runner::constants::{FLY_Y, GROUND_Y, OBSTACLE_SPAWN_X, OBSTACLE_SPEED, SNAIL_FRAME_SIZE};
use pixel_runner::entity::obstacle::{Obstacle, ObstacleKind};
use pixel_runner::entity::Entity;
use pixel_runner::texture::sprites::SpriteId;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_kinds_anchor_at_their_height() {
    let snail = Obstacle::spawn_at(ObstacleKind::Snail, 1000);
    let fly = Obstacle::spawn_at(ObstacleKind::Fly, 1000);

    assert_eq!(snail.hitbox().bottom(), GROUND_Y);
    assert_eq!(fly.hitbox().bottom(), FLY_Y);
}

#[test]
fn test_moves_left_at_constant_speed() {
    let mut obstacle = Obstacle::spawn_at(ObstacleKind::Snail, 1000);
    let start_x = obstacle.hitbox().x();

    obstacle.tick();
    assert_eq!(obstacle.hitbox().x(), start_x - OBSTACLE_SPEED);
    obstacle.tick();
    assert_eq!(obstacle.hitbox().x(), start_x - 2 * OBSTACLE_SPEED);
    // Vertical anchor is unaffected by movement.
    assert_eq!(obstacle.hitbox().bottom(), GROUND_Y);
}

#[test]
fn test_expires_exactly_when_left_edge_passes_threshold() {
    // Left edge at x=900: (900 - (-100)) / 6 = 166.67, so expiry lands on
    // tick 167 and not a tick earlier.
    let center_x = 900 + SNAIL_FRAME_SIZE.x as i32 / 2;
    let mut obstacle = Obstacle::spawn_at(ObstacleKind::Snail, center_x);
    assert_eq!(obstacle.hitbox().x(), 900);

    for tick in 1..=166 {
        obstacle.tick();
        assert!(!obstacle.expired(), "expired early on tick {tick}");
    }
    obstacle.tick();
    assert!(obstacle.expired());
}

#[test]
fn test_spawn_position_within_range() {
    let mut rng = SmallRng::seed_from_u64(99);

    for _ in 0..100 {
        let obstacle = Obstacle::spawn(ObstacleKind::Fly, &mut rng);
        let center_x = obstacle.hitbox().x() + obstacle.hitbox().width() as i32 / 2;
        assert!(OBSTACLE_SPAWN_X.contains(&center_x), "center_x = {center_x}");
    }
}

#[test]
fn test_fly_animates_faster_than_snail() {
    let mut fly = Obstacle::spawn_at(ObstacleKind::Fly, 1000);
    let mut snail = Obstacle::spawn_at(ObstacleKind::Snail, 1000);

    // 0.3/tick reaches the second frame on tick 4; 0.1/tick still shows the
    // first.
    for _ in 0..4 {
        fly.tick();
        snail.tick();
    }
    assert_eq!(fly.current_frame(), SpriteId::Fly2);
    assert_eq!(snail.current_frame(), SpriteId::Snail1);

    // The snail catches up at tick 10.
    for _ in 0..6 {
        snail.tick();
    }
    assert_eq!(snail.current_frame(), SpriteId::Snail2);
}

#[test]
fn test_kind_accessor() {
    let fly = Obstacle::spawn_at(ObstacleKind::Fly, 950);
    assert_eq!(fly.kind(), ObstacleKind::Fly);
}
