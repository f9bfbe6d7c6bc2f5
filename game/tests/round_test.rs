use std::collections::HashSet;

use cgmath::Vector2;
use game::constants::{BALL_RADIUS, WORLD_HEIGHT, WORLD_WIDTH};
use game::world_data::BlockId;
use game::{FrameInput, Game, GameEvent, GamePhase, Steer};

fn start_round(seed: u64) -> Game {
    let mut game = Game::new(Some(seed), 3);
    game.update(&FrameInput {
        confirm: true,
        ..Default::default()
    });
    game.update(&FrameInput {
        launch: true,
        ..Default::default()
    });
    assert_eq!(game.phase(), GamePhase::Playing);
    game
}

#[test]
fn test_clearing_last_block_wins_and_freezes_ball() {
    let mut game = start_round(11);

    let world = game.world_mut();
    let total = world.blocks.len() as u32;
    for block in world.blocks.iter_mut().skip(1) {
        block.alive = false;
        block.hits_life = 0;
    }
    world.score = total - 1;

    let last = world.blocks[0].clone();
    world.blocks[0].hits_life = 1;
    world.blocks[0].drops_powerup = false;
    world.ball.position = Vector2::new(
        last.center().x,
        last.position.y + last.size.y + BALL_RADIUS + 1.0,
    );
    world.ball.velocity = Vector2::new(0.0, -3.0);

    let events = game.update(&FrameInput::default());

    assert_eq!(game.phase(), GamePhase::Won);
    assert_eq!(game.world().score, total);
    assert!(events.contains(&GameEvent::PhaseChanged {
        from: GamePhase::Playing,
        to: GamePhase::Won
    }));

    let frozen = game.world().ball.position;
    for _ in 0..30 {
        game.update(&FrameInput {
            steer: Steer::Right,
            ..Default::default()
        });
    }
    assert_eq!(game.world().ball.position, frozen);
    assert_eq!(game.phase(), GamePhase::Won);
}

#[test]
fn test_last_life_lost_ends_game() {
    let mut game = start_round(12);

    let world = game.world_mut();
    world.lives = 1;
    world.ball.position = Vector2::new(10.0, WORLD_HEIGHT + BALL_RADIUS - 1.0);
    world.ball.velocity = Vector2::new(0.0, 4.0);

    let events = game.update(&FrameInput::default());

    assert_eq!(game.world().lives, 0);
    assert_eq!(game.phase(), GamePhase::Lost);
    assert!(events.contains(&GameEvent::LifeLost { lives_left: 0 }));

    game.update(&FrameInput {
        confirm: true,
        ..Default::default()
    });
    assert_eq!(game.phase(), GamePhase::Serve);
    assert_eq!(game.world().lives, 3);
    assert_eq!(game.world().score, 0);
}

#[test]
fn test_losing_a_life_goes_back_to_serve() {
    let mut game = start_round(13);

    let world = game.world_mut();
    world.ball.position = Vector2::new(10.0, WORLD_HEIGHT + BALL_RADIUS - 1.0);
    world.ball.velocity = Vector2::new(0.0, 4.0);

    game.update(&FrameInput::default());

    let world = game.world();
    assert_eq!(game.phase(), GamePhase::Serve);
    assert_eq!(world.lives, 2);
    assert_eq!(world.ball.velocity, Vector2::new(0.0, 0.0));
    assert_eq!(world.ball.position.x, world.paddle.center_x());
}

#[test]
fn test_invariants_hold_over_a_long_round() {
    for seed in 0..4 {
        let mut game = start_round(seed);
        let mut destroyed: HashSet<BlockId> = HashSet::new();
        let mut last_score = 0;

        for tick in 0..20_000 {
            let ball_x = game.world().ball.position.x;
            let input = FrameInput {
                // Chase the ball, with a wobble so it does not land dead center every time.
                pointer_x: Some(ball_x + ((tick / 97) % 5) as f32 * 8.0 - 16.0),
                launch: game.phase() == GamePhase::Serve,
                ..Default::default()
            };
            game.update(&input);

            if matches!(game.phase(), GamePhase::Won | GamePhase::Lost) {
                break;
            }

            let world = game.world();

            assert!(world.paddle.x >= 0.0);
            assert!(world.paddle.x <= WORLD_WIDTH - world.paddle.width);

            assert!(world.score >= last_score);
            last_score = world.score;

            let now_destroyed: HashSet<BlockId> = world
                .blocks
                .iter()
                .filter(|b| !b.alive)
                .map(|b| b.id)
                .collect();
            assert!(destroyed.is_subset(&now_destroyed));
            assert_eq!(world.score as usize, now_destroyed.len());
            destroyed = now_destroyed;
        }
    }
}
