use std::time::{Duration, Instant};

use grid_snake::config::GameConfig;
use grid_snake::game::{EndReason, Engine, Phase, TickResult};
use grid_snake::grid::Cell;
use grid_snake::input::{Direction, InputBuffer};
use grid_snake::loop_driver::{LoopDriver, LoopEvent};
use grid_snake::snake::Snake;

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let config = GameConfig {
        grid_tiles: 6,
        ..GameConfig::default()
    };
    let mut engine = Engine::with_seed(config, 42).expect("6x6 grid is valid");
    engine.reset();

    let state = engine.state_mut();
    state.snake = Snake::from_segments(vec![Cell::new(1, 1), Cell::new(0, 1)]);
    state.food = Cell::new(2, 1);

    assert!(matches!(engine.tick(), TickResult::Continued(_)));
    assert_eq!(engine.state().score, 10);
    assert_eq!(engine.state().snake.len(), 3);
    assert_eq!(engine.state().snake.head(), Cell::new(2, 1));
    assert!(!engine.state().snake.occupies(engine.state().food));

    engine.state_mut().food = Cell::new(5, 5);
    assert!(engine.set_direction_intent(Direction::Up));
    engine.tick();
    assert_eq!(engine.state().phase, Phase::Running);
    assert_eq!(engine.state().snake.head(), Cell::new(2, 0));

    assert_eq!(
        engine.tick(),
        TickResult::GameOver {
            final_score: 10,
            reason: EndReason::WallCollision
        }
    );
}

#[test]
fn same_seed_replays_identically() {
    let inputs = [
        Some(Direction::Down),
        None,
        Some(Direction::Left),
        None,
        None,
        Some(Direction::Up),
        Some(Direction::Right),
    ];

    let play = || {
        let mut engine = Engine::with_seed(GameConfig::default(), 1234).expect("valid config");
        engine.reset();
        for input in inputs {
            if let Some(direction) = input {
                engine.set_direction_intent(direction);
            }
            engine.tick();
        }
        engine.state().clone()
    };

    assert_eq!(play(), play());
}

#[test]
fn independent_engines_do_not_share_state() {
    let mut first = Engine::with_seed(GameConfig::default(), 1).expect("valid config");
    let mut second = Engine::with_seed(GameConfig::default(), 1).expect("valid config");
    first.reset();
    second.reset();

    first.set_direction_intent(Direction::Up);
    first.tick();

    assert_eq!(first.state().snake.head(), Cell::new(10, 9));
    assert_eq!(second.state().snake.head(), Cell::new(10, 10));
    assert_eq!(second.state().tick_count, 0);
}

#[test]
fn driver_runs_a_game_to_completion() {
    let config = GameConfig {
        grid_tiles: 8,
        tick_interval: Duration::from_millis(50),
        ..GameConfig::default()
    };
    let mut driver = LoopDriver::new(Engine::with_seed(config, 7).expect("8x8 grid is valid"));
    let t0 = Instant::now();
    driver.start(t0);

    let state = driver.engine_mut().state_mut();
    state.food = Cell::new(0, 0);
    state.input = InputBuffer::with_pending(Some(Direction::Right));

    let mut frames = Vec::new();
    let mut finished = None;
    for step in 1..=10 {
        let now = t0 + config.tick_interval * step;
        if let Some(LoopEvent::Finished {
            final_score,
            reason,
        }) = driver.poll(now, |state| frames.push(state.snake.head()))
        {
            finished = Some((final_score, reason));
        }
    }

    // Head starts at (4, 4) and needs four moves to leave an 8-wide board.
    assert_eq!(finished, Some((0, EndReason::WallCollision)));
    assert_eq!(
        frames,
        vec![
            Cell::new(5, 4),
            Cell::new(6, 4),
            Cell::new(7, 4),
            Cell::new(7, 4)
        ]
    );
    assert!(!driver.is_running());
}
