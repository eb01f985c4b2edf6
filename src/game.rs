use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::food::spawn_position;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, InputBuffer};
use crate::snake::Snake;

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, leaving nowhere to place food.
    BoardFilled,
}

/// High-level lifecycle of one game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Running,
    GameOver(EndReason),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    /// Committed direction; `None` until movement begins.
    pub direction: Option<Direction>,
    pub input: InputBuffer,
    pub score: u32,
    pub tick_count: u64,
    pub phase: Phase,
}

impl GameState {
    /// Returns true while ticks advance the simulation.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Returns the direction buffered for the next tick.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.input.pending()
    }

    /// Returns the end reason once the game is over.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        match self.phase {
            Phase::GameOver(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Outcome of a single [`Engine::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickResult<'a> {
    Continued(&'a GameState),
    GameOver { final_score: u32, reason: EndReason },
}

/// Owns one game's state and advances it one tick at a time.
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    rng: StdRng,
}

impl Engine {
    /// Creates an idle engine seeded from OS entropy.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible simulations.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let grid = Grid::new(config.grid_tiles);
        let state = fresh_state(grid, &mut rng, Phase::Idle);

        Ok(Self {
            config,
            grid,
            state,
            rng,
        })
    }

    /// Replaces the state with a new running game.
    pub fn reset(&mut self) -> &GameState {
        self.state = fresh_state(self.grid, &mut self.rng, Phase::Running);
        tracing::debug!(food = ?self.state.food, "game reset");
        &self.state
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Outside [`Phase::Running`] this is a no-op that reports the current state.
    pub fn tick(&mut self) -> TickResult<'_> {
        match self.state.phase {
            Phase::Idle => return TickResult::Continued(&self.state),
            Phase::GameOver(reason) => {
                return TickResult::GameOver {
                    final_score: self.state.score,
                    reason,
                };
            }
            Phase::Running => {}
        }

        let Some(direction) = self.state.input.resolve(self.state.direction) else {
            return TickResult::Continued(&self.state);
        };
        self.state.direction = Some(direction);

        let candidate = self.state.snake.head().step(direction);
        if !self.grid.in_bounds(candidate) {
            return self.finish(EndReason::WallCollision);
        }

        // Checked against the pre-move body, so the cell the tail is about
        // to vacate still counts as occupied.
        if self.state.snake.occupies(candidate) {
            return self.finish(EndReason::SelfCollision);
        }

        self.state.tick_count += 1;
        let ate_food = candidate == self.state.food;
        self.state.snake.advance(candidate, ate_food);

        if ate_food {
            self.state.score = self.state.score.saturating_add(self.config.food_reward);
            tracing::debug!(
                score = self.state.score,
                len = self.state.snake.len(),
                "food eaten"
            );

            match spawn_position(&mut self.rng, self.grid, &self.state.snake) {
                Some(food) => self.state.food = food,
                None => return self.finish(EndReason::BoardFilled),
            }
        }

        TickResult::Continued(&self.state)
    }

    /// Buffers a direction intent; ignored unless the game is running.
    pub fn set_direction_intent(&mut self, requested: Direction) -> bool {
        if !self.state.is_running() {
            return false;
        }

        self.state.input.set_intent(self.state.direction, requested)
    }

    /// Buffers a raw `(dx, dy)` intent; non-cardinal vectors are ignored.
    pub fn set_direction_vector(&mut self, vector: (i32, i32)) -> bool {
        if !self.state.is_running() {
            return false;
        }

        self.state.input.set_intent_vector(self.state.direction, vector)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for arranging specific board positions.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    fn finish(&mut self, reason: EndReason) -> TickResult<'_> {
        self.state.phase = Phase::GameOver(reason);
        tracing::info!(score = self.state.score, ?reason, "game over");

        TickResult::GameOver {
            final_score: self.state.score,
            reason,
        }
    }
}

fn fresh_state(grid: Grid, rng: &mut StdRng, phase: Phase) -> GameState {
    let snake = Snake::starting(grid);
    // A validated grid always has free cells; the origin is never part of
    // the starting body.
    let food = spawn_position(rng, grid, &snake).unwrap_or(Cell::new(0, 0));

    GameState {
        snake,
        food,
        direction: Some(Direction::Right),
        input: InputBuffer::with_pending(Some(Direction::Right)),
        score: 0,
        tick_count: 0,
        phase,
    }
}
