use std::time::Duration;

use rand::Rng;

use super::{
    config::{GameConfig, MIN_GRID_EXTENT, START_COLUMN},
    direction::{Direction, DirectionQueue},
    state::{Cell, GameOverReason, GameState, Phase, Snake},
};

/// Random samples per food placement before the board is declared full
const SPAWN_ATTEMPTS_PER_CELL: usize = 64;

/// What one tick did, for the caller to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Set when this tick ended the run
    pub ended: Option<GameOverReason>,
    /// The tick interval shrank; the timer must be rescheduled
    pub interval_changed: bool,
    /// A new high score was reached and should be persisted
    pub high_score_changed: bool,
}

/// The game engine: owns the session state and advances it one tick at a time.
///
/// External layers hold the engine, never the fields; all mutation goes
/// through `propose`, the phase transitions, and `tick`. The engine performs
/// no I/O: persistence and timer scheduling are driven by the caller off the
/// `TickOutcome` flags.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    queue: DirectionQueue,
    tick_ms: u64,
    high_score: u32,
    /// Grid extent for the *next* reset; resizes never touch a live run
    next_extent: usize,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create an engine with a freshly laid out board in the `NotStarted`
    /// phase. `high_score` is whatever the persistent store last recorded.
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        let next_extent = config.grid_extent;
        let mut engine = Self {
            config,
            state: GameState::new(
                Snake::new(Cell::new(0, 0), Direction::Right, 1),
                Cell::new(0, 0),
                next_extent,
            ),
            queue: DirectionQueue::new(Direction::Right),
            tick_ms: 0,
            high_score,
            next_extent,
            rng: rand::thread_rng(),
        };
        engine.reset_board();
        engine.state.phase = Phase::NotStarted;
        engine
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The direction used for the most recent head movement
    pub fn direction(&self) -> Direction {
        self.queue.applied()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Record a new surface size. Takes effect at the next reset only, so a
    /// mid-game resize never changes a live snake's coordinate space.
    pub fn set_surface_extent(&mut self, extent: usize) {
        self.next_extent = extent.clamp(MIN_GRID_EXTENT, self.config.grid_extent);
    }

    /// Queue a direction change for the next tick. Reversals of the applied
    /// direction are silently dropped.
    pub fn propose(&mut self, direction: Direction) {
        self.queue.propose(direction);
    }

    /// Begin the first run. Returns whether a run actually began; any phase
    /// other than `NotStarted` makes this a no-op.
    pub fn start(&mut self) -> bool {
        if self.state.phase == Phase::NotStarted {
            self.reset_board();
            true
        } else {
            false
        }
    }

    /// Toggle between `Running` and `Paused`. No-op in any other phase.
    ///
    /// Pausing freezes the simulation without touching the model; resuming
    /// picks up from the exact same state.
    pub fn toggle_pause(&mut self) {
        self.state.phase = match self.state.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    /// Tear down the current run and start a fresh one: 3-cell snake facing
    /// right, score zero, initial tick interval, new food. The caller must
    /// reschedule its tick timer afterwards.
    pub fn restart(&mut self) {
        self.reset_board();
    }

    fn reset_board(&mut self) {
        let extent = self.next_extent;
        let head = Cell::new(
            START_COLUMN.min(extent as i32 - 1),
            extent as i32 / 2,
        );
        let snake = Snake::new(head, Direction::Right, self.config.initial_snake_length);

        self.queue = DirectionQueue::new(Direction::Right);
        self.tick_ms = self.config.initial_tick_ms;

        let food = spawn_food(&mut self.rng, &snake, extent)
            .expect("fresh board always has free cells");
        self.state = GameState::new(snake, food, extent);
        self.state.phase = Phase::Running;
    }

    /// Advance the game by one tick. Only the `Running` phase simulates;
    /// every other phase returns an idle outcome and leaves the model alone.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.state.phase != Phase::Running {
            return outcome;
        }

        let direction = self.queue.commit();
        let new_head = self.state.snake.head().moved_in_direction(direction);

        if !self.state.in_bounds(new_head) {
            self.state.phase = Phase::Over;
            outcome.ended = Some(GameOverReason::Wall);
            return outcome;
        }

        // Self-collision is checked against the full pre-move body: the tail
        // only vacates after this check, so moving onto the current tail cell
        // is fatal.
        if self.state.snake.contains(new_head) {
            self.state.phase = Phase::Over;
            outcome.ended = Some(GameOverReason::SelfCollision);
            return outcome;
        }

        let ate_food = new_head == self.state.food;
        self.state.snake.advance(new_head, ate_food);

        if ate_food {
            outcome.ate_food = true;
            self.state.score += 1;

            if self.state.score > self.high_score {
                self.high_score = self.state.score;
                outcome.high_score_changed = true;
            }

            // The new food must avoid the post-growth body.
            match spawn_food(&mut self.rng, &self.state.snake, self.state.grid_extent) {
                Some(food) => self.state.food = food,
                None => {
                    self.state.phase = Phase::Over;
                    outcome.ended = Some(GameOverReason::BoardFull);
                    return outcome;
                }
            }

            if self.tick_ms > self.config.min_tick_ms {
                self.tick_ms =
                    (self.tick_ms - self.config.tick_step_ms).max(self.config.min_tick_ms);
                outcome.interval_changed = true;
            }
        }

        outcome
    }
}

/// Pick a uniformly random cell not occupied by the snake. Returns `None`
/// once the retry budget is exhausted, which only happens when the snake
/// has (all but) filled the board.
fn spawn_food(rng: &mut rand::rngs::ThreadRng, snake: &Snake, extent: usize) -> Option<Cell> {
    let attempts = extent * extent * SPAWN_ATTEMPTS_PER_CELL;

    for _ in 0..attempts {
        let cell = Cell::new(
            rng.gen_range(0..extent) as i32,
            rng.gen_range(0..extent) as i32,
        );

        if !snake.contains(cell) {
            return Some(cell);
        }
    }

    None
}
