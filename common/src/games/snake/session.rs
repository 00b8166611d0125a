use std::time::Duration;

use crate::config::{ConfigError, Validate};
use crate::games::{GameBroadcaster, SegmentView, SessionRng};
use crate::log;
use super::game_state::{SnakeGameState, TickReport};
use super::input::{DirectionInput, InputLatch};
use super::settings::SnakeSessionSettings;
use super::types::{Direction, GameOutcome};

/// Fires once the accumulated time strictly exceeds the move rate, then
/// starts over from zero.
#[derive(Clone, Debug)]
pub struct MoveTimer {
    move_rate: Duration,
    elapsed: Duration,
}

impl MoveTimer {
    pub fn new(move_rate: Duration) -> Self {
        Self {
            move_rate,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed += delta;
        if self.elapsed <= self.move_rate {
            return false;
        }
        self.elapsed = Duration::ZERO;
        true
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// One self-contained game: engine state, its random source, the input latch
/// and the move-rate timer. Sessions share nothing, so any number can run
/// side by side.
pub struct SnakeSession {
    settings: SnakeSessionSettings,
    state: SnakeGameState,
    rng: SessionRng,
    latch: InputLatch,
    timer: MoveTimer,
    tick: u64,
}

impl SnakeSession {
    pub fn create(settings: SnakeSessionSettings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        let state = SnakeGameState::new(&settings, &mut rng)?;
        log!(
            "Session created: {}x{} grid, start ({}, {}), seed {}",
            settings.field_width,
            settings.field_height,
            settings.start_x,
            settings.start_y,
            rng.seed()
        );

        Ok(Self {
            timer: MoveTimer::new(settings.move_rate()),
            settings,
            state,
            rng,
            latch: InputLatch::new(),
            tick: 0,
        })
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn outcome(&self) -> GameOutcome {
        self.state.outcome()
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn press(&mut self, direction: Direction) {
        self.latch.press(direction);
    }

    pub fn submit(&mut self, input: DirectionInput) {
        self.latch.merge(input);
    }

    /// Sends the whole current scene: one creation event per segment, their
    /// placement, and the food.
    pub fn publish_scene<B: GameBroadcaster>(&self, broadcaster: &mut B) {
        let grid = self.state.grid();
        for segment in self.state.snake().segments() {
            broadcaster.segment_created(segment.id, segment.cell, grid.world_position(segment.cell));
        }
        if let Some(food) = self.state.food() {
            broadcaster.food_moved(food, grid.world_position(food));
        }
        broadcaster.segments_updated(&self.segment_views());
    }

    /// Feeds host frame time into the move-rate timer and runs a tick when it
    /// fires.
    pub fn advance<B: GameBroadcaster>(&mut self, elapsed: Duration, broadcaster: &mut B) -> GameOutcome {
        self.advance_with(elapsed, broadcaster, |_| DirectionInput::none())
    }

    /// Like `advance`, but asks `input` for one more set of presses right
    /// before a tick runs. `input` is not called on frames that do not tick.
    pub fn advance_with<B, F>(&mut self, elapsed: Duration, broadcaster: &mut B, input: F) -> GameOutcome
    where
        B: GameBroadcaster,
        F: FnOnce(&SnakeGameState) -> DirectionInput,
    {
        if self.outcome().is_terminal() {
            return self.outcome();
        }
        if !self.timer.advance(elapsed) {
            return self.outcome();
        }
        self.latch.merge(input(&self.state));
        self.tick(broadcaster)
    }

    /// Runs one step with the presses latched since the previous step. After
    /// the game is over this does nothing and emits nothing.
    pub fn tick<B: GameBroadcaster>(&mut self, broadcaster: &mut B) -> GameOutcome {
        if self.outcome().is_terminal() {
            log!("Tick requested after game over ({:?}), ignoring", self.outcome());
            return self.outcome();
        }

        let input = self.latch.take();
        let report = self.state.update(input, &mut self.rng);
        self.tick += 1;

        self.broadcast(report, broadcaster);
        report.outcome
    }

    /// Starts a fresh game with the same settings. The random source keeps
    /// going, so the next game gets different food.
    pub fn reset<B: GameBroadcaster>(&mut self, broadcaster: &mut B) -> Result<(), ConfigError> {
        self.state = SnakeGameState::new(&self.settings, &mut self.rng)?;
        self.latch = InputLatch::new();
        self.timer.reset();
        self.tick = 0;

        broadcaster.scene_cleared();
        self.publish_scene(broadcaster);
        log!("Session reset");
        Ok(())
    }

    pub fn segment_views(&self) -> Vec<SegmentView> {
        let grid = self.state.grid();
        self.state
            .snake()
            .segments()
            .iter()
            .map(|segment| SegmentView {
                id: segment.id,
                cell: segment.cell,
                position: grid.world_position(segment.cell),
                orientation: segment.orientation,
            })
            .collect()
    }

    fn broadcast<B: GameBroadcaster>(&self, report: TickReport, broadcaster: &mut B) {
        let grid = self.state.grid();

        if let Some(id) = report.grown
            && let Some(segment) = self.state.snake().segments().iter().find(|s| s.id == id)
        {
            broadcaster.segment_created(id, segment.cell, grid.world_position(segment.cell));
        }

        // Food first, so a renderer drawing on `segments_updated` sees where
        // it went.
        if let Some(food) = report.food_moved {
            broadcaster.food_moved(food, grid.world_position(food));
        }

        if report.moved {
            broadcaster.segments_updated(&self.segment_views());
        }

        if report.outcome.is_terminal() {
            broadcaster.game_over(report.outcome);
        }
    }
}
