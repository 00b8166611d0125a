use crate::config::{ConfigError, Validate};
use crate::games::SessionRng;
use crate::{log, trace};
use super::available_cells::AvailableCells;
use super::grid::Grid;
use super::input::DirectionInput;
use super::orientation::orient;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{Cell, Direction, GameOutcome, LossReason, SegmentId};

/// What a single tick changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub outcome: GameOutcome,
    pub moved: bool,
    pub grown: Option<SegmentId>,
    pub food_moved: Option<Cell>,
}

impl TickReport {
    fn unchanged(outcome: GameOutcome) -> Self {
        Self {
            outcome,
            moved: false,
            grown: None,
            food_moved: None,
        }
    }
}

/// Grid, body, free cells and food of one game. Every mutation goes through
/// `update`, which keeps "cell is free" and "cell is under the body" exact
/// complements of each other.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    grid: Grid,
    snake: Snake,
    available: AvailableCells,
    food: Option<Cell>,
    direction: Direction,
    outcome: GameOutcome,
    score: u32,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSessionSettings, rng: &mut SessionRng) -> Result<Self, ConfigError> {
        settings.validate()?;

        let grid = Grid::new(settings.field_width, settings.field_height)?;
        let mut available = AvailableCells::with_cells(grid.cells());
        let mut snake = Snake::new();

        for offset in 0..settings.initial_length {
            let cell = grid
                .cell_at(settings.start_x, settings.start_y - offset as i32)
                .ok_or(ConfigError::BodyOutOfBounds {
                    length: settings.initial_length,
                    start_y: settings.start_y,
                })?;
            snake.push_tail(cell);
            available.remove(cell);
        }

        let food = available
            .random_element(rng)
            .map_err(|_| ConfigError::NoRoomForFood)?;

        let mut state = Self {
            grid,
            snake,
            available,
            food: Some(food),
            direction: Direction::Up,
            outcome: GameOutcome::Ongoing,
            score: 0,
        };
        state.refresh_orientations();
        Ok(state)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn available(&self) -> &AvailableCells {
        &self.available
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Advances the game by one step.
    ///
    /// Once the outcome is terminal this is a no-op that reports the same
    /// outcome again and leaves every field untouched.
    pub fn update(&mut self, input: DirectionInput, rng: &mut SessionRng) -> TickReport {
        if self.outcome.is_terminal() {
            log!("Tick ignored, game is already over: {:?}", self.outcome);
            return TickReport::unchanged(self.outcome);
        }

        self.direction = input.resolve(self.direction);

        let target = match self.calculate_next_head_position() {
            Ok(cell) => cell,
            Err(reason) => {
                self.outcome = GameOutcome::Lost(reason);
                log!(
                    "Game lost at {} moving {:?}: {:?}. Score: {}",
                    self.snake.head().cell,
                    self.direction,
                    reason,
                    self.score
                );
                return TickReport::unchanged(self.outcome);
            }
        };

        let is_score = self.food == Some(target);
        let grown = self.shift_body(target, is_score);

        let mut food_moved = None;
        if is_score {
            self.score += 1;
            trace!("Food eaten at {}. Score: {}", target, self.score);

            if self.available.is_empty() {
                self.food = None;
                self.outcome = GameOutcome::Won;
                log!("Board filled, game won. Score: {}", self.score);
            } else {
                let cell = self
                    .available
                    .random_element(rng)
                    .expect("Available cells were just checked to be non-empty");
                self.food = Some(cell);
                food_moved = Some(cell);
                trace!("Food spawned at {}", cell);
            }
        }

        self.refresh_orientations();

        TickReport {
            outcome: self.outcome,
            moved: true,
            grown,
            food_moved,
        }
    }

    fn calculate_next_head_position(&self) -> Result<Cell, LossReason> {
        let head = self.snake.head().cell;
        let target = self
            .grid
            .neighbor(head, self.direction)
            .ok_or(LossReason::WallCollision)?;

        if !self.available.contains(target) {
            return Err(LossReason::SelfCollision);
        }
        Ok(target)
    }

    /// Moves every segment one step along the chain in a single pass.
    /// `previous_cell` carries the cell the segment in front occupied before
    /// this tick. On growth the tail stays put and a new segment fills the
    /// cell that would have been handed to it.
    fn shift_body(&mut self, target: Cell, is_score: bool) -> Option<SegmentId> {
        debug_assert!(!self.snake.is_empty(), "Snake body should never be empty");
        let len = self.snake.len();
        let tail_index = len - 1;

        let segments = self.snake.segments_mut();
        let mut previous_cell = segments[0].cell;
        segments[0].cell = target;
        self.available.remove(target);
        self.available.add(previous_cell);

        for i in 1..len {
            if is_score && i == tail_index {
                break;
            }
            let old_cell = segments[i].cell;
            segments[i].cell = previous_cell;
            self.available.add(old_cell);
            self.available.remove(previous_cell);
            previous_cell = old_cell;
        }

        if !is_score {
            return None;
        }

        self.available.remove(previous_cell);
        let id = self.snake.grow(previous_cell);
        trace!("Segment {} added at {}, length {}", id, previous_cell, self.snake.len());
        Some(id)
    }

    fn refresh_orientations(&mut self) {
        for index in 0..self.snake.len() {
            let (toward_tail, toward_head) = self.snake.neighbors(index);
            let segment = &mut self.snake.segments_mut()[index];
            segment.orientation = orient(toward_tail, segment.cell, toward_head);
        }
    }

    /// Builds a state with an explicit body layout, head first.
    #[cfg(test)]
    pub(crate) fn from_parts(
        width: i32,
        height: i32,
        body: &[(usize, usize)],
        direction: Direction,
        food: Option<(usize, usize)>,
    ) -> Self {
        let grid = Grid::new(width, height).unwrap();
        let mut available = AvailableCells::with_cells(grid.cells());
        let mut snake = Snake::new();
        for &(x, y) in body {
            let cell = Cell::new(x, y);
            snake.push_tail(cell);
            assert!(available.remove(cell), "Body cell {} listed twice", cell);
        }

        let food = food.map(|(x, y)| Cell::new(x, y));
        if let Some(cell) = food {
            assert!(available.contains(cell));
        }

        let mut state = Self {
            grid,
            snake,
            available,
            food,
            direction,
            outcome: GameOutcome::Ongoing,
            score: 0,
        };
        state.refresh_orientations();
        state
    }
}
