use super::types::Direction;

/// Direction requests collected for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn only(direction: Direction) -> Self {
        let mut input = Self::default();
        input.set(direction);
        input
    }

    pub fn set(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    /// Picks the new heading. Requests are checked in the fixed order
    /// Up, Down, Left, Right; the first one that is not a reversal of
    /// `current` wins. With nothing accepted the heading stays `current`.
    pub fn resolve(&self, current: Direction) -> Direction {
        let requests = [
            (self.up, Direction::Up),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ];

        requests
            .into_iter()
            .find(|&(pressed, direction)| pressed && !direction.is_opposite(&current))
            .map(|(_, direction)| direction)
            .unwrap_or(current)
    }
}

/// Accumulates presses between ticks. `take` hands the tick a snapshot and
/// clears the latch in one step.
#[derive(Clone, Debug, Default)]
pub struct InputLatch {
    pending: DirectionInput,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, direction: Direction) {
        self.pending.set(direction);
    }

    pub fn merge(&mut self, input: DirectionInput) {
        self.pending.up |= input.up;
        self.pending.down |= input.down;
        self.pending.left |= input.left;
        self.pending.right |= input.right;
    }

    pub fn take(&mut self) -> DirectionInput {
        std::mem::take(&mut self.pending)
    }

    pub fn peek(&self) -> DirectionInput {
        self.pending
    }
}
