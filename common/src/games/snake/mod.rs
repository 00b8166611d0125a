mod available_cells;
mod bot_controller;
mod game_state;
mod grid;
mod input;
mod orientation;
mod session;
mod settings;
mod snake;
mod types;

pub use available_cells::{AvailableCells, EmptySetError};
pub use bot_controller::{BotController, BotType};
pub use game_state::{SnakeGameState, TickReport};
pub use grid::Grid;
pub use input::{DirectionInput, InputLatch};
pub use orientation::{orient, Orientation};
pub use session::{MoveTimer, SnakeSession};
pub use settings::SnakeSessionSettings;
pub use snake::{Segment, Snake};
pub use types::{Cell, Direction, GameOutcome, LossReason, SegmentId, WorldPosition};
