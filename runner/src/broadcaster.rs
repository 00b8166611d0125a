use common::games::{GameBroadcaster, SegmentView};
use common::games::snake::{Cell, GameOutcome, SegmentId, WorldPosition};
use common::{log, trace};

use crate::frame::Frame;

/// Renderer stand-in for headless runs: logs scene events and, when asked,
/// prints a text frame after every move.
pub struct LogBroadcaster {
    frame: Option<Frame>,
    food: Option<Cell>,
}

impl LogBroadcaster {
    pub fn new(width: usize, height: usize, render: bool) -> Self {
        Self {
            frame: render.then(|| Frame::new(width, height)),
            food: None,
        }
    }
}

impl GameBroadcaster for LogBroadcaster {
    fn segment_created(&mut self, id: SegmentId, cell: Cell, position: WorldPosition) {
        trace!("Segment {} created at {} ({:.1}, {:.1})", id, cell, position.x, position.y);
    }

    fn segments_updated(&mut self, segments: &[SegmentView]) {
        if let Some(head) = segments.first() {
            trace!("Head at {} facing {:?}, length {}", head.cell, head.orientation, segments.len());
        }
        if let Some(frame) = self.frame.as_mut() {
            frame.set_segments(segments);
            frame.set_food(self.food);
            println!("{}", frame.render());
        }
    }

    fn food_moved(&mut self, cell: Cell, position: WorldPosition) {
        self.food = Some(cell);
        log!("Food placed at {} ({:.1}, {:.1})", cell, position.x, position.y);
    }

    fn game_over(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won => log!("You win!"),
            GameOutcome::Lost(reason) => log!("Game over: {:?}", reason),
            GameOutcome::Ongoing => {}
        }
    }

    fn scene_cleared(&mut self) {
        self.food = None;
        if let Some(frame) = self.frame.as_mut() {
            frame.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{SnakeSession, SnakeSessionSettings};

    #[test]
    fn test_frame_shows_food_placed_on_same_tick() {
        let mut session = SnakeSession::create(SnakeSessionSettings {
            field_width: 1,
            field_height: 4,
            start_x: 0,
            start_y: 1,
            initial_length: 2,
            move_rate_ms: 100,
            seed: Some(3),
        })
        .unwrap();
        let mut broadcaster = LogBroadcaster::new(1, 4, true);
        session.publish_scene(&mut broadcaster);

        // Two free cells above the body, so the food is eaten within two
        // ticks and respawned on the cell left over.
        while session.score() == 0 {
            session.tick(&mut broadcaster);
        }
        let food = session.state().food().unwrap();

        let rendered = broadcaster.frame.as_ref().unwrap().render();
        let row = rendered.lines().nth(3 - food.y).unwrap();
        assert_eq!(row.chars().nth(food.x), Some('*'));
    }
}
