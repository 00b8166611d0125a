use crate::games::snake::{Cell, GameOutcome, Orientation, SegmentId, WorldPosition};

/// Where a segment ended up after a tick, as the renderer needs it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentView {
    pub id: SegmentId,
    pub cell: Cell,
    pub position: WorldPosition,
    /// `None` only for a lone segment; the renderer picks its own default.
    pub orientation: Option<Orientation>,
}

/// Receives scene changes produced by a session. All calls are made
/// synchronously from inside the tick that caused them.
pub trait GameBroadcaster {
    fn segment_created(&mut self, id: SegmentId, cell: Cell, position: WorldPosition);

    fn segments_updated(&mut self, segments: &[SegmentView]);

    fn food_moved(&mut self, cell: Cell, position: WorldPosition);

    fn game_over(&mut self, outcome: GameOutcome);

    /// Called before a reset rebuilds the scene from scratch.
    fn scene_cleared(&mut self) {}
}

/// Drops every event. Handy for headless runs and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullBroadcaster;

impl GameBroadcaster for NullBroadcaster {
    fn segment_created(&mut self, _id: SegmentId, _cell: Cell, _position: WorldPosition) {}

    fn segments_updated(&mut self, _segments: &[SegmentView]) {}

    fn food_moved(&mut self, _cell: Cell, _position: WorldPosition) {}

    fn game_over(&mut self, _outcome: GameOutcome) {}
}
