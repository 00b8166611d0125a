mod broadcaster;
mod session_rng;

pub mod snake;

pub use broadcaster::{GameBroadcaster, NullBroadcaster, SegmentView};
pub use session_rng::SessionRng;
