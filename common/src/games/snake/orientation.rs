use super::types::{Cell, Direction};

/// Visual category of one body segment. The discriminant is the glyph index
/// in the snake sprite sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    HeadUp = 0,
    HeadRight = 1,
    HeadDown = 2,
    HeadLeft = 3,
    TailUp = 4,
    TailRight = 5,
    TailDown = 6,
    TailLeft = 7,
    CornerUpRight = 8,
    CornerDownRight = 9,
    CornerDownLeft = 10,
    CornerUpLeft = 11,
    Vertical = 12,
    Horizontal = 13,
}

impl Orientation {
    pub const ALL: [Orientation; 14] = [
        Orientation::HeadUp,
        Orientation::HeadRight,
        Orientation::HeadDown,
        Orientation::HeadLeft,
        Orientation::TailUp,
        Orientation::TailRight,
        Orientation::TailDown,
        Orientation::TailLeft,
        Orientation::CornerUpRight,
        Orientation::CornerDownRight,
        Orientation::CornerDownLeft,
        Orientation::CornerUpLeft,
        Orientation::Vertical,
        Orientation::Horizontal,
    ];

    pub fn glyph_index(&self) -> u8 {
        *self as u8
    }

    pub fn is_head(&self) -> bool {
        matches!(
            self,
            Orientation::HeadUp | Orientation::HeadRight | Orientation::HeadDown | Orientation::HeadLeft
        )
    }

    pub fn is_tail(&self) -> bool {
        matches!(
            self,
            Orientation::TailUp | Orientation::TailRight | Orientation::TailDown | Orientation::TailLeft
        )
    }
}

/// Classifies the segment at `current`.
///
/// `toward_tail` is the neighbouring segment behind it, `toward_head` the one
/// in front. A head only has `toward_tail`, a tail only has `toward_head`, and
/// a lone segment has neither and yields `None`.
///
/// # Panics
///
/// If a neighbour is not edge-adjacent to `current`, or both neighbours sit on
/// the same side. Either means the body chain is corrupt.
pub fn orient(toward_tail: Option<Cell>, current: Cell, toward_head: Option<Cell>) -> Option<Orientation> {
    let behind = toward_tail.map(|cell| adjacent_direction(current, cell));
    let ahead = toward_head.map(|cell| adjacent_direction(current, cell));

    let orientation = match (behind, ahead) {
        (Some(behind), Some(ahead)) => joint(current, behind, ahead),
        (Some(behind), None) => match behind.opposite() {
            Direction::Up => Orientation::HeadUp,
            Direction::Down => Orientation::HeadDown,
            Direction::Left => Orientation::HeadLeft,
            Direction::Right => Orientation::HeadRight,
        },
        (None, Some(ahead)) => match ahead {
            Direction::Up => Orientation::TailUp,
            Direction::Down => Orientation::TailDown,
            Direction::Left => Orientation::TailLeft,
            Direction::Right => Orientation::TailRight,
        },
        (None, None) => return None,
    };
    Some(orientation)
}

fn adjacent_direction(current: Cell, neighbor: Cell) -> Direction {
    current.step_towards(&neighbor).unwrap_or_else(|| {
        panic!("Segment at {} has non-adjacent neighbour {}", current, neighbor)
    })
}

// Arms follow the sprite sheet's check order: straights, then the corners
// starting from up-left.
fn joint(current: Cell, behind: Direction, ahead: Direction) -> Orientation {
    use Direction::*;

    match (behind, ahead) {
        (Down, Up) | (Up, Down) => Orientation::Vertical,
        (Left, Right) | (Right, Left) => Orientation::Horizontal,
        (Left, Up) | (Up, Left) => Orientation::CornerUpLeft,
        (Right, Up) | (Up, Right) => Orientation::CornerUpRight,
        (Right, Down) | (Down, Right) => Orientation::CornerDownRight,
        (Left, Down) | (Down, Left) => Orientation::CornerDownLeft,
        (Up, Up) | (Down, Down) | (Left, Left) | (Right, Right) => {
            panic!("Segment at {} has both neighbours on its {:?} side", current, behind)
        }
    }
}
