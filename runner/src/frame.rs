use common::games::SegmentView;
use common::games::snake::{Cell, Orientation};

const EMPTY: char = '.';
const FOOD: char = '*';
const LONE_SEGMENT: char = '@';

pub fn glyph(orientation: Option<Orientation>) -> char {
    let Some(orientation) = orientation else {
        return LONE_SEGMENT;
    };
    match orientation {
        Orientation::HeadUp => '^',
        Orientation::HeadRight => '>',
        Orientation::HeadDown => 'v',
        Orientation::HeadLeft => '<',
        Orientation::TailUp => '╵',
        Orientation::TailRight => '╶',
        Orientation::TailDown => '╷',
        Orientation::TailLeft => '╴',
        Orientation::CornerUpRight => '└',
        Orientation::CornerDownRight => '┌',
        Orientation::CornerDownLeft => '┐',
        Orientation::CornerUpLeft => '┘',
        Orientation::Vertical => '│',
        Orientation::Horizontal => '─',
    }
}

/// Text picture of the field, top row first.
pub struct Frame {
    width: usize,
    height: usize,
    segments: Vec<SegmentView>,
    food: Option<Cell>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            segments: Vec::new(),
            food: None,
        }
    }

    pub fn set_segments(&mut self, segments: &[SegmentView]) {
        self.segments = segments.to_vec();
    }

    pub fn set_food(&mut self, food: Option<Cell>) {
        self.food = food;
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.food = None;
    }

    pub fn render(&self) -> String {
        let mut rows = vec![vec![EMPTY; self.width]; self.height];

        if let Some(food) = self.food
            && food.x < self.width
            && food.y < self.height
        {
            rows[food.y][food.x] = FOOD;
        }
        for segment in &self.segments {
            if segment.cell.x < self.width && segment.cell.y < self.height {
                rows[segment.cell.y][segment.cell.x] = glyph(segment.orientation);
            }
        }

        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in rows.iter().rev() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{SegmentId, WorldPosition};

    fn view(id: u32, x: usize, y: usize, orientation: Option<Orientation>) -> SegmentView {
        SegmentView {
            id: SegmentId(id),
            cell: Cell::new(x, y),
            position: WorldPosition { x: 0.0, y: 0.0 },
            orientation,
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let mut glyphs: Vec<char> = Orientation::ALL.iter().map(|o| glyph(Some(*o))).collect();
        glyphs.push(glyph(None));
        glyphs.sort();
        glyphs.dedup();
        assert_eq!(glyphs.len(), Orientation::ALL.len() + 1);
    }

    #[test]
    fn test_render_puts_top_row_first() {
        let mut frame = Frame::new(3, 3);
        frame.set_segments(&[
            view(0, 1, 2, Some(Orientation::HeadUp)),
            view(1, 1, 1, Some(Orientation::CornerUpRight)),
            view(2, 2, 1, Some(Orientation::TailLeft)),
        ]);
        frame.set_food(Some(Cell::new(0, 0)));

        assert_eq!(frame.render(), ".^.\n.└╴\n*..\n");
    }

    #[test]
    fn test_clear_empties_field() {
        let mut frame = Frame::new(2, 1);
        frame.set_segments(&[view(0, 0, 0, None)]);
        assert_eq!(frame.render(), "@.\n");
        frame.clear();
        assert_eq!(frame.render(), "..\n");
    }
}
