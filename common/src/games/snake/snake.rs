use super::orientation::Orientation;
use super::types::{Cell, SegmentId};

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub id: SegmentId,
    pub cell: Cell,
    pub orientation: Option<Orientation>,
}

/// Ordered segment chain: index 0 is the head, the last index is the tail.
#[derive(Clone, Debug)]
pub struct Snake {
    segments: Vec<Segment>,
    next_id: u32,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn head(&self) -> &Segment {
        self.segments.first().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> &Segment {
        self.segments.last().expect("Snake body should never be empty")
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().map(|s| s.cell)
    }

    /// Adds a segment the way growth does: the first two segments are
    /// appended, later ones go right before the tail so the tail keeps its
    /// cell.
    pub fn grow(&mut self, cell: Cell) -> SegmentId {
        let id = SegmentId(self.next_id);
        self.next_id += 1;

        let segment = Segment {
            id,
            cell,
            orientation: None,
        };
        if self.segments.len() <= 1 {
            self.segments.push(segment);
        } else {
            let tail_index = self.segments.len() - 1;
            self.segments.insert(tail_index, segment);
        }
        id
    }

    /// Appends behind the current tail. Used to lay out the starting body.
    pub fn push_tail(&mut self, cell: Cell) -> SegmentId {
        let id = SegmentId(self.next_id);
        self.next_id += 1;
        self.segments.push(Segment {
            id,
            cell,
            orientation: None,
        });
        id
    }

    /// Neighbour towards the tail and neighbour towards the head.
    pub fn neighbors(&self, index: usize) -> (Option<Cell>, Option<Cell>) {
        let toward_tail = self.segments.get(index + 1).map(|s| s.cell);
        let toward_head = index
            .checked_sub(1)
            .and_then(|i| self.segments.get(i))
            .map(|s| s.cell);
        (toward_tail, toward_head)
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(snake: &Snake) -> Vec<(usize, usize)> {
        snake.cells().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn test_grow_appends_first_two_then_inserts_before_tail() {
        let mut snake = Snake::new();
        snake.grow(Cell::new(5, 5));
        snake.grow(Cell::new(5, 4));
        assert_eq!(cells(&snake), vec![(5, 5), (5, 4)]);

        snake.grow(Cell::new(6, 4));
        assert_eq!(cells(&snake), vec![(5, 5), (6, 4), (5, 4)]);
        assert_eq!(snake.tail().cell, Cell::new(5, 4));
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let mut snake = Snake::new();
        let a = snake.push_tail(Cell::new(0, 2));
        let b = snake.push_tail(Cell::new(0, 1));
        let c = snake.grow(Cell::new(1, 1));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(snake.head().id, a);
        assert_eq!(snake.tail().id, b);
        assert_eq!(snake.segments()[1].id, c);
    }

    #[test]
    fn test_neighbors() {
        let mut snake = Snake::new();
        snake.push_tail(Cell::new(2, 2));
        snake.push_tail(Cell::new(2, 1));
        snake.push_tail(Cell::new(2, 0));

        assert_eq!(snake.neighbors(0), (Some(Cell::new(2, 1)), None));
        assert_eq!(snake.neighbors(1), (Some(Cell::new(2, 0)), Some(Cell::new(2, 2))));
        assert_eq!(snake.neighbors(2), (None, Some(Cell::new(2, 1))));
    }
}
