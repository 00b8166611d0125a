use crate::config::ConfigError;
use super::types::{Cell, Direction, WorldPosition};

/// Fixed-size playing field centred on the world origin. Immutable once built.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidGridSize { width, height });
        }

        let (width, height) = (width as usize, height as usize);
        let mut cells = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                cells.push(Cell::new(x, y));
            }
        }

        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.cells[x as usize * self.height + y as usize])
    }

    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        self.cell_at(cell.x as i32 + dx, cell.y as i32 + dy)
    }

    pub fn world_position(&self, cell: Cell) -> WorldPosition {
        let half_width = (self.width / 2) as f32;
        let half_height = (self.height / 2) as f32;
        WorldPosition {
            x: -half_width + cell.x as f32 + 0.5,
            y: -half_height + cell.y as f32 + 0.5,
        }
    }
}
