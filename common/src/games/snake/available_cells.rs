use std::collections::HashMap;

use crate::games::SessionRng;
use super::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptySetError;

impl std::fmt::Display for EmptySetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No available cells left")
    }
}

impl std::error::Error for EmptySetError {}

/// Cells not occupied by the body. Members live in a dense vector with a
/// position index so membership, insertion, removal and uniform sampling are
/// all O(1).
#[derive(Clone, Debug, Default)]
pub struct AvailableCells {
    members: Vec<Cell>,
    positions: HashMap<Cell, usize>,
}

impl AvailableCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut set = Self::new();
        for cell in cells {
            set.add(cell);
        }
        set
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.positions.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `false` if the cell was already present.
    pub fn add(&mut self, cell: Cell) -> bool {
        if self.positions.contains_key(&cell) {
            return false;
        }
        self.positions.insert(cell, self.members.len());
        self.members.push(cell);
        true
    }

    /// Returns `false` if the cell was not present.
    pub fn remove(&mut self, cell: Cell) -> bool {
        let Some(index) = self.positions.remove(&cell) else {
            return false;
        };
        self.members.swap_remove(index);
        if let Some(moved) = self.members.get(index) {
            self.positions.insert(*moved, index);
        }
        true
    }

    pub fn random_element(&self, rng: &mut SessionRng) -> Result<Cell, EmptySetError> {
        if self.members.is_empty() {
            return Err(EmptySetError);
        }
        Ok(self.members[rng.index(self.members.len())])
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.members.iter().copied()
    }
}
