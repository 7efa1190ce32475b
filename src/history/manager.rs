use crate::core::color::Color;
use crate::core::grid::Grid;
use std::collections::VecDeque;
use std::sync::Arc;

pub const DEFAULT_MAX_STEPS: usize = 50;

/// Full copy of the grid's cells at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    cells: Arc<[Color]>,
}

impl Snapshot {
    pub fn capture(grid: &Grid) -> Self {
        Self { cells: Arc::from(grid.cells()) }
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Bounded FIFO of snapshots taken on grid creation and at every stroke start.
pub struct HistoryManager {
    snapshots: VecDeque<Snapshot>,
    max_steps: usize,
}

impl HistoryManager {
    pub fn new(max_steps: usize) -> Self {
        Self { snapshots: VecDeque::new(), max_steps: max_steps.max(1) }
    }

    pub fn push_snapshot(&mut self, grid: &Grid) {
        self.snapshots.push_back(Snapshot::capture(grid));
        while self.snapshots.len() > self.max_steps {
            self.snapshots.pop_front();
        }
    }

    /// Pops the newest snapshot and restores the grid from the one before it.
    /// Returns `false` when the log was already empty.
    pub fn undo(&mut self, grid: &mut Grid) -> bool {
        if self.snapshots.pop_back().is_none() {
            return false;
        }
        if let Some(previous) = self.snapshots.back() {
            grid.restore_from(previous.cells());
        }
        true
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize { self.snapshots.len() }
    pub fn is_empty(&self) -> bool { self.snapshots.is_empty() }
    pub fn max_steps(&self) -> usize { self.max_steps }
    pub fn latest(&self) -> Option<&Snapshot> { self.snapshots.back() }
    pub fn get(&self, index: usize) -> Option<&Snapshot> { self.snapshots.get(index) }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STEPS)
    }
}
