use super::manager::{HistoryManager, Snapshot};
use crate::core::grid::Grid;
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq)]
pub enum ReplayStep {
    /// Snapshot `index` of the history log.
    Frame(usize, Snapshot),
    /// The grid as it was when the replay started. Always the last step.
    Restore(Snapshot),
}

impl ReplayStep {
    pub fn snapshot(&self) -> &Snapshot {
        match self {
            ReplayStep::Frame(_, s) | ReplayStep::Restore(s) => s,
        }
    }
}

/// Walks the history log one snapshot per interval. Driven by [`Replay::tick`]
/// from the frame loop; the replay is over once the iterator is exhausted.
pub struct Replay {
    frames: Vec<Snapshot>,
    live: Option<Snapshot>,
    frame: usize,
    interval: Duration,
    elapsed: Duration,
}

impl Replay {
    /// `None` when there is nothing to replay.
    pub fn start(history: &HistoryManager, live: &Grid, interval: Duration) -> Option<Self> {
        if history.is_empty() {
            return None;
        }
        Some(Self {
            frames: history.iter().cloned().collect(),
            live: Some(Snapshot::capture(live)),
            frame: 0,
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        })
    }

    /// Advances by `delta` and renders every step that came due into `grid`.
    /// Returns how many steps were rendered.
    pub fn tick(&mut self, delta: Duration, grid: &mut Grid) -> usize {
        self.elapsed += delta;
        let mut rendered = 0;
        while self.elapsed >= self.interval && !self.is_finished() {
            self.elapsed -= self.interval;
            if let Some(step) = self.next() {
                grid.restore_from(step.snapshot().cells());
                rendered += 1;
            }
        }
        rendered
    }

    pub fn is_finished(&self) -> bool {
        self.live.is_none()
    }

    /// Index of the next history frame to render.
    pub fn frame(&self) -> usize { self.frame }
    pub fn frame_count(&self) -> usize { self.frames.len() }
    pub fn interval(&self) -> Duration { self.interval }
}

impl Iterator for Replay {
    type Item = ReplayStep;

    fn next(&mut self) -> Option<ReplayStep> {
        if let Some(snapshot) = self.frames.get(self.frame) {
            let step = ReplayStep::Frame(self.frame, snapshot.clone());
            self.frame += 1;
            return Some(step);
        }
        self.live.take().map(ReplayStep::Restore)
    }
}
