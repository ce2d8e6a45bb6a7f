//! Snapshot undo/redo over design states

use crate::design::canvas::Design;

/// Linear history of committed design snapshots
///
/// Every commit stores a full copy of the design. Committing after an undo
/// discards the snapshots that could have been redone.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Design>,
    position: Option<usize>,
}

impl History {
    /// Create an empty history
    pub const fn new() -> Self {
        Self {
            snapshots: Vec::new(),
            position: None,
        }
    }

    /// Record `design` as the newest state
    pub fn commit(&mut self, design: &Design) {
        let keep = self.position.map_or(0, |p| p + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push(design.clone());
        self.position = Some(keep);
    }

    /// Step back one snapshot, returning the state to restore
    pub fn undo(&mut self) -> Option<&Design> {
        let previous = self.position?.checked_sub(1)?;
        self.position = Some(previous);
        self.snapshots.get(previous)
    }

    /// Step forward one snapshot, returning the state to restore
    pub fn redo(&mut self) -> Option<&Design> {
        let next = self.position.map_or(0, |p| p + 1);
        if next >= self.snapshots.len() {
            return None;
        }
        self.position = Some(next);
        self.snapshots.get(next)
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        self.position.is_some_and(|p| p > 0)
    }

    /// Whether a redo step is available
    pub fn can_redo(&self) -> bool {
        self.position.map_or(0, |p| p + 1) < self.snapshots.len()
    }

    /// Number of stored snapshots
    pub const fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing has been committed
    pub const fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drop every snapshot
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.position = None;
    }
}

/// A design together with its undo history
///
/// Mutations go through [`Editor`] so every change is committed as a snapshot.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    design: Design,
    history: History,
}

impl Editor {
    /// Start editing `design`, committing it as the first snapshot
    pub fn new(design: Design) -> Self {
        let mut history = History::new();
        history.commit(&design);
        Self { design, history }
    }

    /// Current design
    pub const fn design(&self) -> &Design {
        &self.design
    }

    /// Undo/redo history
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Apply a change and commit the result
    pub fn apply<T>(&mut self, change: impl FnOnce(&mut Design) -> T) -> T {
        let outcome = change(&mut self.design);
        self.history.commit(&self.design);
        outcome
    }

    /// Restore the previous snapshot; `false` if there is none
    pub fn undo(&mut self) -> bool {
        let Some(state) = self.history.undo().cloned() else {
            return false;
        };
        self.design = state;
        true
    }

    /// Restore the next snapshot; `false` if there is none
    pub fn redo(&mut self) -> bool {
        let Some(state) = self.history.redo().cloned() else {
            return false;
        };
        self.design = state;
        true
    }

    /// Clear the canvas and forget all history
    pub fn reset(&mut self) {
        self.design.clear();
        self.history.clear();
        self.history.commit(&self.design);
    }
}
