//! Undo Log
//!
//! Bounded stack of ledger + structure snapshots. A snapshot is pushed right
//! before every placement or deletion; undo pops it and restores both halves.
//! There is no redo.

use std::collections::VecDeque;

use super::ledger::PlacementLedger;
use super::mesh::TileMesh;
use super::scene::TileTransform;

/// Default number of retained snapshots.
pub const UNDO_LIMIT: usize = 20;

// ============================================================================
// SNAPSHOTS
// ============================================================================

/// Copy of the persistent structure at snapshot time.
#[derive(Debug, Clone, PartialEq)]
pub enum StructureSnapshot {
    /// No structure object existed yet
    Absent,
    /// The structure's geometry and object transform
    Mesh {
        mesh: TileMesh,
        transform: TileTransform,
    },
}

/// State captured before one ledger mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct UndoSnapshot {
    pub ledger: PlacementLedger,
    pub structure: StructureSnapshot,
}

// ============================================================================
// UNDO LOG
// ============================================================================

/// A bounded snapshot stack; pushing past the limit drops the oldest entry.
#[derive(Debug)]
pub struct UndoLog {
    entries: VecDeque<UndoSnapshot>,
    limit: usize,
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new(UNDO_LIMIT)
    }
}

impl UndoLog {
    /// Create an empty log. A limit of zero is raised to one.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Push a snapshot, returning the evicted oldest entry if the log was full.
    pub fn push(&mut self, snapshot: UndoSnapshot) -> Option<UndoSnapshot> {
        self.entries.push_back(snapshot);
        if self.entries.len() > self.limit {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<UndoSnapshot> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
