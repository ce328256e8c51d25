//! Bounded two-slot vertex selection.
//!
//! The selection parameterizes edge creation/removal and vertex removal. It
//! knows vertex ids only; liveness is enforced by the caller, and ids of
//! removed vertices are dropped through [`Selection::purge_if_absent`].

use crate::graph::VertexId;
use std::collections::HashSet;

/// Maximum number of simultaneously selected vertices.
pub const SELECTION_CAPACITY: usize = 2;

/// An ordered selection of at most [`SELECTION_CAPACITY`] vertex ids.
///
/// Selecting while full replaces the whole selection with the new id rather
/// than evicting only the oldest entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    slots: [VertexId; SELECTION_CAPACITY],
    len: usize,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a vertex.
    ///
    /// Appends `id` when there is room; otherwise the selection becomes `[id]`.
    pub fn select(&mut self, id: VertexId) {
        if self.len == SELECTION_CAPACITY {
            self.len = 0;
        }
        self.slots[self.len] = id;
        self.len += 1;
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Selected ids in selection order.
    pub fn current(&self) -> &[VertexId] {
        &self.slots[..self.len]
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `id` is currently selected.
    pub fn contains(&self, id: VertexId) -> bool {
        self.current().contains(&id)
    }

    /// The single selected id, if exactly one is selected.
    pub fn single(&self) -> Option<VertexId> {
        match self.current() {
            [id] => Some(*id),
            _ => None,
        }
    }

    /// The selected pair, if exactly two are selected.
    pub fn pair(&self) -> Option<(VertexId, VertexId)> {
        match self.current() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Drop every selected id that is not in `live_ids`, keeping order.
    ///
    /// # Returns
    /// `true` if anything was removed
    pub fn purge_if_absent<I>(&mut self, live_ids: I) -> bool
    where
        I: IntoIterator<Item = VertexId>,
    {
        let live: HashSet<VertexId> = live_ids.into_iter().collect();
        let before = self.len;
        let mut kept = 0;
        for i in 0..self.len {
            let id = self.slots[i];
            if live.contains(&id) {
                self.slots[kept] = id;
                kept += 1;
            }
        }
        self.len = kept;
        kept != before
    }
}

// Slots past `len` hold stale ids and take no part in equality
impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.current() == other.current()
    }
}

impl Eq for Selection {}
