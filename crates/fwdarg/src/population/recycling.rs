use super::{Gamete, GameteId};
use std::collections::VecDeque;

/// Queue of free gamete-table slots available for reuse.
///
/// The bin is owned by the caller of a mating event and lent mutably to the
/// recombination routine, which pops a slot when it needs a new gamete and
/// grows the table only when the bin is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecyclingBin {
    slots: VecDeque<GameteId>,
}

impl RecyclingBin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every extinct slot of `gametes`, in table order.
    pub fn from_gametes(gametes: &[Gamete]) -> Self {
        let slots = gametes
            .iter()
            .enumerate()
            .filter(|(_, g)| g.is_extinct())
            .map(|(i, _)| i)
            .collect();
        Self { slots }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Take the oldest free slot.
    #[inline]
    pub fn pop(&mut self) -> Option<GameteId> {
        self.slots.pop_front()
    }

    /// Mark `slot` free.
    #[inline]
    pub fn push(&mut self, slot: GameteId) {
        self.slots.push_back(slot);
    }
}
