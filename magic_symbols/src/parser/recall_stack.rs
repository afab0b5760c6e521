// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use crate::ColorEntry;

/// Inline capacity. Deeper histories spill to the heap.
pub const RECALL_STACK_INLINE_CAPACITY: usize = 16;

/// History of the color tokens emitted during one translation. Control tokens
/// (reset, underline, hilite) are never pushed.
///
/// ```text
/// push(c1) push(c2) push(c3)       [c1, c2, c3]
/// recall(1)  pop 1, re-emit c2     [c1, c2]
/// recall(9)  snap to bottom, c1    [c1]
/// recall(1)  bottom stays, c1      [c1]
/// ```
///
/// The bottom entry is never popped, so a recall on a non-empty stack always has
/// something to re-emit. A recall does not push the entry it re-emits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecallStack<'a> {
    entries: SmallVec<[&'a ColorEntry; RECALL_STACK_INLINE_CAPACITY]>,
}

impl<'a> RecallStack<'a> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, entry: &'a ColorEntry) { self.entries.push(entry); }

    /// Pop `offset` entries (never the bottom one) and return the new top. Returns
    /// `None` only when nothing was ever pushed.
    pub fn recall(&mut self, offset: u8) -> Option<&'a ColorEntry> {
        let len = self.len();
        if len == 0 {
            return None;
        }

        let requested = usize::from(offset);
        if requested >= len {
            tracing::trace!(offset, depth = len, "recall offset snapped to stack bottom");
        }

        let pop_count = requested.min(len - 1);
        self.entries.truncate(len - pop_count);
        self.entries.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
