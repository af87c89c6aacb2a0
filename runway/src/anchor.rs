use core::cmp;

use crate::{Anchor, SizeTable};

/// Tracks the anchor item across scroll movements.
///
/// Scroll offsets are never mapped to indexes by summing sizes from the top. Instead the tracker
/// remembers the offset at which the anchor was last pinned and walks the size table by the
/// difference, which is cheap for the small increments produced by continuous scrolling and
/// stays correct for arbitrary jumps.
///
/// Size changes outside the rendered items do not invalidate the anchor: it is only ever
/// expressed relative to the scroll delta, never as an absolute offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnchorTracker {
    anchor: Anchor,
    anchor_scroll_offset: u64,
}

impl AnchorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The scroll offset at which [`AnchorTracker::anchor`] was last pinned.
    pub fn anchor_scroll_offset(&self) -> u64 {
        self.anchor_scroll_offset
    }

    /// Moves the anchor to `scroll_offset` and re-pins it there.
    ///
    /// A scroll offset of exactly `0` resets the anchor to the first item, discarding whatever
    /// drift the incremental walk may have accumulated. The result is always normalized (see
    /// [`AnchorTracker::normalize`]), even when the scroll offset did not move.
    pub fn track(&mut self, sizes: &SizeTable, scroll_offset: u64) -> Anchor {
        self.anchor = if scroll_offset == 0 {
            Anchor::ZERO
        } else {
            let delta = offset_delta(scroll_offset, self.anchor_scroll_offset);
            Self::advance(sizes, self.anchor, delta)
        };
        // A stale index (data shrank) must not escape even when the delta was zero.
        self.anchor.index = cmp::min(self.anchor.index, sizes.len());
        self.anchor = Self::normalize(sizes, self.anchor);
        self.anchor_scroll_offset = scroll_offset;
        vtrace!(
            scroll_offset,
            index = self.anchor.index,
            offset = self.anchor.offset,
            "AnchorTracker::track"
        );
        self.anchor
    }

    /// Walks `delta` pixels from `anchor` (positive = further down).
    ///
    /// Costs `O(items skipped)`. Landing exactly on an item boundary while moving forward yields
    /// the item that starts there. The walk stops at index `0` going backward (leaving a negative
    /// offset) and at `sizes.len()` going forward (leaving the slack past the end).
    pub fn advance(sizes: &SizeTable, anchor: Anchor, delta: i64) -> Anchor {
        if delta == 0 {
            return anchor;
        }
        let sizes = sizes.as_slice();
        let count = sizes.len();
        let mut index = cmp::min(anchor.index, count);
        let mut delta = delta.saturating_add(anchor.offset);

        if delta < 0 {
            while delta < 0 && index > 0 {
                index -= 1;
                delta = delta.saturating_add(sizes[index] as i64);
            }
        } else {
            while delta > 0 && index < count && sizes[index] as i64 <= delta {
                delta -= sizes[index] as i64;
                index += 1;
            }
        }

        Anchor {
            index: cmp::min(index, count),
            offset: delta,
        }
    }

    /// Re-walks an anchor whose offset no longer falls inside its item.
    ///
    /// This happens when the anchor was pinned against other sizes, e.g. while the list was
    /// empty: the whole scroll offset is then parked on item `0`. Only the slack before the
    /// first item and past the last one is left in place.
    pub fn normalize(sizes: &SizeTable, anchor: Anchor) -> Anchor {
        let before_item = anchor.offset < 0 && anchor.index > 0;
        let past_item = sizes
            .get(anchor.index)
            .is_some_and(|size| anchor.offset >= size as i64);
        if !(before_item || past_item) {
            return anchor;
        }
        let normalized = Self::advance(sizes, Anchor::new(anchor.index, 0), anchor.offset);
        vtrace!(
            from_index = anchor.index,
            from_offset = anchor.offset,
            index = normalized.index,
            offset = normalized.offset,
            "AnchorTracker::normalize"
        );
        normalized
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn offset_delta(to: u64, from: u64) -> i64 {
    if to >= from {
        i64::try_from(to - from).unwrap_or(i64::MAX)
    } else {
        i64::try_from(from - to).map_or(i64::MIN, |d| -d)
    }
}
