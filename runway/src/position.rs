use core::cmp::Ordering;

use crate::{Anchor, PositionedItem, RenderRange, SizeTable};

/// Positions the items of one render pass.
///
/// A pass starts at `range.start` and keeps a running offset, so mounting the items of a range in
/// order costs `O(range length)` in total. Mounting out of order is tolerated: the running offset
/// walks to the requested index first.
///
/// A pass is a plain value: starting a new one simply replaces the previous pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionPass {
    range: RenderRange,
    cursor: usize,
    position: i64,
}

impl PositionPass {
    /// Starts a pass for `range`.
    ///
    /// The initial offset is derived from the anchor: the anchor item's top edge sits
    /// `anchor.offset` pixels above `anchor_scroll_offset`, and `range.start` is reached by
    /// walking the sizes between it and the anchor.
    pub fn begin(
        sizes: &SizeTable,
        range: RenderRange,
        anchor: Anchor,
        anchor_scroll_offset: u64,
    ) -> Self {
        let anchor_top = i64::try_from(anchor_scroll_offset)
            .unwrap_or(i64::MAX)
            .saturating_sub(anchor.offset);
        let position = match range.start.cmp(&anchor.index) {
            Ordering::Less => anchor_top.saturating_sub(sum_i64(sizes, range.start, anchor.index)),
            Ordering::Greater => {
                anchor_top.saturating_add(sum_i64(sizes, anchor.index, range.start))
            }
            Ordering::Equal => anchor_top,
        };
        vtrace!(
            start = range.start,
            end = range.end,
            position,
            "PositionPass::begin"
        );
        Self {
            range,
            cursor: range.start,
            position,
        }
    }

    pub fn range(&self) -> RenderRange {
        self.range
    }

    /// Offset the next in-order item will receive.
    pub fn next_position(&self) -> i64 {
        self.position
    }

    /// Positions the item mounted at `local_index` within the pass.
    ///
    /// Returns `None` if the item is no longer backed by a size entry.
    pub fn place(&mut self, sizes: &SizeTable, local_index: usize) -> Option<PositionedItem> {
        let index = self.range.start.saturating_add(local_index);
        let Some(size) = sizes.get(index) else {
            vwarn!(
                index,
                len = sizes.len(),
                "PositionPass::place: index has no size entry"
            );
            return None;
        };

        if index != self.cursor {
            vtrace!(
                expected = self.cursor,
                index,
                "PositionPass::place: out-of-order mount"
            );
            self.seek(sizes, index);
        }

        let item = PositionedItem {
            index,
            start: self.position,
            size,
        };
        self.position = self.position.saturating_add(size as i64);
        self.cursor = index + 1;
        Some(item)
    }

    fn seek(&mut self, sizes: &SizeTable, index: usize) {
        if index > self.cursor {
            self.position = self
                .position
                .saturating_add(sum_i64(sizes, self.cursor, index));
        } else {
            self.position = self
                .position
                .saturating_sub(sum_i64(sizes, index, self.cursor));
        }
        self.cursor = index;
    }
}

fn sum_i64(sizes: &SizeTable, start: usize, end: usize) -> i64 {
    i64::try_from(sizes.sum(start..end)).unwrap_or(i64::MAX)
}
