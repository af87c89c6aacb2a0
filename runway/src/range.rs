use core::cmp;

use crate::{Anchor, AnchorTracker, RenderRange, ScrollDirection, SizeTable};

/// Result of a range computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeComputation {
    pub range: RenderRange,
    /// The anchor walked forward by the container size: the item under the viewport's bottom
    /// edge, and how far into it that edge falls.
    pub last_screen_item: Anchor,
}

/// Derives render ranges from an anchor, the viewport, and the runway buffers.
///
/// `runway_items` are rendered ahead in the scroll direction, `runway_items_opposite` behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeCalculator {
    pub runway_items: usize,
    pub runway_items_opposite: usize,
}

impl RangeCalculator {
    pub fn new(runway_items: usize, runway_items_opposite: usize) -> Self {
        Self {
            runway_items,
            runway_items_opposite,
        }
    }

    pub fn compute(
        &self,
        sizes: &SizeTable,
        anchor: Anchor,
        container_size: u32,
        direction: ScrollDirection,
    ) -> RangeComputation {
        let count = sizes.len();
        let last_screen_item = AnchorTracker::advance(sizes, anchor, container_size as i64);
        // The item under the bottom edge is only on screen if the edge falls inside it.
        let visible_end = if last_screen_item.offset > 0 {
            last_screen_item.index.saturating_add(1)
        } else {
            last_screen_item.index
        };

        let (behind, ahead) = match direction {
            ScrollDirection::Backward => (self.runway_items, self.runway_items_opposite),
            ScrollDirection::Forward => (self.runway_items_opposite, self.runway_items),
        };
        let end = cmp::min(count, visible_end.saturating_add(ahead));
        let start = cmp::min(anchor.index.saturating_sub(behind), end);

        RangeComputation {
            range: RenderRange { start, end },
            last_screen_item,
        }
    }
}
