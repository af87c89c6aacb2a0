use alloc::vec::Vec;
use core::cmp;
use core::ops::Range;

use crate::RenderRange;

/// Outcome of applying a data snapshot to a [`SizeTable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeSync {
    pub content_size: u64,
    /// Whether the change can affect the current render range.
    pub must_recalculate: bool,
    /// Number of entries whose size was written (new or different).
    pub changed: usize,
}

/// Per-item size cache, indexed by position in the latest data snapshot.
///
/// The table never re-derives offsets from scratch on its own: it only keeps the sizes and their
/// running total. Offset queries walk the entries they need.
#[derive(Clone, Debug, Default)]
pub struct SizeTable {
    sizes: Vec<u32>,
    content_size: u64,
}

impl SizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.sizes
    }

    pub fn content_size(&self) -> u64 {
        self.content_size
    }

    /// Applies a new data snapshot.
    ///
    /// Entries past the snapshot length are discarded. Size changes outside `render_range` are
    /// absorbed silently; `must_recalculate` is only raised when the change can alter what is
    /// currently rendered:
    /// - the table had no content yet,
    /// - a size inside `render_range` changed,
    /// - the length changed and the range reaches the end of either the old or the new list.
    ///
    /// An empty snapshot behaves like [`SizeTable::clear`].
    pub fn sync<'a, T: 'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a T>,
        size_of: impl Fn(&T) -> u32,
        render_range: RenderRange,
    ) -> SizeSync {
        let old_len = self.sizes.len();
        let first_population = self.content_size == 0;
        let mut content_size = 0u64;
        let mut must_recalculate = false;
        let mut changed = 0usize;
        let mut len = 0usize;

        for (i, item) in items.into_iter().enumerate() {
            let size = size_of(item);
            content_size = content_size.saturating_add(size as u64);
            len = i + 1;

            match self.sizes.get_mut(i) {
                Some(cur) if *cur == size => continue,
                Some(cur) => *cur = size,
                None => self.sizes.push(size),
            }
            changed += 1;
            if first_population || render_range.contains(i) {
                must_recalculate = true;
            }
        }

        if len == 0 {
            return self.clear();
        }

        self.sizes.truncate(len);
        if len != old_len && render_range.end >= cmp::min(old_len, len) {
            must_recalculate = true;
        }
        self.content_size = content_size;

        vdebug!(
            len,
            old_len,
            changed,
            content_size,
            must_recalculate,
            "SizeTable::sync"
        );
        SizeSync {
            content_size,
            must_recalculate,
            changed,
        }
    }

    /// Drops every entry. Always requests a recalculation so the range collapses.
    pub fn clear(&mut self) -> SizeSync {
        let changed = self.sizes.len();
        self.sizes.clear();
        self.content_size = 0;
        vdebug!(changed, "SizeTable::clear");
        SizeSync {
            content_size: 0,
            must_recalculate: true,
            changed,
        }
    }

    /// Offset of the top edge of `index`, summing every entry before it.
    ///
    /// This is `O(index)`. Indexes past the end return the content size.
    pub fn offset_of(&self, index: usize) -> u64 {
        self.sum(0..index)
    }

    /// Sum of the sizes in `range`, clamped to the table length.
    pub fn sum(&self, range: Range<usize>) -> u64 {
        let end = cmp::min(range.end, self.sizes.len());
        let start = cmp::min(range.start, end);
        self.sizes[start..end]
            .iter()
            .fold(0u64, |acc, &s| acc.saturating_add(s as u64))
    }
}
