/// Direction of the most recent scroll movement.
///
/// `Forward` means the scroll offset increased (the user scrolled down), `Backward` means it
/// decreased. The runway buffers are biased toward the direction of travel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    #[default]
    Forward,
    Backward,
}

/// The item pinned to a reference scroll position.
///
/// `offset` is the distance from the item's top edge to the reference position. It is negative
/// when the reference sits above the first item (overscroll) and may exceed the item's size when
/// `index` points past the last item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub index: usize,
    pub offset: i64,
}

impl Anchor {
    pub const ZERO: Self = Self {
        index: 0,
        offset: 0,
    };

    pub fn new(index: usize, offset: i64) -> Self {
        Self { index, offset }
    }
}

/// Half-open interval of item indexes that should be materialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl RenderRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// A rendered item with its resolved absolute position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionedItem {
    pub index: usize,
    /// Offset of the item's top edge in the scroll axis. Negative while overscrolled above the
    /// first item.
    pub start: i64,
    pub size: u32,
}

impl PositionedItem {
    pub fn end(&self) -> i64 {
        self.start.saturating_add(self.size as i64)
    }
}

/// An output published by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Change {
    /// Sum of all item sizes, published after every data snapshot.
    ContentSize(u64),
    /// A render range that differs from the previously published one.
    RenderRange(RenderRange),
    /// Index of the anchor item, published only when it changes.
    ScrolledIndex(usize),
}
