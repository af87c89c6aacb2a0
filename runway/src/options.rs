use alloc::sync::Arc;

use crate::Change;

/// Item size used when no sizing function is configured.
pub const DEFAULT_ITEM_SIZE: u32 = 50;
/// Items rendered ahead of the viewport in the scroll direction.
pub const DEFAULT_RUNWAY_ITEMS: usize = 10;
/// Items rendered behind the viewport, opposite to the scroll direction.
pub const DEFAULT_RUNWAY_ITEMS_OPPOSITE: usize = 2;

/// Returns the size of an item in the scroll axis (e.g. its row height).
pub type ItemSizeFn<T> = Arc<dyn Fn(&T) -> u32 + Send + Sync>;

/// A callback fired for every published [`Change`].
pub type OnChangeCallback = Arc<dyn Fn(Change) + Send + Sync>;

/// Configuration for [`crate::Engine`].
///
/// Cheap to clone: closures are stored in `Arc`s.
pub struct RunwayOptions<T> {
    pub runway_items: usize,
    pub runway_items_opposite: usize,
    /// Sizing function applied to every item of a data snapshot.
    ///
    /// Sizes are read when a snapshot is applied, so replacing this function takes effect with the
    /// next snapshot.
    pub item_size: ItemSizeFn<T>,
    /// Optional sink for the engine outputs (content size, render range, scrolled index).
    pub on_change: Option<OnChangeCallback>,
}

impl<T> Clone for RunwayOptions<T> {
    fn clone(&self) -> Self {
        Self {
            runway_items: self.runway_items,
            runway_items_opposite: self.runway_items_opposite,
            item_size: Arc::clone(&self.item_size),
            on_change: self.on_change.clone(),
        }
    }
}

impl<T: 'static> RunwayOptions<T> {
    /// Creates options with the default runway and a fixed item size of [`DEFAULT_ITEM_SIZE`].
    pub fn new() -> Self {
        Self::with_item_size_fn(|_| DEFAULT_ITEM_SIZE)
    }

    /// Creates options with the default runway and a custom sizing function.
    pub fn with_item_size_fn(item_size: impl Fn(&T) -> u32 + Send + Sync + 'static) -> Self {
        Self {
            runway_items: DEFAULT_RUNWAY_ITEMS,
            runway_items_opposite: DEFAULT_RUNWAY_ITEMS_OPPOSITE,
            item_size: Arc::new(item_size),
            on_change: None,
        }
    }
}

impl<T: 'static> Default for RunwayOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RunwayOptions<T> {
    pub fn with_runway(mut self, runway_items: usize, runway_items_opposite: usize) -> Self {
        self.runway_items = runway_items;
        self.runway_items_opposite = runway_items_opposite;
        self
    }

    pub fn with_item_size(mut self, item_size: impl Fn(&T) -> u32 + Send + Sync + 'static) -> Self {
        self.item_size = Arc::new(item_size);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(Change) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<T> core::fmt::Debug for RunwayOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RunwayOptions")
            .field("runway_items", &self.runway_items)
            .field("runway_items_opposite", &self.runway_items_opposite)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}
