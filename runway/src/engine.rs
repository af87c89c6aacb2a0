use alloc::sync::Arc;

use crate::{
    Anchor, AnchorTracker, Change, PositionPass, PositionedItem, RangeCalculator, RenderRange,
    RunwayOptions, ScrollDirection, SizeSync, SizeTable, ViewportState,
};

/// The virtual scrolling state machine.
///
/// The engine owns the size table, the anchor, and the render range, and is driven by three
/// inputs:
/// - data snapshots (`set_items` / `clear_items`),
/// - scroll offsets (`set_scroll_offset`),
/// - container resizes and configuration changes (`set_container_size`, `set_runway`,
///   `request_recalculate`).
///
/// Inputs only mark the range as stale; [`Engine::flush`] recomputes it once, using the latest
/// combination of inputs. Hosts call `flush` once per rendering frame so intermediate states
/// never reach the renderer. No range is computed before the container size is known.
///
/// Outputs are published through `options.on_change` and are also readable from getters.
#[derive(Clone, Debug)]
pub struct Engine<T> {
    options: RunwayOptions<T>,
    sizes: SizeTable,
    tracker: AnchorTracker,
    calculator: RangeCalculator,
    viewport: ViewportState,
    last_screen_item: Anchor,

    range: Option<RenderRange>, // last published
    scrolled_index: Option<usize>,
    stale: bool,
}

impl<T> Engine<T> {
    pub fn new(options: RunwayOptions<T>) -> Self {
        vdebug!(
            runway_items = options.runway_items,
            runway_items_opposite = options.runway_items_opposite,
            "Engine::new"
        );
        Self {
            calculator: RangeCalculator::new(options.runway_items, options.runway_items_opposite),
            options,
            sizes: SizeTable::new(),
            tracker: AnchorTracker::new(),
            viewport: ViewportState::default(),
            last_screen_item: Anchor::ZERO,
            range: None,
            scrolled_index: None,
            stale: true,
        }
    }

    pub fn options(&self) -> &RunwayOptions<T> {
        &self.options
    }

    pub fn sizes(&self) -> &SizeTable {
        &self.sizes
    }

    pub fn item_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn content_size(&self) -> u64 {
        self.sizes.content_size()
    }

    /// The last published render range (empty before the first flush).
    pub fn render_range(&self) -> RenderRange {
        self.range.unwrap_or_default()
    }

    pub fn scrolled_index(&self) -> Option<usize> {
        self.scrolled_index
    }

    pub fn anchor(&self) -> Anchor {
        self.tracker.anchor()
    }

    pub fn anchor_scroll_offset(&self) -> u64 {
        self.tracker.anchor_scroll_offset()
    }

    pub fn last_screen_item(&self) -> Anchor {
        self.last_screen_item
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn scroll_offset(&self) -> u64 {
        self.viewport.scroll_offset
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.viewport.direction
    }

    pub fn container_size(&self) -> Option<u32> {
        self.viewport.container_size
    }

    /// Returns `true` if the next [`Engine::flush`] will recompute the range.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Applies a data snapshot and publishes the new content size.
    ///
    /// The range is only marked stale when the snapshot can affect what is rendered (see
    /// [`SizeTable::sync`]).
    pub fn set_items(&mut self, items: &[T]) -> SizeSync {
        let range = self.render_range();
        let item_size = &self.options.item_size;
        let sync = self.sizes.sync(items, |item| item_size(item), range);
        self.apply_size_sync(sync);
        sync
    }

    /// Drops all items. The range collapses to empty on the next flush.
    pub fn clear_items(&mut self) -> SizeSync {
        let sync = self.sizes.clear();
        self.apply_size_sync(sync);
        sync
    }

    fn apply_size_sync(&mut self, sync: SizeSync) {
        self.emit(Change::ContentSize(sync.content_size));
        if sync.must_recalculate {
            self.stale = true;
        }
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        self.viewport.scroll_to(offset);
        self.stale = true;
    }

    pub fn set_container_size(&mut self, container_size: u32) {
        if self.viewport.resize(container_size) {
            self.stale = true;
        }
    }

    /// Replaces the options. A runway change marks the range stale; a new sizing function only
    /// applies to the next data snapshot.
    pub fn set_options(&mut self, options: RunwayOptions<T>) {
        self.options = options;
        let calculator = RangeCalculator::new(
            self.options.runway_items,
            self.options.runway_items_opposite,
        );
        if self.calculator != calculator {
            vtrace!(
                runway_items = calculator.runway_items,
                runway_items_opposite = calculator.runway_items_opposite,
                "Engine::set_options: runway changed"
            );
            self.calculator = calculator;
            self.stale = true;
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut RunwayOptions<T>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_runway(&mut self, runway_items: usize, runway_items_opposite: usize) {
        self.update_options(|o| {
            o.runway_items = runway_items;
            o.runway_items_opposite = runway_items_opposite;
        });
    }

    /// Replaces the sizing function. Takes effect with the next data snapshot.
    pub fn set_item_size(&mut self, item_size: impl Fn(&T) -> u32 + Send + Sync + 'static) {
        self.options.item_size = Arc::new(item_size);
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(Change) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn request_recalculate(&mut self) {
        self.stale = true;
    }

    /// Recomputes the render range if any input changed since the last flush.
    ///
    /// Returns the new range when it differs from the last published one.
    pub fn flush(&mut self) -> Option<RenderRange> {
        if !self.stale {
            return None;
        }
        let container_size = self.viewport.container_size?;
        self.stale = false;

        let anchor = self.tracker.track(&self.sizes, self.viewport.scroll_offset);
        if self.scrolled_index != Some(anchor.index) {
            self.scrolled_index = Some(anchor.index);
            self.emit(Change::ScrolledIndex(anchor.index));
        }

        let computed = self.calculator.compute(
            &self.sizes,
            anchor,
            container_size,
            self.viewport.direction,
        );
        self.last_screen_item = computed.last_screen_item;
        debug_assert!(
            computed.range.start <= computed.range.end && computed.range.end <= self.sizes.len(),
            "render range out of bounds ({:?}, len={})",
            computed.range,
            self.sizes.len()
        );

        vtrace!(
            scroll_offset = self.viewport.scroll_offset,
            container_size,
            start = computed.range.start,
            end = computed.range.end,
            "Engine::flush"
        );
        if self.range == Some(computed.range) {
            return None;
        }
        self.range = Some(computed.range);
        self.emit(Change::RenderRange(computed.range));
        Some(computed.range)
    }

    /// Starts positioning the items of the current render range.
    pub fn begin_pass(&self) -> PositionPass {
        PositionPass::begin(
            &self.sizes,
            self.render_range(),
            self.tracker.anchor(),
            self.tracker.anchor_scroll_offset(),
        )
    }

    /// Positions the item mounted at `local_index` within `pass`.
    pub fn place(&self, pass: &mut PositionPass, local_index: usize) -> Option<PositionedItem> {
        pass.place(&self.sizes, local_index)
    }

    /// Offset of the top edge of the item at `index`, clamped to the existing items.
    ///
    /// Negative indexes clamp to the first item. This is a direct `O(index)` sum, meant for
    /// one-shot jumps rather than continuous tracking. Returns `0` for an empty list.
    pub fn scroll_to_index_offset(&self, index: isize) -> u64 {
        let last = self.sizes.len().saturating_sub(1);
        let index = usize::try_from(index).unwrap_or(0).min(last);
        self.sizes.offset_of(index)
    }

    /// Drops all owned state, as if the engine was just created with the current options.
    pub fn reset(&mut self) {
        vdebug!("Engine::reset");
        self.sizes = SizeTable::new();
        self.tracker.reset();
        self.viewport = ViewportState::default();
        self.last_screen_item = Anchor::ZERO;
        self.range = None;
        self.scrolled_index = None;
        self.stale = true;
    }

    fn emit(&self, change: Change) {
        if let Some(cb) = &self.options.on_change {
            cb(change);
        }
    }
}
