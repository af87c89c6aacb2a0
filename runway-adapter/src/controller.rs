use alloc::sync::Arc;

use runway::{
    Change, Engine, PositionPass, PositionedItem, RenderRange, RunwayOptions, SizeSync,
};

use crate::{ScrollBehavior, ViewRepeater, Viewport};

/// A framework-neutral controller that wires a `runway::Engine` to a viewport and a view
/// repeater.
///
/// The controller does not hold any UI objects beyond the two collaborators it is attached to.
/// Adapters drive it by calling:
/// - `on_data` when the data source emits a snapshot,
/// - `on_container_resize` / `on_scroll_event` when UI events occur,
/// - `tick()` once per rendering frame,
/// - `on_rendering_start` / `on_view_rendered` while the repeater mounts views.
///
/// Raw scroll notifications only mark the scroll as pending; the offset is read from the viewport
/// during `tick`, so a burst of scroll events costs a single anchor walk. All inputs received
/// within a frame produce at most one render range.
///
/// `detach` drops every piece of engine state. A detached controller ignores all inputs and
/// publishes nothing.
#[derive(Debug)]
pub struct Controller<T, V, R> {
    options: RunwayOptions<T>,
    attached: Option<Attached<T, V, R>>,
}

#[derive(Debug)]
struct Attached<T, V, R> {
    engine: Engine<T>,
    viewport: V,
    repeater: R,
    scroll_pending: bool,
    pass: Option<PositionPass>,
}

impl<T, V: Viewport, R: ViewRepeater<T>> Controller<T, V, R> {
    pub fn new(options: RunwayOptions<T>) -> Self {
        Self {
            options,
            attached: None,
        }
    }

    pub fn options(&self) -> &RunwayOptions<T> {
        &self.options
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Attaches to a viewport and a view repeater, starting from an empty engine.
    ///
    /// The viewport's current scroll offset is picked up on the first `tick`. Attaching an
    /// already attached controller detaches it first.
    pub fn attach(&mut self, viewport: V, repeater: R) {
        if self.attached.is_some() {
            vwarn!("Controller::attach: already attached, detaching first");
            self.detach();
        }
        vdebug!(
            runway_items = self.options.runway_items,
            runway_items_opposite = self.options.runway_items_opposite,
            "Controller::attach"
        );
        self.attached = Some(Attached {
            engine: Engine::new(self.options.clone()),
            viewport,
            repeater,
            scroll_pending: true,
            pass: None,
        });
    }

    /// Detaches from the collaborators and drops all engine state.
    ///
    /// Returns the viewport and the repeater, or `None` if the controller was not attached.
    pub fn detach(&mut self) -> Option<(V, R)> {
        let attached = self.attached.take()?;
        vdebug!(
            items = attached.engine.item_count(),
            "Controller::detach"
        );
        Some((attached.viewport, attached.repeater))
    }

    pub fn engine(&self) -> Option<&Engine<T>> {
        self.attached.as_ref().map(|a| &a.engine)
    }

    pub fn viewport(&self) -> Option<&V> {
        self.attached.as_ref().map(|a| &a.viewport)
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.attached.as_mut().map(|a| &mut a.viewport)
    }

    pub fn repeater(&self) -> Option<&R> {
        self.attached.as_ref().map(|a| &a.repeater)
    }

    pub fn repeater_mut(&mut self) -> Option<&mut R> {
        self.attached.as_mut().map(|a| &mut a.repeater)
    }

    /// The last published render range (empty while detached).
    pub fn render_range(&self) -> RenderRange {
        self.engine()
            .map(Engine::render_range)
            .unwrap_or_default()
    }

    pub fn content_size(&self) -> u64 {
        self.engine().map(Engine::content_size).unwrap_or(0)
    }

    pub fn scrolled_index(&self) -> Option<usize> {
        self.engine().and_then(Engine::scrolled_index)
    }

    /// Applies a data snapshot. `None` and an empty slice both mean "no data".
    pub fn on_data(&mut self, items: Option<&[T]>) -> Option<SizeSync> {
        let Some(attached) = self.attached.as_mut() else {
            vwarn!("Controller::on_data: not attached");
            return None;
        };
        let sync = match items {
            Some(items) if !items.is_empty() => attached.engine.set_items(items),
            _ => attached.engine.clear_items(),
        };
        Some(sync)
    }

    pub fn on_container_resize(&mut self, container_size: u32) {
        if let Some(attached) = self.attached.as_mut() {
            attached.engine.set_container_size(container_size);
        }
    }

    /// Records a raw scroll notification. The offset is read on the next `tick`.
    pub fn on_scroll_event(&mut self) {
        if let Some(attached) = self.attached.as_mut() {
            attached.scroll_pending = true;
        }
    }

    /// Applies `f` to the options and hands the result to the engine, if attached. The options
    /// also seed every later attachment.
    pub fn update_options(&mut self, f: impl FnOnce(&mut RunwayOptions<T>)) {
        f(&mut self.options);
        if let Some(attached) = self.attached.as_mut() {
            attached.engine.set_options(self.options.clone());
        }
    }

    /// Updates the runway buffers. Forces a recalculation when attached and the values changed.
    pub fn set_runway(&mut self, runway_items: usize, runway_items_opposite: usize) {
        self.update_options(|o| {
            o.runway_items = runway_items;
            o.runway_items_opposite = runway_items_opposite;
        });
    }

    /// Replaces the sizing function. Takes effect with the next data snapshot.
    pub fn set_item_size(&mut self, item_size: impl Fn(&T) -> u32 + Send + Sync + 'static) {
        self.update_options(|o| o.item_size = Arc::new(item_size));
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(Change) + Send + Sync + 'static>) {
        self.update_options(|o| o.on_change = on_change.map(|f| Arc::new(f) as _));
    }

    pub fn request_recalculate(&mut self) {
        if let Some(attached) = self.attached.as_mut() {
            attached.engine.request_recalculate();
        }
    }

    /// Runs one rendering frame: applies the latest scroll offset (if a scroll happened) and
    /// recomputes the render range if any input changed.
    ///
    /// Returns the new range when it differs from the last published one.
    pub fn tick(&mut self) -> Option<RenderRange> {
        let attached = self.attached.as_mut()?;
        if attached.scroll_pending {
            attached.scroll_pending = false;
            let offset = attached.viewport.scroll_offset();
            vtrace!(offset, "Controller::tick: scroll");
            attached.engine.set_scroll_offset(offset);
        }
        attached.engine.flush()
    }

    /// Starts a new render pass over the current range, superseding any pass in progress.
    pub fn on_rendering_start(&mut self) {
        if let Some(attached) = self.attached.as_mut() {
            attached.pass = Some(attached.engine.begin_pass());
        }
    }

    /// Positions a freshly mounted view and notifies the repeater.
    ///
    /// `local_index` is the view's index within the current batch (0 = first item of the render
    /// range). Returns the placement, or `None` if there is no pass in progress or the item is no
    /// longer backed by data.
    pub fn on_view_rendered(
        &mut self,
        element: &R::Element,
        local_index: usize,
        item: &T,
    ) -> Option<PositionedItem> {
        let Attached {
            engine,
            repeater,
            pass,
            ..
        } = self.attached.as_mut()?;
        let Some(pass) = pass.as_mut() else {
            vwarn!(local_index, "Controller::on_view_rendered: no render pass in progress");
            return None;
        };
        let placed = engine.place(pass, local_index)?;
        repeater.position_element(element, placed.start);
        repeater.view_rendered(placed.index, element, item);
        Some(placed)
    }

    /// Scrolls the viewport to the top edge of the item at `index`.
    ///
    /// Out-of-range indexes clamp to the first/last item. Returns the requested offset, or `None`
    /// when detached.
    pub fn scroll_to_index(&mut self, index: isize, behavior: ScrollBehavior) -> Option<u64> {
        let attached = self.attached.as_mut()?;
        let offset = attached.engine.scroll_to_index_offset(index);
        vdebug!(index, offset, "Controller::scroll_to_index");
        attached.viewport.scroll_to(offset, behavior);
        Some(offset)
    }
}
