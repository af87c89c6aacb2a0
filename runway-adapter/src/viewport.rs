/// How a programmatic scroll should be carried out by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Let the host decide (e.g. honor a CSS `scroll-behavior`).
    #[default]
    Auto,
    Instant,
    Smooth,
}

/// The scroll container the engine is attached to.
///
/// Container-size changes and raw scroll notifications are pushed into the
/// [`crate::Controller`] by the host (`on_container_resize`, `on_scroll_event`); the controller
/// reads the actual scroll offset at most once per frame.
pub trait Viewport {
    /// Current scroll offset in the scroll axis.
    fn scroll_offset(&self) -> u64;

    /// Requests a scroll to `offset`.
    fn scroll_to(&mut self, offset: u64, behavior: ScrollBehavior);
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn scroll_offset(&self) -> u64 {
        (**self).scroll_offset()
    }

    fn scroll_to(&mut self, offset: u64, behavior: ScrollBehavior) {
        (**self).scroll_to(offset, behavior);
    }
}
