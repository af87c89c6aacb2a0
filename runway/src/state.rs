use crate::ScrollDirection;

/// A lightweight snapshot of the viewport as last seen by the engine.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: u64,
    /// `None` until the host reports the container size for the first time.
    pub container_size: Option<u32>,
    pub direction: ScrollDirection,
}

impl ViewportState {
    /// Records a new scroll offset and derives the direction from the previous one.
    ///
    /// An unchanged offset keeps the previous direction.
    pub fn scroll_to(&mut self, offset: u64) {
        if offset > self.scroll_offset {
            self.direction = ScrollDirection::Forward;
        } else if offset < self.scroll_offset {
            self.direction = ScrollDirection::Backward;
        }
        self.scroll_offset = offset;
    }

    /// Returns `true` if the container size actually changed.
    pub fn resize(&mut self, container_size: u32) -> bool {
        if self.container_size == Some(container_size) {
            return false;
        }
        self.container_size = Some(container_size);
        true
    }
}
