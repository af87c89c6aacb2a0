/// The host component that instantiates (and recycles) one view per item of the render range.
///
/// The host signals the start of a batch with [`crate::Controller::on_rendering_start`] and
/// reports every mounted view with [`crate::Controller::on_view_rendered`]. The controller answers
/// with the two callbacks below.
pub trait ViewRepeater<T> {
    /// Handle to a mounted view (a DOM node, a widget id, ...).
    type Element;

    /// Moves `element` to `offset` in the scroll axis. May be negative while overscrolled.
    fn position_element(&mut self, element: &Self::Element, offset: i64);

    /// Called after `element` was positioned, with the absolute index of `item`.
    fn view_rendered(&mut self, index: usize, element: &Self::Element, item: &T);
}

impl<T, R: ViewRepeater<T> + ?Sized> ViewRepeater<T> for &mut R {
    type Element = R::Element;

    fn position_element(&mut self, element: &Self::Element, offset: i64) {
        (**self).position_element(element, offset);
    }

    fn view_rendered(&mut self, index: usize, element: &Self::Element, item: &T) {
        (**self).view_rendered(index, element, item);
    }
}
