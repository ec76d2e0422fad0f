use places::Bounds;

/// The map widget, as seen from the filter: it can always tell which
/// rectangle is currently visible.
pub trait Viewport {
    fn bounds(&self) -> Bounds;
}
