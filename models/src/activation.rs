use crate::viewport::{ScrollBehavior, Viewport};

/// Scrolls `viewport` back to the origin, then calls `on_click` once.
///
/// The callback runs after the request has been issued and is not guarded,
/// a panic in it unwinds to the caller.
pub fn activate<V, F>(viewport: &V, behavior: ScrollBehavior, on_click: F)
where
    V: Viewport + ?Sized,
    F: FnOnce(),
{
    viewport.scroll_to_top(behavior);
    on_click();
}
