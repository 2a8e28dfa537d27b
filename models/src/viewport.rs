use std::{cell::RefCell, fmt, rc::Rc};

use crate::visibility::{Visibility, VisibilityTracker};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

impl ScrollBehavior {
    pub fn from_smooth(smooth: bool) -> Self {
        if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ViewportError {
    #[error("The viewport is not available")]
    Unavailable,
    #[error("Failed to register the scroll listener: {0}")]
    Subscribe(String),
}

/// The scrollable surface the button observes and drives.
pub trait Viewport {
    /// Current vertical scroll offset in pixels.
    fn scroll_y(&self) -> f64;

    /// Registers `listener` for scroll signals until the returned
    /// subscription is released or dropped.
    fn subscribe(
        &self,
        listener: Box<dyn FnMut()>,
    ) -> Result<ScrollSubscription, ViewportError>;

    /// Requests a scroll to vertical offset 0. Fire and forget.
    fn scroll_to_top(&self, behavior: ScrollBehavior);
}

/// A registered scroll listener, deregistered exactly once on release or drop.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

type ChangeHandler = Rc<RefCell<dyn FnMut(Visibility)>>;

/// Keeps one scroll listener bound to a viewport for as long as it lives.
///
/// Dropping the watch removes the listener.
pub struct VisibilityWatch<V: Viewport> {
    viewport: V,
    threshold: f64,
    state: Rc<RefCell<Visibility>>,
    on_change: ChangeHandler,
    subscription: Option<ScrollSubscription>,
}

/// Binds a visibility tracker to the scroll signals of `viewport`.
///
/// `on_change` is called with the new state after every transition, starting
/// from `initial`.
pub fn watch_visibility<V, F>(
    viewport: V,
    threshold: f64,
    initial: Visibility,
    on_change: F,
) -> Result<VisibilityWatch<V>, ViewportError>
where
    V: Viewport + Clone + 'static,
    F: FnMut(Visibility) + 'static,
{
    let mut watch = VisibilityWatch {
        viewport,
        threshold,
        state: Rc::new(RefCell::new(initial)),
        on_change: Rc::new(RefCell::new(on_change)),
        subscription: None,
    };
    watch.bind()?;
    Ok(watch)
}

impl<V> VisibilityWatch<V>
where
    V: Viewport + Clone + 'static,
{
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn visibility(&self) -> Visibility {
        *self.state.borrow()
    }

    pub fn is_bound(&self) -> bool {
        self.subscription.is_some()
    }

    /// Moves the listener to a new threshold.
    ///
    /// The current listener is released before the next one is registered.
    /// The visibility stays as is until the next scroll signal.
    pub fn rebind(&mut self, threshold: f64) -> Result<(), ViewportError> {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
        }
        self.threshold = threshold;
        self.bind()
    }

    fn bind(&mut self) -> Result<(), ViewportError> {
        let viewport = self.viewport.clone();
        let state = Rc::clone(&self.state);
        let on_change = Rc::clone(&self.on_change);
        let mut tracker = VisibilityTracker::with_state(self.threshold, *self.state.borrow());
        let listener = Box::new(move || {
            if let Some(next) = tracker.on_scroll(viewport.scroll_y()) {
                *state.borrow_mut() = next;
                let mut on_change = on_change.borrow_mut();
                (*on_change)(next);
            }
        });
        self.subscription = Some(self.viewport.subscribe(listener)?);
        Ok(())
    }
}

impl<V: Viewport> fmt::Debug for VisibilityWatch<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityWatch")
            .field("threshold", &self.threshold)
            .field("state", &*self.state.borrow())
            .field("subscription", &self.subscription)
            .finish()
    }
}
