//! An in-memory viewport for exercising the button without a browser.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::viewport::{ScrollBehavior, ScrollSubscription, Viewport, ViewportError};

type Listener = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct FakeState {
    scroll_y: f64,
    next_id: usize,
    listeners: Vec<(usize, Listener)>,
    scroll_requests: Vec<ScrollBehavior>,
    fail_subscriptions: bool,
}

/// Shared handle, clones observe and drive the same viewport.
#[derive(Clone, Default)]
pub struct FakeViewport {
    state: Rc<RefCell<FakeState>>,
}

impl FakeViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_scroll_y(&self, offset: f64) {
        self.state.borrow_mut().scroll_y = offset;
    }

    /// Moves to `offset` and fires every registered listener.
    pub fn scroll_signal(&self, offset: f64) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.borrow_mut();
            state.scroll_y = offset;
            state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            let mut listener = listener.borrow_mut();
            (*listener)();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn scroll_requests(&self) -> Vec<ScrollBehavior> {
        self.state.borrow().scroll_requests.clone()
    }

    /// Makes subsequent `subscribe` calls fail.
    pub fn fail_subscriptions(&self, fail: bool) {
        self.state.borrow_mut().fail_subscriptions = fail;
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.state.borrow().scroll_y
    }

    fn subscribe(
        &self,
        listener: Box<dyn FnMut()>,
    ) -> Result<ScrollSubscription, ViewportError> {
        let mut state = self.state.borrow_mut();
        if state.fail_subscriptions {
            return Err(ViewportError::Subscribe("rejected by fake".to_string()));
        }
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Rc::new(RefCell::new(listener))));

        let weak: Weak<RefCell<FakeState>> = Rc::downgrade(&self.state);
        Ok(ScrollSubscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.retain(|(i, _)| *i != id);
            }
        }))
    }

    fn scroll_to_top(&self, behavior: ScrollBehavior) {
        let mut state = self.state.borrow_mut();
        state.scroll_requests.push(behavior);
        state.scroll_y = 0.0;
    }
}
