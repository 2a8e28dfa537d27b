use js_sys::Function;
use leptos::ev::Event;
use models::{ScrollBehavior, ScrollSubscription, Viewport, ViewportError};
use shared_constants::SCROLL_EVENT;
use wasm_bindgen::{closure::Closure, JsCast};

/// The browser window as a [`Viewport`].
#[derive(Clone, Debug)]
pub struct WindowViewport {
    window: web_sys::Window,
}

impl WindowViewport {
    pub fn new() -> Result<Self, ViewportError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(ViewportError::Unavailable)
    }
}

impl From<web_sys::Window> for WindowViewport {
    fn from(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn subscribe(
        &self,
        mut listener: Box<dyn FnMut()>,
    ) -> Result<ScrollSubscription, ViewportError> {
        let scroll_listener = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_| listener()));

        let opt = web_sys::AddEventListenerOptions::new();
        opt.set_passive(true);
        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                SCROLL_EVENT,
                scroll_listener.as_ref().unchecked_ref::<Function>(),
                &opt,
            )
            .map_err(|e| ViewportError::Subscribe(format!("{e:?}")))?;

        let window = self.window.clone();
        Ok(ScrollSubscription::new(move || {
            if let Err(e) = window.remove_event_listener_with_callback(
                SCROLL_EVENT,
                scroll_listener.as_ref().unchecked_ref::<Function>(),
            ) {
                log::error!("Failed to remove scroll event listener: {e:?}")
            }
            // the closure must outlive its registration
            drop(scroll_listener);
        }))
    }

    fn scroll_to_top(&self, behavior: ScrollBehavior) {
        let opt = web_sys::ScrollToOptions::new();
        opt.set_top(0.0);
        opt.set_left(0.0);
        opt.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&opt);
    }
}
