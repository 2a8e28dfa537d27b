mod activation;
mod config;
mod viewport;
mod visibility;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use activation::activate;
pub use config::{BackTopConfig, BackTopOptions};
pub use viewport::{
    watch_visibility, ScrollBehavior, ScrollSubscription, Viewport, ViewportError,
    VisibilityWatch,
};
pub use visibility::{Visibility, VisibilityTracker};
