mod app;

pub use app::{
    backtop::BackTop,
    demo::Demo,
    options::{options_from_js, page_options, OptionsError},
    viewport::WindowViewport,
};
pub use models::{BackTopConfig, BackTopOptions, ScrollBehavior, Visibility, ViewportError};
