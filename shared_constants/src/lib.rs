pub const DEFAULT_THRESHOLD_PX: f64 = 300.0;
pub const DEFAULT_SMOOTH: bool = true;
pub const DEFAULT_BOTTOM_PX: f64 = 32.0;
pub const DEFAULT_RIGHT_PX: f64 = 32.0;
pub const DEFAULT_ARIA_LABEL: &str = "Back to top";
pub const DEFAULT_CLASS: &str = "back-top-button";
pub const LABEL_CLASS: &str = "back-top-label";
pub const SCROLL_EVENT: &str = "scroll";
pub const PAGE_OPTIONS_ATTRIBUTE: &str = "data-back-top";
