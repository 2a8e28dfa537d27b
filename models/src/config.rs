use serde::Deserialize;
use shared_constants::{
    DEFAULT_ARIA_LABEL, DEFAULT_BOTTOM_PX, DEFAULT_CLASS, DEFAULT_RIGHT_PX, DEFAULT_SMOOTH,
    DEFAULT_THRESHOLD_PX,
};

use crate::viewport::ScrollBehavior;

/// Caller supplied overrides for a back-to-top button.
///
/// Every field is optional, absent fields fall back to the defaults when
/// resolved. Values are taken as given, a negative threshold simply keeps the
/// button visible.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BackTopOptions {
    pub threshold: Option<f64>,
    pub smooth: Option<bool>,
    #[serde(alias = "className")]
    pub class: Option<String>,
    pub style: Option<String>,
    pub text: Option<String>,
    pub bottom: Option<f64>,
    pub right: Option<f64>,
    pub aria_label: Option<String>,
}

/// Fully resolved configuration for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct BackTopConfig {
    pub threshold: f64,
    pub smooth: bool,
    pub class: String,
    pub style: String,
    pub text: String,
    pub bottom: f64,
    pub right: f64,
    pub aria_label: String,
}

impl Default for BackTopConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD_PX,
            smooth: DEFAULT_SMOOTH,
            class: DEFAULT_CLASS.to_string(),
            style: String::new(),
            text: String::new(),
            bottom: DEFAULT_BOTTOM_PX,
            right: DEFAULT_RIGHT_PX,
            aria_label: DEFAULT_ARIA_LABEL.to_string(),
        }
    }
}

impl BackTopOptions {
    /// Layers `other` on top of `self`, fields present in `other` win.
    pub fn overlay(self, other: BackTopOptions) -> BackTopOptions {
        BackTopOptions {
            threshold: other.threshold.or(self.threshold),
            smooth: other.smooth.or(self.smooth),
            class: other.class.or(self.class),
            style: other.style.or(self.style),
            text: other.text.or(self.text),
            bottom: other.bottom.or(self.bottom),
            right: other.right.or(self.right),
            aria_label: other.aria_label.or(self.aria_label),
        }
    }

    /// Shallow merge of the present fields over the defaults.
    pub fn resolve(self) -> BackTopConfig {
        let defaults = BackTopConfig::default();
        BackTopConfig {
            threshold: self.threshold.unwrap_or(defaults.threshold),
            smooth: self.smooth.unwrap_or(defaults.smooth),
            class: self.class.unwrap_or(defaults.class),
            style: self.style.unwrap_or(defaults.style),
            text: self.text.unwrap_or(defaults.text),
            bottom: self.bottom.unwrap_or(defaults.bottom),
            right: self.right.unwrap_or(defaults.right),
            aria_label: self.aria_label.unwrap_or(defaults.aria_label),
        }
    }
}

impl BackTopConfig {
    pub fn scroll_behavior(&self) -> ScrollBehavior {
        ScrollBehavior::from_smooth(self.smooth)
    }

    pub fn has_label(&self) -> bool {
        !self.text.is_empty()
    }

    /// The inline style of the button.
    ///
    /// The positional offsets come after the caller's style so they always
    /// take effect, whatever the class or the style declare.
    pub fn inline_style(&self) -> String {
        let mut style = self.style.trim().to_string();
        if !style.is_empty() && !style.ends_with(';') {
            style.push(';');
        }
        if !style.is_empty() {
            style.push(' ');
        }
        style.push_str(&format!(
            "position: fixed; bottom: {}px; right: {}px;",
            self.bottom, self.right
        ));
        style
    }
}
