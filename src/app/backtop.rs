// Copyright 2024-2025 hrzlgnm
// SPDX-License-Identifier: MIT-0

use std::{cell::RefCell, rc::Rc};

use leptos::prelude::*;
use models::{
    activate, watch_visibility, BackTopConfig, BackTopOptions, Visibility, VisibilityWatch,
};
use send_wrapper::SendWrapper;
use shared_constants::LABEL_CLASS;
use thaw::Icon;

use super::viewport::WindowViewport;
use crate::log_fn;

/// A button that shows up once the window has scrolled past `threshold` pixels
/// and scrolls it back to the top when clicked.
///
/// Every prop is optional. `options` is a base layer, the other props take
/// precedence over it and both fall back to the defaults. `on_visibility_change`
/// is told about every show/hide transition.
#[component]
pub fn BackTop(
    #[prop(optional, into)] options: Option<BackTopOptions>,
    #[prop(optional, into)] threshold: MaybeProp<f64>,
    #[prop(optional, into)] smooth: MaybeProp<bool>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] style: MaybeProp<String>,
    #[prop(into, default = None)] icon: Option<icondata_core::Icon>,
    #[prop(optional, into)] text: MaybeProp<String>,
    #[prop(optional, into)] bottom: MaybeProp<f64>,
    #[prop(optional, into)] right: MaybeProp<f64>,
    #[prop(optional, into)] aria_label: MaybeProp<String>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] on_visibility_change: Option<Callback<Visibility>>,
) -> impl IntoView {
    let config = Memo::new(move |_| {
        let props = BackTopOptions {
            threshold: threshold.get(),
            smooth: smooth.get(),
            class: class.get(),
            style: style.get(),
            text: text.get(),
            bottom: bottom.get(),
            right: right.get(),
            aria_label: aria_label.get(),
        };
        options.clone().unwrap_or_default().overlay(props).resolve()
    });
    let threshold = Memo::new(move |_| config.with(|c| c.threshold));
    let visible = RwSignal::new(Visibility::Hidden);

    // one watch per mounted instance, rebound when the threshold changes
    let slot: Rc<RefCell<Option<VisibilityWatch<WindowViewport>>>> = Rc::new(RefCell::new(None));
    let release = SendWrapper::new(Rc::clone(&slot));
    Effect::new(move |_| {
        let threshold = threshold.get();
        let mut slot = slot.borrow_mut();
        let bound = log_fn!(format!("bind_back_top({threshold})"), {
            match slot.take() {
                Some(mut watch) => {
                    let rebound = watch.rebind(threshold);
                    *slot = Some(watch);
                    rebound
                }
                None => WindowViewport::new()
                    .and_then(|viewport| {
                        watch_visibility(viewport, threshold, Visibility::Hidden, move |next| {
                            log::debug!("Back to top changed to {next:?}");
                            visible.set(next);
                            if let Some(on_visibility_change) = on_visibility_change {
                                on_visibility_change.run(next);
                            }
                        })
                    })
                    .map(|watch| *slot = Some(watch)),
            }
        });
        if let Err(e) = bound {
            log::error!("Failed to add scroll event listener: {e}");
        }
    });
    on_cleanup(move || {
        if let Some(watch) = release.borrow_mut().take() {
            log::debug!("Releasing scroll listener for threshold {}", watch.threshold());
        }
    });

    let icon = icon.unwrap_or(icondata::MdiChevronUp);

    let on_activate = move |_| {
        let behavior = config.with_untracked(BackTopConfig::scroll_behavior);
        match WindowViewport::new() {
            Ok(viewport) => activate(&viewport, behavior, || {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }),
            Err(e) => log::error!("Cannot scroll to top: {e}"),
        }
    };

    view! {
        <Show when=move || visible.get().is_visible()>
            <button
                class=move || config.with(|c| c.class.clone())
                style=move || config.with(BackTopConfig::inline_style)
                aria-label=move || config.with(|c| c.aria_label.clone())
                on:click=on_activate
            >
                <Icon icon=icon />
                <Show when=move || config.with(BackTopConfig::has_label)>
                    <span class=LABEL_CLASS>{move || config.with(|c| c.text.clone())}</span>
                </Show>
            </button>
        </Show>
    }
}
