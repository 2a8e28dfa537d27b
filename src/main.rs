use backtop_ui::{page_options, Demo};
use leptos::prelude::*;
use shared_constants::PAGE_OPTIONS_ATTRIBUTE;

fn main() {
    let _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    let options = page_options(PAGE_OPTIONS_ATTRIBUTE).unwrap_or_else(|e| {
        log::warn!("Ignoring {PAGE_OPTIONS_ATTRIBUTE}: {e}");
        None
    });
    mount_to_body(move || {
        view! { <Demo options /> }
    })
}
