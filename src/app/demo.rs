use leptos::prelude::*;
use models::BackTopOptions;
use shared_constants::DEFAULT_THRESHOLD_PX;
use thaw::{Button, ConfigProvider, Flex, FlexGap, Layout, Text};

use super::backtop::BackTop;

const PARAGRAPHS: usize = 60;

/// Long scrolling page with a back to top button.
#[component]
pub fn Demo(options: Option<BackTopOptions>) -> impl IntoView {
    let options = options.unwrap_or_default();
    let threshold = RwSignal::new(options.threshold.unwrap_or(DEFAULT_THRESHOLD_PX));
    let clicks = RwSignal::new(0usize);

    let on_lower = move |_| threshold.update(|t| *t = (*t - 100.0).max(0.0));
    let on_raise = move |_| threshold.update(|t| *t += 100.0);
    let on_back_top = Callback::new(move |_| {
        clicks.update(|c| *c += 1);
        log::info!("Back to top activated");
    });

    view! {
        <ConfigProvider>
            <Layout class="demo-layout">
                <Flex gap=FlexGap::Small>
                    <Button on_click=on_lower>"Lower threshold"</Button>
                    <Button on_click=on_raise>"Raise threshold"</Button>
                    <Text>{move || format!("Threshold: {}px", threshold.get())}</Text>
                    <Text>{move || format!("Activations: {}", clicks.get())}</Text>
                </Flex>
                {(1..=PARAGRAPHS)
                    .map(|n| view! { <p>{format!("Paragraph {n}")}</p> })
                    .collect_view()}
            </Layout>
            <BackTop options=options.clone() threshold on_click=on_back_top text="Top" />
        </ConfigProvider>
    }
}
