//! Animated statistics counter

use leptos::html;
use leptos::prelude::*;

use super::visibility::use_visibility;
use crate::core::RevealConfig;
use crate::core::counter::DEFAULT_COUNT_DURATION_MS;

/// Fraction of the counter that must be on screen before it starts
const COUNTER_THRESHOLD: f64 = 0.3;

/// Renders `{prefix}{count}{suffix}`, counting from 0 to `end` the first
/// time it scrolls into view.
#[component]
pub fn AnimatedCounter(
    end: i64,
    /// Duration of the count in milliseconds
    #[prop(default = DEFAULT_COUNT_DURATION_MS)]
    duration: f64,
    #[prop(optional)]
    prefix: &'static str,
    #[prop(optional)]
    suffix: &'static str,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let node = NodeRef::<html::Span>::new();
    let visible = use_visibility(node, RevealConfig::new(COUNTER_THRESHOLD));
    let (count, set_count) = signal(0i64);

    #[cfg(not(feature = "ssr"))]
    {
        use super::browser::{AnimationFrameLoop, cleanup_slot};
        use crate::core::CountUp;

        let frame_loop = cleanup_slot::<AnimationFrameLoop>();

        Effect::new(move |_| {
            if !visible.get() || frame_loop.with_value(Option::is_some) {
                return;
            }
            let mut counter = CountUp::new(end, duration);
            counter.start_counting();
            frame_loop.set_value(Some(AnimationFrameLoop::start(move |timestamp| {
                let control = counter.tick(timestamp);
                set_count.set(counter.current());
                control
            })));
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (end, duration, visible, set_count);
    }

    view! {
        <span node_ref=node class=class>
            {prefix}
            {move || count.get()}
            {suffix}
        </span>
    }
}
