//! Scroll-triggered reveal wrappers
//!
//! Elements start translated and transparent, and transition into place when
//! they scroll into view.

use leptos::html;
use leptos::prelude::*;

use super::visibility::use_visibility;
use crate::core::reveal::{DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD, split_glyphs, stagger_delay};
use crate::core::{Direction, RevealConfig, RevealStyle};

fn observer_config(threshold: f64, root_margin: &str, trigger_once: bool) -> RevealConfig {
    RevealConfig::new(threshold)
        .with_root_margin(root_margin)
        .with_trigger_once(trigger_once)
}

/// Fade and slide a block into view.
///
/// With `trigger_once = false` the block hides again when it leaves the
/// viewport.
#[component]
pub fn ScrollReveal(
    children: Children,
    #[prop(default = Direction::Up)]
    direction: Direction,
    /// Transition delay in milliseconds
    #[prop(default = 0)]
    delay: u32,
    /// Transition duration in milliseconds
    #[prop(default = 600)]
    duration: u32,
    /// Hidden offset in pixels
    #[prop(default = 30.0)]
    distance: f64,
    #[prop(default = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Observer root margin in CSS margin syntax
    #[prop(default = DEFAULT_ROOT_MARGIN)]
    root_margin: &'static str,
    #[prop(default = true)]
    trigger_once: bool,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_visibility(node, observer_config(threshold, root_margin, trigger_once));
    let style = RevealStyle::new(direction, distance, duration).with_delay(delay);

    view! {
        <div node_ref=node class=class style=move || style.css(visible.get())>
            {children()}
        </div>
    }
}

/// Reveal each item in turn, `stagger` milliseconds apart, once the group
/// scrolls into view. Items keep their order.
#[component]
pub fn StaggeredGrid(
    items: Vec<AnyView>,
    #[prop(default = 100)]
    stagger: u32,
    #[prop(default = 600)]
    duration: u32,
    #[prop(default = 20.0)]
    distance: f64,
    #[prop(default = Direction::Up)]
    direction: Direction,
    #[prop(default = DEFAULT_THRESHOLD)]
    threshold: f64,
    #[prop(default = DEFAULT_ROOT_MARGIN)]
    root_margin: &'static str,
    #[prop(default = true)]
    trigger_once: bool,
    #[prop(optional)]
    class: &'static str,
    #[prop(optional)]
    item_class: &'static str,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_visibility(node, observer_config(threshold, root_margin, trigger_once));

    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, child)| {
            let style = RevealStyle::new(direction, distance, duration)
                .with_delay(stagger_delay(index, stagger, 0));
            view! {
                <div class=item_class style=move || style.css(visible.get())>
                    {child}
                </div>
            }
        })
        .collect_view();

    view! {
        <div node_ref=node class=class>
            {items}
        </div>
    }
}

/// Headline whose characters rise into place one after another.
///
/// Starts after `delay` ms; with reduced motion the text is shown at once.
#[component]
pub fn AnimatedText(
    #[prop(into)]
    text: String,
    /// Initial delay in milliseconds
    #[prop(default = 0)]
    delay: u32,
    /// Delay between characters in milliseconds
    #[prop(default = 30)]
    stagger: u32,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use super::browser::{prefers_reduced_motion, retain_until_cleanup};
        use gloo_timers::callback::Timeout;

        if prefers_reduced_motion() {
            set_visible.set(true);
        } else {
            retain_until_cleanup(Timeout::new(delay, move || set_visible.set(true)));
        }
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (delay, set_visible);
    }

    let glyphs = split_glyphs(&text)
        .into_iter()
        .map(|glyph| {
            let style = RevealStyle::new(Direction::Up, 20.0, 600)
                .with_delay(stagger_delay(glyph.index, stagger, 0));
            view! {
                <span class="glyph" aria-hidden="true" style=move || style.css(visible.get())>
                    {glyph.text.to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <span class=class aria-label=text>
            {glyphs}
        </span>
    }
}
