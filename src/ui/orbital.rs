//! Rotating orbit of feature cards

use leptos::prelude::*;

use super::icon::Icon;
use crate::core::OrbitState;
use crate::core::content::Feature;

/// Shown under the orbit
const ORBIT_HINT: &str = "Click on any feature to learn more";

/// First `words` words of a title, used as the label under each node
fn short_title(title: &str, words: usize) -> String {
    title.split_whitespace().take(words).collect::<Vec<_>>().join(" ")
}

/// Feature cards orbiting a central ornament.
///
/// Clicking a card stops the rotation and brings it to the front with its
/// description; clicking it again, or anywhere else in the orbit, resumes.
#[component]
pub fn OrbitalFeatureCards(features: Vec<Feature>) -> impl IntoView {
    let orbit = RwSignal::new(OrbitState::new(features.len()));
    let auto_rotating = Memo::new(move |_| orbit.with(|o| o.auto_rotating()));

    // Tick only while rotating; the interval is dropped when rotation stops
    #[cfg(not(feature = "ssr"))]
    {
        use super::browser::retain_until_cleanup;
        use crate::core::orbit::ROTATION_TICK_MS;
        use gloo_timers::callback::Interval;

        Effect::new(move |_| {
            if auto_rotating.get() {
                retain_until_cleanup(Interval::new(ROTATION_TICK_MS, move || {
                    orbit.update(|o| o.tick());
                }));
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = auto_rotating;
    }

    let nodes = features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            let placement = Memo::new(move |_| orbit.with(|o| o.placement(index)));
            let focused = Memo::new(move |_| orbit.with(|o| o.is_focused(index)));

            view! {
                <div
                    class="orbit-node"
                    class:orbit-node-focused=move || focused.get()
                    role="button"
                    tabindex="0"
                    aria-pressed=move || focused.get().to_string()
                    aria-label=feature.title
                    style=move || placement.get().css(focused.get())
                    on:click=move |ev| {
                        ev.stop_propagation();
                        orbit.update(|o| o.toggle(index));
                    }
                >
                    <div class="orbit-glow"></div>
                    <div class="orbit-icon">
                        <Icon name=feature.icon class="w-6 h-6"/>
                    </div>
                    <div class="orbit-title">{short_title(feature.title, 3)}</div>
                    <Show when=move || focused.get()>
                        <div class="orbit-detail card">
                            <div class="orbit-detail-icon">
                                <Icon name=feature.icon class="w-7 h-7"/>
                            </div>
                            <h3 class="card-title">{feature.title}</h3>
                            <p class="card-text">{feature.description}</p>
                        </div>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="orbit" on:click=move |_| orbit.update(|o| o.clear_focus())>
            <div class="orbit-stage">
                <div class="orbit-core">
                    <div class="orbit-core-ping"></div>
                    <div class="orbit-core-ping orbit-core-ping-late"></div>
                    <div class="orbit-core-dot"></div>
                </div>
                <div class="orbit-ring"></div>
                <div class="orbit-ring orbit-ring-outer"></div>
                {nodes}
            </div>
            <p class="orbit-hint">{ORBIT_HINT}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title() {
        assert_eq!(short_title("Online Booking 24/7", 3), "Online Booking 24/7");
        assert_eq!(short_title("Team Planning & Access Control", 3), "Team Planning &");
        assert_eq!(short_title("", 3), "");
    }

    #[test]
    fn test_hint_invites_a_click() {
        assert!(ORBIT_HINT.starts_with("Click on any feature"));
    }
}
