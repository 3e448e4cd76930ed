//! Viewport visibility tracking
//!
//! `use_visibility` reports whether an element has scrolled into view,
//! driven by an `IntersectionObserver` and a [`RevealState`].

use leptos::html::ElementType;
use leptos::prelude::*;

use crate::core::RevealConfig;

#[cfg(not(feature = "ssr"))]
use std::cell::Cell;
#[cfg(not(feature = "ssr"))]
use std::rc::Rc;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(not(feature = "ssr"))]
use super::browser::{prefers_reduced_motion, retain_until_cleanup};
#[cfg(not(feature = "ssr"))]
use crate::core::RevealState;

/// Track the visibility of the element behind `target`.
///
/// With reduced motion, or without `IntersectionObserver`, the element is
/// reported visible as soon as it mounts. The observer is disconnected when
/// the calling component is cleaned up.
pub fn use_visibility<E>(target: NodeRef<E>, config: RevealConfig) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: leptos::wasm_bindgen::JsCast + Clone + 'static,
{
    let (visible, set_visible) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        let reduced_motion = prefers_reduced_motion();
        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if reduced_motion {
                set_visible.set(RevealState::always_visible().is_visible());
                return;
            }
            let element: &web_sys::Element = element.unchecked_ref();
            match VisibilityObserver::attach(element, &config, set_visible) {
                Some(observer) => retain_until_cleanup(observer),
                None => set_visible.set(true),
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (target, config, set_visible);
    }

    visible
}

/// Live `IntersectionObserver`; disconnected on drop
#[cfg(not(feature = "ssr"))]
struct VisibilityObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(not(feature = "ssr"))]
impl VisibilityObserver {
    fn attach(
        element: &web_sys::Element,
        config: &RevealConfig,
        visible: WriteSignal<bool>,
    ) -> Option<Self> {
        let state = Rc::new(Cell::new(RevealState::new(config.trigger_once)));

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let mut current = state.get();
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if current.observe(entry.is_intersecting()) {
                        visible.set(current.is_visible());
                    }
                }
                state.set(current);

                if current.is_settled() {
                    observer.disconnect();
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin);

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_render_starts_hidden() {
        leptos::prelude::Owner::new().with(|| {
            let target = NodeRef::<leptos::html::Div>::new();
            let visible = use_visibility(target, RevealConfig::default());
            assert!(!visible.get_untracked());
        });
    }
}
