//! Browser glue shared by the animated components
//!
//! Resources that hold JS callbacks (observers, frame loops, listeners) are
//! wrapped in guards that release them on `Drop`, and handed to the current
//! reactive owner with [`retain_until_cleanup`] so unmounting a component
//! tears them down.

#[cfg(not(feature = "ssr"))]
use std::cell::{Cell, RefCell};
#[cfg(not(feature = "ssr"))]
use std::rc::Rc;

#[cfg(not(feature = "ssr"))]
use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::closure::Closure;

#[cfg(not(feature = "ssr"))]
use crate::core::FrameControl;

/// Whether the user asked the OS to minimise motion. Always false on the server.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(query)) = window.match_media("(prefers-reduced-motion: reduce)") {
                return query.matches();
            }
        }
    }
    false
}

/// An empty slot whose content is dropped when the current reactive owner is
/// cleaned up. Lets a component fill a resource in later, e.g. from an effect.
#[cfg(not(feature = "ssr"))]
pub fn cleanup_slot<T: 'static>() -> StoredValue<Option<T>, LocalStorage> {
    let slot = StoredValue::new_local(None);
    on_cleanup(move || {
        slot.try_update_value(|value| {
            value.take();
        });
    });
    slot
}

/// Keep `value` alive until the current reactive owner is cleaned up, then drop it.
#[cfg(not(feature = "ssr"))]
pub fn retain_until_cleanup<T: 'static>(value: T) {
    cleanup_slot().set_value(Some(value));
}

/// Seed for per-page randomness
#[cfg(not(feature = "ssr"))]
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Size of the browser viewport in CSS pixels
#[cfg(not(feature = "ssr"))]
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

// ============================================================================
// Animation frame loop
// ============================================================================

/// A `requestAnimationFrame` loop.
///
/// The callback runs once per frame with the frame timestamp until it returns
/// [`FrameControl::Stop`]. Dropping the loop cancels the pending frame.
#[cfg(not(feature = "ssr"))]
pub struct AnimationFrameLoop {
    inner: Rc<FrameLoopInner>,
}

#[cfg(not(feature = "ssr"))]
struct FrameLoopInner {
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

#[cfg(not(feature = "ssr"))]
impl FrameLoopInner {
    fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(callback) = self.callback.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                self.pending.set(Some(id));
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

#[cfg(not(feature = "ssr"))]
impl AnimationFrameLoop {
    /// Start a loop; the first frame is requested immediately.
    pub fn start<F>(tick: F) -> Self
    where
        F: FnMut(f64) -> FrameControl + 'static,
    {
        let frame_loop = Self::idle(tick);
        frame_loop.resume();
        frame_loop
    }

    /// Build a loop without requesting a frame yet
    pub fn idle<F>(mut tick: F) -> Self
    where
        F: FnMut(f64) -> FrameControl + 'static,
    {
        let inner = Rc::new(FrameLoopInner {
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if tick(timestamp).is_continue() {
                inner.schedule();
            }
        });
        *inner.callback.borrow_mut() = Some(callback);

        Self { inner }
    }

    /// Request the next frame if the loop is not already scheduled
    pub fn resume(&self) {
        self.inner.schedule();
    }

    pub fn is_running(&self) -> bool {
        self.inner.pending.get().is_some()
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        self.inner.cancel();
        self.inner.callback.borrow_mut().take();
    }
}

// ============================================================================
// Event listeners
// ============================================================================

/// A listener on an arbitrary event target, removed on drop
#[cfg(not(feature = "ssr"))]
pub struct EventListenerGuard {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(not(feature = "ssr"))]
impl EventListenerGuard {
    pub fn new<F>(target: &web_sys::EventTarget, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(callback);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn event(&self) -> &'static str {
        self.event
    }

    /// Listen on `window`
    pub fn window<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let window = web_sys::window()?;
        Self::new(window.unchecked_ref(), event, callback)
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
