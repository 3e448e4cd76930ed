//! Full-window canvas drawing glowing trails behind the pointer
//!
//! The simulation starts on the first mouse move or touch. From then on the
//! pointer is tracked on every move and the chains are redrawn each frame.

use leptos::html;
use leptos::prelude::*;

/// Decorative canvas behind the hero section. Renders nothing visible on
/// the server or when reduced motion is requested.
#[component]
pub fn MouseTrailCanvas() -> impl IntoView {
    let canvas = NodeRef::<html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use super::browser::{prefers_reduced_motion, retain_until_cleanup};

        Effect::new(move |_| {
            let Some(element) = canvas.get() else {
                return;
            };
            if prefers_reduced_motion() {
                return;
            }
            match scene::TrailScene::mount(element) {
                Some(scene) => retain_until_cleanup(scene),
                None => leptos::logging::warn!("cursor trail disabled: no 2d canvas context"),
            }
        });
    }

    view! {
        <canvas node_ref=canvas class="trail-canvas" aria-hidden="true"></canvas>
    }
}

#[cfg(not(feature = "ssr"))]
mod scene {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use leptos::web_sys;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use wasm_bindgen::JsCast;

    use crate::core::FrameControl;
    use crate::core::trail::{Oscillator, Point, TrailConfig, TrailField, curve_segments, stroke_style};
    use crate::ui::browser::{AnimationFrameLoop, EventListenerGuard, random_seed, viewport_size};

    const LINE_WIDTH: f64 = 10.0;

    /// Simulation plus the canvas it draws on
    struct TrailRuntime {
        canvas: web_sys::HtmlCanvasElement,
        context: web_sys::CanvasRenderingContext2d,
        field: Option<TrailField>,
        pointer: Point,
        hue: Oscillator,
        rng: SmallRng,
    }

    impl TrailRuntime {
        fn resize(&self) {
            if let Some((width, height)) = viewport_size() {
                self.canvas.set_width(width as u32);
                self.canvas.set_height(height as u32);
            }
        }

        /// Update the pointer from a mouse or single-touch event
        fn track(&mut self, event: &web_sys::Event) {
            if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
                self.pointer = Point::new(mouse.client_x() as f64, mouse.client_y() as f64);
            } else if let Some(touch) = event.dyn_ref::<web_sys::TouchEvent>() {
                let touches = touch.touches();
                if touches.length() == 1 {
                    if let Some(first) = touches.get(0) {
                        self.pointer = Point::new(first.page_x() as f64, first.page_y() as f64);
                    }
                }
            }
        }

        /// Build the chains at the current pointer; false if already running
        fn activate(&mut self) -> bool {
            if self.field.is_some() {
                return false;
            }
            self.field = Some(TrailField::new(
                TrailConfig::default(),
                self.pointer,
                &mut self.rng,
            ));
            true
        }

        fn render(&mut self) -> FrameControl {
            let Some(field) = self.field.as_mut() else {
                return FrameControl::Stop;
            };
            let ctx = &self.context;
            let width = self.canvas.width() as f64;
            let height = self.canvas.height() as f64;

            let _ = ctx.set_global_composite_operation("source-over");
            ctx.clear_rect(0.0, 0.0, width, height);

            let _ = ctx.set_global_composite_operation("lighter");
            ctx.set_stroke_style_str(&stroke_style(self.hue.update()));
            ctx.set_line_width(LINE_WIDTH);

            field.update(self.pointer);
            for chain in field.chains() {
                let Some(head) = chain.first() else {
                    continue;
                };
                ctx.begin_path();
                ctx.move_to(head.x, head.y);
                for segment in curve_segments(chain) {
                    ctx.quadratic_curve_to(segment.cx, segment.cy, segment.x, segment.y);
                }
                ctx.stroke();
                ctx.close_path();
            }

            FrameControl::Continue
        }
    }

    /// Everything the trail holds on to; dropping it stops the animation and
    /// removes every listener.
    pub(super) struct TrailScene {
        _runtime: Rc<RefCell<TrailRuntime>>,
        _frame_loop: Rc<AnimationFrameLoop>,
        _listeners: Rc<RefCell<Vec<EventListenerGuard>>>,
    }

    impl TrailScene {
        pub(super) fn mount(canvas: web_sys::HtmlCanvasElement) -> Option<Self> {
            let context = canvas
                .get_context("2d")
                .ok()??
                .dyn_into::<web_sys::CanvasRenderingContext2d>()
                .ok()?;
            let document = web_sys::window()?.document()?;

            let mut rng = SmallRng::seed_from_u64(random_seed());
            let runtime = Rc::new(RefCell::new(TrailRuntime {
                canvas,
                context,
                field: None,
                pointer: Point::default(),
                hue: Oscillator::hue(&mut rng),
                rng,
            }));
            runtime.borrow().resize();

            let frame_loop = Rc::new(AnimationFrameLoop::idle({
                let runtime = Rc::downgrade(&runtime);
                move |_| {
                    let Some(runtime) = runtime.upgrade() else {
                        return FrameControl::Stop;
                    };
                    runtime.borrow_mut().render()
                }
            }));

            let listeners = Rc::new(RefCell::new(Vec::new()));
            let start = Starter {
                runtime: Rc::downgrade(&runtime),
                frame_loop: Rc::downgrade(&frame_loop),
                listeners: Rc::downgrade(&listeners),
                document: document.clone(),
            };

            {
                let mut guards = listeners.borrow_mut();
                for event in ["mousemove", "touchstart"] {
                    let start = start.clone();
                    guards.extend(EventListenerGuard::new(&document, event, move |ev| {
                        start.on_first_move(&ev)
                    }));
                }

                let resize_runtime = Rc::downgrade(&runtime);
                guards.extend(EventListenerGuard::window("resize", move |_| {
                    if let Some(runtime) = resize_runtime.upgrade() {
                        runtime.borrow().resize();
                    }
                }));

                // Restart a stopped loop when the window regains focus; blur
                // leaves it running.
                let focus_runtime = Rc::downgrade(&runtime);
                let focus_loop = Rc::downgrade(&frame_loop);
                guards.extend(EventListenerGuard::window("focus", move |_| {
                    let (Some(runtime), Some(frame_loop)) =
                        (focus_runtime.upgrade(), focus_loop.upgrade())
                    else {
                        return;
                    };
                    if runtime.borrow().field.is_some() && !frame_loop.is_running() {
                        frame_loop.resume();
                    }
                }));
            }

            Some(Self {
                _runtime: runtime,
                _frame_loop: frame_loop,
                _listeners: listeners,
            })
        }
    }

    /// Lazy activation on the first pointer event
    #[derive(Clone)]
    struct Starter {
        runtime: Weak<RefCell<TrailRuntime>>,
        frame_loop: Weak<AnimationFrameLoop>,
        listeners: Weak<RefCell<Vec<EventListenerGuard>>>,
        document: web_sys::Document,
    }

    impl Starter {
        fn on_first_move(&self, event: &web_sys::Event) {
            let (Some(runtime), Some(frame_loop), Some(listeners)) = (
                self.runtime.upgrade(),
                self.frame_loop.upgrade(),
                self.listeners.upgrade(),
            ) else {
                return;
            };

            let activated = {
                let mut runtime = runtime.borrow_mut();
                runtime.track(event);
                runtime.activate()
            };
            if !activated {
                return;
            }
            frame_loop.resume();

            // Swap the start listeners for plain tracking ones
            let mut guards = listeners.borrow_mut();
            guards.retain(|guard| !matches!(guard.event(), "mousemove" | "touchstart"));
            for event in ["mousemove", "touchmove"] {
                let runtime = Rc::downgrade(&runtime);
                guards.extend(EventListenerGuard::new(&self.document, event, move |ev| {
                    if let Some(runtime) = runtime.upgrade() {
                        runtime.borrow_mut().track(&ev);
                    }
                }));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../../style/main.css");

    fn rule(selector: &str) -> &'static str {
        let start = STYLESHEET
            .find(&format!("{selector} {{"))
            .unwrap_or_else(|| panic!("missing rule {selector}"));
        let body = &STYLESHEET[start..];
        &body[..body.find('}').unwrap()]
    }

    #[test]
    fn test_canvas_covers_viewport_unscaled() {
        let canvas = rule(".trail-canvas");
        assert!(canvas.contains("position: fixed"));
        assert!(!canvas.contains("width"));
        assert!(!canvas.contains("height"));
        assert!(canvas.contains("pointer-events: none"));
    }
}
