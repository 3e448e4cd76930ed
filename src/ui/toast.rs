//! Toast notifications
//!
//! A bounded queue of toasts shown in the corner of the page. Toasts dismiss
//! themselves after a delay or when closed.

use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of toasts to show at once
const MAX_TOASTS: usize = 3;

/// Default lifetime of a toast in milliseconds
pub const TOAST_DURATION_MS: u32 = 5000;

/// Confirmation shown after a completed action
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(TOAST_DURATION_MS),
        }
    }
}

/// Toast with unique ID for tracking
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastItem {
    pub id: u64,
    pub toast: Toast,
}

/// Ordered, bounded list of visible toasts
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: VecDeque<ToastItem>,
    next_id: u64,
}

impl ToastQueue {
    /// Add a toast, evicting the oldest beyond the limit. Returns its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(ToastItem { id, toast });
        while self.items.len() > MAX_TOASTS {
            self.items.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn items(&self) -> impl Iterator<Item = &ToastItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Toast state shared through context
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn show(&self, toast: Toast) {
        self.queue.update(|queue| {
            queue.push(toast);
        });
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(Toast::success(title, message));
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        queue: RwSignal::new(ToastQueue::default()),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster should be provided")
}

/// Toast container; place once near the root
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-viewport" aria-live="polite">
            <For
                each=move || { toaster.queue.get().items().cloned().collect::<Vec<_>>() }
                key=|item| item.id
                children=move |item| view! { <ToastCard item=item toaster=toaster /> }
            />
        </div>
    }
}

#[component]
fn ToastCard(item: ToastItem, toaster: Toaster) -> impl IntoView {
    let id = item.id;
    let (is_exiting, _set_is_exiting) = signal(false);

    if let Some(_ms) = item.toast.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                toaster.dismiss(id);
            });
        }
    }

    view! {
        <div
            class="toast toast-success"
            role="status"
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
        >
            <svg class="toast-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
            </svg>
            <div class="toast-body">
                <h4 class="toast-title">{item.toast.title}</h4>
                <p class="toast-message">{item.toast.message}</p>
            </div>
            <button
                class="toast-close"
                aria-label="Close"
                on:click=move |_| toaster.dismiss(id)
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_bounded() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.push(Toast::success(format!("t{}", i), ""));
        }
        assert_eq!(queue.len(), MAX_TOASTS);
        let titles: Vec<_> = queue.items().map(|i| i.toast.title.as_str()).collect();
        assert_eq!(titles, vec!["t2", "t3", "t4"]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Toast::success("a", ""));
        let second = queue.push(Toast::success("b", ""));
        assert_ne!(first, second);

        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.items().next().map(|i| i.id), Some(second));

        queue.dismiss(999);
        assert!(!queue.is_empty());
    }

    #[test]
    fn test_success_toast_auto_dismisses() {
        let toast = Toast::success("Message sent successfully!", "We'll get back to you within 24 hours.");
        assert_eq!(toast.title, "Message sent successfully!");
        assert_eq!(toast.auto_dismiss_ms, Some(TOAST_DURATION_MS));
    }

    #[test]
    fn test_toaster_success_queues_and_dismisses() {
        leptos::prelude::Owner::new().with(|| {
            let toaster = Toaster {
                queue: RwSignal::new(ToastQueue::default()),
            };
            toaster.success("Message sent successfully!", "We'll get back to you within 24 hours.");

            let id = toaster.queue.with_untracked(|queue| {
                assert_eq!(queue.len(), 1);
                queue.items().next().map(|item| item.id)
            });
            toaster.dismiss(id.unwrap());
            assert!(toaster.queue.with_untracked(ToastQueue::is_empty));
        });
    }
}
