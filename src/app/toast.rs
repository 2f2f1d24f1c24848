use leptos::prelude::*;

use super::components::IconGlyph;
use crate::icon::Icon;
use crate::toast::{Notification, Toast, ToastId, ToastQueue};
#[cfg(target_arch = "wasm32")]
use crate::toast::TOAST_DURATION;

/// Handle onto the app's toast queue.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    /// Shows `notification` and schedules it to go away on its own.
    pub fn show(&self, notification: Notification) -> Option<ToastId> {
        let id = self.queue.try_update(|q| q.push(notification))?;
        // timers only exist in the browser
        #[cfg(target_arch = "wasm32")]
        {
            let queue = self.queue;
            set_timeout(
                move || {
                    queue.try_update(|q| q.dismiss(id));
                },
                TOAST_DURATION,
            );
        }
        Some(id)
    }

    /// Snapshot of the toasts on screen, newest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.try_update(|q| q.dismiss(id));
    }
}

pub fn provide_toasts() {
    provide_context(Toasts {
        queue: RwSignal::new(ToastQueue::new()),
    });
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div
            role="region"
            aria-label="Notifications"
            class="fixed bottom-0 right-0 z-[100] flex flex-col gap-2 p-4 w-full sm:max-w-[420px]"
        >
            <For
                each=move || toasts.visible()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            role="status"
                            aria-live="polite"
                            class="toast flex items-start justify-between gap-4 rounded-lg border border-white/10 bg-card p-4 shadow-lg"
                        >
                            <div class="grid gap-1">
                                <div class="text-sm font-semibold">{toast.notification.title}</div>
                                <div class="text-sm opacity-90">
                                    {toast.notification.description}
                                </div>
                            </div>
                            <button
                                type="button"
                                aria-label="Close"
                                class="text-muted-foreground hover:text-foreground"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <IconGlyph icon=Icon::Close classes="w-4 h-4" />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_toaster_renders_queue() {
        let html = Owner::new().with(|| {
            provide_toasts();
            let toasts = use_toasts();
            toasts.show(Notification::new("Saved", "All good"));
            view! { <Toaster /> }.to_html()
        });
        assert!(html.contains("Saved"));
        assert!(html.contains("All good"));
        assert_eq!(html.matches("role=\"status\"").count(), 1);
    }

    #[test]
    fn test_show_replaces_previous_toast() {
        Owner::new().with(|| {
            provide_toasts();
            let toasts = use_toasts();
            toasts.show(Notification::new("First", ""));
            let id = toasts.show(Notification::new("Second", "")).unwrap();

            let visible = toasts.visible();
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].notification.title, "Second");

            toasts.dismiss(id);
            assert!(toasts.visible().is_empty());
        });
    }
}
