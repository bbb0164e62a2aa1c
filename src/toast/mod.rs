use leptos::prelude::*;
use leptos_dom::helpers::set_timeout;
use std::time::Duration;

/// How long a toast stays on screen before auto-dismissing.
const TOAST_DISMISS_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToastLevel {
    Normal,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub level: ToastLevel,
}

/// Signal-backed notification sink. The app's only obligation towards
/// collaborators is "emit a message and a severity"; everything else
/// (stacking, auto-dismiss) is presentation.
#[derive(Clone, Copy)]
pub(crate) struct Toaster {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(vec![]),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, title: &str, description: &str, level: ToastLevel) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);

        self.items.update(|items| {
            items.push(Toast {
                id,
                title: title.to_string(),
                description: description.to_string(),
                level,
            })
        });

        let items = self.items;
        set_timeout(
            move || items.update(|v| v.retain(|t| t.id != id)),
            Duration::from_millis(TOAST_DISMISS_MS),
        );
    }

    pub fn notify(&self, title: &str, description: &str) {
        self.push(title, description, ToastLevel::Normal);
    }

    pub fn notify_error(&self, title: &str, description: &str) {
        self.push(title, description, ToastLevel::Destructive);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn failure_notifications_are_destructive() {
        let toaster = Toaster::new();
        toaster.notify_error("Could not load data", "connection refused");

        let items = toaster.items.get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].level, ToastLevel::Destructive);
        assert_eq!(items[0].title, "Could not load data");
    }

    #[wasm_bindgen_test]
    fn plain_notifications_stay_normal() {
        let toaster = Toaster::new();
        toaster.notify("Search started", "Searching \"cafe\" in Jakarta");

        let items = toaster.items.get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].level, ToastLevel::Normal);
    }
}

#[component]
pub(crate) fn ToastViewport(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="pointer-events-none fixed bottom-4 right-4 z-50 flex w-full max-w-sm flex-col gap-2">
            {move || {
                toaster
                    .items
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let frame = match toast.level {
                            ToastLevel::Normal => "border bg-card text-card-foreground",
                            ToastLevel::Destructive => {
                                "border-destructive/40 border bg-card text-destructive"
                            }
                        };
                        view! {
                            <div class=format!(
                                "pointer-events-auto rounded-lg px-4 py-3 shadow-md {}",
                                frame,
                            )>
                                <div class="text-sm font-medium">{toast.title}</div>
                                <div class="text-xs text-muted-foreground">{toast.description}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
