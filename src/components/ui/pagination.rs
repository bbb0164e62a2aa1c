use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::query::Pager;
use leptos::prelude::*;

/// Numbered page links with previous/next, clamped into `[1, total_pages]`.
/// Boundary clicks are no-ops (clamp, not wrap). Hidden for 0 or 1 pages.
#[component]
pub fn PaginationBar(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    let pager = Pager::default();

    let go = move |target: usize| {
        on_page.run(pager.clamp(target, total_pages.get_untracked()));
    };

    view! {
        <Show when={move || total_pages.get() > 1} fallback=|| ().into_view()>
            <nav class="flex flex-wrap items-center justify-center gap-1" aria-label="Pagination">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:disabled=move || page.get() <= 1
                    on:click=move |_| go(page.get_untracked().saturating_sub(1))
                >
                    "Previous"
                </Button>

                {move || {
                    let current = page.get();
                    (1..=total_pages.get())
                        .map(|n| {
                            let variant = if n == current {
                                ButtonVariant::Outline
                            } else {
                                ButtonVariant::Ghost
                            };
                            view! {
                                <Button
                                    variant=variant
                                    size=ButtonSize::Sm
                                    class="min-w-8"
                                    on:click=move |_| go(n)
                                >
                                    {n.to_string()}
                                </Button>
                            }
                        })
                        .collect_view()
                }}

                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| go(page.get_untracked() + 1)
                >
                    "Next"
                </Button>
            </nav>
        </Show>
    }
}
