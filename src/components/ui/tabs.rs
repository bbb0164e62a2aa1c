use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::tw_merge;

mod components {
    use super::*;
    clx! {TabsList, div, "mb-6 grid w-full grid-cols-4 gap-1 rounded-lg bg-muted p-1"}
}

#[allow(unused_imports)]
pub use components::*;

#[component]
pub fn TabsTrigger(
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_select: Callback<()>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        tw_merge!(
            "inline-flex items-center justify-center gap-2 rounded-md px-3 py-1.5 text-sm font-medium transition-all hover:cursor-pointer",
            if active.get() {
                "bg-background text-foreground shadow-sm"
            } else {
                "text-muted-foreground hover:text-foreground"
            }
        )
    };

    view! {
        <button type="button" class=class on:click=move |_| on_select.run(())>
            {children()}
        </button>
    }
}
