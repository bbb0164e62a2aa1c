use crate::components::ui::{Button, Card, Input, Label, Spinner};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos_dom::helpers::set_timeout;
use std::time::Duration;

/// How long the stubbed search pretends to run.
const FAKE_SEARCH_MS: u64 = 2_000;

/// Search intake form. Collects keyword + location and announces a search
/// run through the toast sink.
///
/// TODO: call the scraping provider and persist rows into search_history /
/// scraping_results; until that lands, submission only simulates the run.
#[component]
pub fn SearchTab() -> impl IntoView {
    let app = expect_context::<AppContext>();
    let toaster = app.0.toaster;

    let keyword: RwSignal<String> = RwSignal::new(String::new());
    let city: RwSignal<String> = RwSignal::new(String::new());
    let province: RwSignal<String> = RwSignal::new(String::new());
    let district: RwSignal<String> = RwSignal::new(String::new());
    let loading: RwSignal<bool> = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Keyword/city/province are enforced as required at the input level.
        let keyword_val = keyword.get_untracked();
        let city_val = city.get_untracked();
        let province_val = province.get_untracked();

        loading.set(true);
        toaster.notify(
            "Search started",
            &format!("Searching \"{keyword_val}\" in {city_val}, {province_val}"),
        );

        set_timeout(
            move || {
                loading.set(false);
                toaster.notify("Search completed", "Results saved to the database");
            },
            Duration::from_millis(FAKE_SEARCH_MS),
        );
    };

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="mb-2 text-2xl font-bold">"Find businesses"</h2>
                <p class="text-muted-foreground">
                    "Enter a keyword and a location to search for businesses on the map"
                </p>
            </div>

            <form class="space-y-4" on:submit=on_submit>
                <div class="grid gap-4 md:grid-cols-2">
                    <div class="space-y-2">
                        <Label html_for="keyword">"Keyword *"</Label>
                        <Input
                            id="keyword"
                            placeholder="e.g. restaurant, hotel, cafe"
                            bind_value=keyword
                            required=true
                        />
                    </div>

                    <div class="space-y-2">
                        <Label html_for="city">"City *"</Label>
                        <Input
                            id="city"
                            placeholder="e.g. Jakarta"
                            bind_value=city
                            required=true
                        />
                    </div>

                    <div class="space-y-2">
                        <Label html_for="province">"Province *"</Label>
                        <Input
                            id="province"
                            placeholder="e.g. DKI Jakarta"
                            bind_value=province
                            required=true
                        />
                    </div>

                    <div class="space-y-2">
                        <Label html_for="district">"District (optional)"</Label>
                        <Input id="district" placeholder="e.g. Menteng" bind_value=district />
                    </div>
                </div>

                <Button class="w-full" attr:disabled=move || loading.get()>
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || loading.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {move || if loading.get() { "Searching..." } else { "Start search" }}
                    </span>
                </Button>
            </form>

            <Card class="p-4">
                <div class="px-2">
                    <h3 class="font-semibold">"Good to know"</h3>
                    <p class="mt-1 text-sm text-muted-foreground">
                        "Search results are stored and show up in the Favorites, Folders and Notes tabs"
                    </p>
                </div>
            </Card>
        </div>
    }
}
