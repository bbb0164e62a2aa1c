use crate::components::ui::{Badge, BadgeVariant, Card, Input, PaginationBar};
use crate::query::{self, ListControls, Pager};
use crate::state::{self, AppContext};
use leptos::prelude::*;

/// Saved businesses with a free-text filter and fixed-size pagination.
#[component]
pub fn FavoritesTab() -> impl IntoView {
    let app = expect_context::<AppContext>();

    let search_query: RwSignal<String> = RwSignal::new(String::new());
    let controls: RwSignal<ListControls> = RwSignal::new(ListControls::default());

    {
        let app = app.clone();
        Effect::new(move |_| {
            // Re-runs on sign-in/sign-out; the cache dedupes repeat loads.
            let _ = app.0.current_user.get();
            state::load_favorites(app.clone(), false);
        });
    }

    let favorites = app.0.favorites;
    let loading = move || favorites.with(|c| c.is_pending());

    let filtered = Memo::new(move |_| {
        favorites.with(|c| {
            let rows = c.value().cloned().unwrap_or_default();
            controls.with(|ctl| query::filter_records(&rows, &ctl.query))
        })
    });

    let total_pages = Memo::new(move |_| Pager::default().total_pages(filtered.get().len()));

    let page_rows = Memo::new(move |_| {
        let rows = filtered.get();
        let page = controls.with(|ctl| ctl.page);
        Pager::default().slice(&rows, page).to_vec()
    });

    // Query and page live in one value, so a new query restarts at the first
    // page in the same update; the slice above also clamps, so a shrinking
    // result set can never show a stale window.
    let on_query = Callback::new(move |q: String| controls.update(|ctl| ctl.set_query(&q)));

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold">"Favorite businesses"</h2>
                <p class="text-muted-foreground">
                    {move || format!("{} saved", filtered.get().len())}
                </p>
            </div>

            <Input
                placeholder="Filter by business name or address..."
                bind_value=search_query
                on_value=on_query
            />

            <Show
                when=move || !loading()
                fallback=|| view! {
                    <div class="py-8 text-center text-sm text-muted-foreground">"Loading data..."</div>
                }
            >
                {move || {
                    let rows = page_rows.get();
                    if rows.is_empty() {
                        let hint = if controls.with(|ctl| ctl.query.is_empty()) {
                            "Add businesses to your favorites from the search results"
                        } else {
                            "No matching results"
                        };
                        view! {
                            <Card class="p-8 text-center">
                                <h3 class="mb-2 text-lg font-semibold">"No favorites yet"</h3>
                                <p class="text-muted-foreground">{hint}</p>
                            </Card>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="grid gap-4">
                                {rows
                                    .into_iter()
                                    .map(|fav| {
                                        let status = fav.status.clone().unwrap_or_else(|| "new".to_string());

                                        let priority = fav.priority.clone().map(|p| {
                                            let variant = match p.as_str() {
                                                "high" => BadgeVariant::Destructive,
                                                "medium" => BadgeVariant::Default,
                                                _ => BadgeVariant::Secondary,
                                            };
                                            view! { <Badge variant=variant>{p}</Badge> }
                                        });

                                        let address = fav.address.clone().map(|a| {
                                            view! {
                                                <div class="mb-1 text-sm text-muted-foreground">{a}</div>
                                            }
                                        });

                                        let category = fav.category.clone().map(|c| {
                                            view! { <Badge variant=BadgeVariant::Outline class="mt-2">{c}</Badge> }
                                        });

                                        let rating = fav.rating.map(|r| {
                                            let reviews = fav
                                                .review_count
                                                .map(|n| view! {
                                                    <span class="text-muted-foreground">{format!("({n})")}</span>
                                                });
                                            view! {
                                                <div class="mt-3 flex items-center gap-1 text-sm">
                                                    <span class="font-medium">{format!("★ {r}")}</span>
                                                    {reviews}
                                                </div>
                                            }
                                        });

                                        view! {
                                            <Card class="p-4">
                                                <div class="px-2">
                                                    <div class="mb-2 flex items-center gap-2">
                                                        <h3 class="text-lg font-semibold">{fav.name.clone()}</h3>
                                                        <Badge variant=BadgeVariant::Secondary>{status}</Badge>
                                                        {priority}
                                                    </div>
                                                    {address}
                                                    {category}
                                                    {rating}
                                                </div>
                                            </Card>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}

                <PaginationBar
                    page=Signal::derive(move || controls.with(|ctl| ctl.page))
                    total_pages=total_pages
                    on_page=Callback::new(move |p| controls.update(|ctl| ctl.set_page(p)))
                />
            </Show>
        </div>
    }
}
