use crate::components::ui::Card;
use crate::state::{self, AppContext};
use crate::util::{now_ms, relative_time};
use leptos::prelude::*;

/// Free-text notes against place ids, most recently updated first.
#[component]
pub fn NotesTab() -> impl IntoView {
    let app = expect_context::<AppContext>();

    {
        let app = app.clone();
        Effect::new(move |_| {
            let _ = app.0.current_user.get();
            state::load_notes(app.clone(), false);
        });
    }

    let notes = app.0.notes;
    let loading = move || notes.with(|c| c.is_pending());
    let rows = move || notes.with(|c| c.value().cloned().unwrap_or_default());

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="mb-2 text-2xl font-bold">"Business notes"</h2>
                <p class="text-muted-foreground">"Keep important notes about businesses"</p>
            </div>

            <Show
                when=move || !loading()
                fallback=|| view! {
                    <div class="py-8 text-center text-sm text-muted-foreground">"Loading data..."</div>
                }
            >
                {move || {
                    let rows = rows();
                    if rows.is_empty() {
                        view! {
                            <Card class="p-8 text-center">
                                <h3 class="mb-2 text-lg font-semibold">"No notes yet"</h3>
                                <p class="text-muted-foreground">
                                    "Add notes to the businesses you saved"
                                </p>
                            </Card>
                        }
                        .into_any()
                    } else {
                        let now = now_ms();
                        view! {
                            <div class="grid gap-4">
                                {rows
                                    .into_iter()
                                    .map(|note| {
                                        let updated = relative_time(&note.updated_at, now);
                                        view! {
                                            <Card class="p-4">
                                                <div class="flex-1 px-2">
                                                    <div class="mb-2 flex items-center justify-between">
                                                        <span class="text-sm text-muted-foreground">
                                                            {format!("Place ID: {}", note.place_id)}
                                                        </span>
                                                        <span class="text-xs text-muted-foreground">{updated}</span>
                                                    </div>
                                                    <p class="whitespace-pre-wrap text-sm">{note.note.clone()}</p>
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
            </Show>
        </div>
    }
}
