use crate::components::ui::{Badge, BadgeVariant, Card};
use crate::state::{self, AppContext};
use leptos::prelude::*;

const DEFAULT_FOLDER_COLOR: &str = "#3b82f6";

/// User-defined folders with their derived item counts.
#[component]
pub fn FoldersTab() -> impl IntoView {
    let app = expect_context::<AppContext>();

    {
        let app = app.clone();
        Effect::new(move |_| {
            let _ = app.0.current_user.get();
            state::load_folders(app.clone(), false);
        });
    }

    let folders = app.0.folders;
    let loading = move || folders.with(|c| c.is_pending());
    let rows = move || folders.with(|c| c.value().cloned().unwrap_or_default());

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="mb-2 text-2xl font-bold">"Folders"</h2>
                <p class="text-muted-foreground">"Organize businesses into folders"</p>
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
                                <h3 class="mb-2 text-lg font-semibold">"No folders yet"</h3>
                                <p class="text-muted-foreground">
                                    "Create folders to organize your businesses"
                                </p>
                            </Card>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                {rows
                                    .into_iter()
                                    .map(|folder| {
                                        let color = folder
                                            .color
                                            .clone()
                                            .unwrap_or_else(|| DEFAULT_FOLDER_COLOR.to_string());

                                        let description = folder.description.clone().map(|d| {
                                            view! {
                                                <p class="mb-2 text-sm text-muted-foreground">{d}</p>
                                            }
                                        });

                                        // A folder with no recorded items shows 0, never blank.
                                        let count = folder.item_count();

                                        view! {
                                            <Card class="p-4">
                                                <div class="flex items-start gap-3 px-2">
                                                    <span
                                                        class="mt-1 inline-block h-8 w-8 shrink-0 rounded-md"
                                                        style=format!("background-color: {color}")
                                                    ></span>
                                                    <div class="flex-1">
                                                        <h3 class="mb-1 font-semibold">{folder.name.clone()}</h3>
                                                        {description}
                                                        <Badge variant=BadgeVariant::Secondary>
                                                            {format!("{count} places")}
                                                        </Badge>
                                                    </div>
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
