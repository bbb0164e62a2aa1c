use crate::components::tabs::{FavoritesTab, FoldersTab, NotesTab, SearchTab};
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Input, Label, Spinner, TabsList, TabsTrigger,
};
use crate::state::{self, AppContext, Tab};
use leptos::prelude::*;
use leptos::task::spawn_local;
use strum::IntoEnumIterator;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);

    let app_state = expect_context::<AppContext>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let app_state = app_state.clone();

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            let client = app_state.0.api_client.get_untracked();
            match client.login(&email_val, &password_val).await {
                Ok(session) => {
                    state::establish_session(&app_state, session);
                    let _ = window().location().set_href("/");
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-sm flex-col justify-center px-4 py-10">
                <div class="mb-6 flex items-center justify-center">
                    <a href="/" class="text-sm font-medium text-foreground">"MapLeads"</a>
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle class="text-lg">"Log in"</CardTitle>
                        <CardDescription class="text-xs">"Use your email and password to continue."</CardDescription>
                    </CardHeader>

                    <CardContent>
                        <form class="flex flex-col gap-3" on:submit=on_submit>
                            <div class="flex flex-col gap-1.5">
                                <Label html_for="email" class="text-xs">"Email"</Label>
                                <Input
                                    id="email"
                                    r#type="email"
                                    placeholder="you@example.com"
                                    bind_value=email
                                    required=true
                                    class="h-8 text-sm"
                                />
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <Label html_for="password" class="text-xs">"Password"</Label>
                                <Input
                                    id="password"
                                    r#type="password"
                                    placeholder="••••••••"
                                    bind_value=password
                                    required=true
                                    class="h-8 text-sm"
                                />
                            </div>

                            <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                                {move || {
                                    error.get().map(|e| {
                                        view! {
                                            <Alert class="border-destructive/30">
                                                <AlertDescription class="text-destructive text-xs">
                                                    {e}
                                                </AlertDescription>
                                            </Alert>
                                        }
                                    })
                                }}
                            </Show>

                            <Button class="w-full" attr:disabled=move || loading.get()>
                                <span class="inline-flex items-center gap-2">
                                    <Show when=move || loading.get() fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    {move || if loading.get() { "Signing in..." } else { "Continue" }}
                                </span>
                            </Button>

                            <div class="pt-1 text-xs text-muted-foreground">
                                "No account? "
                                <a class="text-primary underline underline-offset-4" href="/signup">"Sign up"</a>
                            </div>
                        </form>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let email: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let confirm_password: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let success: RwSignal<bool> = RwSignal::new(false);

    let app_state = expect_context::<AppContext>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let confirm_password_val = confirm_password.get();
        let app_state = app_state.clone();

        if password_val != confirm_password_val {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        if password_val.len() < 6 {
            error.set(Some("Password must be at least 6 characters".to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            let client = app_state.0.api_client.get_untracked();
            match client.signup(&email_val, &password_val).await {
                Ok(_session) => {
                    // The backend may return a session right away; we keep UX
                    // simple and ask the user to sign in.
                    success.set(true);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-sm flex-col justify-center px-4 py-10">
                <div class="mb-6 flex items-center justify-center">
                    <a href="/" class="text-sm font-medium text-foreground">"MapLeads"</a>
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle class="text-lg">"Create account"</CardTitle>
                        <CardDescription class="text-xs">"Sign up with your email address."</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Show
                            when=move || !success.get()
                            fallback=move || view! {
                                <Alert>
                                    <AlertDescription class="text-xs">
                                        "Account created. You can now "
                                        <a class="text-primary underline underline-offset-4" href="/login">"log in"</a>
                                        "."
                                    </AlertDescription>
                                </Alert>
                            }
                        >
                            <form class="flex flex-col gap-3" on:submit=on_submit.clone()>
                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="email" class="text-xs">"Email"</Label>
                                    <Input
                                        id="email"
                                        r#type="email"
                                        placeholder="you@example.com"
                                        bind_value=email
                                        required=true
                                        class="h-8 text-sm"
                                    />
                                </div>

                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="password" class="text-xs">"Password"</Label>
                                    <Input
                                        id="password"
                                        r#type="password"
                                        placeholder="••••••••"
                                        bind_value=password
                                        required=true
                                        class="h-8 text-sm"
                                    />
                                </div>

                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="confirm_password" class="text-xs">"Confirm password"</Label>
                                    <Input
                                        id="confirm_password"
                                        r#type="password"
                                        placeholder="••••••••"
                                        bind_value=confirm_password
                                        required=true
                                        class="h-8 text-sm"
                                    />
                                </div>

                                <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                                    {move || {
                                        error.get().map(|e| {
                                            view! {
                                                <Alert class="border-destructive/30">
                                                    <AlertDescription class="text-destructive text-xs">
                                                        {e}
                                                    </AlertDescription>
                                                </Alert>
                                            }
                                        })
                                    }}
                                </Show>

                                <Button class="w-full" attr:disabled=move || loading.get()>
                                    <span class="inline-flex items-center gap-2">
                                        <Show when=move || loading.get() fallback=|| ().into_view()>
                                            <Spinner />
                                        </Show>
                                        {move || if loading.get() { "Creating..." } else { "Continue" }}
                                    </span>
                                </Button>

                                <div class="pt-1 text-xs text-muted-foreground">
                                    "Already have an account? "
                                    <a class="text-primary underline underline-offset-4" href="/login">"Log in"</a>
                                </div>
                            </form>
                        </Show>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let current_user = app_state.0.current_user;
    let active_tab = app_state.0.active_tab;

    let on_logout = move |_| {
        state::sign_out(&app_state);
        let _ = window().location().set_href("/login");
    };

    let welcome = move || {
        current_user
            .get()
            .and_then(|u| u.email)
            .map(|email| format!("Welcome, {email}"))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    view! {
        <div class="min-h-screen bg-background">
            <header class="border-b bg-card shadow-sm">
                <div class="mx-auto flex w-full max-w-[1080px] items-center justify-between px-4 py-4">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-bold">"MapLeads"</h1>
                        <p class="text-sm text-muted-foreground">{welcome}</p>
                    </div>
                    <Button variant=ButtonVariant::Outline on:click=on_logout>
                        "Log out"
                    </Button>
                </div>
            </header>

            <main class="mx-auto w-full max-w-[1080px] px-4 py-8">
                <Card class="p-6">
                    <div class="px-2">
                        <TabsList>
                            {Tab::iter()
                                .map(|tab| {
                                    view! {
                                        <TabsTrigger
                                            active=Signal::derive(move || active_tab.get() == tab)
                                            on_select=Callback::new(move |_| active_tab.set(tab))
                                        >
                                            {tab.to_string()}
                                        </TabsTrigger>
                                    }
                                })
                                .collect_view()}
                        </TabsList>

                        {move || match active_tab.get() {
                            Tab::Search => view! { <SearchTab /> }.into_any(),
                            Tab::Favorites => view! { <FavoritesTab /> }.into_any(),
                            Tab::Folders => view! { <FoldersTab /> }.into_any(),
                            Tab::Notes => view! { <NotesTab /> }.into_any(),
                        }}
                    </div>
                </Card>
            </main>
        </div>
    }
}

#[component]
pub fn RootPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let is_authenticated = move || app_state.0.api_client.get().is_authenticated();

    view! {
        <Show when=is_authenticated fallback=move || view! { <LoginPage /> }>
            <HomePage />
        </Show>
    }
}
