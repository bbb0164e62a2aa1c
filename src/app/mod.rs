use crate::pages::{LoginPage, RegistrationPage, RootPage};
use crate::state::{AppContext, AppState};
use crate::toast::ToastViewport;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let app_state = AppState::new();
    let toaster = app_state.toaster;
    provide_context(AppContext(app_state));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("login") view=LoginPage />
                <Route path=path!("signup") view=RegistrationPage />
                <Route path=path!("") view=RootPage />
            </Routes>
        </Router>
        <ToastViewport toaster=toaster />
    }
}
