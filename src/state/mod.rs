use crate::api::{ApiClient, ApiErrorKind, ApiResult};
use crate::cache::FetchCache;
use crate::models::{AuthUser, BusinessNote, Favorite, Folder, Session};
use crate::storage::{load_user_from_storage, save_user_to_storage};
use crate::toast::Toaster;
use crate::util::now_ms;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use strum::{Display, EnumIter};

/// The 4-way tab container on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub(crate) enum Tab {
    Search,
    Favorites,
    Folders,
    Notes,
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,
    pub current_user: RwSignal<Option<AuthUser>>,
    pub active_tab: RwSignal<Tab>,

    /// Per-tab fetch caches, each keyed by the signed-in user.
    pub favorites: RwSignal<FetchCache<Vec<Favorite>>>,
    pub folders: RwSignal<FetchCache<Vec<Folder>>>,
    pub notes: RwSignal<FetchCache<Vec<BusinessNote>>>,

    pub toaster: Toaster,
}

impl AppState {
    pub fn new() -> Self {
        let stored_client = ApiClient::load_from_storage();
        let stored_user = load_user_from_storage();

        Self {
            api_client: RwSignal::new(stored_client),
            current_user: RwSignal::new(stored_user),
            active_tab: RwSignal::new(Tab::Search),
            favorites: RwSignal::new(FetchCache::new()),
            folders: RwSignal::new(FetchCache::new()),
            notes: RwSignal::new(FetchCache::new()),
            toaster: Toaster::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

/// Persist a fresh session and flip the app into the signed-in state.
pub(crate) fn establish_session(app: &AppContext, session: Session) {
    let mut client = app.0.api_client.get_untracked();
    client.set_token(session.access_token);
    client.save_to_storage();
    save_user_to_storage(&session.user);

    app.0.api_client.set(client);
    app.0.current_user.set(Some(session.user));
}

/// Clear credentials and disable every per-tab cache so in-flight and future
/// fetches for the signed-out user cannot populate state.
pub(crate) fn sign_out(app: &AppContext) {
    let mut client = app.0.api_client.get_untracked();
    client.logout();
    app.0.api_client.set(client);
    app.0.current_user.set(None);

    app.0.favorites.update(|c| c.invalidate());
    app.0.folders.update(|c| c.invalidate());
    app.0.notes.update(|c| c.invalidate());
}

/// Shared load path for the scoped per-tab reads.
///
/// With no signed-in user the cache goes to its disabled state and no request
/// is issued. A late response for a superseded ticket is dropped by the
/// cache; an Unauthorized response forces a sign-out; any other failure is
/// recorded on the cache and surfaced as a destructive toast.
fn load_rows<T, F, Fut>(app: AppContext, cache: RwSignal<FetchCache<Vec<T>>>, force: bool, fetch: F)
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce(ApiClient, String) -> Fut + 'static,
    Fut: Future<Output = ApiResult<Vec<T>>> + 'static,
{
    let user_id = app.0.current_user.get_untracked().map(|u| u.id);

    let Some(uid) = user_id else {
        cache.update(|c| {
            c.begin(None);
        });
        return;
    };

    if !force && cache.with_untracked(|c| c.is_loaded_for(&uid)) {
        return;
    }

    let mut ticket = None;
    cache.update(|c| ticket = c.begin(Some(&uid)));
    let Some(ticket) = ticket else {
        return;
    };

    let client = app.0.api_client.get_untracked();
    spawn_local(async move {
        match fetch(client, uid).await {
            Ok(rows) => {
                cache.update(|c| {
                    let _ = c.resolve(ticket, rows, now_ms());
                });
            }
            Err(e) => {
                if e.kind == ApiErrorKind::Unauthorized {
                    sign_out(&app);
                } else {
                    let msg = e.to_string();
                    let mut current = false;
                    cache.update(|c| current = c.fail(ticket, msg.clone()));
                    // A superseded failure stays silent.
                    if current {
                        app.0.toaster.notify_error("Could not load data", &msg);
                    }
                }
            }
        }
    });
}

pub(crate) fn load_favorites(app: AppContext, force: bool) {
    let cache = app.0.favorites;
    load_rows(app, cache, force, |client, uid| async move {
        client.get_favorites(&uid).await
    });
}

pub(crate) fn load_folders(app: AppContext, force: bool) {
    let cache = app.0.folders;
    load_rows(app, cache, force, |client, uid| async move {
        client.get_folders(&uid).await
    });
}

pub(crate) fn load_notes(app: AppContext, force: bool) {
    let cache = app.0.notes;
    load_rows(app, cache, force, |client, uid| async move {
        client.get_business_notes(&uid).await
    });
}
