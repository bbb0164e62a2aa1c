use crate::models::{BusinessNote, Favorite, Folder, Session};
use crate::storage::{TOKEN_KEY, USER_KEY};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn unauthorized() -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: "Unauthorized".to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let mut cfg = Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "dev-anon-key".to_string(),
        };

        // We support BOTH `window.ENV.SUPABASE_URL` (documented in README) and
        // `window.ENV.supabase_url` (legacy/implementation detail).
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    if let Some(url) = read_env_string(&env, "SUPABASE_URL", "supabase_url") {
                        cfg.supabase_url = url;
                    }
                    if let Some(key) =
                        read_env_string(&env, "SUPABASE_ANON_KEY", "supabase_anon_key")
                    {
                        cfg.supabase_anon_key = key;
                    }
                }
            }
        }

        cfg
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env_string(env: &js_sys::Object, key: &str, fallback_key: &str) -> Option<String> {
    for k in [key, fallback_key] {
        if let Ok(value) = js_sys::Reflect::get(env, &(*k).into()) {
            if let Some(s) = value.as_string() {
                return Some(s);
            }
        }
    }
    None
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Typed client for the hosted datastore: the rows API (`/rest/v1`) for
/// scoped reads and the auth API (`/auth/v1`) for password sessions.
#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) anon_key: String,
    pub(crate) token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self {
            base_url,
            anon_key,
            token: None,
        }
    }

    pub fn load_from_storage() -> Self {
        let env = EnvConfig::new();
        let token = leptos::web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten());

        Self {
            base_url: env.supabase_url,
            anon_key: env.supabase_anon_key,
            token,
        }
    }

    pub fn save_to_storage(&self) {
        if let Some(storage) =
            leptos::web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        {
            if let Some(token) = &self.token {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }

    pub fn clear_storage() {
        if let Some(storage) =
            leptos::web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn logout(&mut self) {
        self.token = None;
        Self::clear_storage();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Bearer credential for a request: the user token when signed in, the
    /// anon key otherwise. The `apikey` header always carries the anon key.
    pub(crate) fn bearer_token(&self) -> &str {
        self.token.as_deref().unwrap_or(&self.anon_key)
    }

    fn with_auth_headers(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.bearer_token()))
    }

    /// Build the rows-API URL for "all rows of `table` where user_id = U,
    /// ordered by `order_col` descending".
    pub(crate) fn rows_url(&self, table: &str, select: &str, user_id: &str, order_col: &str) -> String {
        format!(
            "{}/rest/v1/{}?select={}&user_id=eq.{}&order={}.desc",
            self.base_url,
            table,
            select,
            urlencoding::encode(user_id),
            order_col,
        )
    }

    async fn request_rows(&self, url: String, ctx: &str) -> ApiResult<serde_json::Value> {
        let client = reqwest::Client::new();
        let req = self.with_auth_headers(client.get(url));

        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else if res.status().as_u16() == 401 {
            Err(ApiError::unauthorized())
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, ctx))
        }
    }

    /// Deserialize a rows-API response array, skipping rows that do not match
    /// the expected shape instead of failing the whole list.
    pub(crate) fn parse_rows<T: serde::de::DeserializeOwned>(data: serde_json::Value) -> Vec<T> {
        let list = data.as_array().cloned().unwrap_or_default();

        let mut out: Vec<T> = Vec::with_capacity(list.len());
        for item in list {
            if let Ok(row) = serde_json::from_value::<T>(item) {
                out.push(row);
            }
        }
        out
    }

    pub async fn get_favorites(&self, user_id: &str) -> ApiResult<Vec<Favorite>> {
        let url = self.rows_url("favorites", "*", user_id, "favorited_at");
        let data = self.request_rows(url, "Failed to load favorites").await?;
        Ok(Self::parse_rows(data))
    }

    /// Folders with a derived item count. The embedded aggregation is the
    /// backend's count provider; rows without the embed read as zero items.
    pub async fn get_folders(&self, user_id: &str) -> ApiResult<Vec<Folder>> {
        let url = self.rows_url("folders", "*,folder_items(count)", user_id, "created_at");
        let data = self.request_rows(url, "Failed to load folders").await?;
        Ok(Self::parse_rows(data))
    }

    pub async fn get_business_notes(&self, user_id: &str) -> ApiResult<Vec<BusinessNote>> {
        let url = self.rows_url("business_notes", "*", user_id, "updated_at");
        let data = self.request_rows(url, "Failed to load notes").await?;
        Ok(Self::parse_rows(data))
    }

    async fn request_auth(&self, path: &str, body: &CredentialsRequest) -> ApiResult<Session> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        let req = client.post(url).header("apikey", &self.anon_key).json(body);

        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            if status.as_u16() == 401 {
                Err(ApiError::unauthorized())
            } else {
                Err(ApiError {
                    kind: ApiErrorKind::Http,
                    message: auth_error_message(&body),
                })
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        self.request_auth(
            "/auth/v1/token?grant_type=password",
            &CredentialsRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    pub async fn signup(&self, email: &str, password: &str) -> ApiResult<Session> {
        self.request_auth(
            "/auth/v1/signup",
            &CredentialsRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }
}

/// The auth API reports failures as JSON with one of a few message keys;
/// fall back to the raw body when none is present.
pub(crate) fn auth_error_message(body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_description", "msg", "message", "error"] {
            if let Some(s) = v.get(key).and_then(|m| m.as_str()) {
                return s.to_string();
            }
        }
    }
    if body.trim().is_empty() {
        "Request failed".to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessNote, Favorite, Folder};

    fn test_client() -> ApiClient {
        ApiClient::new(
            "http://localhost:54321".to_string(),
            "anon".to_string(),
        )
    }

    #[test]
    fn rows_url_scopes_by_user_and_orders_descending() {
        let client = test_client();
        assert_eq!(
            client.rows_url("favorites", "*", "u-1", "favorited_at"),
            "http://localhost:54321/rest/v1/favorites?select=*&user_id=eq.u-1&order=favorited_at.desc"
        );
    }

    #[test]
    fn rows_url_percent_encodes_user_id() {
        let client = test_client();
        let url = client.rows_url("favorites", "*", "u 1", "favorited_at");
        assert!(url.contains("user_id=eq.u%201"), "got {url}");
    }

    #[test]
    fn folder_url_embeds_count_aggregation() {
        let client = test_client();
        let url = client.rows_url("folders", "*,folder_items(count)", "u-1", "created_at");
        assert!(url.contains("select=*,folder_items(count)"));
        assert!(url.contains("order=created_at.desc"));
    }

    #[test]
    fn bearer_prefers_user_token_over_anon_key() {
        let mut client = test_client();
        assert_eq!(client.bearer_token(), "anon");
        client.set_token("jwt".to_string());
        assert_eq!(client.bearer_token(), "jwt");
        client.token = None;
        assert_eq!(client.bearer_token(), "anon");
    }

    #[test]
    fn is_authenticated_tracks_token() {
        let mut client = test_client();
        assert!(!client.is_authenticated());
        client.set_token("jwt".to_string());
        assert!(client.is_authenticated());
    }

    #[test]
    fn parse_rows_skips_malformed_rows() {
        let data = serde_json::json!([
            {
                "id": "f1",
                "place_id": "p1",
                "name": "Kopi Kenangan",
                "favorited_at": "2024-05-01T10:00:00+00:00"
            },
            { "id": "broken" },
            {
                "id": "f2",
                "place_id": "p2",
                "name": "Starbucks",
                "address": null,
                "favorited_at": "2024-05-02T10:00:00+00:00"
            }
        ]);
        let rows: Vec<Favorite> = ApiClient::parse_rows(data);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Kopi Kenangan");
        assert!(rows[1].address.is_none());
    }

    #[test]
    fn parse_rows_of_non_array_is_empty() {
        let rows: Vec<BusinessNote> = ApiClient::parse_rows(serde_json::json!({"error": "x"}));
        assert!(rows.is_empty());
    }

    #[test]
    fn folder_rows_carry_embedded_counts() {
        let data = serde_json::json!([
            {
                "id": "d1",
                "name": "Prospects",
                "created_at": "t",
                "updated_at": "t",
                "folder_items": [{"count": 3}]
            },
            {
                "id": "d2",
                "name": "Empty",
                "created_at": "t",
                "updated_at": "t",
                "folder_items": []
            }
        ]);
        let rows: Vec<Folder> = ApiClient::parse_rows(data);
        assert_eq!(rows[0].item_count(), 3);
        assert_eq!(rows[1].item_count(), 0);
    }

    #[test]
    fn session_contract_deserialize() {
        // Contract based on the auth API's password-grant response.
        let json = r#"{
            "access_token": "jwt-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {"id": "u-1", "email": "u@example.com", "aud": "authenticated"}
        }"#;
        let session: Session = serde_json::from_str(json).expect("session should parse");
        assert_eq!(session.access_token, "jwt-token");
        assert_eq!(session.user.id, "u-1");
        assert_eq!(session.user.email.as_deref(), Some("u@example.com"));
    }

    #[test]
    fn auth_error_message_extraction() {
        assert_eq!(
            auth_error_message(r#"{"error_description": "Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(
            auth_error_message(r#"{"msg": "Signups not allowed"}"#),
            "Signups not allowed"
        );
        assert_eq!(auth_error_message("plain text"), "plain text");
        assert_eq!(auth_error_message(""), "Request failed");
    }
}
