use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the auth API.
///
/// The backend user object carries many more fields; we only keep what the
/// app renders, and tolerate everything else being absent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

/// A user-saved reference to an external place/business record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Favorite {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub last_contacted: Option<String>,
    pub favorited_at: String,
}

/// Embedded one-to-many aggregation row: `select=*,folder_items(count)`
/// yields `"folder_items": [{"count": N}]` on each folder.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FolderItemCount {
    pub count: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Folder {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    /// Derived, never stored redundantly. Missing embed means zero items.
    #[serde(default)]
    pub folder_items: Vec<FolderItemCount>,
}

impl Folder {
    pub fn item_count(&self) -> i64 {
        self.folder_items.first().map(|c| c.count).unwrap_or(0)
    }
}

/// Membership record linking one place to one folder.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[allow(dead_code)]
pub(crate) struct FolderItem {
    pub id: String,
    pub folder_id: String,
    pub place_id: String,
    pub added_at: String,
}

/// Free-text annotation against a place id (not a foreign key to a places
/// table; the place itself lives with the external provider).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct BusinessNote {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub place_id: String,
    pub note: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A past search invocation. `results_count` is informational only and is
/// never reconciled against stored results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[allow(dead_code)]
pub(crate) struct SearchHistory {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub keyword: String,
    pub city: String,
    pub province: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub results_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A place record produced by a search run, linked to that search's id.
/// Write-only from the (stubbed) search flow; nothing renders these yet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[allow(dead_code)]
pub(crate) struct ScrapingResult {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub search_id: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_tolerates_null_optionals() {
        let json = r#"{
            "id": "f1",
            "user_id": null,
            "place_id": "p1",
            "name": "Kopi Kenangan",
            "address": null,
            "category": null,
            "rating": null,
            "review_count": null,
            "status": null,
            "priority": null,
            "favorited_at": "2024-05-01T10:00:00+00:00"
        }"#;
        let fav: Favorite = serde_json::from_str(json).expect("favorite should parse");
        assert_eq!(fav.name, "Kopi Kenangan");
        assert!(fav.address.is_none());
        assert!(fav.rating.is_none());
    }

    #[test]
    fn folder_count_defaults_to_zero_without_embed() {
        let json = r#"{
            "id": "d1",
            "user_id": "u1",
            "name": "Prospects",
            "created_at": "2024-05-01T10:00:00+00:00",
            "updated_at": "2024-05-01T10:00:00+00:00"
        }"#;
        let folder: Folder = serde_json::from_str(json).expect("folder should parse");
        assert_eq!(folder.item_count(), 0);
    }

    #[test]
    fn folder_count_reads_first_embed_row() {
        let json = r#"{
            "id": "d1",
            "name": "Prospects",
            "created_at": "t",
            "updated_at": "t",
            "folder_items": [{"count": 7}]
        }"#;
        let folder: Folder = serde_json::from_str(json).expect("folder should parse");
        assert_eq!(folder.item_count(), 7);
    }
}
