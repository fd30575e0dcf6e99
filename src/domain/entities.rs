use serde::{Deserialize, Serialize};

/// A platform language. Shared across views as the filter-dropdown catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A signed-in admin session. The token rides along as a bearer header on
/// every subsequent request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub admin_name: Option<String>,
}
