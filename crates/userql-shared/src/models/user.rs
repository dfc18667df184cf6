use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user record. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    /// Serialized as `YYYY-MM-DD`.
    pub created_at: NaiveDate,
}

impl User {
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

    pub fn created_at_string(&self) -> String {
        self.created_at.format(Self::DATE_FORMAT).to_string()
    }
}

#[cfg(feature = "graphql")]
#[async_graphql::Object]
impl User {
    async fn id(&self) -> async_graphql::ID {
        async_graphql::ID(self.id.clone())
    }

    async fn username(&self) -> &str {
        &self.username
    }

    async fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    async fn created_at(&self) -> Option<String> {
        Some(self.created_at_string())
    }
}
