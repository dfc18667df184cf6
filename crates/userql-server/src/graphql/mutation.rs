use async_graphql::{Context, Object, Result, ID};
use userql_shared::User;

use crate::store::SharedStore;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: Option<String>,
    ) -> Result<Option<User>> {
        let mut store = ctx.data::<SharedStore>()?.write().await;
        let user = store.insert(username, email);
        tracing::debug!(id = %user.id, username = %user.username, "created user");
        Ok(Some(user))
    }

    /// Returns `false` when no user has the given id.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<bool>> {
        let mut store = ctx.data::<SharedStore>()?.write().await;
        let removed = store.remove_by_id(&id);
        tracing::debug!(id = %id.as_str(), removed, "delete user");
        Ok(Some(removed))
    }
}
