use async_graphql::{Context, Object, Result, ID};
use userql_shared::User;

use crate::store::SharedStore;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Look up a single user. Unknown ids resolve to null.
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(store.find_by_id(&id).cloned())
    }

    /// Every user, in insertion order. Never null, possibly empty.
    async fn users(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<User>>>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(Some(store.all().iter().cloned().map(Some).collect()))
    }
}
