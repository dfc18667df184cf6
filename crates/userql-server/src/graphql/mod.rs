//! GraphQL surface over the user store.
//!
//! - [`QueryRoot`]: `user`, `users`
//! - [`MutationRoot`]: `createUser`, `deleteUser`

mod mutation;
mod query;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use async_graphql::{EmptySubscription, Schema};

use crate::store::SharedStore;

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema around `store`.
pub fn build_schema(store: SharedStore) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
