use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use userql_shared::User;

/// Store handle shared between resolvers. Each operation holds the lock for
/// its whole duration.
pub type SharedStore = Arc<RwLock<UserStore>>;

type Clock = fn() -> NaiveDate;

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Ordered, in-memory collection of users.
///
/// Insertion order is iteration order. Ids are the decimal form of
/// `len() + 1` at insert time, so an id freed by a delete is not remembered
/// and a later insert can reuse a live id.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    clock: Clock,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            clock: utc_today,
        }
    }

    /// A store holding the two demo accounts the service starts with.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.users = vec![
            seed_user("1", "admin", "admin@demo.com", (2024, 1, 1)),
            seed_user("2", "user1", "user1@demo.com", (2024, 1, 2)),
        ];
        store
    }

    /// Replace the source of "today" used for `created_at`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    pub fn insert(&mut self, username: String, email: Option<String>) -> User {
        let user = User {
            id: (self.users.len() + 1).to_string(),
            username,
            email,
            created_at: (self.clock)(),
        };
        self.users.push(user.clone());
        user
    }

    pub fn remove_by_id(&mut self, id: &str) -> bool {
        match self.users.iter().position(|user| user.id == id) {
            Some(index) => {
                self.users.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn seed_user(id: &str, username: &str, email: &str, (y, m, d): (i32, u32, u32)) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: Some(email.to_string()),
        created_at: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn store() -> UserStore {
        UserStore::seeded().with_clock(fixed_today)
    }

    fn ids(store: &UserStore) -> Vec<&str> {
        store.all().iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = UserStore::new();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
        assert!(store.find_by_id("1").is_none());
    }

    #[test]
    fn seeded_store_holds_demo_accounts_in_order() {
        let store = store();
        assert_eq!(store.len(), 2);
        assert_eq!(ids(&store), ["1", "2"]);

        let user1 = store.find_by_id("2").unwrap();
        assert_eq!(user1.username, "user1");
        assert_eq!(user1.email.as_deref(), Some("user1@demo.com"));
        assert_eq!(user1.created_at_string(), "2024-01-02");
    }

    #[test]
    fn insert_assigns_next_id_and_today() {
        let mut store = store();
        let carol = store.insert("carol".into(), Some("c@x.com".into()));

        assert_eq!(carol.id, "3");
        assert_eq!(carol.username, "carol");
        assert_eq!(carol.email.as_deref(), Some("c@x.com"));
        assert_eq!(carol.created_at, fixed_today());
        assert_eq!(store.len(), 3);
        assert_eq!(store.find_by_id("3"), Some(&carol));
    }

    #[test]
    fn insert_without_email() {
        let mut store = UserStore::new().with_clock(fixed_today);
        let user = store.insert("dave".into(), None);

        assert_eq!(user.id, "1");
        assert!(user.email.is_none());
    }

    #[test]
    fn insert_is_not_idempotent() {
        let mut store = store();
        let a = store.insert("eve".into(), None);
        let b = store.insert("eve".into(), None);

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn remove_returns_true_once_then_false() {
        let mut store = store();
        store.insert("carol".into(), Some("c@x.com".into()));

        assert!(store.remove_by_id("1"));
        assert!(!store.remove_by_id("1"));
        assert!(store.find_by_id("1").is_none());
        assert_eq!(ids(&store), ["2", "3"]);
    }

    #[test]
    fn remove_unknown_id_leaves_store_unchanged() {
        let mut store = store();
        let before = store.all().to_vec();

        assert!(!store.remove_by_id("999"));
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn insert_after_remove_reuses_length_based_id() {
        let mut store = store();
        assert!(store.remove_by_id("1"));

        let user = store.insert("frank".into(), None);

        // Length is 1 after the delete, so the new id collides with "2".
        assert_eq!(user.id, "2");
        assert_eq!(ids(&store), ["2", "2"]);
        assert_eq!(store.find_by_id("2").unwrap().username, "user1");
    }
}
