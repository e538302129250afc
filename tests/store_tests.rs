// filepath: tests/store_tests.rs
//
// Store semantics exercised through the public library API.

use pretty_assertions::assert_eq;

use user_registry::core::user::User;
use user_registry::storage::UserStore;

fn user(id: i64, name: &str, email: &str) -> User {
    User::new(id, Some(name.to_string()), Some(email.to_string()))
}

#[tokio::test]
async fn test_create_then_get_returns_equal_record() {
    let store = UserStore::new();
    let alice = user(1, "Alice", "a@x.com");

    store.add(alice.clone()).await;
    assert_eq!(store.find_by_id(1).await, Some(alice));
}

#[tokio::test]
async fn test_list_reflects_single_create() {
    let store = UserStore::new();
    store.add(user(3, "User3", "u3@x.com")).await;

    assert_eq!(store.list().await, vec![user(3, "User3", "u3@x.com")]);
}

#[tokio::test]
async fn test_edit_scenario() {
    let store = UserStore::new();
    store.add(user(5, "OldName", "old@x.com")).await;

    store
        .update_fields(5, Some("NewName".to_string()), Some("new@x.com".to_string()))
        .await
        .unwrap();

    assert_eq!(store.list().await[0], user(5, "NewName", "new@x.com"));
}

#[tokio::test]
async fn test_delete_scenario() {
    let store = UserStore::new();
    store.add(user(7, "User7", "u7@x.com")).await;

    let before = store.len().await;
    assert!(store.remove_by_id(7).await.is_some());

    assert_eq!(store.len().await, before - 1);
    assert_eq!(store.find_by_id(7).await, None);
    assert_eq!(store.list().await, Vec::<User>::new());
}

#[tokio::test]
async fn test_absent_ids_always_miss() {
    let store = UserStore::new();
    store.add(user(1, "Alice", "a@x.com")).await;

    for id in [0, 2, -1, i64::MAX] {
        assert_eq!(store.find_by_id(id).await, None);
    }
}

#[tokio::test]
async fn test_concurrent_adds_are_not_lost() {
    // Mutations race through the shared lock; every add must land.
    let store = UserStore::new();

    let mut handles = Vec::new();
    for id in 0..32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.add(user(id, "u", "u@x.com")).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.len().await, 32);
}
