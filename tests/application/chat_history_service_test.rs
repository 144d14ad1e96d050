use std::sync::Arc;

use history_store::application::ports::HistoryStoreError;
use history_store::application::services::ChatHistoryService;
use history_store::domain::{MessageRole, UserId};
use history_store::infrastructure::config::HistorySettings;
use history_store::infrastructure::persistence::InMemoryHistoryStore;

const TEST_HISTORY_LENGTH: usize = 3;

fn service() -> ChatHistoryService<InMemoryHistoryStore> {
    ChatHistoryService::new(Arc::new(InMemoryHistoryStore::new()), TEST_HISTORY_LENGTH)
}

#[tokio::test]
async fn given_new_conversation_when_started_then_id_belongs_to_user_but_is_not_stored() {
    let service = service();
    let user = UserId::new("alice").unwrap();

    let id = service.start_conversation(&user);

    assert!(id.belongs_to(&user));
    assert!(!service.store().contains(&id));
    assert!(matches!(
        service.recent_messages(&id).await,
        Err(HistoryStoreError::UnknownConversation(_))
    ));
}

#[tokio::test]
async fn given_two_started_conversations_when_compared_then_ids_differ() {
    let service = service();
    let user = UserId::new("alice").unwrap();

    assert_ne!(
        service.start_conversation(&user),
        service.start_conversation(&user)
    );
}

#[tokio::test]
async fn given_exchange_when_recorded_then_human_precedes_ai() {
    let service = service();
    let id = service.start_conversation(&UserId::new("alice").unwrap());

    service.record_exchange(&id, "hi", "hello").await;

    let messages = service.recent_messages(&id).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role(), MessageRole::Human);
    assert_eq!(messages[0].content(), "hi");
    assert_eq!(messages[1].role(), MessageRole::Ai);
    assert_eq!(messages[1].content(), "hello");
}

#[tokio::test]
async fn given_long_history_when_reading_recent_then_window_uses_default_length() {
    let service = service();
    let id = service.start_conversation(&UserId::new("alice").unwrap());

    for i in 0..3 {
        service
            .record_exchange(&id, &format!("q{}", i), &format!("a{}", i))
            .await;
    }

    let messages = service.recent_messages(&id).await.unwrap();
    let contents: Vec<&str> = messages.iter().map(|m| m.content()).collect();
    assert_eq!(contents, vec!["a1", "q2", "a2"]);
}

#[tokio::test]
async fn given_settings_when_building_service_then_default_length_is_applied() {
    let settings = HistorySettings {
        default_history_length: 1,
    };
    let service =
        ChatHistoryService::from_settings(Arc::new(InMemoryHistoryStore::new()), &settings);
    let id = service.start_conversation(&UserId::new("alice").unwrap());

    service.record_exchange(&id, "hi", "hello").await;

    let messages = service.recent_messages(&id).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content(), "hello");
}

#[tokio::test]
async fn given_users_with_conversations_when_ending_one_then_listing_reflects_it() {
    let service = service();
    let alice = UserId::new("alice").unwrap();
    let bob = UserId::new("bob").unwrap();
    let first = service.start_conversation(&alice);
    let second = service.start_conversation(&alice);
    let other = service.start_conversation(&bob);
    for id in [&first, &second, &other] {
        service.record_exchange(id, "hi", "hello").await;
    }

    service.end_conversation(&first).await;

    assert_eq!(service.conversations_for(&alice).await, vec![second]);
    assert_eq!(service.conversations_for(&bob).await, vec![other]);
}
