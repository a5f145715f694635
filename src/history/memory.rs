use async_trait::async_trait;
use crate::models::chat::ChatMessage;
use crate::history::{ check_conversation_id, HistoryStore };
use crate::error::StoreResult;
use log::debug;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory history store for tests and ephemeral sessions.
/// Data is lost when the process terminates.
pub struct MemoryHistoryStore {
    conversations: RwLock<HashMap<String, Vec<ChatMessage>>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self {
            conversations: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append_message(
        &self,
        conversation_id: &str,
        sender: &str,
        text: &str
    ) -> StoreResult<()> {
        check_conversation_id(conversation_id)?;

        // Create-or-append happens under the write lock, matching the
        // atomicity of the mongo backend's upsert.
        let mut conversations = self.conversations.write().await;
        conversations
            .entry(conversation_id.to_string())
            .or_default()
            .push(ChatMessage::new(sender, text));
        debug!("Appended message to conversation '{}'", conversation_id);
        Ok(())
    }

    async fn get_history(&self, conversation_id: &str) -> StoreResult<Vec<ChatMessage>> {
        check_conversation_id(conversation_id)?;

        let conversations = self.conversations.read().await;
        let history = conversations.get(conversation_id).cloned().unwrap_or_default();
        debug!("Loaded {} messages for conversation '{}'", history.len(), conversation_id);
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[tokio::test]
    async fn test_append_and_get() {
        let store = MemoryHistoryStore::new();

        store.append_message("test-convo", "user", "Hello").await.unwrap();
        store.append_message("test-convo", "bot", "Hi there").await.unwrap();

        let history = store.get_history("test-convo").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, "user");
        assert_eq!(history[0].text, "Hello");
        assert_eq!(history[1].sender, "bot");
        assert_eq!(history[1].text, "Hi there");
    }

    #[tokio::test]
    async fn test_get_nonexistent_conversation() {
        let store = MemoryHistoryStore::new();
        let history = store.get_history("nonexistent").await.unwrap();
        assert_eq!(history.len(), 0);
    }

    #[tokio::test]
    async fn test_empty_conversation_id_rejected() {
        let store = MemoryHistoryStore::new();

        let append = store.append_message("", "user", "Hello").await;
        assert!(matches!(append, Err(StoreError::InvalidArgument(_))));

        let get = store.get_history("").await;
        assert!(matches!(get, Err(StoreError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_empty_sender_and_text_accepted() {
        let store = MemoryHistoryStore::new();

        store.append_message("test-convo", "", "").await.unwrap();

        let history = store.get_history("test-convo").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].sender, "");
        assert_eq!(history[0].text, "");
    }
}
