mod memory;
mod mongo;

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::cli::Args;
use crate::error::{ StoreError, StoreResult };
use crate::models::chat::ChatMessage;

pub use memory::MemoryHistoryStore;
pub use mongo::MongoHistoryStore;

/// Append-only storage and retrieval of per-conversation message logs.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append_message(
        &self,
        conversation_id: &str,
        sender: &str,
        text: &str
    ) -> StoreResult<()>;

    /// Returns an empty vector when no conversation exists for the id.
    async fn get_history(&self, conversation_id: &str) -> StoreResult<Vec<ChatMessage>>;
}

pub(crate) fn check_conversation_id(conversation_id: &str) -> StoreResult<()> {
    if conversation_id.is_empty() {
        return Err(StoreError::InvalidArgument("conversation id must not be empty".to_string()));
    }
    Ok(())
}

pub async fn create_history_store(args: &Args) -> StoreResult<Arc<dyn HistoryStore>> {
    match args.history_type.to_lowercase().as_str() {
        "mongo" | "mongodb" => {
            let store = MongoHistoryStore::connect(
                &args.history_uri,
                &args.history_database,
                &args.history_collection
            ).await?;
            Ok(Arc::new(store))
        }
        "memory" => Ok(Arc::new(MemoryHistoryStore::new())),
        other => Err(StoreError::UnsupportedBackend(other.to_string())),
    }
}

pub async fn initialize_history_store(args: &Args) -> StoreResult<Arc<dyn HistoryStore>> {
    info!("Chat history will be stored in: {} at {}", args.history_type, args.history_uri);
    create_history_store(args).await
}

pub fn format_history(messages: &[ChatMessage]) -> String {
    let mut result = String::new();
    for msg in messages {
        let mut chars = msg.sender.chars();
        let sender_display = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };

        result.push_str(&format!("[{}] {}: {}\n", msg.timestamp, sender_display, msg.text));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_history_capitalizes_sender() {
        let messages = vec![ChatMessage {
            sender: "user".to_string(),
            text: "Hello!".to_string(),
            timestamp: "2026-08-06T12:00:00.000000".to_string(),
        }];

        let rendered = format_history(&messages);
        assert_eq!(rendered, "[2026-08-06T12:00:00.000000] User: Hello!\n");
    }

    #[test]
    fn format_history_empty_is_empty_string() {
        assert_eq!(format_history(&[]), "");
    }
}
