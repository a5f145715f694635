use async_trait::async_trait;
use crate::models::chat::{ ChatMessage, Conversation };
use crate::history::{ check_conversation_id, HistoryStore };
use crate::error::StoreResult;
use log::info;
use mongodb::bson::{ doc, to_bson };
use mongodb::options::{ ClientOptions, IndexOptions };
use mongodb::{ Client, Collection, IndexModel };

pub struct MongoHistoryStore {
    collection: Collection<Conversation>,
}

impl MongoHistoryStore {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> StoreResult<Self> {
        let options = ClientOptions::parse(uri).await?;
        let client = Client::with_options(options)?;
        let collection = client.database(database).collection::<Conversation>(collection);

        let store = Self { collection };
        store.ensure_indexes().await?;
        Ok(store)
    }

    // The unique index makes the upsert in append_message race-free: two
    // writers creating the same conversation cannot end up with two documents.
    async fn ensure_indexes(&self) -> StoreResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "conversation_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        info!("Ensured unique index on conversation_id for {}", self.collection.name());
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for MongoHistoryStore {
    async fn append_message(
        &self,
        conversation_id: &str,
        sender: &str,
        text: &str
    ) -> StoreResult<()> {
        check_conversation_id(conversation_id)?;

        let message = ChatMessage::new(sender, text);
        // Single atomic upsert: creates the conversation document with one
        // message when absent, appends to its array otherwise. No
        // check-then-write round trips.
        self.collection
            .update_one(
                doc! { "conversation_id": conversation_id },
                doc! { "$push": { "messages": to_bson(&message)? } }
            )
            .upsert(true)
            .await?;

        Ok(())
    }

    async fn get_history(&self, conversation_id: &str) -> StoreResult<Vec<ChatMessage>> {
        check_conversation_id(conversation_id)?;

        let conversation = self.collection
            .find_one(doc! { "conversation_id": conversation_id })
            .await?;

        Ok(conversation.map(|c| c.messages).unwrap_or_default())
    }
}
