use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// History chat store type (mongo, memory)
    #[arg(long, env = "HISTORY_TYPE", default_value = "mongo")]
    pub history_type: String,

    /// History store connection URI (e.g., mongodb://127.0.0.1:27017)
    #[arg(long, env = "HISTORY_URI", default_value = "mongodb://127.0.0.1:27017")]
    pub history_uri: String,

    /// Target database name for the history store
    #[arg(long, env = "HISTORY_DATABASE", default_value = "chatbot")]
    pub history_database: String,

    /// Collection name holding conversation documents
    #[arg(long, env = "HISTORY_COLLECTION", default_value = "chat_history")]
    pub history_collection: String,

    /// Conversation id used by the demo flow
    #[arg(long, env = "CONVERSATION_ID", default_value = "abc123")]
    pub conversation_id: String,
}
