pub mod cli;
pub mod error;
pub mod history;
pub mod models;

use cli::Args;
use error::StoreResult;
use history::{ format_history, initialize_history_store };
use log::info;

pub async fn run(args: Args) -> StoreResult<()> {
    info!("--- Core Configuration ---");
    info!("History Store Type: {}", args.history_type);
    info!("History Store URI: {}", args.history_uri);
    info!("History Database: {}", args.history_database);
    info!("History Collection: {}", args.history_collection);
    info!("-------------------------");

    let store = initialize_history_store(&args).await?;
    let convo_id = args.conversation_id.as_str();

    store.append_message(convo_id, "user", "Hello!").await?;
    store.append_message(convo_id, "bot", "Hi! How can I help you?").await?;
    store.append_message(convo_id, "user", "Tell me about MongoDB.").await?;
    store.append_message(convo_id, "bot", "MongoDB is a NoSQL database.").await?;

    let history = store.get_history(convo_id).await?;
    println!("Chat History:");
    print!("{}", format_history(&history));

    Ok(())
}
