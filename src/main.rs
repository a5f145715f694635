use clap::Parser;
use convo_store::cli::Args;
use convo_store::error::StoreError;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    convo_store::run(args).await
}
