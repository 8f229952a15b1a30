use clap::Parser;
use dotenv::dotenv;
use sql_chat_agent::cli::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    sql_chat_agent::run(args).await
}
