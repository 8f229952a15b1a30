pub mod chains;
pub mod cli;
pub mod config;
pub mod db;
pub mod guard;
pub mod history;
pub mod llm;
pub mod models;
pub mod server;
pub mod session;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::info;

use chains::ResponseChain;
use cli::Args;
use llm::LlmConfig;
use server::Server;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat LLM Type: {}", args.chat_llm_type);
    info!("Chat Model: {}", args.chat_model.as_deref().unwrap_or("adapter default"));
    info!("Chat Base URL: {}", args.chat_base_url.as_deref().unwrap_or("adapter default"));
    info!("LLM Timeout: {}s", args.llm_timeout_secs);
    info!("Default DB Target: {}:{}/{}", args.db_host, args.db_port, args.db_name);
    info!("-------------------------");

    let llm_type = args.chat_llm_type.parse()?;
    let api_key = if args.chat_api_key.is_empty() {
        None
    } else {
        Some(args.chat_api_key.clone())
    };
    let llm_config = LlmConfig {
        llm_type,
        api_key,
        model: args.chat_model.clone(),
        base_url: args.chat_base_url.clone(),
        timeout: Duration::from_secs(args.llm_timeout_secs),
    };
    let client = llm::chat::new_client(&llm_config)?;
    info!("Chat client configured: Type={}, Model={}", args.chat_llm_type, client.model());

    let chain = Arc::new(ResponseChain::new(client));
    let addr = args.server_addr.clone();
    info!("Starting server on: {}", addr);
    let server = Server::new(addr, chain, args);
    server.run().await?;

    Ok(())
}
