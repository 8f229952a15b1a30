pub mod groq;
pub mod ollama;
pub mod openai;

use std::error::Error as StdError;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use self::groq::GroqChatClient;
use self::ollama::OllamaClient;
use self::openai::OpenAIChatClient;
use super::{ LlmConfig, LlmType };

/// Both prompt chains run at zero sampling temperature.
pub(crate) const TEMPERATURE: f32 = 0.0;
pub(crate) const MAX_TOKENS: u32 = 1024;

#[derive(Deserialize, Debug, Clone)]
pub struct CompletionResponse {
    pub response: String,
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>>;

    fn model(&self) -> String;
}

pub fn new_client(
    config: &LlmConfig
) -> Result<Arc<dyn ChatClient>, Box<dyn StdError + Send + Sync>> {
    let client: Arc<dyn ChatClient> = match config.llm_type {
        LlmType::Groq => Arc::new(GroqChatClient::from_config(config)?),
        LlmType::OpenAI => Arc::new(OpenAIChatClient::from_config(config)?),
        LlmType::Ollama => Arc::new(OllamaClient::from_config(config)?),
    };
    Ok(client)
}
