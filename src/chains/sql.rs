use std::error::Error;
use std::sync::Arc;

use crate::config::prompt;
use crate::history::ChatHistory;
use crate::llm::chat::ChatClient;

/// Turns {schema, history, question} into raw SQL text via one model call.
/// The output is not validated here; the guard downstream is the gate.
pub struct SqlGenerationChain {
    client: Arc<dyn ChatClient>,
}

impl SqlGenerationChain {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub fn render_prompt(schema: &str, history: &ChatHistory, question: &str) -> String {
        prompt::render_sql_prompt(schema, &history.format_for_prompt(), question)
    }

    pub async fn generate(
        &self,
        schema: &str,
        history: &ChatHistory,
        question: &str
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let prompt = Self::render_prompt(schema, history, question);
        let completion = self.client.complete(&prompt).await?;
        Ok(completion.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::chat::CompletionResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubClient {
        reply: String,
        captured: Mutex<Option<String>>,
    }

    impl StubClient {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                captured: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ChatClient for StubClient {
        async fn complete(
            &self,
            prompt: &str
        ) -> Result<CompletionResponse, Box<dyn Error + Send + Sync>> {
            *self.captured.lock().unwrap() = Some(prompt.to_string());
            Ok(CompletionResponse { response: self.reply.clone() })
        }

        fn model(&self) -> String {
            "stub".to_string()
        }
    }

    #[tokio::test]
    async fn test_generate_returns_completion_verbatim() {
        let stub = Arc::new(StubClient::new("SELECT ProductName, UnitPrice FROM Products;"));
        let chain = SqlGenerationChain::new(stub.clone());
        let history = ChatHistory::new();

        let sql = chain
            .generate("Table: Products (ProductName varchar(40))\n", &history, "Show products")
            .await
            .unwrap();
        assert_eq!(sql, "SELECT ProductName, UnitPrice FROM Products;");
    }

    #[tokio::test]
    async fn test_generate_sends_rendered_prompt_unchanged() {
        let stub = Arc::new(StubClient::new("SELECT 1"));
        let chain = SqlGenerationChain::new(stub.clone());
        let history = ChatHistory::new();
        let schema = "Table: Products (ProductName varchar(40), UnitPrice decimal(10,4))\n";
        let question = "Show the names of all products and their unit prices.";

        chain.generate(schema, &history, question).await.unwrap();

        let sent = stub.captured.lock().unwrap().take().unwrap();
        assert_eq!(sent, SqlGenerationChain::render_prompt(schema, &history, question));
        assert!(sent.contains(&format!("<SCHEMA>{}</SCHEMA>", schema)));
        assert!(sent.ends_with(&format!("Question: {}\nSQL Query:", question)));
    }
}
