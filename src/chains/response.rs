use std::error::Error;
use std::sync::Arc;

use log::info;

use crate::config::prompt;
use crate::db::Database;
use crate::guard;
use crate::history::ChatHistory;
use crate::llm::chat::ChatClient;

use super::sql::SqlGenerationChain;

/// One full turn against the database: generate SQL, gate it, execute it,
/// then ask the model to phrase the result as prose.
pub struct ResponseChain {
    client: Arc<dyn ChatClient>,
    sql_chain: SqlGenerationChain,
}

impl ResponseChain {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            sql_chain: SqlGenerationChain::new(Arc::clone(&client)),
            client,
        }
    }

    pub async fn answer(
        &self,
        db: &Database,
        history: &ChatHistory,
        question: &str
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let schema = db.describe_schema().await?;

        let generated = self.sql_chain.generate(&schema, history, question).await?;
        info!("Generated SQL for '{}': {}", db.database_name(), generated.trim());

        let sql = guard::ensure_read_only(&generated)?;
        let result = db.run_query(&sql).await?;

        let prompt = prompt::render_response_prompt(
            &schema,
            &history.format_for_prompt(),
            &sql,
            &result,
            question
        );
        let completion = self.client.complete(&prompt).await?;
        Ok(completion.response)
    }
}
