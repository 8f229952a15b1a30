use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host address and port for the server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:4000")]
    pub server_addr: String,

    // --- Chat LLM Provider Args ---
    /// Type of LLM provider for chat completion (groq, openai, ollama)
    #[arg(long, env = "CHAT_LLM_TYPE", default_value = "groq")]
    pub chat_llm_type: String,

    /// Base URL for the chat LLM provider API (e.g., http://localhost:11434 for Ollama)
    #[arg(long, env = "CHAT_BASE_URL")]
    pub chat_base_url: Option<String>,

    /// API key for the chat LLM provider
    #[arg(long, env = "CHAT_API_KEY", default_value = "")]
    pub chat_api_key: String,

    /// Model name for chat completion (e.g., llama-3.3-70b-versatile)
    #[arg(long, env = "CHAT_MODEL")]
    pub chat_model: Option<String>,

    /// Request timeout in seconds for LLM calls; a hung provider fails the
    /// turn instead of wedging the session.
    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value = "120")]
    pub llm_timeout_secs: u64,

    // --- Connection Form Defaults ---
    /// Default host shown in the connection form.
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Default port shown in the connection form.
    #[arg(long, env = "DB_PORT", default_value = "3306")]
    pub db_port: u16,

    /// Default user shown in the connection form.
    #[arg(long, env = "DB_USER", default_value = "root")]
    pub db_user: String,

    /// Default password shown in the connection form.
    #[arg(long, env = "DB_PASSWORD", default_value = "")]
    pub db_password: String,

    /// Default database name shown in the connection form.
    #[arg(long, env = "DB_NAME", default_value = "")]
    pub db_name: String,
}
