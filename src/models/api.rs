use serde::{ Serialize, Deserialize };
use uuid::Uuid;

use super::chat::ChatMessage;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConnectionFormDefaults {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub defaults: ConnectionFormDefaults,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConnectRequest {
    pub session_id: Uuid,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConnectResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatRequest {
    pub session_id: Uuid,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub content: String,
    pub timestamp: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SessionQuery {
    pub session_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HistoryResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_round_trip() {
        let json = format!(
            r#"{{"session_id":"{}","content":"How many users?"}}"#,
            Uuid::nil()
        );
        let req: ChatRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.content, "How many users?");

        let back = serde_json::to_string(&req).unwrap();
        assert!(back.contains("How many users?"));
    }

    #[test]
    fn test_connect_request_parses_port_as_number() {
        let json = format!(
            r#"{{"session_id":"{}","host":"localhost","port":3306,"user":"root","password":"","database":"shop"}}"#,
            Uuid::nil()
        );
        let req: ConnectRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.port, 3306);
        assert_eq!(req.database, "shop");
    }
}
