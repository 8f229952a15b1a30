use std::error::Error;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
    extract::{State, Query},
    response::{Html, IntoResponse, Response},
    http::StatusCode,
    Json,
};
use log::{info, error};
use tower_http::cors::{Any, CorsLayer};

use crate::chains::ResponseChain;
use crate::cli::Args;
use crate::db::{ConnectionParams, Database};
use crate::models::api::{
    ChatRequest, ChatResponse, ConnectRequest, ConnectResponse, ConnectionFormDefaults,
    ErrorResponse, HistoryResponse, SessionQuery, SessionResponse,
};
use crate::session::{self, SessionRegistry};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Clone)]
struct AppState {
    chain: Arc<ResponseChain>,
    sessions: SessionRegistry,
    args: Args,
}

pub async fn start_http_server(
    addr: &str,
    chain: Arc<ResponseChain>,
    sessions: SessionRegistry,
    args: Args,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let state = AppState { chain, sessions, args };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/session", post(create_session_handler).delete(destroy_session_handler))
        .route("/api/connect", post(connect_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/history", get(history_handler))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on: http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn error_response(code: StatusCode, message: impl Into<String>) -> Response {
    (code, Json(ErrorResponse { message: message.into() })).into_response()
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn create_session_handler(State(state): State<AppState>) -> Response {
    let (session_id, session) = state.sessions.create().await;
    let messages = session.lock().await.history.messages().to_vec();

    Json(SessionResponse {
        session_id,
        messages,
        defaults: ConnectionFormDefaults {
            host: state.args.db_host.clone(),
            port: state.args.db_port,
            user: state.args.db_user.clone(),
            password: state.args.db_password.clone(),
            database: state.args.db_name.clone(),
        },
    }).into_response()
}

async fn destroy_session_handler(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Response {
    if state.sessions.destroy(&query.session_id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        error_response(StatusCode::NOT_FOUND, "Unknown session")
    }
}

async fn connect_handler(
    State(state): State<AppState>,
    Json(req): Json<ConnectRequest>,
) -> Response {
    let Some(session) = state.sessions.get(&req.session_id).await else {
        return error_response(StatusCode::NOT_FOUND, "Unknown session");
    };

    let params = ConnectionParams {
        user: req.user,
        password: req.password,
        host: req.host,
        port: req.port,
        database: req.database,
    };
    info!(
        "Session {} connecting to {}:{}/{}",
        req.session_id,
        params.host,
        params.port,
        params.database
    );

    match Database::connect(params).await {
        Ok(db) => {
            session.lock().await.attach_database(db);
            Json(ConnectResponse {
                success: true,
                message: "Connected to database!".to_string(),
            }).into_response()
        }
        // A failed connect leaves whatever handle the session already had.
        Err(e) => {
            error!("Session {} connection failed: {}", req.session_id, e);
            (
                StatusCode::BAD_REQUEST,
                Json(ConnectResponse {
                    success: false,
                    message: e.to_string(),
                }),
            ).into_response()
        }
    }
}

async fn chat_handler(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    let Some(session) = state.sessions.get(&req.session_id).await else {
        return error_response(StatusCode::NOT_FOUND, "Unknown session");
    };

    if session::is_blank(&req.content) {
        return error_response(StatusCode::BAD_REQUEST, "Message is empty");
    }

    // One turn at a time per session; a second submit waits here.
    let mut session = session.lock().await;
    let Some(db) = session.db.clone() else {
        return error_response(StatusCode::CONFLICT, "Connect to a database first.");
    };

    session.history.push_user(&req.content);
    match state.chain.answer(&db, &session.history, &req.content).await {
        Ok(answer) => {
            session.history.push_assistant(&answer);
            let timestamp = session.history
                .messages()
                .last()
                .map(|m| m.timestamp)
                .unwrap_or_default();
            Json(ChatResponse { content: answer, timestamp }).into_response()
        }
        // The error text becomes the assistant reply, as the UI would have
        // shown it; the status code still reports the failure.
        Err(e) => {
            error!("Session {} turn failed: {}", req.session_id, e);
            let message = e.to_string();
            session.history.push_assistant(&message);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

async fn history_handler(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Response {
    let Some(session) = state.sessions.get(&query.session_id).await else {
        return error_response(StatusCode::NOT_FOUND, "Unknown session");
    };

    let messages = session.lock().await.history.messages().to_vec();
    Json(HistoryResponse { messages }).into_response()
}
