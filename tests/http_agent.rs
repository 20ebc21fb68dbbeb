//! HttpAgent against a local axum agent server

use std::sync::Arc;

use axum::{extract::State, http::header, http::StatusCode, routing::post, Json, Router};
use gomoku::agent::{HttpAgent, MoveAgent, MoveReply, MoveRequest};
use gomoku::{AgentError, Board, Stone};
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};

#[derive(Clone)]
struct AgentServer {
    status: StatusCode,
    body: &'static str,
    tx: Arc<Mutex<Option<oneshot::Sender<MoveRequest>>>>,
}

async fn handle_make_move(
    State(server): State<AgentServer>,
    Json(request): Json<MoveRequest>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    if let Some(tx) = server.tx.lock().await.take() {
        let _ = tx.send(request);
    }
    (server.status, [(header::CONTENT_TYPE, "application/json")], server.body)
}

/// Serve `/make_move` with a canned answer. Returns the base URL and the
/// first request the server saw.
async fn spawn_agent_server(status: StatusCode, body: &'static str) -> (String, oneshot::Receiver<MoveRequest>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();
    let state = AgentServer {
        status,
        body,
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/make_move", post(handle_make_move))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), rx)
}

fn sample_request() -> MoveRequest {
    let mut board = Board::new();
    board.place_stone(4, 4, Stone::Black).unwrap();
    MoveRequest::new(&board)
}

/// The agent uses a blocking client, so it runs off the async workers
async fn ask_agent(base_url: String) -> Result<MoveReply, AgentError> {
    tokio::task::spawn_blocking(move || {
        let agent = HttpAgent::new(&base_url)?;
        agent.request_move(&sample_request())
    })
    .await
    .expect("agent thread")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_posts_board_and_reads_move() {
    let (url, seen) = spawn_agent_server(StatusCode::OK, r#"{"row": 4, "col": 5}"#).await;

    let reply = ask_agent(url).await.unwrap();
    assert_eq!(reply, MoveReply { row: 4, col: 5 });

    let request = seen.await.expect("request seen");
    assert_eq!(request.player, "ai");
    assert_eq!(request.board.len(), 10);
    assert_eq!(request.board[4][4], 1);
    assert_eq!(request.board[0][0], 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_trailing_slash_in_base_url() {
    let (url, seen) = spawn_agent_server(StatusCode::OK, r#"{"row": 0, "col": 0}"#).await;

    let base = format!("{url}/");
    let endpoint = tokio::task::spawn_blocking({
        let base = base.clone();
        move || HttpAgent::new(&base).map(|agent| agent.endpoint().to_string())
    })
    .await
    .expect("agent thread");
    assert_eq!(endpoint.unwrap(), format!("{url}/make_move"));

    let reply = ask_agent(base).await.unwrap();
    assert_eq!(reply, MoveReply { row: 0, col: 0 });
    assert!(seen.await.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_body_is_rejection() {
    let (url, _seen) = spawn_agent_server(StatusCode::OK, r#"{"error": "Invalid player"}"#).await;

    match ask_agent(url).await {
        Err(AgentError::Rejected(msg)) => assert_eq!(msg, "Invalid player"),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_status() {
    let (url, _seen) = spawn_agent_server(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": "boom"}"#).await;

    assert!(matches!(ask_agent(url).await, Err(AgentError::Status(500))));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_garbage_body_is_malformed() {
    let (url, _seen) = spawn_agent_server(StatusCode::OK, "not json").await;

    assert!(matches!(ask_agent(url).await, Err(AgentError::Malformed(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_agent_is_transport_error() {
    // Bind then drop to get a port nobody is listening on
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    assert!(matches!(ask_agent(format!("http://{addr}")).await, Err(AgentError::Transport(_))));
}
