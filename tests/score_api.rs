use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{http::StatusCode, test, web, App, HttpServer};
use serde_json::{json, Value};
use tokio::sync::mpsc;
use uuid::Uuid;

use daa_quiz::client::{spawn_poller, LeaderboardFetch};
use daa_quiz::protocol::ErrorBody;
use daa_quiz::server::{configure_routes, ScoreService};
use daa_quiz::store::MemoryScoreStore;
use daa_quiz::{QuizError, ScoreClient, ScoreRecord, ScoreStore, StoreError};

/// Store whose backend is always down.
struct BrokenStore;

impl ScoreStore for BrokenStore {
    fn add(&self, _record: ScoreRecord) -> Result<Uuid, StoreError> {
        Err(StoreError::Unavailable("db down".to_string()))
    }

    fn leaderboard(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        Err(StoreError::Unavailable("db down".to_string()))
    }

    fn clear(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("db down".to_string()))
    }
}

fn service_with(store: Arc<dyn ScoreStore>) -> web::Data<ScoreService> {
    web::Data::new(ScoreService::new(store, 10))
}

fn memory_service() -> web::Data<ScoreService> {
    service_with(Arc::new(MemoryScoreStore::new()))
}

async fn start_server(service: web::Data<ScoreService>) -> (SocketAddr, ServerHandle) {
    start_server_on(service, 0).await
}

async fn start_server_on(service: web::Data<ScoreService>, port: u16) -> (SocketAddr, ServerHandle) {
    let server = HttpServer::new(move || App::new().app_data(service.clone()).configure(configure_routes))
        .workers(1)
        .bind(("127.0.0.1", port))
        .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (addr, handle)
}

/// Bind then drop a listener so the port is very likely closed.
fn closed_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[actix_web::test]
async fn test_leaderboard_is_sorted_by_score() {
    let app = test::init_service(App::new().app_data(memory_service()).configure(configure_routes)).await;

    for (name, score) in [("Ada", 6), ("Grace", 9), ("Linus", 6)] {
        let req = test::TestRequest::post()
            .uri("/add_score")
            .set_json(json!({ "name": name, "score": score }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/get_leaderboard").to_request();
    let board: Vec<ScoreRecord> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        board,
        vec![
            ScoreRecord::new("Grace", 9),
            ScoreRecord::new("Ada", 6),
            ScoreRecord::new("Linus", 6),
        ]
    );
}

#[actix_web::test]
async fn test_add_score_acknowledges_with_id() {
    let app = test::init_service(App::new().app_data(memory_service()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/add_score")
        .set_json(json!({ "name": "Ada", "score": 7 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "success");
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
}

#[actix_web::test]
async fn test_clear_empties_the_leaderboard() {
    let app = test::init_service(App::new().app_data(memory_service()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/add_score")
        .set_json(json!({ "name": "Ada", "score": 3 }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post().uri("/clear_leaderboard").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "success");

    let req = test::TestRequest::get().uri("/get_leaderboard").to_request();
    let board: Vec<ScoreRecord> = test::call_and_read_body_json(&app, req).await;
    assert!(board.is_empty());
}

#[actix_web::test]
async fn test_invalid_submissions_are_rejected() {
    let app = test::init_service(App::new().app_data(memory_service()).configure(configure_routes)).await;

    for body in [json!({ "name": "   ", "score": 3 }), json!({ "name": "Ada", "score": 11 })] {
        let req = test::TestRequest::post().uri("/add_score").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: ErrorBody = test::read_body_json(resp).await;
        assert!(!error.error.is_empty());
    }

    let req = test::TestRequest::get().uri("/get_leaderboard").to_request();
    let board: Vec<ScoreRecord> = test::call_and_read_body_json(&app, req).await;
    assert!(board.is_empty());
}

#[actix_web::test]
async fn test_malformed_json_answers_with_error_body() {
    let app = test::init_service(App::new().app_data(memory_service()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/add_score")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": "Ada", "score": "#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = test::read_body_json(resp).await;
    assert!(error.error.starts_with("Invalid score submission"));
}

#[actix_web::test]
async fn test_store_failure_surfaces_message() {
    let app = test::init_service(
        App::new()
            .app_data(service_with(Arc::new(BrokenStore)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/add_score")
        .set_json(json!({ "name": "Ada", "score": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "db down" }));
}

#[actix_web::test]
async fn test_client_round_trip_against_live_server() {
    let (addr, handle) = start_server(memory_service()).await;
    let client = ScoreClient::new(&format!("http://{}/", addr)).unwrap();

    client.add_score("Ada", 4).await.unwrap();
    client.add_score("Grace", 8).await.unwrap();

    let board = client.get_leaderboard().await.unwrap();
    assert_eq!(board, vec![ScoreRecord::new("Grace", 8), ScoreRecord::new("Ada", 4)]);

    let err = client.add_score("Ada", 99).await.unwrap_err();
    assert_eq!(err.submit_message(), "Score must be between 0 and 10");

    client.clear_leaderboard().await.unwrap();
    assert!(client.get_leaderboard().await.unwrap().is_empty());

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_client_reports_store_message() {
    let (addr, handle) = start_server(service_with(Arc::new(BrokenStore))).await;
    let client = ScoreClient::new(&format!("http://{}", addr)).unwrap();

    let err = client.add_score("Ada", 4).await.unwrap_err();
    assert_eq!(err.submit_message(), "db down");

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_unreachable_store_uses_fallback_message() {
    let port = closed_port();
    let client = ScoreClient::new(&format!("http://127.0.0.1:{}", port)).unwrap();

    let err = client.add_score("Ada", 4).await.unwrap_err();
    assert_eq!(err.submit_message(), daa_quiz::client::api::SUBMIT_FALLBACK_MESSAGE);
}

#[actix_web::test]
async fn test_poller_delivers_first_fetch_immediately() {
    let service = memory_service();
    service.store.add(ScoreRecord::new("Ada", 5)).unwrap();
    let (addr, handle) = start_server(service).await;
    let client = ScoreClient::new(&format!("http://{}", addr)).unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel::<LeaderboardFetch>();
    let poller = spawn_poller(client, Duration::from_secs(60), tx);

    let fetch = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("first poll should arrive before the period elapses")
        .expect("channel open");
    assert_eq!(fetch.unwrap(), vec![ScoreRecord::new("Ada", 5)]);

    poller.abort();
    handle.stop(true).await;
}

#[actix_web::test]
async fn test_unreachable_store_errors_name_the_request() {
    let client = ScoreClient::new(&format!("http://127.0.0.1:{}", closed_port())).unwrap();

    let leaderboard = QuizError::from(client.get_leaderboard().await.unwrap_err()).to_string();
    let clear = QuizError::from(client.clear_leaderboard().await.unwrap_err()).to_string();

    for message in [&leaderboard, &clear] {
        assert!(message.starts_with("could not reach the score store"), "{}", message);
        assert!(!message.contains("submit"), "{}", message);
    }
}

#[actix_web::test]
async fn test_poller_keeps_polling_after_failures() {
    let client = ScoreClient::new(&format!("http://127.0.0.1:{}", closed_port())).unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel::<LeaderboardFetch>();
    let poller = spawn_poller(client, Duration::from_millis(50), tx);

    for _ in 0..3 {
        let fetch = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("poller should keep ticking after a failed fetch")
            .expect("channel open");
        assert!(fetch.is_err());
    }

    poller.abort();
}

#[actix_web::test]
async fn test_poller_recovers_once_store_comes_up() {
    let port = closed_port();
    let client = ScoreClient::new(&format!("http://127.0.0.1:{}", port)).unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel::<LeaderboardFetch>();
    let poller = spawn_poller(client, Duration::from_millis(50), tx);

    let first = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("first poll")
        .expect("channel open");
    assert!(first.is_err());

    let service = memory_service();
    service.store.add(ScoreRecord::new("Grace", 9)).unwrap();
    let (_, handle) = start_server_on(service, port).await;

    let recovered = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match rx.recv().await {
                Some(Ok(board)) => return board,
                Some(Err(_)) => continue,
                None => panic!("poller channel closed"),
            }
        }
    })
    .await
    .expect("a later poll should succeed");
    assert_eq!(recovered, vec![ScoreRecord::new("Grace", 9)]);

    poller.abort();
    handle.stop(true).await;
}
