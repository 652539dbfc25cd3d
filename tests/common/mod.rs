// Infraestrutura compartilhada dos testes de integração:
// um pool SQLite em memória com as migrações aplicadas, e helpers
// para falar HTTP com o router via `oneshot`.

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use theaters_backend::{config::AppState, router, MIGRATOR};

// Uma única conexão: em memória, cada conexão teria um banco próprio.
pub async fn test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("falha ao abrir o banco em memória");

    MIGRATOR.run(&pool).await.expect("falha ao migrar o banco de teste");

    AppState::from_pool(pool)
}

pub async fn seeded_state() -> AppState {
    let state = test_state().await;
    state.seed_service.run().await.expect("falha ao semear o banco de teste");
    state
}

pub async fn seeded_app() -> (Router, AppState) {
    let state = seeded_state().await;
    (router(state.clone()), state)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_request_with_cookie(
    method: &str,
    uri: &str,
    cookie: &str,
    body: Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

pub fn request_with_cookie(method: &str, uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("resposta não é JSON válido")
}

// Faz login e devolve o par "session=<token>" pronto para o header Cookie.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let req = json_request(
        "POST",
        "/api/authentication/login",
        json!({ "username": username, "password": password }),
    );
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK, "login de {} deveria passar", username);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("login não devolveu cookie de sessão")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}
