// CRUD de cinemas e a regra de autorização por gerente, ponta a ponta.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::*;

async fn first_theater_id(state: &theaters_backend::config::AppState) -> i64 {
    sqlx::query_scalar("SELECT id FROM theaters ORDER BY id LIMIT 1")
        .fetch_one(&state.db_pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn listing_is_public() {
    let (app, _state) = seeded_app().await;

    let resp = app.oneshot(get_request("/api/theaters")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
    assert_eq!(body[0]["name"], "AMC Palace 10");
    assert_eq!(body[0]["seatCount"], 150);
}

#[tokio::test]
async fn get_by_id_is_public_and_404s_when_missing() {
    let (app, state) = seeded_app().await;
    let id = first_theater_id(&state).await;

    let resp = app
        .clone()
        .oneshot(get_request(&format!("/api/theaters/{}", id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get_request("/api/theaters/9999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_requires_an_admin() {
    let (app, _state) = seeded_app().await;
    let payload = json!({ "name": "Cine Novo", "address": "Rua Dois, 200", "seatCount": 80 });

    // Anônimo: 401
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/theaters", payload.clone()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Usuário comum: 403
    let bob = login(&app, "bob", "Password123!").await;
    let resp = app
        .clone()
        .oneshot(json_request_with_cookie("POST", "/api/theaters", &bob, payload.clone()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Admin: 201
    let galkadi = login(&app, "galkadi", "Password123!").await;
    let resp = app
        .oneshot(json_request_with_cookie("POST", "/api/theaters", &galkadi, payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await;
    assert_eq!(body["name"], "Cine Novo");
    assert_eq!(body["managerId"], json!(null));
}

#[tokio::test]
async fn create_rejects_invalid_payload_before_writing() {
    let (app, state) = seeded_app().await;
    let galkadi = login(&app, "galkadi", "Password123!").await;

    let payload = json!({ "name": "   ", "address": "Rua Dois, 200", "seatCount": 80 });
    let resp = app
        .oneshot(json_request_with_cookie("POST", "/api/theaters", &galkadi, payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert!(body["details"]["name"].is_array());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM theaters")
        .fetch_one(&state.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 4);
}

#[tokio::test]
async fn create_rejects_unknown_manager_reference() {
    let (app, state) = seeded_app().await;
    let galkadi = login(&app, "galkadi", "Password123!").await;

    let payload = json!({
        "name": "Cine Fantasma",
        "address": "Rua Dois, 200",
        "seatCount": 80,
        "managerId": 9999
    });
    let resp = app
        .oneshot(json_request_with_cookie("POST", "/api/theaters", &galkadi, payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM theaters")
        .fetch_one(&state.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 4);
}

#[tokio::test]
async fn assigned_manager_can_update_their_theater() {
    let (app, state) = seeded_app().await;
    let id = first_theater_id(&state).await;
    let bob = login(&app, "bob", "Password123!").await;

    let bob_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE username = 'bob'")
        .fetch_one(&state.db_pool)
        .await
        .unwrap();

    let payload = json!({
        "name": "AMC Palace 10 - Reformado",
        "address": "123 Main St, Springfield",
        "seatCount": 180,
        "managerId": bob_id
    });
    let resp = app
        .oneshot(json_request_with_cookie(
            "PUT",
            &format!("/api/theaters/{}", id),
            &bob,
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["name"], "AMC Palace 10 - Reformado");
    assert_eq!(body["seatCount"], 180);
}

#[tokio::test]
async fn non_manager_cannot_update_someone_elses_theater() {
    let (app, state) = seeded_app().await;
    let id = first_theater_id(&state).await;
    let sue = login(&app, "sue", "Password123!").await;

    let payload = json!({ "name": "Invadido", "address": "x", "seatCount": 10 });
    let resp = app
        .oneshot(json_request_with_cookie(
            "PUT",
            &format!("/api/theaters/{}", id),
            &sue,
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn update_missing_theater_is_404() {
    let (app, _state) = seeded_app().await;
    let galkadi = login(&app, "galkadi", "Password123!").await;

    let payload = json!({ "name": "Nada", "address": "Rua Um", "seatCount": 10 });
    let resp = app
        .oneshot(json_request_with_cookie("PUT", "/api/theaters/9999", &galkadi, payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_update_persists_nothing() {
    let (app, state) = seeded_app().await;
    let id = first_theater_id(&state).await;
    let bob = login(&app, "bob", "Password123!").await;

    let payload = json!({
        "name": "Nao Deve Entrar",
        "address": "123 Main St, Springfield",
        "seatCount": 0
    });
    let resp = app
        .oneshot(json_request_with_cookie(
            "PUT",
            &format!("/api/theaters/{}", id),
            &bob,
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let name: String = sqlx::query_scalar("SELECT name FROM theaters WHERE id = $1")
        .bind(id)
        .fetch_one(&state.db_pool)
        .await
        .unwrap();
    assert_eq!(name, "AMC Palace 10");
}

#[tokio::test]
async fn admin_can_clear_the_manager_and_lock_out_the_old_one() {
    let (app, state) = seeded_app().await;
    let id = first_theater_id(&state).await;
    let galkadi = login(&app, "galkadi", "Password123!").await;
    let bob = login(&app, "bob", "Password123!").await;

    // Admin remove o gerente do cinema.
    let payload = json!({
        "name": "AMC Palace 10",
        "address": "123 Main St, Springfield",
        "seatCount": 150,
        "managerId": null
    });
    let resp = app
        .clone()
        .oneshot(json_request_with_cookie(
            "PUT",
            &format!("/api/theaters/{}", id),
            &galkadi,
            payload.clone(),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["managerId"], json!(null));

    // O ex-gerente perde o acesso.
    let resp = app
        .oneshot(json_request_with_cookie(
            "PUT",
            &format!("/api/theaters/{}", id),
            &bob,
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn update_rejects_unknown_manager_reference() {
    let (app, state) = seeded_app().await;
    let id = first_theater_id(&state).await;
    let galkadi = login(&app, "galkadi", "Password123!").await;

    let payload = json!({
        "name": "AMC Palace 10",
        "address": "123 Main St, Springfield",
        "seatCount": 150,
        "managerId": 9999
    });
    let resp = app
        .oneshot(json_request_with_cookie(
            "PUT",
            &format!("/api/theaters/{}", id),
            &galkadi,
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_is_admin_only_and_returns_the_id() {
    let (app, state) = seeded_app().await;
    let id = first_theater_id(&state).await;

    // Gerente não basta: remoção é só para Admin.
    let bob = login(&app, "bob", "Password123!").await;
    let resp = app
        .clone()
        .oneshot(request_with_cookie("DELETE", &format!("/api/theaters/{}", id), &bob))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let galkadi = login(&app, "galkadi", "Password123!").await;
    let resp = app
        .clone()
        .oneshot(request_with_cookie("DELETE", &format!("/api/theaters/{}", id), &galkadi))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["id"], json!(id));

    let resp = app
        .oneshot(get_request(&format!("/api/theaters/{}", id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_theater_is_404() {
    let (app, _state) = seeded_app().await;
    let galkadi = login(&app, "galkadi", "Password123!").await;

    let resp = app
        .oneshot(request_with_cookie("DELETE", "/api/theaters/9999", &galkadi))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
