use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn manages_the_catalogue_end_to_end() {
    let app = router(AppState::in_memory());

    let (status, body) = call(
        &app,
        post(
            "/books/savebooks",
            json!([{"id": "123", "name": "A"}, {"id": "234", "name": "B"}]),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unsavedBooks"], json!([]));

    let (_, listed) = call(&app, Request::get("/books").body(Body::empty()).unwrap()).await;
    assert_eq!(
        listed,
        json!([{"id": "123", "name": "A"}, {"id": "234", "name": "B"}])
    );

    let (status, deleted) = call(
        &app,
        Request::delete("/books/delete/123")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"id": "123", "name": "A"}));

    let (_, listed) = call(&app, Request::get("/books").body(Body::empty()).unwrap()).await;
    assert_eq!(listed, json!([{"id": "234", "name": "B"}]));

    let (status, _) = call(&app, post("/books/update", json!({"id": "234", "name": "C"}))).await;
    assert_eq!(status, StatusCode::OK);
    let (_, found) = call(&app, Request::get("/books/234").body(Body::empty()).unwrap()).await;
    assert_eq!(found, json!({"id": "234", "name": "C"}));

    for _ in 0..2 {
        let (status, _) = call(
            &app,
            Request::delete("/books/delete").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, listed) = call(&app, Request::get("/books").body(Body::empty()).unwrap()).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn saves_only_the_valid_part_of_a_mixed_batch() {
    let app = router(AppState::in_memory());
    call(&app, post("/books/save", json!({"id": "1", "name": "Existing"}))).await;

    let (status, body) = call(
        &app,
        post(
            "/books/savebooks",
            json!([
                {"id": "2", "name": "New"},
                {"id": "1", "name": "Duplicate"},
                {"id": "3"},
                {"id": "4", "name": "Also new"}
            ]),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["savedBooks"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["unsavedBooks"],
        json!([
            {"book": {"id": "1", "name": "Duplicate"}, "reason": "Book already exist!"},
            {"book": {"id": "3", "name": null}, "reason": "Book name is empty or null"}
        ])
    );
    let (_, listed) = call(&app, Request::get("/books").body(Body::empty()).unwrap()).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
}
