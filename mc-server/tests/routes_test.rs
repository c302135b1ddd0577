use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use mc_server::{routes, seed, store::MemStore};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn seeded_app() -> (Router, MemStore) {
    let store = MemStore::new();
    seed::load_starter_recipes(&store).await.unwrap();
    (routes::app(store.clone()), store)
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_draft() -> Value {
    json!({
        "title": "Lemon Pasta",
        "description": "Bright and fast",
        "cuisine": "Italian",
        "dietType": "Vegetarian",
        "prepTime": 5,
        "cookTime": 12,
        "servings": 2,
        "ingredients": [
            {"name": "spaghetti", "amount": 200, "unit": "g", "required": true},
            {"name": "lemon", "amount": 1, "unit": "", "required": true},
        ],
        "instructions": ["Boil the pasta", "Toss with lemon and oil"],
        "rating": 4.0,
        "tags": ["fast"],
        "mood": "Quick",
    })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_answers_ok() {
    let (app, _) = seeded_app().await;
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn list_returns_every_recipe_as_a_json_array() {
    let (app, _) = seeded_app().await;
    let resp = app.oneshot(get("/api/recipes")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp.into_body()).await;
    let recipes = body.as_array().unwrap();
    assert_eq!(recipes.len(), 6);
    // Wire shape is camelCase with assigned fields present
    assert!(recipes[0]["id"].is_string());
    assert!(recipes[0]["prepTime"].is_number());
    assert!(recipes[0]["createdAt"].is_string());
}

#[tokio::test]
async fn list_applies_query_filters() {
    let (app, _) = seeded_app().await;
    let resp = app
        .oneshot(get("/api/recipes?cuisine=Indian&maxTime=60"))
        .await
        .unwrap();
    let body = body_json(resp.into_body()).await;
    let titles: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, ["Butter Chicken"]);
}

#[tokio::test]
async fn list_with_no_matches_is_an_empty_array_not_an_error() {
    let (app, _) = seeded_app().await;
    let resp = app
        .oneshot(get("/api/recipes?search=definitely%20not%20a%20dish"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_by_id_round_trips_and_unknown_ids_are_404() {
    let (app, store) = seeded_app().await;
    let known = &store.list_recipes(&Default::default()).await[0];

    let resp = app
        .clone()
        .oneshot(get(&format!("/api/recipes/{}", known.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp.into_body()).await;
    assert_eq!(body["id"], json!(known.id));
    assert_eq!(body["title"], json!(known.title));

    let resp = app.oneshot(get("/api/recipes/no-such-id")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp.into_body()).await;
    assert_eq!(body, json!({"error": "Recipe not found"}));
}

#[tokio::test]
async fn create_returns_201_and_the_stored_record() {
    let (app, store) = seeded_app().await;
    let resp = app
        .oneshot(post_json("/api/recipes", valid_draft()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp.into_body()).await;
    assert_eq!(body["title"], json!("Lemon Pasta"));
    assert_eq!(body["mood"], json!("Quick"));
    let id = body["id"].as_str().unwrap();
    assert!(store.get_recipe(id).await.is_some());
}

#[tokio::test]
async fn create_rejects_semantic_problems_with_field_detail() {
    let (app, _) = seeded_app().await;
    let mut draft = valid_draft();
    draft["servings"] = json!(0);
    draft["title"] = json!("");

    let resp = app.oneshot(post_json("/api/recipes", draft)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp.into_body()).await;
    let issues = body["error"]["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["field"], json!("title"));
    assert_eq!(issues[1]["field"], json!("servings"));
}

#[tokio::test]
async fn create_rejects_bodies_that_do_not_fit_the_schema() {
    let (app, _) = seeded_app().await;

    // Enum value outside the fixed set
    let mut draft = valid_draft();
    draft["cuisine"] = json!("Klingon");
    let resp = app
        .clone()
        .oneshot(post_json("/api/recipes", draft))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Missing required field
    let mut draft = valid_draft();
    draft.as_object_mut().unwrap().remove("servings");
    let resp = app
        .clone()
        .oneshot(post_json("/api/recipes", draft))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Not JSON at all
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/recipes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("this is not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp.into_body()).await;
    assert!(body["error"]["issues"][0]["message"].is_string());
}

#[tokio::test]
async fn delete_is_204_with_no_body_even_for_unknown_ids() {
    let (app, store) = seeded_app().await;
    let victim = store.list_recipes(&Default::default()).await[0].id.clone();

    let resp = app
        .clone()
        .oneshot(delete(&format!("/api/recipes/{}", victim)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
    assert!(store.get_recipe(&victim).await.is_none());

    // Again, same id: still 204
    let resp = app
        .oneshot(delete(&format!("/api/recipes/{}", victim)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
