use axum::http::StatusCode;
use lingomarket_content_server::model::library::{AssetKind, LibraryItem};
use lingomarket_content_server::payloads::library::AddLibraryItemPayload;
use lingomarket_content_server::response::ApiResponse;
use serde_json::Value;

mod helpers;
use helpers::{library_item, setup_seeded_environment, setup_test_environment};

fn add_payload(name: &str, kind: AssetKind, category: &str) -> AddLibraryItemPayload {
    AddLibraryItemPayload {
        name: name.to_string(),
        kind,
        size: 2048,
        category: category.to_string(),
    }
}

#[tokio::test]
async fn test_add_item_assigns_sequential_ids() {
    let (server, store) = setup_test_environment();

    let response = server
        .post("/library/add_item")
        .json(&add_payload("intro.mp3", AssetKind::Audio, "listening"))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: ApiResponse<LibraryItem> = response.json();
    let first = body.data.expect("item");
    assert_eq!(first.id, 1);
    assert!(first.used_in.is_empty());

    let response = server
        .post("/library/add_item")
        .json(&add_payload("worksheet.pdf", AssetKind::Document, "writing"))
        .await;
    let body: ApiResponse<LibraryItem> = response.json();
    assert_eq!(body.data.expect("item").id, 2);

    assert_eq!(store.read().await.library().len(), 2);
}

#[tokio::test]
async fn test_add_item_id_is_max_plus_one() {
    let (server, _store) = setup_seeded_environment(
        Vec::new(),
        vec![library_item(7, "old-clip.mp4", AssetKind::Video, "grammar")],
    );

    let response = server
        .post("/library/add_item")
        .json(&add_payload("new-clip.mp4", AssetKind::Video, "grammar"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: ApiResponse<LibraryItem> = response.json();
    assert_eq!(body.data.expect("item").id, 8);
}

#[tokio::test]
async fn test_add_item_rejects_empty_name() {
    let (server, store) = setup_test_environment();

    let response = server
        .post("/library/add_item")
        .json(&add_payload("  ", AssetKind::Image, "vocabulary"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(store.read().await.library().is_empty());
}

#[tokio::test]
async fn test_list_items_filters_by_kind_and_category() {
    let (server, _store) = setup_seeded_environment(
        Vec::new(),
        vec![
            library_item(1, "dialogue.mp3", AssetKind::Audio, "listening"),
            library_item(2, "chart.png", AssetKind::Image, "writing"),
            library_item(3, "essay-guide.pdf", AssetKind::Document, "writing"),
        ],
    );

    let response = server.get("/library/list_items").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: ApiResponse<Vec<LibraryItem>> = response.json();
    assert_eq!(body.data.expect("items").len(), 3);

    let response = server
        .get("/library/list_items")
        .add_query_param("category", "writing")
        .await;
    let body: ApiResponse<Vec<LibraryItem>> = response.json();
    assert_eq!(body.data.expect("items").len(), 2);

    let response = server
        .get("/library/list_items")
        .add_query_param("category", "writing")
        .add_query_param("type", "image")
        .await;
    let body: ApiResponse<Vec<LibraryItem>> = response.json();
    let items = body.data.expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "chart.png");
}

#[tokio::test]
async fn test_get_item_success() {
    let (server, _store) = setup_seeded_environment(
        Vec::new(),
        vec![library_item(4, "minimal-pairs.mp3", AssetKind::Audio, "pronunciation")],
    );

    let response = server.get("/library/get_item/4").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: ApiResponse<LibraryItem> = response.json();
    assert_eq!(body.data.expect("item").name, "minimal-pairs.mp3");
}

#[tokio::test]
async fn test_get_item_not_found() {
    let (server, _store) = setup_test_environment();

    let response = server.get("/library/get_item/99").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: ApiResponse<Value> = response.json();
    assert_eq!(body.status_code, 404);
}
