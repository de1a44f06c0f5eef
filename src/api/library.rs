use crate::SharedStore;
use crate::errors::AppError;
use crate::model::library::{LibraryItem, NewLibraryItem};
use crate::payloads::library::{AddLibraryItemPayload, ListLibraryItemsParams};
use crate::response::ApiResponse;
use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;
use tracing::log::{debug, info};

/// Registers a new media asset in the library.
///
/// Request Body: `AddLibraryItemPayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `LibraryItem`: The stored asset with its assigned integer id
///   (201 Created).
/// * `400 Bad Request`: If the asset name is empty.
#[instrument(skip(store, payload))]
pub async fn add_item(
    State(store): State<SharedStore>,
    Json(payload): Json<AddLibraryItemPayload>,
) -> Result<ApiResponse<LibraryItem>, AppError> {
    info!("Adding library item '{}'", payload.name);
    debug!("Add library item payload: {:?}", payload);

    let new_item = NewLibraryItem {
        name: payload.name,
        kind: payload.kind,
        size: payload.size,
        category: payload.category,
    };

    let item = store.write().await.add_library_item(new_item)?;

    info!("Successfully added library item with id: {}", item.id);
    Ok(ApiResponse::created(item))
}

/// Lists library assets, optionally filtered by category and/or type.
///
/// Query Parameters:
/// * `category`: Optional category filter.
/// * `type`: Optional asset kind (`audio`, `video`, `image`, `document`).
///
/// Returns (wrapped in `ApiResponse`)
/// * `Vec<LibraryItem>`: Assets matching the filters (200 OK).
#[instrument(skip(store, params))]
pub async fn list_items(
    State(store): State<SharedStore>,
    Query(params): Query<ListLibraryItemsParams>,
) -> Result<ApiResponse<Vec<LibraryItem>>, AppError> {
    info!(
        "Listing library items. Filters: category={:?}, type={:?}",
        params.category, params.kind
    );

    let store = store.read().await;
    let items: Vec<LibraryItem> = store
        .library()
        .iter()
        .filter(|item| {
            params
                .category
                .as_deref()
                .is_none_or(|category| item.category == category)
        })
        .filter(|item| params.kind.is_none_or(|kind| item.kind == kind))
        .cloned()
        .collect();

    info!("Successfully listed {} library items", items.len());
    Ok(ApiResponse::ok(items))
}

/// Retrieves a single library asset by id.
///
/// Returns (wrapped in `ApiResponse`)
/// * `LibraryItem`: The asset (200 OK).
/// * `404 Not Found`: If the item id does not exist.
#[instrument(skip(store))]
pub async fn get_item(
    State(store): State<SharedStore>,
    Path(item_id): Path<i64>,
) -> Result<ApiResponse<LibraryItem>, AppError> {
    info!("Fetching library item with id: {}", item_id);

    let store = store.read().await;
    let item = store.get_library_item(item_id)?.clone();

    info!("Successfully fetched library item with id: {}", item_id);
    Ok(ApiResponse::ok(item))
}
