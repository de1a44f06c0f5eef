use crate::cli::Args;
use crate::store::ContentStore;
use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::log::info;

pub mod cli;
pub mod errors;
pub mod model;
pub mod payloads;
pub mod response;
pub mod store;
pub mod tree;

mod api;

/// Shared handle to the in-memory content store. The lock only serializes
/// concurrent HTTP clients; every store operation itself is synchronous
/// call-and-return.
pub type SharedStore = Arc<RwLock<ContentStore>>;

pub fn init_router(args: &Args) -> anyhow::Result<Router> {
    let store = match &args.fixtures {
        Some(path) => {
            info!("Loading content fixtures from {}...", path.display());
            ContentStore::from_fixture_file(path)
                .with_context(|| format!("Failed to load fixtures from {}", path.display()))?
        }
        None => ContentStore::new(),
    };

    info!("Initializing router...");
    Ok(init_router_internal(Arc::new(RwLock::new(store))))
}

pub fn init_test_router(store: SharedStore) -> Router {
    init_router_internal(store)
}

fn init_router_internal(store: SharedStore) -> Router {
    let course_api = course_routes();
    let library_api = library_routes();

    Router::new()
        .nest("/course", course_api)
        .nest("/library", library_api)
        .with_state(store)
}

fn course_routes() -> Router<SharedStore> {
    Router::new()
        .route("/create_course", post(api::course::create_course))
        .route("/list_courses", get(api::course::list_courses))
        .route("/get_course/{course_id}", get(api::course::get_course))
        .route("/update_course", post(api::course::update_course))
        .route("/add_subcategory", post(api::course::add_subcategory))
        .route("/add_lesson", post(api::course::add_lesson))
        .route("/update_lesson", post(api::course::update_lesson))
        .route("/get_node", get(api::course::get_node))
}

fn library_routes() -> Router<SharedStore> {
    Router::new()
        .route("/add_item", post(api::library::add_item))
        .route("/list_items", get(api::library::list_items))
        .route("/get_item/{item_id}", get(api::library::get_item))
}
