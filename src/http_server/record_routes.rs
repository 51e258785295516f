//! Record HTTP Routes
//!
//! One router per record collection, generic over the record type:
//!
//! - `GET    /`     list all records
//! - `POST   /`     calculate derived fields, then append
//! - `GET    /:id`  first record with `id`
//! - `PUT    /:id`  calculate derived fields, then replace in place
//! - `DELETE /:id`  remove, answering with a confirmation message

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::ApiResult;
use crate::records::{Record, RecordStore};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create routes for one record collection
pub fn record_routes<R: Record>(store: Arc<RecordStore<R>>) -> Router {
    Router::new()
        .route("/", get(list_handler::<R>).post(create_handler::<R>))
        .route(
            "/:id",
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .with_state(store)
}

// ==================
// Handlers
// ==================

async fn list_handler<R: Record>(State(store): State<Arc<RecordStore<R>>>) -> Json<Vec<R>> {
    Json(store.list())
}

async fn get_handler<R: Record>(
    State(store): State<Arc<RecordStore<R>>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<R>> {
    let Path(id) = id?;
    Ok(Json(store.get(id)?))
}

async fn create_handler<R: Record>(
    State(store): State<Arc<RecordStore<R>>>,
    body: Result<Json<R>, JsonRejection>,
) -> ApiResult<Json<R>> {
    let Json(record) = body?;
    Ok(Json(store.insert(record.calculated()?)))
}

async fn update_handler<R: Record>(
    State(store): State<Arc<RecordStore<R>>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<R>, JsonRejection>,
) -> ApiResult<Json<R>> {
    let Path(id) = id?;
    let Json(record) = body?;
    Ok(Json(store.replace(id, record.calculated()?)?))
}

async fn delete_handler<R: Record>(
    State(store): State<Arc<RecordStore<R>>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    store.delete(id)?;
    Ok(Json(MessageResponse {
        message: format!("{} deleted", R::LABEL),
    }))
}
