//! Generic bulk-create / list-all routes, instantiated once per resource.

use crate::dtos::{decode_batch, wire_record};
use crate::error::ContentError;
use crate::models::{ContentRecord, Stored};
use crate::resources::{self, Resource};
use crate::services::StoreError;
use crate::startup::AppState;
use axum::{extract::State, routing::post, Json, Router};
use metrics::counter;
use mongodb::bson;
use serde_json::Value;

/// Routes for every content resource.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(content_routes(resources::features()))
        .merge(content_routes(resources::chat_features()))
        .merge(content_routes(resources::voice_features()))
        .merge(content_routes(resources::rankings()))
        .merge(content_routes(resources::user_rankings()))
        .merge(content_routes(resources::testimonials()))
        .merge(content_routes(resources::participants()))
        .merge(content_routes(resources::learn_more()))
}

/// `POST` and `GET` on `/api/{resource.name}`, bound to `resource.collection`.
pub fn content_routes<T: ContentRecord>(resource: Resource<T>) -> Router<AppState> {
    Router::new().route(
        &resource.path(),
        post(move |State(state): State<AppState>, Json(body): Json<Value>| {
            bulk_create(state, resource, body)
        })
        .get(move |State(state): State<AppState>| list_all(state, resource)),
    )
}

pub async fn bulk_create<T: ContentRecord>(
    state: AppState,
    resource: Resource<T>,
    body: Value,
) -> Result<Json<Vec<Value>>, ContentError> {
    let records: Vec<T> = decode_batch(body).map_err(|e| {
        tracing::warn!(resource = %resource.name, "Rejected batch with invalid record: {}", e);
        ContentError::from(e)
    })?;

    let stored: Vec<Stored<T>> = records.into_iter().map(Stored::new).collect();
    let documents = stored
        .iter()
        .map(bson::to_document)
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::from)?;

    let count = documents.len();
    let created: Vec<Value> = documents.iter().cloned().map(wire_record).collect();
    state
        .store
        .insert_many(resource.collection, documents)
        .await
        .map_err(|e| {
            tracing::error!(
                resource = %resource.name,
                count,
                "Failed to insert content records: {}",
                e
            );
            e
        })?;

    counter!("content_records_inserted_total", "resource" => resource.name)
        .increment(count as u64);
    tracing::info!(resource = %resource.name, count, "Inserted content records");

    Ok(Json(created))
}

pub async fn list_all<T: ContentRecord>(
    state: AppState,
    resource: Resource<T>,
) -> Result<Json<Vec<Value>>, ContentError> {
    let documents = state
        .store
        .find_all(resource.collection)
        .await
        .map_err(|e| {
            tracing::error!(resource = %resource.name, "Failed to list content records: {}", e);
            e
        })?;

    let mut records = documents
        .into_iter()
        .map(bson::from_document::<Stored<T>>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::error!(resource = %resource.name, "Failed to decode stored record: {}", e);
            StoreError::from(e)
        })?;

    resource.apply_list_hook(&mut records);

    tracing::debug!(resource = %resource.name, count = records.len(), "Listed content records");

    let listed = records
        .iter()
        .map(|record| bson::to_document(record).map(wire_record))
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::from)?;

    Ok(Json(listed))
}
