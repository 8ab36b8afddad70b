use std::time::Instant;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Product, ProductRequest, SearchResponse},
};

use super::PRODUCT_BASE_PATH;

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.store.list().await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<impl IntoResponse> {
    let product = state.store.create(&payload).await?;
    let location = format!("{}/{}", PRODUCT_BASE_PATH, product.id);

    tracing::info!("Created product {}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductRequest>,
) -> Result<StatusCode> {
    match state.store.update(id, &payload).await? {
        0 => Err(not_found(id)),
        _ => Ok(StatusCode::OK),
    }
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    match state.store.delete(id).await? {
        0 => Err(not_found(id)),
        _ => {
            tracing::info!("Deleted product {}", id);
            Ok(StatusCode::OK)
        }
    }
}

pub async fn search_products(
    State(state): State<AppState>,
    Path(search): Path<String>,
) -> Result<Json<SearchResponse>> {
    let started = Instant::now();
    let products = state.store.search_by_name(&search).await?;
    let elapsed = started.elapsed();

    tracing::debug!(
        "Search for {:?} matched {} products in {:?}",
        search,
        products.len(),
        elapsed
    );

    Ok(Json(SearchResponse::new(&search, products, elapsed)))
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product with id {} not found", id))
}
