mod health;
mod products;

use axum::{Router, routing::get};

use crate::AppState;

pub const PRODUCT_BASE_PATH: &str = "/api/Product";

pub fn create_router() -> Router<AppState> {
    let collection_slash = format!("{}/", PRODUCT_BASE_PATH);
    let item = format!("{}/{{id}}", PRODUCT_BASE_PATH);
    let search = format!("{}/search/{{search}}", PRODUCT_BASE_PATH);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            PRODUCT_BASE_PATH,
            get(products::list_products).post(products::create_product),
        )
        .route(
            &collection_slash,
            get(products::list_products).post(products::create_product),
        )
        .route(
            &item,
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(&search, get(products::search_products))
}
