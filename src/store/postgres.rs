use async_trait::async_trait;
use sqlx::PgPool;

use super::ProductStore;
use crate::{
    database,
    error::Result,
    models::{Product, ProductRequest},
    queries::product_queries,
};

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>> {
        product_queries::find_all(&self.pool).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        product_queries::find_by_id(&self.pool, id).await
    }

    async fn create(&self, req: &ProductRequest) -> Result<Product> {
        product_queries::create_product(&self.pool, req).await
    }

    async fn update(&self, id: i32, req: &ProductRequest) -> Result<u64> {
        product_queries::update_product(&self.pool, id, req).await
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        product_queries::delete_product(&self.pool, id).await
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Product>> {
        product_queries::search_by_name(&self.pool, term).await
    }

    async fn ping(&self) -> Result<&'static str> {
        database::check_health(&self.pool).await?;
        Ok("postgres")
    }
}
