//! Data access for products.
//!
//! Handlers only see [`ProductStore`]; which backend sits behind it is decided
//! once in [`crate::app::build`].

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in store order.
    async fn list(&self) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>>;

    /// Inserts a new row. The store assigns the id.
    async fn create(&self, req: &ProductRequest) -> Result<Product>;

    /// Overwrites the non-key fields of `id`. Returns the affected row count.
    async fn update(&self, id: i32, req: &ProductRequest) -> Result<u64>;

    /// Returns the affected row count.
    async fn delete(&self, id: i32) -> Result<u64>;

    /// Case-insensitive literal substring match on the product name.
    async fn search_by_name(&self, term: &str) -> Result<Vec<Product>>;

    /// Fails when the backend cannot serve requests, otherwise names it.
    async fn ping(&self) -> Result<&'static str>;
}
