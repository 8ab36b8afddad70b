use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ProductStore;
use crate::{
    error::{AppError, Result},
    models::{Product, ProductRequest},
};

/// Process-local product table. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryProductStore {
    inner: RwLock<Table>,
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>> {
        let table = self.inner.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        let table = self.inner.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, req: &ProductRequest) -> Result<Product> {
        let mut table = self.inner.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::InternalError("Product id space exhausted".to_string()))?;
        table.last_id = id;

        let product = Product::from_request(id, req);
        table.rows.insert(id, product.clone());

        Ok(product)
    }

    async fn update(&self, id: i32, req: &ProductRequest) -> Result<u64> {
        let mut table = self.inner.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = Product::from_request(id, req);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let mut table = self.inner.write().await;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Product>> {
        let needle = term.to_lowercase();
        let table = self.inner.read().await;

        Ok(table
            .rows
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<&'static str> {
        Ok("memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn request(name: &str) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            description: format!("{} description", name),
            price: Decimal::new(1250, 2),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially_and_not_reused() {
        let store = MemoryProductStore::new();

        let first = store.create(&request("a")).await.unwrap();
        let second = store.create(&request("b")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        assert_eq!(store.delete(second.id).await.unwrap(), 1);
        let third = store.create(&request("c")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn update_and_delete_report_affected_rows() {
        let store = MemoryProductStore::new();
        let created = store.create(&request("lamp")).await.unwrap();

        assert_eq!(store.update(created.id, &request("desk lamp")).await.unwrap(), 1);
        assert_eq!(store.update(99, &request("ghost")).await.unwrap(), 0);

        let stored = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "desk lamp");
        assert_eq!(stored.id, created.id);

        assert_eq!(store.delete(created.id).await.unwrap(), 1);
        assert_eq!(store.delete(created.id).await.unwrap(), 0);
        assert!(store.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_literal() {
        let store = MemoryProductStore::new();
        store.create(&request("Blue Widget")).await.unwrap();
        store.create(&request("WIDGET pro")).await.unwrap();
        store.create(&request("Gadget")).await.unwrap();
        store.create(&request("50% off")).await.unwrap();

        let names: Vec<String> = store
            .search_by_name("widg")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Blue Widget", "WIDGET pro"]);

        assert_eq!(store.search_by_name("%").await.unwrap().len(), 1);
        assert!(store.search_by_name("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_returns_rows_in_id_order() {
        let store = MemoryProductStore::new();
        for name in ["c", "a", "b"] {
            store.create(&request(name)).await.unwrap();
        }

        let ids: Vec<i32> = store.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
