use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

const PRODUCT_COLUMNS: &str = "id, name, description, price, image_url";

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products ORDER BY id",
        PRODUCT_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products WHERE id = $1",
        PRODUCT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn create_product(pool: &PgPool, req: &ProductRequest) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products (name, description, price, image_url)
         VALUES ($1, $2, $3, $4)
         RETURNING {}",
        PRODUCT_COLUMNS
    ))
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.price)
    .bind(&req.image_url)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Overwrites every non-key column. Returns the number of rows affected.
pub async fn update_product(pool: &PgPool, id: i32, req: &ProductRequest) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE products
         SET name = $1, description = $2, price = $3, image_url = $4
         WHERE id = $5",
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.price)
    .bind(&req.image_url)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn search_by_name(pool: &PgPool, term: &str) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products WHERE name ILIKE $1 ESCAPE '\\' ORDER BY id",
        PRODUCT_COLUMNS
    ))
    .bind(contains_pattern(term))
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Builds a `%term%` pattern with LIKE metacharacters in `term` escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn plain_terms_are_wrapped_in_wildcards() {
        assert_eq!(contains_pattern("Widg"), "%Widg%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
