use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::product::FindAllProducts,
    model::product::{
        Product as ProductModel, ProductAttribute as ProductAttributeModel,
        ProductDetail as ProductDetailModel, ProductImage as ProductImageModel,
    },
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::Row;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🔍 Fetching all products with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) as i64) * limit;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.as_str())
        };

        // most-liked products first, the admin index ordering
        let rows = sqlx::query(
            r#"
            SELECT
                p.product_id,
                p.uuid,
                p.category_id,
                p.name,
                p.price,
                p.price_original,
                p.thumb,
                p.likes,
                p.created_at,
                p.updated_at,
                COUNT(*) OVER() AS total_count
            FROM products p
            WHERE ($1::TEXT IS NULL OR p.name ILIKE '%' || $1 || '%')
            ORDER BY p.likes DESC, p.product_id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows
            .first()
            .map(|r| r.try_get::<i64, _>("total_count").unwrap_or(0))
            .unwrap_or(0);

        let products = rows
            .into_iter()
            .map(|r| {
                Ok(ProductModel {
                    product_id: r.try_get("product_id")?,
                    uuid: r.try_get("uuid")?,
                    category_id: r.try_get("category_id")?,
                    name: r.try_get("name")?,
                    price: r.try_get("price")?,
                    price_original: r.try_get("price_original")?,
                    thumb: r.try_get("thumb")?,
                    likes: r.try_get("likes")?,
                    created_at: r.try_get("created_at")?,
                    updated_at: r.try_get("updated_at")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(RepositoryError::from)?;

        Ok((products, total))
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by uuid: {uuid}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                product_id,
                uuid,
                category_id,
                name,
                price,
                price_original,
                thumb,
                likes,
                created_at,
                updated_at
            FROM products
            WHERE uuid = $1
            "#,
        )
        .bind(uuid)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_detail(
        &self,
        product_id: i32,
    ) -> Result<Option<ProductDetailModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductDetailModel>(
            r#"
            SELECT
                detail_id,
                product_id,
                count,
                unit,
                description,
                created_at,
                updated_at
            FROM product_details
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_images(
        &self,
        product_id: i32,
    ) -> Result<Vec<ProductImageModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductImageModel>(
            r#"
            SELECT
                image_id,
                product_id,
                link,
                position,
                created_at,
                updated_at
            FROM product_images
            WHERE product_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_attributes(
        &self,
        product_id: i32,
    ) -> Result<Vec<ProductAttributeModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductAttributeModel>(
            r#"
            SELECT
                attribute_id,
                product_id,
                attribute,
                items,
                markup,
                created_at,
                updated_at
            FROM product_attributes
            WHERE product_id = $1
            ORDER BY attribute_id ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
