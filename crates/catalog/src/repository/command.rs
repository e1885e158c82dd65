use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::CreateProductBundle, model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    fn map_db_error(e: sqlx::Error) -> RepositoryError {
        if let sqlx::Error::Database(db_err) = &e {
            match db_err.code().as_deref() {
                Some("23503") => {
                    return RepositoryError::ForeignKey(db_err.message().to_string());
                }
                Some("23505") => {
                    return RepositoryError::AlreadyExists(db_err.message().to_string());
                }
                _ => {}
            }
        }

        RepositoryError::from(e)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product_bundle(
        &self,
        bundle: &CreateProductBundle,
    ) -> Result<ProductModel, RepositoryError> {
        info!("🏗️ Persisting product bundle: {}", bundle.name);

        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        let product: ProductModel = sqlx::query_as(
            r#"
            INSERT INTO products (
                uuid,
                category_id,
                name,
                price,
                price_original,
                thumb,
                likes,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, 0, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING
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
            "#,
        )
        .bind(&bundle.uuid)
        .bind(bundle.category_id)
        .bind(&bundle.name)
        .bind(bundle.price)
        .bind(bundle.price_original)
        .bind(&bundle.thumb)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert product: {:?}", e);
            Self::map_db_error(e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO product_details (
                product_id,
                count,
                unit,
                description,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            "#,
        )
        .bind(product.product_id)
        .bind(&bundle.count)
        .bind(&bundle.unit)
        .bind(&bundle.description)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert product detail: {:?}", e);
            Self::map_db_error(e)
        })?;

        // explicit position column, storage does not preserve insert order
        for (position, link) in bundle.links.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO product_images (
                    product_id,
                    link,
                    position,
                    created_at,
                    updated_at
                )
                VALUES ($1, $2, $3, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
                "#,
            )
            .bind(product.product_id)
            .bind(link)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert product image: {:?}", e);
                Self::map_db_error(e)
            })?;
        }

        for attr in &bundle.attributes {
            sqlx::query(
                r#"
                INSERT INTO product_attributes (
                    product_id,
                    attribute,
                    items,
                    markup,
                    created_at,
                    updated_at
                )
                VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
                "#,
            )
            .bind(product.product_id)
            .bind(&attr.attribute)
            .bind(&attr.items)
            .bind(attr.markup)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert product attribute: {:?}", e);
                Self::map_db_error(e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit product bundle: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(product)
    }
}
