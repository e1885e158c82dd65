use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{AttributeSpec, CreateProductBundle, SubmitProductRequest},
        response::{api::ApiResponse, product::ProductResponse},
    },
};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::ceil_two_price};
use tracing::{error, info};
use uuid::Uuid;

/// Turns one validated submission into the product row plus its detail,
/// image and attribute rows, persisted in a single transaction.
#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }

    /// Reshapes the flat form payload into the persistence-ready bundle.
    ///
    /// A fresh opaque identifier is generated on every call, so retrying a
    /// failed submission creates a brand new product.
    fn build_bundle(req: &SubmitProductRequest) -> Result<CreateProductBundle, ServiceError> {
        let thumb = req
            .links
            .first()
            .cloned()
            .ok_or_else(|| ServiceError::Validation(vec!["links must not be empty".into()]))?;

        let attributes = Self::zip_attributes(req)?;

        Ok(CreateProductBundle {
            uuid: Uuid::new_v4().simple().to_string(),
            category_id: req.category_id,
            name: req.name.clone(),
            price: ceil_two_price(req.price),
            price_original: ceil_two_price(req.price_original),
            thumb,
            count: req.count.clone(),
            unit: req.unit.clone(),
            description: req.description.clone(),
            links: req.links.clone(),
            attributes,
        })
    }

    /// Correlates the three parallel attribute lists by index. Mismatched
    /// lengths fail the whole submission instead of truncating or padding.
    fn zip_attributes(req: &SubmitProductRequest) -> Result<Vec<AttributeSpec>, ServiceError> {
        if req.attributes.len() != req.items.len() || req.attributes.len() != req.markups.len() {
            return Err(ServiceError::MalformedAttributeSet(format!(
                "attribute lists must have matching lengths, got attributes={}, items={}, markups={}",
                req.attributes.len(),
                req.items.len(),
                req.markups.len()
            )));
        }

        let specs = req
            .attributes
            .iter()
            .zip(req.items.iter())
            .zip(req.markups.iter())
            .map(|((attribute, items), markup)| AttributeSpec {
                attribute: attribute.clone(),
                items: items.clone(),
                markup: *markup,
            })
            .collect();

        Ok(specs)
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn submit_product(
        &self,
        req: &SubmitProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Submitting new product: {}", req.name);

        let bundle = Self::build_bundle(req)?;

        let product = self.command.create_product_bundle(&bundle).await.map_err(|e| {
            error!("❌ Failed to persist product bundle: {:?}", e);
            ServiceError::Repo(e)
        })?;

        info!("✅ Product created with uuid: {}", product.uuid);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: product.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::product::repository::ProductCommandRepositoryTrait;
    use crate::model::product::Product as ProductModel;
    use shared::errors::RepositoryError;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockProductCommandRepository {
        persisted: Mutex<Vec<CreateProductBundle>>,
        fail_with: Option<fn() -> RepositoryError>,
    }

    impl MockProductCommandRepository {
        fn failing(fail_with: fn() -> RepositoryError) -> Self {
            Self {
                persisted: Mutex::new(Vec::new()),
                fail_with: Some(fail_with),
            }
        }

        fn bundles(&self) -> Vec<CreateProductBundle> {
            self.persisted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProductCommandRepositoryTrait for MockProductCommandRepository {
        async fn create_product_bundle(
            &self,
            bundle: &CreateProductBundle,
        ) -> Result<ProductModel, RepositoryError> {
            if let Some(fail) = self.fail_with {
                // nothing recorded, mirroring a rolled-back transaction
                return Err(fail());
            }

            self.persisted.lock().unwrap().push(bundle.clone());

            Ok(ProductModel {
                product_id: self.persisted.lock().unwrap().len() as i32,
                uuid: bundle.uuid.clone(),
                category_id: bundle.category_id,
                name: bundle.name.clone(),
                price: bundle.price,
                price_original: bundle.price_original,
                thumb: bundle.thumb.clone(),
                likes: 0,
                created_at: None,
                updated_at: None,
            })
        }
    }

    fn sample_request() -> SubmitProductRequest {
        SubmitProductRequest {
            category_id: 1,
            name: "铁观音".to_string(),
            price: 128.0,
            price_original: 168.0,
            links: vec!["a.png".into(), "b.png".into(), "c.png".into()],
            count: "100".to_string(),
            unit: "盒".to_string(),
            description: "description".to_string(),
            attributes: vec!["color".into(), "size".into()],
            items: vec![
                vec!["red".into(), "blue".into()],
                vec!["S".into(), "M".into()],
            ],
            markups: vec![1.1, 1.2],
        }
    }

    #[tokio::test]
    async fn persisting_failure_leaves_nothing_behind() {
        let repo = Arc::new(MockProductCommandRepository::failing(|| {
            RepositoryError::Custom("storage unavailable".into())
        }));
        let service = ProductCommandService::new(repo.clone());

        let result = service.submit_product(&sample_request()).await;

        assert!(matches!(result, Err(ServiceError::Repo(_))));
        assert!(repo.bundles().is_empty());
    }

    #[tokio::test]
    async fn image_links_keep_submission_order() {
        let repo = Arc::new(MockProductCommandRepository::default());
        let service = ProductCommandService::new(repo.clone());

        service.submit_product(&sample_request()).await.unwrap();

        let bundles = repo.bundles();
        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].links, vec!["a.png", "b.png", "c.png"]);
    }

    #[tokio::test]
    async fn parallel_lists_zip_into_attribute_rows() {
        let repo = Arc::new(MockProductCommandRepository::default());
        let service = ProductCommandService::new(repo.clone());

        service.submit_product(&sample_request()).await.unwrap();

        let bundles = repo.bundles();
        assert_eq!(
            bundles[0].attributes,
            vec![
                AttributeSpec {
                    attribute: "color".into(),
                    items: vec!["red".into(), "blue".into()],
                    markup: 1.1,
                },
                AttributeSpec {
                    attribute: "size".into(),
                    items: vec!["S".into(), "M".into()],
                    markup: 1.2,
                },
            ]
        );
    }

    #[tokio::test]
    async fn thumbnail_is_first_image_link() {
        let repo = Arc::new(MockProductCommandRepository::default());
        let service = ProductCommandService::new(repo.clone());

        let response = service.submit_product(&sample_request()).await.unwrap();

        assert_eq!(response.data.thumb, "a.png");
        assert_eq!(repo.bundles()[0].thumb, "a.png");
    }

    #[tokio::test]
    async fn mismatched_attribute_lists_are_rejected() {
        let repo = Arc::new(MockProductCommandRepository::default());
        let service = ProductCommandService::new(repo.clone());

        let mut req = sample_request();
        req.items.push(vec!["XL".into()]);

        let result = service.submit_product(&req).await;

        assert!(matches!(
            result,
            Err(ServiceError::MalformedAttributeSet(_))
        ));
        assert!(repo.bundles().is_empty());
    }

    #[tokio::test]
    async fn resubmitting_creates_a_distinct_product() {
        let repo = Arc::new(MockProductCommandRepository::default());
        let service = ProductCommandService::new(repo.clone());

        let first = service.submit_product(&sample_request()).await.unwrap();
        let second = service.submit_product(&sample_request()).await.unwrap();

        assert_ne!(first.data.uuid, second.data.uuid);
        assert_eq!(repo.bundles().len(), 2);
    }

    #[tokio::test]
    async fn prices_are_rounded_to_cents() {
        let repo = Arc::new(MockProductCommandRepository::default());
        let service = ProductCommandService::new(repo.clone());

        let mut req = sample_request();
        req.price = 127.996;
        req.price_original = 167.994;

        service.submit_product(&req).await.unwrap();

        let bundles = repo.bundles();
        assert_eq!(bundles[0].price, 128.0);
        assert_eq!(bundles[0].price_original, 167.99);
    }

    #[tokio::test]
    async fn empty_link_list_is_a_validation_failure() {
        let repo = Arc::new(MockProductCommandRepository::default());
        let service = ProductCommandService::new(repo.clone());

        let mut req = sample_request();
        req.links.clear();

        let result = service.submit_product(&req).await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(repo.bundles().is_empty());
    }
}
