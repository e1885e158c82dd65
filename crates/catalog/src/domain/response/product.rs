use crate::model::product::{
    Product as ProductModel, ProductAttribute as ProductAttributeModel,
    ProductDetail as ProductDetailModel, ProductImage as ProductImageModel,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Products are addressed by their opaque `uuid` only; the sequential
/// database id never leaves the service.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub uuid: String,
    pub category_id: i32,
    pub name: String,
    pub price: f64,
    pub price_original: f64,
    pub thumb: String,
    pub likes: i32,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            uuid: value.uuid,
            category_id: value.category_id,
            name: value.name,
            price: value.price,
            price_original: value.price_original,
            thumb: value.thumb,
            likes: value.likes,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductDetailResponse {
    pub count: String,
    pub unit: String,
    pub description: String,
}

impl From<ProductDetailModel> for ProductDetailResponse {
    fn from(value: ProductDetailModel) -> Self {
        ProductDetailResponse {
            count: value.count,
            unit: value.unit,
            description: value.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductImageResponse {
    pub id: i32,
    pub link: String,
    pub position: i32,
}

impl From<ProductImageModel> for ProductImageResponse {
    fn from(value: ProductImageModel) -> Self {
        ProductImageResponse {
            id: value.image_id,
            link: value.link,
            position: value.position,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductAttributeResponse {
    pub id: i32,
    pub attribute: String,
    pub items: Vec<String>,
    pub markup: f64,
}

impl From<ProductAttributeModel> for ProductAttributeResponse {
    fn from(value: ProductAttributeModel) -> Self {
        ProductAttributeResponse {
            id: value.attribute_id,
            attribute: value.attribute,
            items: value.items,
            markup: value.markup,
        }
    }
}

/// A product with all of its dependent records, as served on the show view.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductFullResponse {
    #[serde(flatten)]
    pub product: ProductResponse,
    pub detail: Option<ProductDetailResponse>,
    pub images: Vec<ProductImageResponse>,
    pub attributes: Vec<ProductAttributeResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_carries_the_uuid_and_hides_the_database_id() {
        let response = ProductResponse::from(ProductModel {
            product_id: 7,
            uuid: "a3f2c1".to_string(),
            category_id: 1,
            name: "铁观音".to_string(),
            price: 128.0,
            price_original: 168.0,
            thumb: "a.png".to_string(),
            likes: 0,
            created_at: None,
            updated_at: None,
        });

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json.get("uuid").and_then(|v| v.as_str()), Some("a3f2c1"));
        assert!(json.get("id").is_none());
        assert!(json.get("product_id").is_none());
    }
}
