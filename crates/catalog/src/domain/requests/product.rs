use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, IntoParams, Clone)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    /// zero means "use the configured page size"
    #[serde(default)]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

/// One product submission as it arrives from the admin create form.
///
/// `attributes`, `items` and `markups` are parallel lists: index `i` across
/// all three describes one attribute row. The form serializes them this way;
/// the service normalizes them into [`AttributeSpec`] records before anything
/// touches storage.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct SubmitProductRequest {
    #[validate(range(min = 1))]
    pub category_id: i32,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(range(min = 0.0))]
    pub price_original: f64,

    /// ordered image links, the first one becomes the thumbnail
    #[validate(length(min = 1, message = "at least one image link is required"))]
    pub links: Vec<String>,

    #[serde(default)]
    pub count: String,

    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub attributes: Vec<String>,

    #[serde(default)]
    pub items: Vec<Vec<String>>,

    #[serde(default)]
    pub markups: Vec<f64>,
}

/// One structured attribute row, zipped out of the submission's parallel lists.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AttributeSpec {
    pub attribute: String,
    pub items: Vec<String>,
    pub markup: f64,
}

/// Persistence-ready shape of one submission: the four record sets the
/// repository writes inside a single transaction.
#[derive(Debug, Clone)]
pub struct CreateProductBundle {
    pub uuid: String,
    pub category_id: i32,
    pub name: String,
    pub price: f64,
    pub price_original: f64,
    pub thumb: String,
    pub count: String,
    pub unit: String,
    pub description: String,
    pub links: Vec<String>,
    pub attributes: Vec<AttributeSpec>,
}
