use serde::{Deserialize, Serialize};

use entysync_core::Entity;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub quantity_per_unit: Option<String>,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: Option<u64>,
    pub units_in_stock: Option<i16>,
    pub units_on_order: Option<i16>,
    pub reorder_level: Option<i16>,
    pub discontinued: bool,
}

impl Product {
    pub fn new(product_id: i32, product_name: impl Into<String>) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            ..Self::default()
        }
    }
}

impl Entity for Product {
    type Id = i32;

    fn id(&self) -> &i32 {
        &self.product_id
    }
}
