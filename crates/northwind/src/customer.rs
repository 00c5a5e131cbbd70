use serde::{Deserialize, Serialize};

/// Customer, keyed by a short alphanumeric code (e.g. `ALFKI`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub contact_title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

impl Customer {
    pub fn new(customer_id: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            company_name: company_name.into(),
            ..Self::default()
        }
    }
}
