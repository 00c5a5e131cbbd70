use chrono::NaiveDate;

use entysync_core::{
    ByIdSynchronizer, CaseInsensitive, Entity, EntityIdSynchronizer, EntityKeySynchronizer,
};

use crate::customer::Customer;
use crate::employee::Employee;
use crate::product::Product;

/// Sales order header.
///
/// `customer` is keyed by the customer code, compared case-insensitively;
/// `employee` is an optional id.
#[derive(Debug, Clone)]
pub struct Order<'a> {
    pub order_id: i32,
    pub order_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    pub shipped_date: Option<NaiveDate>,
    /// Freight in smallest currency unit (e.g., cents).
    pub freight: Option<u64>,
    pub ship_name: Option<String>,
    pub ship_address: Option<String>,
    pub ship_city: Option<String>,
    pub ship_region: Option<String>,
    pub ship_postal_code: Option<String>,
    pub ship_country: Option<String>,
    customer: EntityKeySynchronizer<'a, Customer, String, CaseInsensitive>,
    employee: ByIdSynchronizer<'a, Employee<'a>>,
}

impl<'a> Order<'a> {
    pub fn new(order_id: i32) -> Self {
        Self {
            order_id,
            order_date: None,
            required_date: None,
            shipped_date: None,
            freight: None,
            ship_name: None,
            ship_address: None,
            ship_city: None,
            ship_region: None,
            ship_postal_code: None,
            ship_country: None,
            customer: EntityKeySynchronizer::with_comparer(
                |c: &Customer| c.customer_id.clone(),
                CaseInsensitive,
            ),
            employee: ByIdSynchronizer::default(),
        }
    }

    pub fn customer_id(&self) -> String {
        self.customer.key()
    }

    pub fn set_customer_id(&mut self, customer_id: impl Into<String>) {
        self.customer.set_key(customer_id.into());
    }

    pub fn customer(&self) -> Option<&'a Customer> {
        self.customer.entity()
    }

    pub fn set_customer(&mut self, customer: Option<&'a Customer>) {
        self.customer.set_entity(customer);
    }

    pub fn employee_id(&self) -> Option<i32> {
        self.employee.id_or_none()
    }

    pub fn set_employee_id(&mut self, employee_id: Option<i32>) {
        self.employee.set_id_or_none(employee_id);
    }

    pub fn employee(&self) -> Option<&'a Employee<'a>> {
        self.employee.entity()
    }

    pub fn set_employee(&mut self, employee: Option<&'a Employee<'a>>) {
        self.employee.set_entity(employee);
    }
}

impl Entity for Order<'_> {
    type Id = i32;

    fn id(&self) -> &i32 {
        &self.order_id
    }
}

/// Order line; both relations are required ids.
#[derive(Debug, Clone)]
pub struct OrderDetail<'a> {
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    pub quantity: i16,
    pub discount: f32,
    order: ByIdSynchronizer<'a, Order<'a>>,
    product: EntityIdSynchronizer<'a, Product, i32>,
}

impl<'a> OrderDetail<'a> {
    pub fn new() -> Self {
        Self {
            unit_price: 0,
            quantity: 0,
            discount: 0.0,
            order: ByIdSynchronizer::default(),
            product: EntityIdSynchronizer::from_fn(|p: &Product| p.product_id),
        }
    }

    pub fn order_id(&self) -> i32 {
        self.order.id()
    }

    pub fn set_order_id(&mut self, order_id: i32) {
        self.order.set_id(order_id);
    }

    pub fn order(&self) -> Option<&'a Order<'a>> {
        self.order.entity()
    }

    pub fn set_order(&mut self, order: Option<&'a Order<'a>>) {
        self.order.set_entity(order);
    }

    pub fn product_id(&self) -> i32 {
        self.product.id()
    }

    pub fn set_product_id(&mut self, product_id: i32) {
        self.product.set_id(product_id);
    }

    pub fn product(&self) -> Option<&'a Product> {
        self.product.entity()
    }

    pub fn set_product(&mut self, product: Option<&'a Product>) {
        self.product.set_entity(product);
    }
}

impl Default for OrderDetail<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alfki() -> Customer {
        Customer::new("ALFKI", "Alfreds Futterkiste")
    }

    #[test]
    fn new_order_has_no_relations() {
        let order = Order::new(10248);

        assert_eq!(order.customer_id(), "");
        assert!(order.customer().is_none());
        assert_eq!(order.employee_id(), None);
        assert!(order.employee().is_none());
    }

    #[test]
    fn customer_code_case_is_ignored() {
        let alfki = alfki();
        let mut order = Order::new(10248);
        order.set_customer(Some(&alfki));
        order.set_customer_id("alfki");

        assert!(order.customer().is_some_and(|c| core::ptr::eq(c, &alfki)));
        assert_eq!(order.customer_id(), "ALFKI");
    }

    #[test]
    fn other_customer_code_drops_the_customer() {
        let alfki = alfki();
        let mut order = Order::new(10248);
        order.set_customer(Some(&alfki));
        order.set_customer_id("ANATR");

        assert!(order.customer().is_none());
        assert_eq!(order.customer_id(), "ANATR");
    }

    #[test]
    fn order_detail_tracks_product() {
        let chai = Product::new(1, "Chai");
        let mut detail = OrderDetail::new();
        detail.set_product(Some(&chai));

        assert_eq!(detail.product_id(), 1);

        detail.set_product(None);
        assert_eq!(detail.product_id(), 1);
        assert!(detail.product().is_none());
    }

    #[test]
    fn order_detail_defaults_to_zero_ids() {
        let detail = OrderDetail::default();
        assert_eq!(detail.order_id(), 0);
        assert_eq!(detail.product_id(), 0);
    }
}
