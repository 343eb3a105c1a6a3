//! E-commerce schema: customers, products, orders and order items.

use super::{GenContext, Record};
use crate::fake::FakeData;
use crate::value::SqlValue;
use chrono::NaiveDate;
use rand::Rng;
use serde_json::json;

pub const THEMES: &[&str] = &["dark", "light"];
pub const PRODUCT_CATEGORIES: &[&str] = &["Electronics", "Clothing", "Furniture", "Other"];
pub const PRODUCT_TAGS: &[&str] = &["New", "Sale", "Featured", "Limited"];
pub const PAYMENT_STATUSES: &[&str] = &["Pending", "Paid", "Failed"];

#[derive(Debug, Clone)]
pub struct Customer {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub is_active: i64,
    pub theme: &'static str,
}

impl Record for Customer {
    const TABLE: &'static str = "Customers";
    const COLUMNS: &'static [&'static str] = &[
        "full_name",
        "email",
        "phone",
        "city",
        "address",
        "is_active",
        "preferences",
    ];

    fn fake<R: Rng>(fake: &mut FakeData<R>, _ctx: &GenContext) -> Self {
        Self {
            full_name: fake.full_name(),
            email: fake.email(),
            phone: fake.phone_digits(10),
            city: fake.city(),
            address: fake.street_address(),
            is_active: fake.flag(),
            theme: *fake.pick(THEMES),
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        let preferences = json!({ "theme": self.theme, "lang": "en" });
        vec![
            SqlValue::string(&self.full_name),
            SqlValue::string(&self.email),
            SqlValue::string(&self.phone),
            SqlValue::string(&self.city),
            SqlValue::string(&self.address),
            SqlValue::Int(self.is_active),
            SqlValue::String(preferences.to_string()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub name: String,
    pub category: &'static str,
    pub price: f64,
    pub rating: f64,
    pub stock: i64,
    pub tags: Vec<&'static str>,
    pub color: &'static str,
    pub weight: i64,
}

impl Record for Product {
    const TABLE: &'static str = "Products";
    const COLUMNS: &'static [&'static str] = &[
        "name", "category", "price", "rating", "stock", "tags", "specs",
    ];

    fn fake<R: Rng>(fake: &mut FakeData<R>, _ctx: &GenContext) -> Self {
        Self {
            name: fake.title_word(),
            category: *fake.pick(PRODUCT_CATEGORIES),
            price: fake.decimal(5.0, 500.0),
            rating: fake.decimal(1.0, 5.0),
            stock: fake.int_range(0, 200),
            tags: fake
                .sample_subset(PRODUCT_TAGS, 1..=PRODUCT_TAGS.len())
                .into_iter()
                .copied()
                .collect(),
            color: fake.color_name(),
            weight: fake.int_range(1, 10),
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        let specs = json!({ "color": self.color, "weight": self.weight });
        vec![
            SqlValue::string(&self.name),
            SqlValue::from(self.category),
            SqlValue::Decimal(self.price),
            SqlValue::Decimal(self.rating),
            SqlValue::Int(self.stock),
            SqlValue::String(self.tags.join(",")),
            SqlValue::String(specs.to_string()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub customer_id: i64,
    pub order_date: NaiveDate,
    pub order_time: String,
    pub payment_status: &'static str,
    pub total_amount: f64,
}

impl Record for Order {
    const TABLE: &'static str = "Orders";
    const COLUMNS: &'static [&'static str] = &[
        "customer_id",
        "order_date",
        "order_time",
        "payment_status",
        "total_amount",
    ];

    fn fake<R: Rng>(fake: &mut FakeData<R>, ctx: &GenContext) -> Self {
        Self {
            customer_id: fake.int_range(1, 100),
            order_date: fake.date_this_year(ctx.reference_date),
            order_time: fake.time_of_day(),
            payment_status: *fake.pick(PAYMENT_STATUSES),
            total_amount: fake.decimal(20.0, 1000.0),
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.customer_id),
            SqlValue::String(self.order_date.to_string()),
            SqlValue::string(&self.order_time),
            SqlValue::from(self.payment_status),
            SqlValue::Decimal(self.total_amount),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct OrderItem {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
}

impl Record for OrderItem {
    const TABLE: &'static str = "OrderItems";
    const COLUMNS: &'static [&'static str] = &["order_id", "product_id", "quantity", "price"];

    fn fake<R: Rng>(fake: &mut FakeData<R>, _ctx: &GenContext) -> Self {
        // quantity and price are drawn before the references
        let quantity = fake.int_range(1, 5);
        let price = fake.decimal(5.0, 200.0);
        Self {
            order_id: fake.int_range(1, 100),
            product_id: fake.int_range(1, 100),
            quantity,
            price,
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.order_id),
            SqlValue::Int(self.product_id),
            SqlValue::Int(self.quantity),
            SqlValue::Decimal(self.price),
        ]
    }
}
