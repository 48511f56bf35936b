// Order records persisted through a key-value store

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::checkout::{CheckoutSummary, OrderShipping};
use crate::error::{QuoteError, Result};
use crate::store::KeyValueStore;

const COLLECTION: &str = "orders";
const ID_PREFIX: &str = "order-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

/// Payment choice recorded with an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub method: String,
    pub status: PaymentStatus,
}

impl Payment {
    /// Cash on delivery stays pending until the goods arrive; every other
    /// method is settled at checkout
    pub fn for_method<S: Into<String>>(method: S) -> Self {
        let method = method.into();
        let status = if method == "cod" {
            PaymentStatus::Pending
        } else {
            PaymentStatus::Completed
        };
        Self { method, status }
    }
}

/// Order as submitted at checkout, before it gets an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub buyer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    pub farmer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_name: Option<String>,
    pub items: Vec<OrderItem>,
    pub shipping: OrderShipping,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
    pub subtotal: f64,
    pub total: f64,
}

impl NewOrder {
    /// Single-item order priced by a checkout summary
    pub fn from_checkout<B: Into<String>, F: Into<String>>(
        buyer_id: B,
        farmer_id: F,
        item: OrderItem,
        summary: &CheckoutSummary,
    ) -> Self {
        Self {
            buyer_id: buyer_id.into(),
            buyer_name: None,
            farmer_id: farmer_id.into(),
            farmer_name: None,
            items: vec![item],
            shipping: summary.shipping,
            payment: None,
            subtotal: summary.subtotal,
            total: summary.total,
        }
    }

    /// Display names of both parties, as shown on order lists and invoices
    pub fn with_names<B: Into<String>, F: Into<String>>(mut self, buyer_name: B, farmer_name: F) -> Self {
        self.buyer_name = Some(buyer_name.into());
        self.farmer_name = Some(farmer_name.into());
        self
    }

    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payment = Some(payment);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub buyer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    pub farmer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_name: Option<String>,
    pub items: Vec<OrderItem>,
    pub shipping: OrderShipping,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
    pub subtotal: f64,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order collection on top of any [`KeyValueStore`].
///
/// Every write rewrites the whole collection and holds `write_lock` from
/// read to save.
pub struct OrderRepository<S: KeyValueStore> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> OrderRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Every stored order, oldest first
    pub fn all(&self) -> Result<Vec<Order>> {
        match self.store.get(COLLECTION)? {
            Some(document) => Ok(serde_json::from_str(&document)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, orders: &[Order]) -> Result<()> {
        let document = serde_json::to_string(orders)?;
        self.store.put(COLLECTION, &document)
    }

    /// Store a new pending order and return it with its id
    pub fn create(&self, new_order: NewOrder) -> Result<Order> {
        let _guard = self.lock_writes();
        let mut orders = self.all()?;
        let next = orders
            .iter()
            .filter_map(|order| order.id.strip_prefix(ID_PREFIX)?.parse::<u64>().ok())
            .max()
            .map_or(1, |n| n + 1);

        let now = Utc::now();
        let order = Order {
            id: format!("{}{}", ID_PREFIX, next),
            buyer_id: new_order.buyer_id,
            buyer_name: new_order.buyer_name,
            farmer_id: new_order.farmer_id,
            farmer_name: new_order.farmer_name,
            items: new_order.items,
            shipping: new_order.shipping,
            payment: new_order.payment,
            subtotal: new_order.subtotal,
            total: new_order.total,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        orders.push(order.clone());
        self.save(&orders)?;
        info!(
            order_id = %order.id,
            buyer_id = %order.buyer_id,
            shipping_cost = order.shipping.cost,
            total = order.total,
            "Order created"
        );
        Ok(order)
    }

    pub fn get(&self, id: &str) -> Result<Option<Order>> {
        Ok(self.all()?.into_iter().find(|order| order.id == id))
    }

    /// Change an order's status and bump its `updated_at`
    pub fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order> {
        let _guard = self.lock_writes();
        let mut orders = self.all()?;
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| QuoteError::NotFound(format!("order {}", id)))?;

        order.status = status;
        order.updated_at = Utc::now();
        let updated = order.clone();

        self.save(&orders)?;
        info!(order_id = %id, status = ?status, "Order status updated");
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.lock_writes();
        let mut orders = self.all()?;
        let before = orders.len();
        orders.retain(|order| order.id != id);
        if orders.len() == before {
            return Err(QuoteError::NotFound(format!("order {}", id)));
        }
        self.save(&orders)
    }

    pub fn by_buyer(&self, buyer_id: &str) -> Result<Vec<Order>> {
        let mut orders = self.all()?;
        orders.retain(|order| order.buyer_id == buyer_id);
        Ok(orders)
    }

    pub fn by_farmer(&self, farmer_id: &str) -> Result<Vec<Order>> {
        let mut orders = self.all()?;
        orders.retain(|order| order.farmer_id == farmer_id);
        Ok(orders)
    }
}
