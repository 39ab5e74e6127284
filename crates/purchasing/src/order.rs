use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use swapwise_core::{DomainError, DomainResult, Entity, Money, OrderId};

/// Purchase order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Draft,
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Draft,
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Draft",
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchase order line item (historical detail, not a source for the total).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub name: String,
    pub quantity: u32,
    pub price: Money,
}

/// An order as supplied by the order store, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub vendors: Vec<String>,
    #[serde(default)]
    pub item_count: u32,
    pub total: Money,
    pub status: OrderStatus,
    #[serde(default)]
    pub estimated_delivery: String,
    #[serde(default)]
    pub payment_terms: String,
    #[serde(default)]
    pub delivery_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
}

impl OrderRecord {
    pub fn new(id: impl Into<String>, date: NaiveDate, status: OrderStatus, total: Money) -> Self {
        Self {
            id: id.into(),
            date,
            vendors: Vec::new(),
            item_count: 0,
            total,
            status,
            estimated_delivery: String::new(),
            payment_terms: String::new(),
            delivery_time: String::new(),
            department: None,
            urgency: None,
            line_items: Vec::new(),
        }
    }

    pub fn with_vendors<I, S>(mut self, vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendors = vendors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_urgency(mut self, urgency: impl Into<String>) -> Self {
        self.urgency = Some(urgency.into());
        self
    }

    pub fn with_line_item(mut self, line: OrderLineItem) -> Self {
        self.line_items.push(line);
        self.item_count = self.line_items.len() as u32;
        self
    }

    pub fn validate(&self) -> DomainResult<Order> {
        Order::try_from(self.clone())
    }
}

/// A validated purchase order.
///
/// `total` is the authoritative amount recorded at order time. It is never
/// recomputed from line items (deposits, partial shipments and adjustments are
/// not represented in the line detail).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord", into = "OrderRecord")]
pub struct Order {
    id: OrderId,
    date: NaiveDate,
    vendors: Vec<String>,
    item_count: u32,
    total: Money,
    status: OrderStatus,
    estimated_delivery: String,
    payment_terms: String,
    delivery_time: String,
    department: Option<String>,
    urgency: Option<String>,
    line_items: Vec<OrderLineItem>,
}

impl Order {
    pub fn id_typed(&self) -> &OrderId {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Distinct vendor names in first-seen order. Empty for unassigned drafts.
    pub fn vendors(&self) -> &[String] {
        &self.vendors
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn estimated_delivery(&self) -> &str {
        &self.estimated_delivery
    }

    pub fn payment_terms(&self) -> &str {
        &self.payment_terms
    }

    pub fn delivery_time(&self) -> &str {
        &self.delivery_time
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn urgency(&self) -> Option<&str> {
        self.urgency.as_deref()
    }

    pub fn line_items(&self) -> &[OrderLineItem] {
        &self.line_items
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<OrderRecord> for Order {
    type Error = DomainError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let id = OrderId::new(record.id).map_err(|e| DomainError::invalid_record(e.to_string()))?;

        if record.total.is_negative() {
            return Err(DomainError::invalid_record(format!(
                "{id}: total cannot be negative ({})",
                record.total
            )));
        }
        for (idx, line) in record.line_items.iter().enumerate() {
            if line.price.is_negative() {
                return Err(DomainError::invalid_record(format!(
                    "{id}: lineItems[{idx}].price cannot be negative ({})",
                    line.price
                )));
            }
        }

        let mut vendors: Vec<String> = Vec::with_capacity(record.vendors.len());
        for vendor in record.vendors {
            if !vendor.trim().is_empty() && !vendors.contains(&vendor) {
                vendors.push(vendor);
            }
        }

        Ok(Self {
            id,
            date: record.date,
            vendors,
            item_count: record.item_count,
            total: record.total,
            status: record.status,
            estimated_delivery: record.estimated_delivery,
            payment_terms: record.payment_terms,
            delivery_time: record.delivery_time,
            department: non_blank(record.department),
            urgency: non_blank(record.urgency),
            line_items: record.line_items,
        })
    }
}

impl From<Order> for OrderRecord {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.into(),
            date: order.date,
            vendors: order.vendors,
            item_count: order.item_count,
            total: order.total,
            status: order.status,
            estimated_delivery: order.estimated_delivery,
            payment_terms: order.payment_terms,
            delivery_time: order.delivery_time,
            department: order.department,
            urgency: order.urgency,
            line_items: order.line_items,
        }
    }
}
