//! Display-ready view of an [`Order`]: per-line prices, aggregate totals,
//! classified status and the optional customer block.

use serde::Serialize;

use crate::order::{Order, OrderId, OrderItem};
use crate::status::{classify_status, StatusKey};

/// Everything a rendering layer needs to show an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub status: StatusKey,
    /// The host's status text, unmodified.
    pub status_text: String,
    /// Same order as `Order::items`.
    pub items: Vec<ItemView>,
    pub totals: OrderTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerView>,
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_title: Option<String>,
    pub label: String,
    pub quantity: u32,
    pub addons_total: f64,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Aggregate amounts. `total` is the caller's order amount, not a sum of lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<&OrderItem> for ItemView {
    fn from(item: &OrderItem) -> Self {
        ItemView {
            id: item.id.clone(),
            title: item.title.clone(),
            variation_title: item.variation.as_ref().map(|v| v.title.clone()),
            label: item.label(),
            quantity: item.quantity,
            addons_total: item.addons_total(),
            unit_price: item.unit_price(),
            line_total: item.line_total(),
        }
    }
}

impl OrderTotals {
    /// `subtotal = order_amount - taxation_amount`, unclamped.
    pub fn of(order: &Order) -> Self {
        OrderTotals {
            subtotal: order.order_amount - order.taxation_amount,
            tax: order.taxation_amount,
            total: order.order_amount,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

impl CustomerView {
    /// `None` unless at least one of name, address or phone is non-empty.
    pub fn of(order: &Order) -> Option<Self> {
        let name = order.user.as_ref().and_then(|u| non_empty(&u.name));
        let phone = order.user.as_ref().and_then(|u| non_empty(&u.phone));
        let address = order
            .delivery_address
            .as_ref()
            .and_then(|a| non_empty(&a.delivery_address));

        if name.is_none() && address.is_none() && phone.is_none() {
            return None;
        }
        Some(CustomerView {
            name,
            address,
            phone,
        })
    }
}

/// Compute the display view of an order. Pure: same input, same output.
pub fn compute_order_view(order: &Order) -> OrderView {
    let status = classify_status(&order.order_status);
    let items: Vec<ItemView> = order.items.iter().map(ItemView::from).collect();
    let totals = OrderTotals::of(order);

    tracing::debug!(
        order_id = %order.id,
        %status,
        items = items.len(),
        total = totals.total,
        "computed order view"
    );

    OrderView {
        id: order.id.clone(),
        status,
        status_text: order.order_status.clone(),
        items,
        totals,
        customer: CustomerView::of(order),
        payment_method: order.payment_method.clone(),
    }
}

impl OrderView {
    /// Sum of displayed line totals. May differ from `totals.subtotal`.
    pub fn lines_total(&self) -> f64 {
        self.items.iter().map(|item| item.line_total).sum()
    }
}
