use serde::{Deserialize, Serialize};

/// Unique order identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A purchase order as supplied by the host, in its camelCase JSON shape.
///
/// `taxation_amount <= order_amount` is expected but not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Total charged, tax included. Authoritative for the displayed total.
    pub order_amount: f64,
    pub taxation_amount: f64,
    pub payment_method: String,
    /// Free text, classified by [`crate::status::classify_status`].
    pub order_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<DeliveryAddress>,
}

impl Order {
    /// Parse an order from the host's JSON representation.
    ///
    /// Ill-typed fields (a string price, a fractional or negative quantity)
    /// are rejected here rather than coerced.
    pub fn from_json(json: &str) -> Result<Order, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub title: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<Variation>,
    /// `None` when the host sent no addons field at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addons: Option<Vec<AddonGroup>>,
}

/// The priced configuration of a catalog item chosen for this line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub title: String,
    pub price: f64,
}

/// A group of extra options attached to an order item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddonGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<AddonOption>>,
}

/// A selected option inside an addon group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub price: f64,
}

impl AddonGroup {
    /// Sum of selected option prices; zero when the group has no options.
    pub fn options_total(&self) -> f64 {
        self.options
            .iter()
            .flatten()
            .map(|option| option.price)
            .sum()
    }
}

impl OrderItem {
    /// Sum over every addon group's options; zero when there are no addons.
    pub fn addons_total(&self) -> f64 {
        self.addons
            .iter()
            .flatten()
            .map(AddonGroup::options_total)
            .sum()
    }

    /// Variation price (zero when absent) plus all selected addon options.
    pub fn unit_price(&self) -> f64 {
        self.variation.as_ref().map_or(0.0, |v| v.price) + self.addons_total()
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }

    /// `"{title} ({variation})"`, or just the title without a variation.
    pub fn label(&self) -> String {
        match &self.variation {
            Some(variation) => format!("{} ({})", self.title, variation.title),
            None => self.title.clone(),
        }
    }
}
