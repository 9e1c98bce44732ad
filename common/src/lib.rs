//! Order details core: status classification, price aggregation and
//! currency formatting over a caller-supplied [`order::Order`].

pub mod currency;
pub mod order;
pub mod status;
pub mod view;

pub use currency::{format_amount, CurrencySymbol};
pub use order::Order;
pub use status::{classify_status, StatusKey};
pub use view::{compute_order_view, OrderView};
