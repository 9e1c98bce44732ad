//! Plain-text rendering of an [`OrderView`], laid out like the order details
//! dialog: header, items table, customer, summary, payment.

use std::fmt;

use orderdesk_common::view::OrderView;
use orderdesk_common::{format_amount, CurrencySymbol};

const AMOUNT_WIDTH: usize = 12;

/// An [`OrderView`] paired with the symbol used for its amounts.
pub struct TextView<'a> {
    pub view: &'a OrderView,
    pub symbol: &'a CurrencySymbol,
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_view(f, self.view, self.symbol)
    }
}

pub fn render_text(view: &OrderView, symbol: &CurrencySymbol) -> String {
    TextView { view, symbol }.to_string()
}

fn write_view(out: &mut impl fmt::Write, view: &OrderView, symbol: &CurrencySymbol) -> fmt::Result {
    let money = |amount: f64| format_amount(amount, symbol);

    writeln!(out, "Order #{}  [{}]", view.id, view.status)?;
    writeln!(out)?;

    let item_width = view
        .items
        .iter()
        .map(|item| item.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Item".len());

    writeln!(out, "Items")?;
    writeln!(
        out,
        "{:<item_width$}  {:>5}  {:>AMOUNT_WIDTH$}  {:>AMOUNT_WIDTH$}",
        "Item", "Qty", "Price", "Total"
    )?;
    for item in &view.items {
        writeln!(
            out,
            "{:<item_width$}  {:>5}  {:>AMOUNT_WIDTH$}  {:>AMOUNT_WIDTH$}",
            item.label,
            item.quantity,
            money(item.unit_price),
            money(item.line_total)
        )?;
    }

    if let Some(customer) = &view.customer {
        writeln!(out)?;
        writeln!(out, "Customer")?;
        if let Some(name) = &customer.name {
            writeln!(out, "  Name: {name}")?;
        }
        if let Some(address) = &customer.address {
            writeln!(out, "  Address: {address}")?;
        }
        if let Some(phone) = &customer.phone {
            writeln!(out, "  Phone: {phone}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Summary")?;
    for (label, amount) in [
        ("Subtotal", view.totals.subtotal),
        ("Tax", view.totals.tax),
        ("Total", view.totals.total),
    ] {
        writeln!(out, "  {label:<10}{:>AMOUNT_WIDTH$}", money(amount))?;
    }

    writeln!(out)?;
    writeln!(out, "Payment")?;
    writeln!(out, "  {}", view.payment_method)
}
