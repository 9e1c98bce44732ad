//! `orderdesk`: show the details of a purchase order.
//!
//! Reads an order as JSON (from a file or stdin), computes line prices,
//! totals and the status bucket, and prints either a text summary or the
//! computed view as JSON.

mod input;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use orderdesk_common::{compute_order_view, CurrencySymbol, OrderView};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "orderdesk", about = "Show purchase order details")]
struct Cli {
    /// Order JSON file. Reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Symbol prefixed to amounts (e.g. "$", "€"). Overrides --currency.
    #[arg(long, env = "ORDERDESK_CURRENCY_SYMBOL")]
    currency_symbol: Option<String>,

    /// ISO 4217 currency code used to pick a symbol (default: "$").
    #[arg(long, env = "ORDERDESK_CURRENCY")]
    currency: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn symbol(&self) -> CurrencySymbol {
        match (&self.currency_symbol, &self.currency) {
            (Some(symbol), _) => CurrencySymbol(symbol.clone()),
            (None, Some(code)) => CurrencySymbol::for_code(code),
            (None, None) => CurrencySymbol::default(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Sum of line totals when it differs from the subtotal by a cent or more.
fn subtotal_mismatch(view: &OrderView) -> Option<f64> {
    let lines_total = view.lines_total();
    ((lines_total - view.totals.subtotal).abs() >= 0.01).then_some(lines_total)
}

fn render(view: &OrderView, format: OutputFormat, symbol: &CurrencySymbol) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render::render_text(view, symbol)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(view).context("could not encode view")?;
            Ok(format!("{json}\n"))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let order = input::load_order(cli.input.as_deref()).context("could not load order")?;
    let view = compute_order_view(&order);

    if let Some(lines_total) = subtotal_mismatch(&view) {
        tracing::info!(
            order_id = %view.id,
            lines_total,
            subtotal = view.totals.subtotal,
            "line items do not add up to the subtotal; showing the stated amounts"
        );
    }

    print!("{}", render(&view, cli.format, &cli.symbol())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn symbol_prefers_explicit_symbol() {
        let cli = Cli::parse_from(["orderdesk", "--currency", "EUR", "--currency-symbol", "kr "]);
        assert_eq!(cli.symbol().as_str(), "kr ");
    }

    #[test]
    fn symbol_from_currency_code() {
        let cli = Cli::parse_from(["orderdesk", "--currency", "gbp", "order.json"]);
        assert_eq!(cli.symbol().as_str(), "£");
        assert_eq!(cli.input, Some(PathBuf::from("order.json")));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    fn sample_view() -> OrderView {
        let order = orderdesk_common::Order::from_json(include_str!("../fixtures/sample_order.json"))
            .unwrap();
        compute_order_view(&order)
    }

    #[test]
    fn json_output_shape() {
        let out = render(&sample_view(), OutputFormat::Json, &CurrencySymbol::default()).unwrap();
        assert!(out.ends_with("}\n"));

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["id"], "ORD-1042");
        assert_eq!(json["status"], "delivered");
        assert_eq!(json["status_text"], "Order Delivered");

        let line_totals: Vec<f64> = json["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["line_total"].as_f64().unwrap())
            .collect();
        assert_eq!(line_totals, [23.0, 2.25]);
        assert_eq!(json["items"][0]["unit_price"], 11.5);
        assert_eq!(json["items"][0]["label"], "Margherita (Large)");

        assert_eq!(json["totals"]["subtotal"], 25.25);
        assert_eq!(json["totals"]["tax"], 1.75);
        assert_eq!(json["totals"]["total"], 27.0);
        assert_eq!(json["customer"]["name"], "Sam Lee");
        assert_eq!(json["payment_method"], "CARD");
    }

    #[test]
    fn text_output_uses_symbol() {
        let out = render(&sample_view(), OutputFormat::Text, &"£".into()).unwrap();
        assert!(out.starts_with("Order #ORD-1042  [delivered]\n"));
        assert!(out.contains("£27.00"));
    }

    #[test]
    fn mismatch_reported_only_when_lines_diverge() {
        let mut view = sample_view();
        assert_eq!(subtotal_mismatch(&view), None);

        view.totals.subtotal = 20.0;
        assert_eq!(subtotal_mismatch(&view), Some(25.25));
    }

    #[test]
    fn parses_json_format() {
        let cli = Cli::parse_from(["orderdesk", "--format", "json", "-v"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }
}
