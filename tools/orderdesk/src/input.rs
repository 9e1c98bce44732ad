use std::io::Read;
use std::path::{Path, PathBuf};

use orderdesk_common::Order;

/// Errors from loading an order document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid order JSON")]
    Parse(#[from] serde_json::Error),
}

/// Read an order from `path`, or from stdin when `path` is `None` or `-`.
pub fn load_order(path: Option<&Path>) -> Result<Order, LoadError> {
    let (source, json) = match path {
        Some(p) if p != Path::new("-") => {
            let json = std::fs::read_to_string(p).map_err(|source| LoadError::Read {
                path: p.to_path_buf(),
                source,
            })?;
            (p.to_path_buf(), json)
        }
        _ => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .map_err(|source| LoadError::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            (PathBuf::from("<stdin>"), json)
        }
    };

    tracing::debug!(source = %source.display(), bytes = json.len(), "loaded order document");
    Ok(Order::from_json(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/sample_order.json")
    }

    #[test]
    fn loads_fixture_from_disk() {
        let order = load_order(Some(&fixture())).unwrap();
        assert_eq!(order.id.0, "ORD-1042");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.payment_method, "CARD");
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_order(Some(Path::new("/nonexistent/order.json"))).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/order.json"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = LoadError::from(serde_json::from_str::<Order>("{").unwrap_err());
        assert!(matches!(err, LoadError::Parse(_)));
        assert_eq!(err.to_string(), "invalid order JSON");
    }
}
