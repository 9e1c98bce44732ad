use serde::{Deserialize, Serialize};
use std::fmt;

/// Display bucket derived from a free-text order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKey {
    Delivered,
    Cancelled,
    InProgress,
    Accepted,
    Other,
}

/// Classification rules, evaluated top to bottom. First match wins.
const STATUS_RULES: [(&str, StatusKey); 4] = [
    ("delivered", StatusKey::Delivered),
    ("cancelled", StatusKey::Cancelled),
    ("in progress", StatusKey::InProgress),
    ("accepted", StatusKey::Accepted),
];

/// Map a free-text status onto a [`StatusKey`] by case-insensitive substring match.
///
/// Never fails: anything that matches no rule is [`StatusKey::Other`].
pub fn classify_status(raw: &str) -> StatusKey {
    let raw = raw.to_lowercase();
    STATUS_RULES
        .iter()
        .find(|(needle, _)| raw.contains(needle))
        .map(|&(_, key)| key)
        .unwrap_or_else(|| {
            tracing::trace!(status = %raw, "unrecognised order status");
            StatusKey::Other
        })
}

impl StatusKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKey::Delivered => "delivered",
            StatusKey::Cancelled => "cancelled",
            StatusKey::InProgress => "inprogress",
            StatusKey::Accepted => "accepted",
            StatusKey::Other => "other",
        }
    }
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_statuses() {
        assert_eq!(classify_status("Delivered"), StatusKey::Delivered);
        assert_eq!(classify_status("DELIVERED today"), StatusKey::Delivered);
        assert_eq!(classify_status("Order Cancelled by user"), StatusKey::Cancelled);
        assert_eq!(classify_status("in progress"), StatusKey::InProgress);
        assert_eq!(classify_status("Accepted"), StatusKey::Accepted);
    }

    #[test]
    fn unmatched_status_is_other() {
        assert_eq!(classify_status("pending"), StatusKey::Other);
        assert_eq!(classify_status(""), StatusKey::Other);
        // No space: does not contain "in progress".
        assert_eq!(classify_status("INPROGRESS"), StatusKey::Other);
        // American spelling is not matched.
        assert_eq!(classify_status("canceled"), StatusKey::Other);
    }

    #[test]
    fn earlier_rule_wins_when_several_match() {
        assert_eq!(
            classify_status("accepted, then cancelled"),
            StatusKey::Cancelled
        );
        assert_eq!(
            classify_status("in progress / delivered"),
            StatusKey::Delivered
        );
        assert_eq!(
            classify_status("Accepted and in progress"),
            StatusKey::InProgress
        );
    }

    #[test]
    fn no_trimming_beyond_lowercase() {
        assert_eq!(classify_status("  Delivered  "), StatusKey::Delivered);
        assert_eq!(classify_status("in  progress"), StatusKey::Other);
    }

    #[test]
    fn displays_bucket_key() {
        assert_eq!(StatusKey::Delivered.to_string(), "delivered");
        assert_eq!(StatusKey::InProgress.to_string(), "inprogress");
        assert_eq!(StatusKey::Other.to_string(), StatusKey::Other.as_str());
    }

    #[test]
    fn serializes_as_bucket_key() {
        let json = serde_json::to_string(&StatusKey::InProgress).unwrap();
        assert_eq!(json, "\"inprogress\"");
    }
}
