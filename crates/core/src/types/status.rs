//! Status enums for orders and visitor decisions.

use serde::{Deserialize, Serialize};

/// Merchant-side fulfillment status of a submitted order.
///
/// Orders only ever move from `Pending` to `Done`. Any status string the
/// dashboard does not recognise is read back as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Done,
    #[default]
    #[serde(other)]
    Pending,
}

impl OrderStatus {
    /// Whether the order still needs delivering.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Translation key for the status badge.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Pending => "dashboard.statusPending",
            Self::Done => "dashboard.statusDone",
        }
    }

    /// Stable string used in CSS classes and data attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

/// A visitor's answer to the cookie notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentDecision {
    Accepted,
    Dismissed,
}

impl ConsentDecision {
    /// Parse a form value (`accepted` / `dismissed`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "accepted" | "accept" => Some(Self::Accepted),
            "dismissed" | "ignore" | "ignored" => Some(Self::Dismissed),
            _ => None,
        }
    }
}
