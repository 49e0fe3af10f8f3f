//! Core types for the storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod locale;
pub mod price;
pub mod status;

pub use category::Category;
pub use id::{OrderId, ProductId};
pub use locale::{Locale, TextDirection, UnsupportedLocale};
pub use price::{CurrencyCode, Price, format_amount};
pub use status::{ConsentDecision, OrderStatus};
