//! Chef Farah Ammar Core - Shared storefront domain library.
//!
//! This crate provides the domain used by every storefront component:
//! - `storefront` - Public bilingual shop
//! - `admin` - Merchant order dashboard (internal only)
//! - `cli` - Command-line order management
//!
//! # Architecture
//!
//! The core crate holds types, pure logic and the key-value persistence seam.
//! It performs no network I/O; the only I/O is the file-backed store.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, locales, categories and statuses
//! - [`kv`] - Key-value store trait and its memory, file and scoped backends
//! - [`catalog`] - Products, API record normalization, fallback list, sorting
//! - [`cart`] - Cart store with write-through persistence
//! - [`checkout`] - Checkout validation and submission state machine
//! - [`orders`] - Order service contract, local stub and the order ledger
//! - [`i18n`] - English and Arabic string tables
//! - [`whatsapp`] - Pre-filled WhatsApp order links
//! - [`preferences`] - Visitor language and cookie decision

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod i18n;
pub mod kv;
pub mod orders;
pub mod preferences;
pub mod types;
pub mod whatsapp;

pub use types::*;
