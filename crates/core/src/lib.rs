//! Cartwheel Core - Domain types and cart logic.
//!
//! This crate provides the shopping domain used by the Cartwheel binaries:
//! - `cli` - Console front end that drives a demonstration shopping session
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no printing.
//! Operations report their outcomes as structured values ([`report`]) and
//! leave presentation to the caller, so the domain is testable without
//! capturing console output.
//!
//! # Modules
//!
//! - [`types`] - Validated newtype wrappers (prices)
//! - [`product`] - A purchasable item
//! - [`cart`] - Per-user collection of selected products
//! - [`user`] - A customer owning exactly one cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod product;
pub mod report;
pub mod types;
pub mod user;

pub use cart::{Cart, CartEntry, CartError, UpdateOutcome};
pub use product::Product;
pub use report::{CartReport, CartView, CheckoutReport, LineView};
pub use types::{Price, PriceError};
pub use user::User;
