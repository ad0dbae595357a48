//! GoMarket Core - Shared types library.
//!
//! This crate provides common types used across all GoMarket components:
//! - `cart` - Cart state container and persistence
//! - `cli` - Command-line cart client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no async
//! runtime. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe product ids and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
