//! # Diamond Core
//!
//! Pricing engine for the Diamond Calculator.
//!
//! This crate implements the pricing formula and aggregation logic for
//! groups of diamonds:
//!
//! - **Types**: [`DiamondGroup`], [`GroupResult`], [`CalculationResponse`]
//! - **Tables**: static grade-to-multiplier tables for cut, color, clarity,
//!   and certification
//! - **Pricing**: [`price_per_diamond`] and [`calculate`]
//!
//! The crate is pure computation: no I/O, no async, no HTTP. The server
//! crate wraps it in a web API.
//!
//! ## Example
//!
//! ```rust
//! use diamond_core::{calculate, DiamondGroup};
//!
//! let group = DiamondGroup {
//!     carat: 1.0,
//!     quantity: 2,
//!     cut: "excellent".to_string(),
//!     color: "D".to_string(),
//!     clarity: "FL".to_string(),
//!     certification: "GIA".to_string(),
//! };
//!
//! let response = calculate(&[group]).unwrap();
//! assert_eq!(response.grand_total, 21294.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod pricing;
pub mod tables;
pub mod types;

pub use error::{DiamondError, DiamondResult};
pub use pricing::{calculate, price_per_diamond};
pub use types::{CalculationRequest, CalculationResponse, DiamondGroup, GroupDetails, GroupResult};
