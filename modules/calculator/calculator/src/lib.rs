//! Calculator
//!
//! Integer addition and subtraction behind a small facade.
//!
//! ## Architecture
//!
//! - `domain/addition.rs` - sums of two or many integers
//! - `domain/subtraction.rs` - differences and left-to-right subtraction folds
//! - `domain/calculator.rs` - facade delegating to the two components above
//!
//! All operations are pure and work on `i32` with wraparound on overflow.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use calculator::{Addition, Calculator, Subtraction};
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.subtract_multiple(10, &[2, 3, 4]), 1);
//!
//! // Components can be supplied by the caller and shared.
//! let addition = Arc::new(Addition::new());
//! let calc = Calculator::with_components(Arc::clone(&addition), Arc::new(Subtraction::new()));
//! assert_eq!(calc.add(2, 2), addition.add(2, 2));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod domain;

pub use domain::{Addition, Calculator, Subtraction};
