//! Domain layer for the calculator
//!
//! Stateless operation providers and the facade that composes them.

pub mod addition;
pub mod calculator;
pub mod subtraction;

pub use addition::Addition;
pub use calculator::Calculator;
pub use subtraction::Subtraction;
